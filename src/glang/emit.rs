use super::scope::Scope;
use super::template::{ExpandOptions, Instruction, Template, TemplateSpan};
use super::TemplateError;

use std::fmt::{self, Write};

pub struct SpanWriter<'a, W> {
    inner: &'a mut W,
}

impl<'a, W: Write> SpanWriter<'a, W> {
    pub fn new(dest: &'a mut W) -> Self {
        Self { inner: dest }
    }

    pub fn put_char(&mut self, c: char) -> fmt::Result {
        self.inner.write_char(c)
    }

    pub fn put_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_str(s)
    }

    pub fn do_indent(&mut self, size: u16) -> fmt::Result {
        for _ in 0..size {
            self.put_char(' ')?;
        }

        Ok(())
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut *self.inner
    }
}

/// Writes every item with `func`, placing the delimiter (and a newline
/// re-indented to `indent`, unless inline) between consecutive items.
pub fn write_delimited<I, F, W>(
    dest: &mut W,
    items: I,
    opts: &ExpandOptions,
    indent: u16,
    mut func: F,
) -> Result<(), TemplateError>
where
    W: Write,
    I: IntoIterator,
    F: FnMut(I::Item, &mut W) -> Result<(), TemplateError>,
{
    let mut writer = SpanWriter::new(dest);
    let mut is_tail = false;
    for item in items {
        if is_tail {
            if let Some(delim) = opts.delimiter {
                writer.put_char(delim)?;
            }
            if opts.inline {
                writer.put_char(' ')?;
            } else {
                writer.put_char('\n')?;
                writer.do_indent(indent)?;
            }
        } else {
            is_tail = true;
        }

        func(item, writer.get_mut())?;
    }

    if is_tail && opts.trailing {
        if let Some(delim) = opts.delimiter {
            writer.put_char(delim)?;
        }
    }

    Ok(())
}

pub fn render_span<W: Write>(
    span: &TemplateSpan,
    dest: &mut W,
    mut scope: Scope<W>,
    indent: u16,
    template: &Template,
) -> Result<(), TemplateError> {
    let mut writer = SpanWriter::new(dest);

    let mut current_line_indent = 0;

    for inst in span.instructions.iter() {
        match inst {
            Instruction::Newline => {
                writer.put_char('\n')?;
                current_line_indent = 0;
                writer.do_indent(indent)?;
            }
            Instruction::Indent(size) => {
                current_line_indent = *size;
                writer.do_indent(*size)?;
            }
            Instruction::Literal(val) => {
                writer.put_str(val)?;
            }
            Instruction::Expand { var, opts } => {
                let expander = scope.get_expander(var)?;
                expander.expand(
                    writer.get_mut(),
                    indent + current_line_indent,
                    opts,
                    template,
                )?;
            }
        }
    }

    Ok(())
}
