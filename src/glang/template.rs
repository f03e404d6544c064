use super::TemplateError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    // The delimiter between items emitted from this (multi) variable
    pub delimiter: Option<char>,
    // Should the delimiter be emitted after the last item ?
    pub trailing: bool,
    // Join items on one line instead of one item per line
    pub inline: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction<'t> {
    Newline,

    Indent(u16),

    Literal(&'t str),

    Expand { var: &'t str, opts: ExpandOptions },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateSpan<'t> {
    pub instructions: Vec<Instruction<'t>>,
}

impl<'t> TemplateSpan<'t> {
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

pub fn compile_span(content: &str) -> Result<TemplateSpan<'_>, TemplateError> {
    let mut instructions = vec![];

    #[derive(Clone, Copy, Debug)]
    enum State {
        Indenting,
        Literal,
        Variable,
    }

    let mut is_tail = false;

    for line in content.lines() {
        if is_tail {
            instructions.push(Instruction::Newline);
        } else {
            is_tail = true;
        }

        let mut indent = 0;
        let mut start = 0;
        let mut state = State::Indenting;

        let chars = line.char_indices().collect::<Vec<_>>();
        let mut i: usize = 0;

        while i < chars.len() {
            let (index, c) = chars[i];

            match (state, c) {
                (State::Indenting, c) if c.is_whitespace() => {
                    indent += 1;
                }
                (State::Indenting, c) => {
                    if indent > 0 {
                        instructions.push(Instruction::Indent(indent));
                    }
                    state = if c == '%' {
                        State::Variable
                    } else {
                        State::Literal
                    };
                    // NOTE: % is included in start in case of State::Variable
                    start = index;
                }

                (State::Literal, '%') => {
                    if index > start {
                        instructions.push(Instruction::Literal(&line[start..index]));
                    }
                    state = State::Variable;
                    start = index;
                }
                (State::Literal, _) => (),

                (State::Variable, '%') => {
                    // ignore the starting %
                    let var = &line[start + 1..index];

                    if var.is_empty() {
                        // %% is an escaped percent sign
                        instructions.push(Instruction::Literal(&line[index..index + 1]));
                    } else {
                        instructions.push(Instruction::Expand {
                            var,
                            opts: ExpandOptions::default(),
                        });
                    }

                    state = State::Literal;
                    start = index + 1;
                }
                (State::Variable, '/') => {
                    let var = &line[start + 1..index];
                    let (opts, close) = parse_options(line, &chars, i)?;

                    instructions.push(Instruction::Expand { var, opts });

                    state = State::Literal;
                    start = chars[close].0 + 1;
                    i = close;
                }
                (State::Variable, _) => (),
            }

            i += 1;
        }

        match state {
            State::Literal => {
                let lit = &line[start..];
                if !lit.is_empty() {
                    instructions.push(Instruction::Literal(lit));
                }
            }
            State::Indenting => {
                if indent > 0 {
                    instructions.push(Instruction::Indent(indent));
                }
            }
            State::Variable => {
                return Err(TemplateError::UnterminatedVariable {
                    line: line.to_string(),
                })
            }
        }
    }

    Ok(TemplateSpan { instructions })
}

/// Parses `/D[+_]*%` starting at the slash; returns the options and the
/// position of the closing `%`.
fn parse_options(
    line: &str,
    chars: &[(usize, char)],
    slash: usize,
) -> Result<(ExpandOptions, usize), TemplateError> {
    let bad_options = || TemplateError::BadOptions {
        line: line.to_string(),
    };

    let delimiter = match chars.get(slash + 1) {
        Some(&(_, '%')) | None => return Err(bad_options()),
        Some(&(_, d)) => d,
    };

    let mut opts = ExpandOptions {
        delimiter: Some(delimiter),
        ..ExpandOptions::default()
    };

    let mut i = slash + 2;
    loop {
        match chars.get(i) {
            Some((_, '%')) => return Ok((opts, i)),
            Some((_, '+')) => opts.trailing = true,
            Some((_, '_')) => opts.inline = true,
            _ => return Err(bad_options()),
        }
        i += 1;
    }
}

/* ==================================== */
/* ==================================== */
/* ==================================== */

#[derive(Debug, Default)]
struct TemplateSections<'a> {
    prelude: Option<&'a str>,
    base: Option<&'a str>,
    visitor: Option<&'a str>,
    visit_method: Option<&'a str>,
    node: Option<&'a str>,
    field: Option<&'a str>,
    param: Option<&'a str>,
    init: Option<&'a str>,
}

impl<'a> TemplateSections<'a> {
    fn slot(&mut self, name: &str) -> Option<&mut Option<&'a str>> {
        Some(match name {
            "prelude" => &mut self.prelude,
            "base" => &mut self.base,
            "visitor" => &mut self.visitor,
            "visit_method" => &mut self.visit_method,
            "node" => &mut self.node,
            "field" => &mut self.field,
            "param" => &mut self.param,
            "init" => &mut self.init,
            _ => return None,
        })
    }
}

fn compile_template_sections(source: &str) -> Result<TemplateSections<'_>, TemplateError> {
    let mut sections = TemplateSections::default();

    let lines = source.split_inclusive('\n');

    let mut cur_section: Option<&str> = None;
    let mut start = 0;
    let mut current = 0;

    for line in lines {
        let current_new = current + line.len();

        // Strip trailing newlines
        let line = line
            .strip_suffix('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or(line)
            .trim();

        if let Some(marker) = line.strip_prefix('#') {
            match (marker.strip_prefix("end/"), cur_section) {
                (None, None) => {
                    if sections.slot(marker).is_none() {
                        return Err(TemplateError::UnknownSection(marker.to_string()));
                    }
                    cur_section = Some(marker);
                    start = current_new;
                }
                (None, Some(open)) => {
                    return Err(TemplateError::NestedSection {
                        open: open.to_string(),
                        inner: marker.to_string(),
                    });
                }
                (Some(name), Some(open)) if name == open => {
                    let body = source[start..current].trim_matches(|c| c == '\n' || c == '\r');
                    if let Some(slot) = sections.slot(name) {
                        *slot = Some(body);
                    }
                    cur_section = None;
                }
                (Some(name), _) => {
                    return Err(TemplateError::StraySectionEnd(name.to_string()));
                }
            }
        }

        current = current_new;
    }

    match cur_section {
        Some(open) => Err(TemplateError::UnclosedSection(open.to_string())),
        None => Ok(sections),
    }
}

/* ==================================== */
/* ==================================== */
/* ==================================== */

#[derive(Debug, Clone, Default)]
pub struct Template<'t> {
    pub prelude: TemplateSpan<'t>,
    /* ... */
    pub base: TemplateSpan<'t>,
    pub visitor: TemplateSpan<'t>,
    pub visit_method: TemplateSpan<'t>,
    /* ... */
    pub node: TemplateSpan<'t>,
    pub field: TemplateSpan<'t>,
    pub param: TemplateSpan<'t>,
    pub init: TemplateSpan<'t>,
}

pub fn compile_template(source: &str) -> Result<Template<'_>, TemplateError> {
    let sections = compile_template_sections(source)?;

    Ok(Template {
        prelude: optional(sections.prelude)?,
        base: compile_span(required(sections.base, "base")?)?,
        visitor: compile_span(required(sections.visitor, "visitor")?)?,
        visit_method: compile_span(required(sections.visit_method, "visit_method")?)?,
        node: compile_span(required(sections.node, "node")?)?,
        field: optional(sections.field)?,
        param: optional(sections.param)?,
        init: optional(sections.init)?,
    })
}

fn optional(body: Option<&str>) -> Result<TemplateSpan<'_>, TemplateError> {
    body.map_or_else(|| Ok(TemplateSpan::default()), compile_span)
}

fn required<'a>(body: Option<&'a str>, name: &'static str) -> Result<&'a str, TemplateError> {
    body.ok_or(TemplateError::MissingSection(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expand(var: &str) -> Instruction<'_> {
        Instruction::Expand {
            var,
            opts: ExpandOptions::default(),
        }
    }

    #[test]
    fn span_with_indent_and_variables() {
        let span = compile_span("class %type% {\n    %fields%\n}").unwrap();

        assert_eq!(
            span.instructions,
            vec![
                Instruction::Literal("class "),
                expand("type"),
                Instruction::Literal(" {"),
                Instruction::Newline,
                Instruction::Indent(4),
                expand("fields"),
                Instruction::Newline,
                Instruction::Literal("}"),
            ]
        );
    }

    #[test]
    fn adjacent_variables() {
        let span = compile_span("$%name%%ty%").unwrap();

        assert_eq!(
            span.instructions,
            vec![Instruction::Literal("$"), expand("name"), expand("ty")]
        );
    }

    #[test]
    fn escaped_percent() {
        let span = compile_span("100%% of %x%").unwrap();

        assert_eq!(
            span.instructions,
            vec![
                Instruction::Literal("100"),
                Instruction::Literal("%"),
                Instruction::Literal(" of "),
                expand("x"),
            ]
        );
    }

    #[test]
    fn list_options() {
        let span = compile_span("(%params/,_%) %fields/,+%").unwrap();

        assert_eq!(
            span.instructions,
            vec![
                Instruction::Literal("("),
                Instruction::Expand {
                    var: "params",
                    opts: ExpandOptions {
                        delimiter: Some(','),
                        trailing: false,
                        inline: true,
                    },
                },
                Instruction::Literal(") "),
                Instruction::Expand {
                    var: "fields",
                    opts: ExpandOptions {
                        delimiter: Some(','),
                        trailing: true,
                        inline: false,
                    },
                },
            ]
        );
    }

    #[test]
    fn blank_lines_are_kept() {
        let span = compile_span("a\n\n  \nb").unwrap();

        assert_eq!(
            span.instructions,
            vec![
                Instruction::Literal("a"),
                Instruction::Newline,
                Instruction::Newline,
                Instruction::Indent(2),
                Instruction::Newline,
                Instruction::Literal("b"),
            ]
        );
    }

    #[test]
    fn unterminated_variable() {
        let err = compile_span("return %visit(this);").unwrap_err();
        assert!(matches!(err, TemplateError::UnterminatedVariable { .. }));
    }

    #[test]
    fn bad_options() {
        assert!(matches!(
            compile_span("%fields/%").unwrap_err(),
            TemplateError::BadOptions { .. }
        ));
        assert!(matches!(
            compile_span("%fields/,x%").unwrap_err(),
            TemplateError::BadOptions { .. }
        ));
        assert!(matches!(
            compile_span("%fields/,+").unwrap_err(),
            TemplateError::BadOptions { .. }
        ));
    }

    const MINIMAL: &str = "\
#base
abstract %base%
#end/base

#visitor
visitor
#end/visitor

#visit_method
%visit%
#end/visit_method

#node
node %type%
#end/node
";

    #[test]
    fn sections_compile() {
        let template = compile_template(MINIMAL).unwrap();

        assert_eq!(
            template.base.instructions,
            vec![Instruction::Literal("abstract "), expand("base")]
        );
        assert!(template.prelude.is_empty());
        assert!(template.field.is_empty());
    }

    #[test]
    fn missing_required_section() {
        let source = MINIMAL.replace("#node\nnode %type%\n#end/node\n", "");
        let err = compile_template(&source).unwrap_err();

        assert_eq!(err, TemplateError::MissingSection("node"));
    }

    #[test]
    fn section_errors() {
        assert_eq!(
            compile_template("#header\n#end/header\n").unwrap_err(),
            TemplateError::UnknownSection("header".to_string())
        );
        assert_eq!(
            compile_template("#base\n#node\n").unwrap_err(),
            TemplateError::NestedSection {
                open: "base".to_string(),
                inner: "node".to_string(),
            }
        );
        assert_eq!(
            compile_template("#base\n#end/node\n").unwrap_err(),
            TemplateError::StraySectionEnd("node".to_string())
        );
        assert_eq!(
            compile_template("#base\nabstract\n").unwrap_err(),
            TemplateError::UnclosedSection("base".to_string())
        );
    }
}
