use std::fmt::Write;

use crate::items::FieldSpec;

use crate::glang::emit::{render_span, write_delimited};
use crate::glang::expander::Expander;
use crate::glang::scope::Scope;
use crate::glang::template::{ExpandOptions, Template, TemplateSpan};
use crate::glang::TemplateError;

/// Which per-field section a field list is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Stored attribute declaration (`#field`)
    Field,
    /// Constructor parameter (`#param`)
    Param,
    /// Constructor assignment (`#init`)
    Init,
}

impl FieldRole {
    fn span<'a, 't>(self, template: &'a Template<'t>) -> &'a TemplateSpan<'t> {
        match self {
            FieldRole::Field => &template.field,
            FieldRole::Param => &template.param,
            FieldRole::Init => &template.init,
        }
    }
}

pub struct FieldsExpander<'a> {
    fields: &'a [FieldSpec],
    role: FieldRole,
}

impl<'a> FieldsExpander<'a> {
    pub fn new(fields: &'a [FieldSpec], role: FieldRole) -> Self {
        Self { fields, role }
    }
}

impl<'a, W: Write> Expander<W> for FieldsExpander<'a> {
    fn expand(
        &mut self,
        dest: &mut W,
        indent: u16,
        opts: &ExpandOptions,
        template: &Template<'_>,
    ) -> Result<(), TemplateError> {
        let span = self.role.span(template);

        write_delimited(dest, self.fields, opts, indent, |field, dest| {
            render_span(
                span,
                dest,
                Scope::new()
                    .add_text("ty", &field.type_name)
                    .add_text("name", &field.field_name),
                indent,
                template,
            )
        })
    }
}
