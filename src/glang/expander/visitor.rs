use std::fmt::Write;

use crate::items::{param_name, TypeDescriptor};

use crate::glang::emit::{render_span, write_delimited};
use crate::glang::expander::Expander;
use crate::glang::scope::Scope;
use crate::glang::template::{ExpandOptions, Template};
use crate::glang::TemplateError;

/// One `#visit_method` per node type, in grammar order.
pub struct VisitMethodsExpander<'a> {
    base_name: &'a str,
    types: &'a [TypeDescriptor],
}

impl<'a> VisitMethodsExpander<'a> {
    pub fn new(base_name: &'a str, types: &'a [TypeDescriptor]) -> Self {
        Self { base_name, types }
    }
}

impl<'a, W: Write> Expander<W> for VisitMethodsExpander<'a> {
    fn expand(
        &mut self,
        dest: &mut W,
        indent: u16,
        opts: &ExpandOptions,
        template: &Template<'_>,
    ) -> Result<(), TemplateError> {
        let param = param_name(self.base_name);

        write_delimited(dest, self.types, opts, indent, |ty, dest| {
            let visit = ty.visit_method(self.base_name);

            render_span(
                &template.visit_method,
                dest,
                Scope::new()
                    .add_text("visit", &visit)
                    .add_text("type", &ty.name)
                    .add_text("param", &param)
                    .add_text("base", self.base_name),
                indent,
                template,
            )
        })
    }
}
