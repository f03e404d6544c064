use super::template::{ExpandOptions, Template};
use super::TemplateError;

mod fields;
mod text;
mod visitor;

pub use fields::{FieldRole, FieldsExpander};
pub use text::TextExpander;
pub use visitor::VisitMethodsExpander;

pub trait Expander<W> {
    fn expand(
        &mut self,
        dest: &mut W,
        indent: u16,
        opts: &ExpandOptions,
        template: &Template<'_>,
    ) -> Result<(), TemplateError>;
}
