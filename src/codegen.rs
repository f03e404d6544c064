use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::glang::expander::{FieldRole, FieldsExpander, VisitMethodsExpander};
use crate::glang::{compile_template, render_span, Scope, Template, TemplateError, TemplateSpan};
use crate::items::{param_name, TypeDescriptor};
use crate::language::Language;
use crate::parser::parse_grammar;

/// The generated source file for one hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub file_name: String,
    pub contents: String,
}

/// Renders a base type, its `Visitor` and one node type per descriptor.
pub struct Emitter<'l> {
    language: &'l dyn Language,
    namespace: Option<String>,
}

impl<'l> Emitter<'l> {
    pub fn new(language: &'l dyn Language) -> Self {
        Self {
            language,
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Parses `grammar` and emits the hierarchy rooted at `base_name`.
    ///
    /// Nothing is produced unless every line parses.
    pub fn generate<I>(&self, base_name: &str, grammar: I) -> Result<GeneratedUnit>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let types = parse_grammar(grammar)?;
        let contents = self.emit(base_name, &types)?;

        Ok(GeneratedUnit {
            file_name: self.language.file_name(base_name),
            contents,
        })
    }

    pub fn emit(&self, base_name: &str, types: &[TypeDescriptor]) -> Result<String> {
        if types.is_empty() {
            return Err(Error::EmptyGrammar {
                base_name: base_name.to_string(),
            });
        }

        debug!(
            lang = self.language.lang_id(),
            base = base_name,
            types = types.len(),
            "emitting hierarchy"
        );

        self.render(base_name, types).map_err(|source| Error::Template {
            lang: self.language.lang_id(),
            source,
        })
    }

    fn render(&self, base_name: &str, types: &[TypeDescriptor]) -> Result<String, TemplateError> {
        let template = compile_template(self.language.template())?;

        let mut blocks = vec![
            self.emit_prelude(&template)?,
            self.emit_base(&template, base_name)?,
            self.emit_visitor(&template, base_name, types)?,
        ];
        for ty in types {
            blocks.push(self.emit_node(&template, base_name, ty)?);
        }

        Ok(tidy(&blocks.join("\n\n")))
    }

    fn emit_prelude(&self, template: &Template) -> Result<String, TemplateError> {
        let namespace = match self.namespace.as_deref() {
            Some(ns) => self.language.namespace_line(ns).unwrap_or_else(|| {
                warn!(
                    lang = self.language.lang_id(),
                    namespace = ns,
                    "language has no namespace declaration, ignoring namespace"
                );
                String::new()
            }),
            None => String::new(),
        };

        block(&template.prelude, template, |scope| {
            scope.add_text("namespace", &namespace)
        })
    }

    fn emit_base(&self, template: &Template, base_name: &str) -> Result<String, TemplateError> {
        block(&template.base, template, |scope| scope.add_text("base", base_name))
    }

    fn emit_visitor(
        &self,
        template: &Template,
        base_name: &str,
        types: &[TypeDescriptor],
    ) -> Result<String, TemplateError> {
        block(&template.visitor, template, |scope| {
            scope
                .add_text("base", base_name)
                .add_expander("visit_methods", VisitMethodsExpander::new(base_name, types))
        })
    }

    fn emit_node(
        &self,
        template: &Template,
        base_name: &str,
        ty: &TypeDescriptor,
    ) -> Result<String, TemplateError> {
        // Same naming rule as the visitor's methods
        let visit = ty.visit_method(base_name);
        let param = param_name(base_name);

        block(&template.node, template, |scope| {
            scope
                .add_text("type", &ty.name)
                .add_text("base", base_name)
                .add_text("visit", &visit)
                .add_text("param", &param)
                .add_expander("fields", FieldsExpander::new(&ty.fields, FieldRole::Field))
                .add_expander("params", FieldsExpander::new(&ty.fields, FieldRole::Param))
                .add_expander("inits", FieldsExpander::new(&ty.fields, FieldRole::Init))
        })
    }
}

fn block<'a, F>(span: &TemplateSpan, template: &Template, bind: F) -> Result<String, TemplateError>
where
    F: FnOnce(Scope<'a, String>) -> Scope<'a, String>,
{
    let mut out = String::new();
    render_span(span, &mut out, bind(Scope::new()), 0, template)?;
    Ok(out)
}

/// Strips trailing whitespace, collapses runs of blank lines and ends the
/// text with a single newline.
fn tidy(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank = true;

    for line in text.lines().map(str::trim_end) {
        if line.is_empty() {
            if blank {
                continue;
            }
            blank = true;
        } else {
            blank = false;
        }

        out.push_str(line);
        out.push('\n');
    }

    while out.ends_with("\n\n") {
        out.pop();
    }

    out
}
