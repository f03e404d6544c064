//! A small line-oriented template language.
//!
//! A template is split into `#name` ... `#end/name` sections. Each section
//! body is compiled into a [`TemplateSpan`]: literal text, indentation, and
//! `%var%` expansions resolved against a [`Scope`] at render time.
//!
//! List variables take options after a slash: `%fields/,+%` writes one item
//! per line separated by `,` with a trailing `,`, and `%params/,_%` joins the
//! items on a single line as `a, b`. Items after the first start on a new
//! line indented like the line the expansion appears on.

use std::fmt;

use thiserror::Error;

pub mod emit;
pub mod expander;
pub mod scope;
pub mod template;

pub use emit::render_span;
pub use scope::Scope;
pub use template::{compile_template, Template, TemplateSpan};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown section `#{0}`")]
    UnknownSection(String),

    #[error("section `#{inner}` opened inside `#{open}`")]
    NestedSection { open: String, inner: String },

    #[error("`#end/{0}` does not close the open section")]
    StraySectionEnd(String),

    #[error("section `#{0}` is never closed")]
    UnclosedSection(String),

    #[error("missing required section `#{0}`")]
    MissingSection(&'static str),

    #[error("unterminated variable in `{line}`")]
    UnterminatedVariable { line: String },

    #[error("bad list options in `{line}`")]
    BadOptions { line: String },

    #[error("unknown variable %{0}%")]
    UnknownVariable(String),

    #[error(transparent)]
    Fmt(#[from] fmt::Error),
}
