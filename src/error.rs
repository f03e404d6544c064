use thiserror::Error;

use crate::glang::TemplateError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("malformed grammar line `{line}`: expected `Name : Type field, ...`")]
    MalformedGrammarLine { line: String },

    #[error("grammar line `{line}` has an empty type name")]
    EmptyTypeName { line: String },

    #[error("malformed field `{token}` in grammar line `{line}`: expected `Type name`")]
    MalformedFieldSpec { line: String, token: String },

    #[error("grammar for `{base_name}` declares no node types")]
    EmptyGrammar { base_name: String },

    #[error("invalid {lang} template: {source}")]
    Template {
        lang: &'static str,
        #[source]
        source: TemplateError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
