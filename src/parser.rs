use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::items::{FieldSpec, TypeDescriptor};

lazy_static! {
    // Exactly one space between two non-empty halves; a comma in the
    // field name is a list separator missing its space
    static ref FIELD_SPEC: Regex = Regex::new(r"^(\S+) ([^\s,]+)$").unwrap();
}

/// The expression grammar of the Lox tree-walking interpreter.
pub const LOX_EXPR_GRAMMAR: &[&str] = &[
    "Binary   : Expr left, Token operator, Expr right",
    "Grouping : Expr expression",
    "Literal  : mixed value",
    "Unary    : Token operator, Expr right",
];

/// Parses a single `Name : Type field, Type field` line.
pub fn parse_line(line: &str) -> Result<TypeDescriptor> {
    let (name, fields) = line
        .split_once(':')
        .ok_or_else(|| Error::MalformedGrammarLine {
            line: line.to_string(),
        })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyTypeName {
            line: line.to_string(),
        });
    }

    let fields = fields.trim();
    let fields = if fields.is_empty() {
        vec![]
    } else {
        fields
            .split(", ")
            .map(|token| parse_field(line, token))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(TypeDescriptor {
        name: name.to_string(),
        fields,
    })
}

fn parse_field(line: &str, token: &str) -> Result<FieldSpec> {
    let caps = FIELD_SPEC
        .captures(token)
        .ok_or_else(|| Error::MalformedFieldSpec {
            line: line.to_string(),
            token: token.to_string(),
        })?;

    Ok(FieldSpec::new(&caps[1], &caps[2]))
}

/// Parses every line in order, stopping at the first bad one.
pub fn parse_grammar<I>(lines: I) -> Result<Vec<TypeDescriptor>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let descriptors = lines
        .into_iter()
        .map(|line| parse_line(line.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    debug!(types = descriptors.len(), "parsed grammar");

    Ok(descriptors)
}

/// Grammar lines of a grammar file: blank lines and `//` comments are skipped.
pub fn grammar_lines(source: &str) -> impl Iterator<Item = &str> + '_ {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
}
