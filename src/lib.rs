//! Generates a visitor-pattern class hierarchy from a compact grammar.
//!
//! Each grammar line `Name : Type field, Type field` becomes one node type
//! extending an abstract base. The emitted `Visitor` interface has one
//! `visit<Name><Base>` method per node, and every node's `accept` calls
//! exactly that method.
//!
//! ```no_run
//! use visitgen::{generators::PhpGenerator, Emitter, LOX_EXPR_GRAMMAR};
//!
//! let unit = Emitter::new(&PhpGenerator).generate("Expr", LOX_EXPR_GRAMMAR)?;
//! std::fs::write(&unit.file_name, unit.contents)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codegen;
pub mod error;
pub mod generators;
pub mod glang;
pub mod items;
pub mod language;
pub mod parser;

pub use codegen::{Emitter, GeneratedUnit};
pub use error::{Error, Result};
pub use items::{FieldSpec, TypeDescriptor};
pub use language::Language;
pub use parser::{grammar_lines, parse_grammar, parse_line, LOX_EXPR_GRAMMAR};
