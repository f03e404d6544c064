use super::expander::{Expander, TextExpander};
use super::TemplateError;

use std::collections::HashMap;
use std::fmt::Write;

struct ScopeEntry<'a, W> {
    expander: Box<dyn Expander<W> + 'a>,
}

/// Variables visible while rendering one span.
pub struct Scope<'a, W> {
    entries: HashMap<&'static str, ScopeEntry<'a, W>>,
}

impl<'a, W> Scope<'a, W> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn add_text(self, name: &'static str, text: &'a str) -> Self
    where
        W: Write,
    {
        self.add_expander(name, TextExpander(text))
    }

    pub fn add_expander<E: Expander<W> + 'a>(mut self, name: &'static str, expander: E) -> Self {
        self.entries.insert(
            name,
            ScopeEntry {
                expander: Box::new(expander),
            },
        );
        self
    }

    pub fn get_expander(&mut self, name: &str) -> Result<&mut (dyn Expander<W> + 'a), TemplateError> {
        self.entries
            .get_mut(name)
            .map(|entry| entry.expander.as_mut())
            .ok_or_else(|| TemplateError::UnknownVariable(name.to_string()))
    }
}

impl<'a, W> Default for Scope<'a, W> {
    fn default() -> Self {
        Self::new()
    }
}
