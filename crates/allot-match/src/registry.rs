//! Type tag to sub-pattern table.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Type tag used when a placeholder omits one.
pub const DEFAULT_TYPE: &str = "string";

static BUILTIN: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::default);

/// Maps type tags such as `"integer"` to the regex fragment recognising
/// values of that type.
///
/// The built-in table is shared process-wide and never changes. Hosts that
/// need additional types start from [`TypeRegistry::default`] and
/// [`register`](TypeRegistry::register) their own entries.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    patterns: HashMap<String, String>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let patterns = [("string", r"[^\s]+"), ("integer", r"[0-9]+")]
            .into_iter()
            .map(|(tag, pattern)| (tag.to_string(), pattern.to_string()))
            .collect();
        Self { patterns }
    }
}

impl TypeRegistry {
    pub fn builtin() -> &'static TypeRegistry {
        &BUILTIN
    }

    pub fn resolve(&self, type_tag: &str) -> Option<&str> {
        self.patterns.get(type_tag).map(String::as_str)
    }

    /// Adds or replaces a type. The pattern must compile and must not
    /// contain capturing groups, since every placeholder owns exactly one.
    pub fn register(mut self, type_tag: impl Into<String>, pattern: impl Into<String>) -> Result<Self> {
        let type_tag = type_tag.into();
        let pattern = pattern.into();

        let compiled = Regex::new(&pattern).map_err(|e| Error::InvalidTypePattern {
            type_tag: type_tag.clone(),
            reason: e.to_string(),
        })?;
        if compiled.captures_len() > 1 {
            return Err(Error::InvalidTypePattern {
                type_tag,
                reason: "pattern must not contain capturing groups".to_string(),
            });
        }

        self.patterns.insert(type_tag, pattern);
        Ok(self)
    }

    pub fn type_tags(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }
}
