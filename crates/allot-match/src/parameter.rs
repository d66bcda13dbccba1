use crate::error::{Error, Result};
use crate::placeholder::parse_token;
use crate::registry::{TypeRegistry, DEFAULT_TYPE};
use std::fmt;

/// A typed placeholder occurrence, with its type already resolved to a
/// regex fragment.
///
/// Two parameters are equal when their names and resolved patterns are
/// equal, so `<lorem:integer>` and `<lorem:string>` are distinct parameters.
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    type_tag: String,
    pattern: String,
}

impl Parameter {
    /// Builds a parameter against the built-in type table.
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Result<Self> {
        Self::with_registry(name, type_tag, TypeRegistry::builtin())
    }

    pub fn with_registry(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        registry: &TypeRegistry,
    ) -> Result<Self> {
        let name = name.into();
        let type_tag = type_tag.into();

        if name.is_empty()
            || name
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | ':'))
        {
            return Err(Error::InvalidName { name });
        }

        let Some(pattern) = registry.resolve(&type_tag) else {
            return Err(Error::UnknownType { name, type_tag });
        };
        let pattern = pattern.to_string();

        Ok(Self {
            name,
            type_tag,
            pattern,
        })
    }

    /// Parses a single `<name>` or `<name:type>` token.
    pub fn parse(token: &str) -> Result<Self> {
        match parse_token(token) {
            Some((name, type_tag)) => Self::new(name, type_tag.unwrap_or(DEFAULT_TYPE)),
            None => Err(Error::InvalidName {
                name: token.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// The regex fragment matching values of this parameter's type.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.pattern == other.pattern
    }
}

impl Eq for Parameter {}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}:{}>", self.name, self.type_tag)
    }
}
