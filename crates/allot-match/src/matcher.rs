//! Values extracted from a request that matched a template.

use crate::error::{Error, Result};
use crate::parameter::Parameter;
use crate::template::Template;
use std::ops::Range;

/// A request bound to the template it matched.
///
/// Every capturing group is located once when the match is made; lookups
/// only slice the request text.
#[derive(Debug, Clone)]
pub struct Match<'t> {
    template: &'t Template,
    request: String,
    /// Span of each capturing group, `None` for groups that did not take part.
    spans: Vec<Option<Range<usize>>>,
}

impl<'t> Match<'t> {
    pub(crate) fn new(template: &'t Template, request: String, spans: Vec<Option<Range<usize>>>) -> Self {
        Self {
            template,
            request,
            spans,
        }
    }

    pub fn template(&self) -> &'t Template {
        self.template
    }

    pub fn request(&self) -> &str {
        &self.request
    }

    /// Number of capturing groups, including groups written literally in a
    /// non-escaped template.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn string(&self, name: &str) -> Result<&str> {
        self.typed(name, "string")
    }

    pub fn integer(&self, name: &str) -> Result<i64> {
        let value = self.typed(name, "integer")?;
        value.parse().map_err(|source| Error::InvalidNumber {
            name: name.to_string(),
            value: value.to_string(),
            source,
        })
    }

    pub fn parameter(&self, param: &Parameter) -> Result<&str> {
        let position = self
            .template
            .position(param)
            .ok_or_else(|| Error::UnknownParameter {
                name: param.name().to_string(),
                type_tag: param.type_tag().to_string(),
            })?;
        self.occurrence(position)
    }

    /// Raw text of the capturing group at `position` (zero-based),
    /// regardless of declared type.
    pub fn at(&self, position: usize) -> Result<&str> {
        match self.spans.get(position) {
            Some(Some(span)) => Ok(&self.request[span.clone()]),
            Some(None) => Ok(""),
            None => Err(Error::IndexOutOfRange {
                position,
                len: self.spans.len(),
            }),
        }
    }

    /// Each parameter occurrence with its captured text, left to right.
    pub fn values(&self) -> impl Iterator<Item = (&'t Parameter, &str)> + '_ {
        self.template
            .parameters()
            .iter()
            .enumerate()
            .map(move |(position, param)| (param, self.occurrence(position).unwrap_or("")))
    }

    /// Looks up by declared type tag, so templates built against a custom
    /// registry resolve the same way as built-in ones.
    fn typed(&self, name: &str, type_tag: &str) -> Result<&str> {
        let position = self
            .template
            .parameters()
            .iter()
            .position(|p| p.name() == name && p.type_tag() == type_tag)
            .ok_or_else(|| Error::UnknownParameter {
                name: name.to_string(),
                type_tag: type_tag.to_string(),
            })?;
        self.occurrence(position)
    }

    /// Captured text of the parameter occurrence at `position`.
    fn occurrence(&self, position: usize) -> Result<&str> {
        let index = self
            .template
            .capture_group(position)
            .and_then(|group| group.checked_sub(1))
            .ok_or(Error::IndexOutOfRange {
                position,
                len: self.template.parameters().len(),
            })?;
        self.at(index)
    }
}
