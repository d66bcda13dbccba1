//! Command templates compiled to anchored regexes.

use crate::error::{Error, Result};
use crate::matcher::Match;
use crate::parameter::Parameter;
use crate::placeholder::{parse_segments, Segment};
use crate::registry::{TypeRegistry, DEFAULT_TYPE};
use crate::request::Request;
use regex::Regex;
use std::ops::Range;
use std::str::FromStr;
use tracing::{debug, trace};

/// Prefix of the named group wrapping each parameter occurrence. Literal
/// groups in non-escaped templates stay numbered, so named lookups are not
/// shifted by them.
const GROUP_PREFIX: &str = "__allot_";

/// A command definition such as `deploy <project> to <stage:string>`.
///
/// The expression is compiled once at construction; a template is immutable
/// afterwards and can be shared freely between threads.
///
/// # Example
///
/// ```
/// use allot_match::Template;
///
/// let template = Template::new("revert from <project> last <commits:integer> commits").unwrap();
/// let found = template.match_against("revert from example last 51 commits").unwrap();
///
/// assert_eq!(found.string("project").unwrap(), "example");
/// assert_eq!(found.integer("commits").unwrap(), 51);
/// ```
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
    escaped: bool,
    parameters: Vec<Parameter>,
    /// Capture group index of each parameter occurrence.
    groups: Vec<usize>,
    expression: Regex,
    leading_literal: Option<String>,
}

pub struct TemplateBuilder<'r> {
    text: String,
    escaped: bool,
    registry: &'r TypeRegistry,
}

impl<'r> TemplateBuilder<'r> {
    /// Escape all literal text so it is matched verbatim.
    pub fn escaped(mut self, escaped: bool) -> Self {
        self.escaped = escaped;
        self
    }

    pub fn registry<'a>(self, registry: &'a TypeRegistry) -> TemplateBuilder<'a> {
        TemplateBuilder {
            text: self.text,
            escaped: self.escaped,
            registry,
        }
    }

    pub fn build(self) -> Result<Template> {
        let mut parameters = Vec::new();
        let mut expr = String::new();

        for segment in parse_segments(&self.text) {
            match segment {
                Segment::Literal(literal) if self.escaped => expr.push_str(&regex::escape(literal)),
                Segment::Literal(literal) => expr.push_str(literal),
                Segment::Placeholder(placeholder) => {
                    let param = Parameter::with_registry(
                        placeholder.name,
                        placeholder.type_tag.unwrap_or(DEFAULT_TYPE),
                        self.registry,
                    )?;
                    expr.push_str(&format!(
                        "(?P<{}{}>{})",
                        GROUP_PREFIX,
                        parameters.len(),
                        param.pattern()
                    ));
                    parameters.push(param);
                }
            }
        }

        let expr = format!("^(?:{})$", expr);
        let expression = Regex::new(&expr).map_err(|source| Error::PatternCompilation {
            template: self.text.clone(),
            source,
        })?;

        let mut slots = vec![None; parameters.len()];
        for (index, name) in expression.capture_names().enumerate() {
            let occurrence = name
                .and_then(|n| n.strip_prefix(GROUP_PREFIX))
                .and_then(|n| n.parse::<usize>().ok());
            if let Some(slot) = occurrence.and_then(|i| slots.get_mut(i)) {
                *slot = Some(index);
            }
        }

        // A placeholder can vanish from the expression, e.g. inside a (?x) comment
        let groups = match slots.iter().position(Option::is_none) {
            Some(missing) => {
                return Err(Error::MissingCapture {
                    template: self.text.clone(),
                    parameter: parameters[missing].to_string(),
                })
            }
            None => slots.into_iter().flatten().collect::<Vec<usize>>(),
        };

        debug!(
            template = %self.text,
            expression = %expression,
            parameters = parameters.len(),
            "compiled template"
        );

        let leading_literal = leading_literal(&self.text, self.escaped);

        Ok(Template {
            text: self.text,
            escaped: self.escaped,
            parameters,
            groups,
            expression,
            leading_literal,
        })
    }
}

/// The template's first word, when it is plain text that the request's
/// first word must equal for any match to be possible.
fn leading_literal(text: &str, escaped: bool) -> Option<String> {
    let name = text.split_whitespace().next()?;
    if name.contains('<') || (!escaped && regex::escape(name) != name) {
        return None;
    }
    Some(name.to_string())
}

impl Template {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        Self::builder(text).build()
    }

    pub fn new_with_escaping(text: impl Into<String>) -> Result<Self> {
        Self::builder(text).escaped(true).build()
    }

    pub fn builder(text: impl Into<String>) -> TemplateBuilder<'static> {
        TemplateBuilder {
            text: text.into(),
            escaped: false,
            registry: TypeRegistry::builtin(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Leading whitespace-delimited token of the template text.
    pub fn name(&self) -> &str {
        self.text.split_whitespace().next().unwrap_or("")
    }

    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    /// One entry per placeholder occurrence, left to right.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Index of the first occurrence equal to `param`.
    pub fn position(&self, param: &Parameter) -> Option<usize> {
        self.parameters.iter().position(|p| p == param)
    }

    pub fn has(&self, param: &Parameter) -> bool {
        self.position(param).is_some()
    }

    pub fn expression(&self) -> &Regex {
        &self.expression
    }

    pub(crate) fn capture_group(&self, position: usize) -> Option<usize> {
        self.groups.get(position).copied()
    }

    pub fn matches(&self, request: &str) -> bool {
        let matched = self.expression.is_match(request);
        trace!(template = %self.text, request, matched, "match attempt");
        matched
    }

    pub fn match_against(&self, request: impl Into<String>) -> Result<Match<'_>> {
        let request = request.into();
        let Some(spans) = self.capture_spans(&request) else {
            trace!(template = %self.text, request = %request, "no match");
            return Err(self.no_match(request));
        };
        Ok(Match::new(self, request, spans))
    }

    fn capture_spans(&self, request: &str) -> Option<Vec<Option<Range<usize>>>> {
        let captures = self.expression.captures(request)?;
        Some(
            captures
                .iter()
                .skip(1)
                .map(|group| group.map(|m| m.range()))
                .collect(),
        )
    }

    /// Like [`matches`](Self::matches), but rejects early when the first
    /// words differ.
    pub fn matches_request<R: Request + ?Sized>(&self, request: &R) -> bool {
        !self.rejects_early(request) && self.matches(request.text())
    }

    pub fn match_request<R: Request + ?Sized>(&self, request: &R) -> Result<Match<'_>> {
        if self.rejects_early(request) {
            return Err(self.no_match(request.text().to_string()));
        }
        self.match_against(request.text())
    }

    fn rejects_early<R: Request + ?Sized>(&self, request: &R) -> bool {
        let Some(literal) = &self.leading_literal else {
            return false;
        };
        let rejected = literal != request.leading_token();
        if rejected {
            trace!(template = %self.text, request = request.text(), "rejected on leading token");
        }
        rejected
    }

    fn no_match(&self, request: String) -> Error {
        Error::NoMatch {
            template: self.text.clone(),
            request,
        }
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}
