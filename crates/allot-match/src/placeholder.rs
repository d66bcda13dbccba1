//! Placeholder scanning for template text.
//!
//! A template is split into literal runs and `<name>` / `<name:type>`
//! placeholders. Every placeholder keeps the byte span it occupies in the
//! original text so the compiled expression can be assembled by splicing
//! spans rather than by searching for placeholder text.

use std::ops::Range;
use winnow::combinator::delimited;
use winnow::prelude::*;
use winnow::token::take_till;

/// One `<...>` occurrence in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub name: &'a str,
    /// `None` when the placeholder has no `:type` suffix.
    pub type_tag: Option<&'a str>,
    pub span: Range<usize>,
}

/// A segment of a template - either literal text or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(Placeholder<'a>),
}

pub fn parse_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut input = text;
    let mut literal_start = 0;

    while let Some(offset) = input.find('<') {
        input = &input[offset..];
        let start = text.len() - input.len();
        let checkpoint = input;

        match placeholder.parse_next(&mut input) {
            Ok((name, type_tag)) => {
                let end = text.len() - input.len();
                if literal_start < start {
                    segments.push(Segment::Literal(&text[literal_start..start]));
                }
                segments.push(Segment::Placeholder(Placeholder {
                    name,
                    type_tag,
                    span: start..end,
                }));
                literal_start = end;
            }
            // Not a placeholder; the '<' stays part of the literal run
            Err(_) => input = &checkpoint[1..],
        }
    }

    if literal_start < text.len() {
        segments.push(Segment::Literal(&text[literal_start..]));
    }

    segments
}

pub fn parse_placeholders(text: &str) -> Vec<Placeholder<'_>> {
    parse_segments(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder(p) => Some(p),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Parses a single token such as `<commits:integer>`, which must make up
/// the whole input.
pub fn parse_token(token: &str) -> Option<(&str, Option<&str>)> {
    let mut input = token;
    let parsed = placeholder.parse_next(&mut input).ok()?;
    input.is_empty().then_some(parsed)
}

fn placeholder<'a>(input: &mut &'a str) -> ModalResult<(&'a str, Option<&'a str>)> {
    delimited(
        '<',
        take_till(1.., |c: char| matches!(c, '<' | '>' | '\n')),
        '>',
    )
    .map(|inner: &'a str| match inner.split_once(':') {
        Some((name, type_tag)) => (name, Some(type_tag)),
        None => (inner, None),
    })
    .parse_next(input)
}
