//! The set of templates a request is dispatched against.

use crate::error::{Error, Result};
use allot_match::{Match, Template};
use std::path::Path;
use tracing::debug;

pub struct Commands {
    templates: Vec<Template>,
}

impl Commands {
    /// Templates given on the command line come first, then those from
    /// `file` in file order.
    pub fn load(texts: &[String], file: Option<&Path>, escape: bool) -> Result<Self> {
        let mut templates = Vec::new();

        for text in texts {
            let template = compile(text, escape).map_err(|source| Error::InvalidTemplate {
                text: text.clone(),
                source,
            })?;
            templates.push(template);
        }

        if let Some(path) = file {
            let content = std::fs::read_to_string(path).map_err(|source| Error::ReadTemplates {
                path: path.to_path_buf(),
                source,
            })?;
            templates.extend(parse_template_file(&content, path, escape)?);
        }

        if templates.is_empty() {
            return Err(Error::NoTemplates);
        }

        debug!(count = templates.len(), "loaded templates");
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// First template, in load order, that the request matches.
    pub fn dispatch(&self, request: &str) -> Option<Match<'_>> {
        self.templates
            .iter()
            .find_map(|template| template.match_request(request).ok())
    }
}

fn compile(text: &str, escape: bool) -> allot_match::Result<Template> {
    Template::builder(text).escaped(escape).build()
}

pub fn parse_template_file(content: &str, path: &Path, escape: bool) -> Result<Vec<Template>> {
    let mut templates = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let template = compile(line, escape).map_err(|source| Error::InvalidTemplateLine {
            path: path.to_path_buf(),
            line: i + 1,
            source,
        })?;
        templates.push(template);
    }

    Ok(templates)
}
