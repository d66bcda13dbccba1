use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read template file '{path}'")]
    ReadTemplates {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid template at {path}:{line}")]
    InvalidTemplateLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: allot_match::Error,
    },

    #[error("Invalid template '{text}'")]
    InvalidTemplate {
        text: String,
        #[source]
        source: allot_match::Error,
    },

    #[error("No templates given (use --template or --file)")]
    NoTemplates,
}

pub type Result<T> = std::result::Result<T, Error>;
