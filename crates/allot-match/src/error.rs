use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to compile pattern for template '{template}': {source}")]
    PatternCompilation {
        template: String,
        #[source]
        source: regex::Error,
    },

    #[error("parameter '{name}' uses unknown type '{type_tag}'")]
    UnknownType { name: String, type_tag: String },

    #[error("parameter {parameter} has no capture group in template '{template}'")]
    MissingCapture { template: String, parameter: String },

    #[error("invalid parameter name '{name}'")]
    InvalidName { name: String },

    #[error("invalid pattern for type '{type_tag}': {reason}")]
    InvalidTypePattern { type_tag: String, reason: String },

    #[error("request '{request}' does not match template '{template}'")]
    NoMatch { template: String, request: String },

    #[error("template has no parameter <{name}:{type_tag}>")]
    UnknownParameter { name: String, type_tag: String },

    #[error("capture index {position} out of range ({len} captures)")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("value '{value}' of parameter '{name}' is not a valid integer")]
    InvalidNumber {
        name: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
