//! Command templates with typed placeholders.
//!
//! A template such as `deploy <project> to <stage:string>` is compiled into
//! an anchored regex with one capture per placeholder. Requests that match
//! the template yield a [`Match`] from which values are read by name, by
//! parameter or by position.
//!
//! # Example
//!
//! ```
//! use allot_match::{Error, Template};
//!
//! let template = Template::new("revert <commits:integer> commits on <project> at (stage|prod)")?;
//!
//! assert!(!template.matches("revert some commits on example at prod"));
//!
//! let found = template.match_against("revert 12 commits on example at prod")?;
//! assert_eq!(found.integer("commits")?, 12);
//! assert_eq!(found.string("project")?, "example");
//! assert_eq!(found.at(2)?, "prod");
//!
//! // Asking for a parameter the template does not declare is an error
//! assert!(matches!(found.string("commits"), Err(Error::UnknownParameter { .. })));
//! # Ok::<(), Error>(())
//! ```

mod error;
mod matcher;
mod parameter;
pub mod placeholder;
mod registry;
mod request;
mod template;

pub use error::{Error, Result};
pub use matcher::Match;
pub use parameter::Parameter;
pub use registry::{TypeRegistry, DEFAULT_TYPE};
pub use request::Request;
pub use template::{Template, TemplateBuilder};
