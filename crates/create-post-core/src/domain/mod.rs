//! Core domain layer for create-post.
//!
//! Pure data and rules: no filesystem, no terminal, no clock. The current
//! date is passed in by whoever builds the defaults.

pub mod config;
pub mod error;
pub mod formatter_config;
pub mod post_name;
pub mod resource;
pub mod stage;
pub mod target;
pub mod template;

pub use config::{CONFIG_FILE_NAME, ConfigLayer, PostConfig, format_date};
pub use error::DomainError;
pub use formatter_config::{EndOfLine, FormatterConfig};
pub use post_name::PostName;
pub use resource::OptionalResource;
pub use stage::Stage;
pub use target::ScaffoldTarget;
pub use template::{Placeholder, RenderContext};
