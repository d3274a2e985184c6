pub mod config;
pub mod document;
pub mod error;

pub use config::Config;
pub use document::{Document, PAGE_MARKER_PREFIX};
pub use error::LienscopeError;
