//! Static content for the MedCheck app.
//!
//! This crate holds the string tables the presentation layer shows next to
//! verification results: safety tips in three languages, rotating facts for
//! the home screen, and invite/share links.

pub mod education;
pub mod facts;
pub mod share;

pub use education::*;
pub use facts::*;
pub use share::*;

use thiserror::Error;

/// Content lookup errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContentError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Unknown tip category: {0}")]
    UnknownCategory(String),

    #[error("Unknown share platform: {0}")]
    UnknownPlatform(String),
}

pub type ContentResult<T> = Result<T, ContentError>;
