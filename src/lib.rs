//! Armory Processor Library
//!
//! A Rust library for converting semi-structured starship weapon reference
//! tables into a normalized hierarchical JSON document of categories and
//! weapon records.
//!
//! This library provides tools for:
//! - Tokenizing tab- or whitespace-aligned table rows with ragged columns
//! - Normalizing cell text into typed values (numbers, the N/A marker,
//!   passthrough strings) and structured note tags
//! - Classifying rows as category headers, weapon data, or ignorable noise
//! - Assembling classified rows into ordered categories with stable,
//!   document-wide unique weapon identifiers
//! - Writing the resulting document as JSON

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod document_builder;
        pub mod json_writer;
        pub mod table_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Category, Document, FieldValue, NoteTag, RangeBand, WeaponRecord};
pub use config::Config;

/// Result type alias for the armory processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for armory processing operations
///
/// The parsing pipeline itself never fails: malformed cells degrade to
/// passthrough strings and ragged rows are normalized structurally. Errors
/// only arise at the edges, reading input, validating configuration, and
/// writing output.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization or writing error
    #[error("JSON writing error: {message}")]
    JsonWriting {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a JSON writing error with context
    pub fn json_writing(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonWriting {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonWriting {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
