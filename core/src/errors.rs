//! The errors produced while reading and writing phrasebooks.
use std::{io, path::PathBuf};

use thiserror::Error;

/// Reading or writing a [`Phrasebook`](crate::Phrasebook) failed.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PhrasebookError {
    /// Unable to read the document file.
    #[error("failed to read from {}: {}", .0.display(), .1)]
    FailedToRead(PathBuf, io::Error),
    /// The file is not a structurally valid phrasebook.
    #[error("failed to parse phrasebook from {}: {}", .0.display(), .1)]
    Malformed(PathBuf, serde_json::Error),
    /// The input is not a structurally valid phrasebook.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The document could not be serialized.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    /// Unable to write the document file.
    #[error("failed to write to {}: {}", .0.display(), .1)]
    FailedToWrite(PathBuf, io::Error),
}

// New-typed errors to not have 3rd party errors in public API
/// The input is not a structurally valid phrasebook.
///
/// Produced when parsing documents that don't come from a file, so there is
/// no path to report.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ParseError(#[from] serde_json::Error);

/// The document could not be serialized.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct SerializeError(#[from] serde_json::Error);
