//! Virtual-file tokens.
//!
//! A running cell publishes an in-memory buffer; the page then references it
//! as `/@file/{byte_length}-{filename}`. The token carries everything needed
//! to find the buffer again — no session, no database row. The empty token
//! is a reserved sentinel meaning "no content".

use std::fmt;

use thiserror::Error;

/// Token parse failure. Both variants surface to clients as the same
/// not-found class; they are distinct so tests can pin each path down.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The token has no `-` separator at all.
    #[error("token has no length separator")]
    MissingSeparator,

    /// The segment before the first `-` is not a decimal byte count.
    #[error("invalid byte length in token: {0:?}")]
    InvalidLength(String),
}

/// Parsed form of a `/@file/` path segment.
///
/// The sentinel is an explicit variant so callers match on it instead of
/// comparing strings at every use site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VirtualFileToken {
    /// Reserved empty token: a zero-length buffer with a fixed binary type.
    Empty,
    /// A reference to a named buffer holding exactly `byte_length` bytes.
    Reference {
        byte_length: u64,
        filename: String,
    },
}

impl VirtualFileToken {
    /// Parse a raw path segment.
    ///
    /// The separator is the first literal `-`; everything after it is the
    /// filename (which may itself contain `-`). The length segment must be
    /// all decimal digits and fit in `u64`.
    pub fn parse(raw: &str) -> Result<Self, TokenError> {
        if raw.is_empty() {
            return Ok(Self::Empty);
        }

        let (length, filename) = raw.split_once('-').ok_or(TokenError::MissingSeparator)?;

        if length.is_empty() || !length.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TokenError::InvalidLength(length.to_string()));
        }

        let byte_length = length
            .parse::<u64>()
            .map_err(|_| TokenError::InvalidLength(length.to_string()))?;

        Ok(Self::Reference {
            byte_length,
            filename: filename.to_string(),
        })
    }
}

/// Renders the wire form, so URL writers can embed tokens directly.
impl fmt::Display for VirtualFileToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Reference {
                byte_length,
                filename,
            } => write!(f, "{byte_length}-{filename}"),
        }
    }
}
