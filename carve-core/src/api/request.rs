//! Chunking requests

use crate::api::{Error, Result};
use serde::{Deserialize, Serialize};

/// What bounds the chunks of each sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkRequest {
    /// At most this many chunks per sentence
    ByCount(usize),
    /// Chunks of at most this many characters, best effort
    ByLength(usize),
}

impl ChunkRequest {
    /// Build a request from optional arguments, exactly one of which is set
    pub fn from_options(target_count: Option<usize>, max_length: Option<usize>) -> Result<Self> {
        let request = match (target_count, max_length) {
            (Some(count), None) => ChunkRequest::ByCount(count),
            (None, Some(length)) => ChunkRequest::ByLength(length),
            (Some(_), Some(_)) => {
                return Err(Error::InvalidArgument(
                    "give either target_count or max_length, not both".into(),
                ))
            }
            (None, None) => {
                return Err(Error::InvalidArgument(
                    "one of target_count or max_length is required".into(),
                ))
            }
        };
        request.validate()
    }

    /// Reject non-positive bounds
    pub fn validate(self) -> Result<Self> {
        match self {
            ChunkRequest::ByCount(0) => Err(Error::InvalidArgument(
                "target_count must be greater than 0".into(),
            )),
            ChunkRequest::ByLength(0) => Err(Error::InvalidArgument(
                "max_length must be greater than 0".into(),
            )),
            _ => Ok(self),
        }
    }
}
