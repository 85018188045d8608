//! Public API for carve-core
//!
//! Load a document into a [`DocumentSession`] once, then ask for its
//! sentences or for chunks bounded by count or by length.

mod config;
mod error;
mod request;
mod session;


pub use config::{defaults, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use request::ChunkRequest;
pub use session::{DocumentSession, SentenceChunks};
