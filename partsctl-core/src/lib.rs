//! partsctl-core: data model, remote-table client, and configuration for
//! the partsctl inventory tools.
//!
//! The remote store is a single `parts` table behind a hosted PostgREST-style
//! service; [`PartsClient`] translates domain operations (list, create,
//! update, delete, search) into single HTTP calls against it.

pub mod client;
pub mod config;
pub mod error;
pub mod part;

// Re-export commonly used types
pub use client::PartsClient;
pub use config::{Config, ConfigFile};
pub use error::{PartsError, Result};
pub use part::{NewPart, Part, PartPatch};
