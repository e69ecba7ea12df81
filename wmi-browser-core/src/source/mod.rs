//! Data source abstraction
//!
//! The pipeline never fetches anything itself; a [`WmiSource`] hands it the
//! full record list in one shot.

mod http;

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::WmiRecord;

pub use http::{
    parse_records, HttpWmiSource, SourceConfig, DEFAULT_BASE_URL, DEFAULT_RESOURCE_PATH,
};

/// One-shot loader for the complete record list
#[async_trait]
pub trait WmiSource: Send + Sync {
    /// Fetch every record. No pagination, no partial results.
    async fn load_all(&self) -> CoreResult<Vec<WmiRecord>>;

    /// Human-readable location of the data (used in logs and the UI)
    fn describe(&self) -> String;
}
