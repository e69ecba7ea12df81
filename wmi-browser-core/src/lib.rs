//! # wmi-browser-core
//!
//! Platform-independent building blocks of the WMI browser:
//!
//! - **Types**: the [`WmiRecord`] wire model and the [`FilterQuery`] selection state
//! - **Pipeline**: country extraction, filter predicate and sort comparator,
//!   combined by [`derive`] into a [`DerivedView`]
//! - **Render**: the [`RecordRow`] projection used by every front end
//! - **Source**: the [`WmiSource`] trait and its HTTP implementation
//!
//! The pipeline is pure and synchronous; only [`WmiSource::load_all`] touches
//! the network.
//!
//! ```rust
//! use wmi_browser_core::{derive, FilterQuery, WmiRecord};
//!
//! let records = vec![
//!     WmiRecord {
//!         wmi: "AAA".into(),
//!         country: "USA".into(),
//!         created_on: "2020".into(),
//!         ..WmiRecord::default()
//!     },
//!     WmiRecord {
//!         wmi: "BBB".into(),
//!         country: "JPN".into(),
//!         created_on: "2021".into(),
//!         ..WmiRecord::default()
//!     },
//! ];
//!
//! let view = derive(&records, &FilterQuery::default()).unwrap();
//! assert_eq!(view.total(), 2);
//! assert_eq!(view.records[0].wmi, "BBB");
//! ```

pub mod error;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod types;
pub mod utils;

pub use error::{CoreError, CoreResult};
pub use pipeline::{
    compare_records, derive, extract_countries, filter_records, matches, sort_records,
    DerivedView, SearchPattern,
};
pub use render::{RecordRow, COLUMNS, PLACEHOLDER};
pub use source::{
    parse_records, HttpWmiSource, SourceConfig, WmiSource, DEFAULT_BASE_URL, DEFAULT_RESOURCE_PATH,
};
pub use types::{FilterQuery, WmiRecord, ALL_COUNTRIES};
