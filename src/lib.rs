//! Single-shot HTTP(S) GET requests with optional JSON decoding.
//!
//! ```no_run
//! # async fn run() -> Result<(), vortex_fetch::FetchError> {
//! let value: serde_json::Value = vortex_fetch::json_request("https://example.org/api.json").await?;
//! # Ok(()) }
//! ```

pub mod config;
pub mod errors;
pub mod net;

pub use config::FetchConfig;
pub use errors::{DataInvalid, FetchError};
pub use net::{json_request, raw_request, Body, Fetcher, RequestOptions};
