//! Weekly refresh of the Scryfall oracle-card dataset used by the art bot.
//!
//! The bulk-data index is downloaded, its first dataset fetched and filtered
//! down to cards that have flavor text, an art crop and an artist credit, and
//! the result is written to S3 for the poster to pick from.

pub mod config;
pub mod errors;
pub mod pipeline;
pub mod s3;
pub mod scryfall;

pub use config::Settings;
pub use errors::{FetcherError, Target};
pub use pipeline::{DataFetcher, RunSummary};
pub use s3::{CardPublisher, S3Publisher};
pub use scryfall::{Card, HttpFetch, ScryfallClient};
