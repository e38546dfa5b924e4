use std::fmt;

use thiserror::Error;

/// Which of the two downloads a fetch or decode failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Index,
    Dataset,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Index => write!(f, "bulk index"),
            Target::Dataset => write!(f, "card dataset"),
        }
    }
}

/// Failures that abort a refresh run.
#[derive(Debug, Error)]
pub enum FetcherError {
    #[error("unable to download {target} from {url}")]
    Fetch {
        target: Target,
        url: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("unable to decode {target}")]
    Decode {
        target: Target,
        #[source]
        source: serde_json::Error,
    },
    #[error("bulk index contains no entries")]
    EmptyIndex,
    #[error("unable to publish cards to s3://{bucket}/{key}")]
    Publish {
        bucket: String,
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, FetcherError>;
