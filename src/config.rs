pub const BULK_DATA_URL: &str = "https://api.scryfall.com/bulk-data";
pub const BUCKET: &str = "muspelheim";
pub const BUCKET_KEY: &str = "scryfall-oracle-cards.json";
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Endpoints and destination for a refresh run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bulk_data_url: String,
    pub bucket: String,
    pub key: String,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bulk_data_url: BULK_DATA_URL.to_owned(),
            bucket: BUCKET.to_owned(),
            key: BUCKET_KEY.to_owned(),
            user_agent: USER_AGENT.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_scryfall_and_muspelheim() {
        let settings = Settings::default();
        assert_eq!(settings.bulk_data_url, "https://api.scryfall.com/bulk-data");
        assert_eq!(settings.bucket, "muspelheim");
        assert_eq!(settings.key, "scryfall-oracle-cards.json");
        assert!(settings.user_agent.starts_with("scryfall-datafetcher/"));
    }
}
