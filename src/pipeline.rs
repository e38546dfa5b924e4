use lambda_runtime::tracing;

use crate::{
    config::Settings,
    errors::{FetcherError, Result, Target},
    s3::CardPublisher,
    scryfall::{filter_cards, select_dataset, BulkEntry, BulkIndex, Card, HttpFetch},
};

/// Outcome of a successful refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub dataset_type: String,
    pub total: usize,
    pub retained: usize,
    pub bytes: usize,
}

/// Downloads, filters and publishes the card dataset.
///
/// Borrows its collaborators; the clients built at startup drive every run.
/// Each run starts from scratch and stops at the first failing step.
pub struct DataFetcher<'a> {
    http: &'a dyn HttpFetch,
    publisher: &'a dyn CardPublisher,
    settings: &'a Settings,
}

struct FilteredCatalog {
    dataset_type: String,
    total: usize,
    cards: Vec<Card>,
}

impl<'a> DataFetcher<'a> {
    pub fn new(
        http: &'a dyn HttpFetch,
        publisher: &'a dyn CardPublisher,
        settings: &'a Settings,
    ) -> Self {
        Self {
            http,
            publisher,
            settings,
        }
    }

    pub async fn fetch_index(&self) -> Result<BulkIndex> {
        let raw = self.download(Target::Index, &self.settings.bulk_data_url).await?;
        decode(Target::Index, &raw)
    }

    pub async fn fetch_cards(&self, entry: &BulkEntry) -> Result<Vec<Card>> {
        let raw = self.download(Target::Dataset, &entry.url).await?;
        decode(Target::Dataset, &raw)
    }

    /// Runs the download and filter steps without publishing anything.
    pub async fn run(&self) -> Result<Vec<Card>> {
        Ok(self.collect().await?.cards)
    }

    /// Full refresh: the filtered dataset replaces the published object.
    /// Nothing is uploaded unless both downloads succeed.
    pub async fn refresh(&self) -> Result<RunSummary> {
        let catalog = self.collect().await?;
        let Settings { bucket, key, .. } = self.settings;

        let bytes = self
            .publisher
            .publish(bucket, key, &catalog.cards)
            .await
            .map_err(|source| FetcherError::Publish {
                bucket: bucket.clone(),
                key: key.clone(),
                source,
            })?;
        tracing::info!("uploaded {} bytes to s3://{}/{}", bytes, bucket, key);

        Ok(RunSummary {
            dataset_type: catalog.dataset_type,
            total: catalog.total,
            retained: catalog.cards.len(),
            bytes,
        })
    }

    async fn collect(&self) -> Result<FilteredCatalog> {
        let index = self.fetch_index().await?;
        tracing::info!("downloaded bulk card data :: {} entries", index.data.len());

        let entry = select_dataset(&index)?;
        let cards = self.fetch_cards(entry).await?;
        let total = cards.len();
        tracing::info!("downloaded '{}' dataset :: {} cards", entry.kind, total);

        let cards = filter_cards(cards);
        tracing::info!(
            "filtered cards :: {} downloaded :: {} retained",
            total,
            cards.len()
        );

        Ok(FilteredCatalog {
            dataset_type: entry.kind.clone(),
            total,
            cards,
        })
    }

    async fn download(&self, target: Target, url: &str) -> Result<Vec<u8>> {
        self.http
            .get(url)
            .await
            .map_err(|source| FetcherError::Fetch {
                target,
                url: url.to_owned(),
                source,
            })
    }
}

fn decode<T: serde::de::DeserializeOwned>(target: Target, raw: &[u8]) -> Result<T> {
    serde_json::from_slice(raw).map_err(|source| FetcherError::Decode { target, source })
}
