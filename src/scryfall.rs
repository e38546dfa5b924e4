use anyhow::Result;
use async_trait::async_trait;
use lambda_runtime::tracing;
use reqwest::{
    header::{ACCEPT, USER_AGENT},
    Client,
};
use serde::{Deserialize, Serialize};

use crate::errors::FetcherError;

/// Joke and playtest sets whose cards never make it into the dataset.
pub const EXCLUDED_SETS: &[&str] = &["Unglued", "Unhinged", "Unsanctioned", "Unfinity", "Unstable"];

/// Set name Scryfall uses when a card's collection is not identified.
pub const UNKNOWN_SET: &str = "Unknown Event";

/// Bulk dataset the poster expects to read.
pub const ORACLE_CARDS: &str = "oracle_cards";

#[derive(Deserialize, Debug)]
pub struct BulkIndex {
    pub data: Vec<BulkEntry>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BulkEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "download_uri")]
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub image_uris: Option<CardImageData>,
    pub set_name: String,
    pub flavor_text: Option<String>,
    pub artist: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CardImageData {
    pub art_crop: Option<String>,
}

impl Card {
    pub fn art_crop(&self) -> Option<&str> {
        self.image_uris
            .as_ref()
            .and_then(|images| images.art_crop.as_deref())
    }

    /// A card is dropped when it comes from an excluded or unidentified set,
    /// or when it has no flavor text, art crop or artist to post. Missing
    /// fields count as empty.
    pub fn is_excluded(&self) -> bool {
        let set = self.set_name.as_str();
        if EXCLUDED_SETS.contains(&set) || set == UNKNOWN_SET {
            return true;
        }

        [
            self.flavor_text.as_deref(),
            self.art_crop(),
            self.artist.as_deref(),
        ]
        .into_iter()
        .any(|field| field.unwrap_or_default().is_empty())
    }
}

/// Keeps the cards that pass [`Card::is_excluded`], in their original order.
pub fn filter_cards(cards: Vec<Card>) -> Vec<Card> {
    cards.into_iter().filter(|c| !c.is_excluded()).collect()
}

/// Picks the dataset to download: always the first entry of the index.
pub fn select_dataset(index: &BulkIndex) -> Result<&BulkEntry, FetcherError> {
    let entry = index.data.first().ok_or(FetcherError::EmptyIndex)?;
    if entry.kind != ORACLE_CARDS {
        tracing::warn!(
            "first bulk entry is '{}', expected '{}' :: downloading it anyway",
            entry.kind,
            ORACLE_CARDS
        );
    }

    Ok(entry)
}

#[async_trait]
pub trait HttpFetch: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}

pub struct ScryfallClient {
    client: Client,
    user_agent: String,
}

impl ScryfallClient {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self::with_client(Client::new(), user_agent)
    }

    pub fn with_client(client: Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl HttpFetch for ScryfallClient {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let data = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        Ok(data.into())
    }
}
