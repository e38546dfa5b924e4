use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::{primitives::ByteStream, Client};
use aws_types::SdkConfig;

use crate::scryfall::Card;

/// Destination for the filtered dataset. Implementations overwrite whatever
/// was stored by the previous run and return the number of bytes written.
#[async_trait]
pub trait CardPublisher: Send + Sync {
    async fn publish(&self, bucket: &str, key: &str, cards: &[Card]) -> Result<usize>;
}

pub struct S3Publisher {
    client: Client,
}

impl S3Publisher {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: Client::new(config),
        }
    }
}

pub fn encode_cards(cards: &[Card]) -> Result<Vec<u8>> {
    Ok(serde_json::to_string_pretty(cards)?.into_bytes())
}

#[async_trait]
impl CardPublisher for S3Publisher {
    async fn publish(&self, bucket: &str, key: &str, cards: &[Card]) -> Result<usize> {
        let body = encode_cards(cards)?;
        let size = body.len();
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(body))
            .send()
            .await?;

        Ok(size)
    }
}
