use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use scryfall_datafetcher::{DataFetcher, S3Publisher, ScryfallClient, Settings};

struct ClientHandler {
    http: ScryfallClient,
    s3: S3Publisher,
    settings: Settings,
}

impl ClientHandler {
    async fn load() -> Self {
        let config = aws_config::load_from_env().await;
        let settings = Settings::default();

        Self {
            http: ScryfallClient::new(settings.user_agent.clone()),
            s3: S3Publisher::new(&config),
            settings,
        }
    }
}

async fn handler(
    clients: &ClientHandler,
    _event: LambdaEvent<serde_json::Value>,
) -> Result<(), Error> {
    let fetcher = DataFetcher::new(&clients.http, &clients.s3, &clients.settings);
    let summary = match fetcher.refresh().await {
        Ok(summary) => summary,
        Err(err) => {
            let err = anyhow::Error::new(err);
            tracing::error!("card refresh failed :: {err:#}");
            return Err(err.into());
        }
    };

    tracing::info!(
        "uploaded cards to S3 :: {} dataset :: {} of {} cards kept",
        summary.dataset_type,
        summary.retained,
        summary.total
    );

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let clients = ClientHandler::load().await;
    let clients = &clients;

    run(service_fn(
        move |event: LambdaEvent<serde_json::Value>| async move { handler(clients, event).await },
    ))
    .await?;

    Ok(())
}
