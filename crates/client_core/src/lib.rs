use anyhow::{bail, Context, Result};
use reqwest::Client;
use shared::protocol::Record;
use tokio::sync::{broadcast, Mutex};
use tracing::info;

/// Events emitted towards the presentation layer. The view re-renders on
/// every [`ClientEvent::RecordsUpdated`]; nothing is emitted when a fetch
/// returns a collection identical to the stored one.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    RecordsUpdated { records: Vec<Record> },
}

#[derive(Default)]
struct ClientState {
    records: Vec<Record>,
}

/// Client half of the catalog: fetches the record collection from the data
/// service and keeps the last successful response as local display state.
pub struct CatalogClient {
    http: Client,
    server_url: String,
    state: Mutex<ClientState>,
    events: broadcast::Sender<ClientEvent>,
}

impl CatalogClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            http: Client::new(),
            server_url: server_url.into().trim_end_matches('/').to_string(),
            state: Mutex::new(ClientState::default()),
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ClientEvent> {
        self.events.subscribe()
    }

    /// Issues `GET /records` against the data service, stores the result as
    /// the current snapshot, and emits [`ClientEvent::RecordsUpdated`] if the
    /// stored collection changed. Failures leave the snapshot untouched.
    pub async fn fetch_records(&self) -> Result<Vec<Record>> {
        let url = format!("{}/records", self.server_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("failed to reach data service at {url}"))?;
        if !response.status().is_success() {
            bail!("data service returned {} for {url}", response.status());
        }
        let records: Vec<Record> = response
            .json()
            .await
            .context("failed to decode record list")?;
        info!(count = records.len(), "fetched record collection");

        let changed = {
            let mut state = self.state.lock().await;
            if state.records == records {
                false
            } else {
                state.records = records.clone();
                true
            }
        };
        if changed {
            let _ = self.events.send(ClientEvent::RecordsUpdated {
                records: records.clone(),
            });
        }
        Ok(records)
    }

    /// The last successfully fetched collection, in the order received.
    pub async fn records(&self) -> Vec<Record> {
        self.state.lock().await.records.clone()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
