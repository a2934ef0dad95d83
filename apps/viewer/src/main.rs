use anyhow::Result;
use clap::Parser;
use client_core::{CatalogClient, ClientEvent};
use shared::protocol::Record;
use url::Url;

#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the data service.
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server_url: Url,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let client = CatalogClient::new(args.server_url.as_str());
    let mut events = client.subscribe_events();

    // One fetch at startup; a failure propagates out of main with no retry.
    client.fetch_records().await?;

    // Rendering is driven by collection-change events. The fetch above has
    // already completed, so anything it emitted is buffered by now.
    while let Ok(ClientEvent::RecordsUpdated { records }) = events.try_recv() {
        render(&records);
    }

    Ok(())
}

fn render(records: &[Record]) {
    for record in records {
        println!("{:>4}  {}", record.id.0, record.name);
    }
}
