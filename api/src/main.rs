use std::sync::Arc;

use clap::Parser;
use roster_api::{config::RosterApiConfig, server};
use roster_db::storage::{Storage, memory::MemoryStorage};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = RosterApiConfig::parse();

    let store: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
    let (router, api) = server::make(config.clone(), store).await;

    if config.dump_openapi {
        let json = api.to_pretty_json().unwrap();
        print!("{}", json);
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or("roster_api=info,roster_common=info,roster_db=info".into()),
            )
            .pretty()
            .init();

        let listener = TcpListener::bind(config.bind_addr)
            .await
            .expect("Failed to bind to address");

        info!("Listening on http://{:?}", config.bind_addr);

        axum::serve(listener, router)
            .await
            .expect("Failed to start server");
    }
}
