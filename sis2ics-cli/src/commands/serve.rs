use std::net::SocketAddr;

use anyhow::{Context, Result};
use sis2ics_core::CalendarConfig;
use tower_http::trace::TraceLayer;

use crate::routes::{self, AppState};
use crate::source::Source;

pub async fn run(
    source: Source,
    config: CalendarConfig,
    download_name: String,
    listen: &str,
) -> Result<()> {
    let addr: SocketAddr = listen
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", listen))?;

    let state = AppState::new(source, config, download_name);
    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not listen on {}", addr))?;
    println!("sis2ics listening on http://{}/calendar.ics", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
