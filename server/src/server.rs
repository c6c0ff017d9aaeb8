//! Listener setup and per-request logging.

use crate::{routes, settings::Settings};
use miette::miette;
use rouille::Request;
use std::time::Instant;

/// Bind to the configured address and serve until the process is killed.
pub fn serve(settings: Settings) -> miette::Result<()> {
    let addr = settings.bind_addr();
    if !settings.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %settings.static_dir.display(),
            "static directory not found, only the API will be served"
        );
    }

    let server = rouille::Server::new(&addr, move |request: &Request| {
        let start = Instant::now();
        let response = routes::handle(request, &settings);
        tracing::info!(
            method = request.method(),
            url = %request.raw_url(),
            status = response.status_code,
            elapsed_us = start.elapsed().as_micros() as u64,
            "request"
        );
        response
    })
    .map_err(|e| miette!("failed to bind {addr}: {e}"))?;

    tracing::info!("listening on http://{}", server.server_addr());
    server.run();
    Ok(())
}
