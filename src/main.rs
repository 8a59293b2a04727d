//! greenfield-docs

use anyhow::Result;
use greenfield_docs::{
    catalog::GreenfieldCatalog,
    docs::DocumentAssembler,
    router::{self, AppState},
    settings::Settings,
};
use http::header;
use std::{
    io,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    time::Duration,
};
use tokio::signal::{
    self,
    unix::{signal, SignalKind},
};
use tower_http::{
    catch_panic::CatchPanicLayer, sensitive_headers::SetSensitiveHeadersLayer,
    timeout::TimeoutLayer,
};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let (stdout_writer, _stdout_guard) = tracing_appender::non_blocking(io::stdout());

    let settings = Settings::load(None)?;

    setup_tracing(stdout_writer);

    info!(
        subject = "app_settings",
        category = "init",
        "starting with settings: {:?}",
        settings,
    );

    let document = DocumentAssembler::default().assemble_catalog(&GreenfieldCatalog);
    info!(
        subject = "openapi",
        category = "init",
        paths = document.paths.paths.len(),
        "assembled greenfield documentation"
    );

    let app = router::setup_app_router(AppState::default(), &settings, document)
        // Applies the `tower_http::timeout::Timeout` middleware which
        // applies a timeout to requests.
        .layer(TimeoutLayer::new(Duration::from_millis(
            settings.server.timeout_ms,
        )))
        // Catches runtime panics and converts them into
        // `500 Internal Server` responses.
        .layer(CatchPanicLayer::new())
        // Mark headers as sensitive on both requests and responses.
        .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION]));

    let bind_addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), settings.server.port);
    info!(
        subject = "app_start",
        category = "init",
        docs = %settings.docs.docs_path(),
        "Application server listening on {}",
        bind_addr
    );

    axum::Server::bind(&bind_addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(capture_sigterm())
        .await?;

    info!(subject = "app_stop", category = "shutdown", "server stopped");

    Ok(())
}

/// Captures and waits for system signals.
async fn capture_sigterm() {
    #[cfg(unix)]
    let term = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let term = std::future::pending::<()>();

    tokio::select! {
        _ = signal::ctrl_c() => {},
        _ = term => {}
    };
}

/// Setup the [tracing][tracing] subscriber for request/response tracing and logging.
fn setup_tracing(writer: tracing_appender::non_blocking::NonBlocking) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    EnvFilter::new("greenfield_docs=info,tower_http=info")
                })),
        )
        .init();
}
