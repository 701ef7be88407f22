//! # Server
//!
//! Binds the router to a TCP listener and serves it until a shutdown signal.
//! The first Ctrl-C (or SIGTERM) stops accepting connections and waits for
//! in-flight requests. A second one exits right away, abandoning requests
//! still waiting on an induced delay.

use crate::{decider::Decider, error::Error, routes};
use axum::Router;
use std::{future::IntoFuture, net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::trace::TraceLayer;

/// Create the application: the routes wrapped in request tracing.
pub fn app(decider: Arc<dyn Decider>) -> Router {
    routes::router(decider).layer(TraceLayer::new_for_http())
}

/// Bind to `addr` and serve the application until shutdown.
pub async fn serve(addr: SocketAddr, decider: Arc<dyn Decider>) -> Result<(), Error> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;
    let local_addr = listener.local_addr().map_err(Error::Serve)?;
    tracing::info!(addr = %local_addr, "listening");

    let (graceful_tx, graceful_rx) = oneshot::channel::<()>();
    let (force_tx, force_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("shutting down, waiting for in-flight requests");
        let _ = graceful_tx.send(());

        shutdown_signal().await;
        tracing::warn!("forcing shutdown");
        let _ = force_tx.send(());
    });

    let server = axum::serve(listener, app(decider))
        .with_graceful_shutdown(async move {
            let _ = graceful_rx.await;
        })
        .into_future();

    tokio::select! {
        res = server => res.map_err(Error::Serve)?,
        _ = force_rx => {}
    }

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("cannot listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("cannot listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
