//! Minimal HTTP server telling each client whether its own connection
//! uses multipath TCP.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, State},
    http::StatusCode,
    routing::get,
    Router,
};
use log::{info, warn};

use crate::detector::Detector;
use crate::error::{MptcpError, Result};
use crate::report::Verdict;
use crate::source::TableSource;
use crate::sys;

/// Lookup used by the server, so it can run against any table source or
/// the platform backend.
pub trait Lookup: Send + Sync + 'static {
    fn is_enabled(&self) -> Result<bool>;
    fn check(&self, host: &str, port: u16) -> Result<bool>;
}

impl<S> Lookup for Detector<S>
where
    S: TableSource + Send + Sync + 'static,
{
    fn is_enabled(&self) -> Result<bool> {
        Detector::is_enabled(self)
    }

    fn check(&self, host: &str, port: u16) -> Result<bool> {
        Detector::check(self, host, port)
    }
}

/// Lookup through the crate level platform backend.
pub struct SystemLookup;

impl Lookup for SystemLookup {
    fn is_enabled(&self) -> Result<bool> {
        sys::is_enabled()
    }

    fn check(&self, host: &str, port: u16) -> Result<bool> {
        sys::check(host, port)
    }
}

type SharedLookup = Arc<dyn Lookup>;

pub fn build_router(lookup: SharedLookup) -> Router {
    Router::new()
        .route("/", get(check_handler))
        .route("/enabled", get(enabled_handler))
        .with_state(lookup)
}

/// Turn a lookup result into the status and body sent to the client.
pub fn render(result: &Result<bool>) -> (StatusCode, String) {
    let verdict = Verdict::from_result(result);
    let status = match verdict {
        Verdict::Mptcp | Verdict::NotMptcp => StatusCode::OK,
        Verdict::Ipv6Unsupported | Verdict::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        Verdict::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match verdict {
        Verdict::Failed(msg) => msg,
        other => other.label().to_string(),
    };

    (status, body)
}

async fn check_handler(
    State(lookup): State<SharedLookup>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> (StatusCode, String) {
    let result = blocking(move || lookup.check(&peer.ip().to_string(), peer.port())).await;

    if let Err(e) = &result {
        warn!("check for {} failed: {}", peer, e);
    } else {
        info!("{} -> {:?}", peer, result);
    }
    render(&result)
}

async fn enabled_handler(State(lookup): State<SharedLookup>) -> (StatusCode, String) {
    let result = blocking(move || lookup.is_enabled()).await;
    if let Err(e) = &result {
        warn!("MPTCP capability probe failed: {}", e);
    }
    render(&result)
}

async fn blocking<F>(f: F) -> Result<bool>
where
    F: FnOnce() -> Result<bool> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| MptcpError::Io(std::io::Error::other(e)))?
}

/// Accept Go style `:8080` as "all interfaces, port 8080".
pub fn normalize_listen_addr(listen: &str) -> String {
    if listen.starts_with(':') {
        format!("0.0.0.0{}", listen)
    } else {
        listen.to_string()
    }
}

/// Bind `listen` and serve until the process is stopped.
pub async fn serve(listen: &str, lookup: SharedLookup) -> std::io::Result<()> {
    let addr = normalize_listen_addr(listen);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("binding to: {}", listener.local_addr()?);

    let app = build_router(lookup);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
}
