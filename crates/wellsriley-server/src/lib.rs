//! # Wells-Riley Server
//!
//! REST server exposing the Wells-Riley risk calculation.
//!
//! ## Endpoints
//!
//! - `GET /health`, `GET /api/v1/health`
//! - `POST /api/v1/risk`: one scenario
//! - `POST /api/v1/risk/batch`: independent scenarios
//! - `GET /api/v1/calibration`: the fixed rate tables
//!
//! ## Usage
//!
//! ```ignore
//! use wellsriley_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod handlers;
pub mod routes;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::{ConfigError, ServerConfig};

/// The Wells-Riley server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let router = routes::create_router().layer(TraceLayer::new_for_http());

        if self.config.cors_permissive {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            router.layer(cors)
        } else {
            router
        }
    }

    /// Bind address from the configuration.
    pub fn address(&self) -> SocketAddr {
        let ip = self.config.host.parse().unwrap_or_else(|_| {
            warn!("Invalid host '{}', binding to 0.0.0.0", self.config.host);
            IpAddr::V4(Ipv4Addr::UNSPECIFIED)
        });
        SocketAddr::new(ip, self.config.port)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = self.address();

        info!("Starting Wells-Riley server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
