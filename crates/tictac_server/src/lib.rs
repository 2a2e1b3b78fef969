//! Tictac server library - session store and REST API
//!
//! Hosts any number of independent tic-tac-toe games in memory and exposes
//! them over JSON/HTTP.
//!
//! # Architecture
//!
//! - **Store**: `SessionStore`, the registry of live sessions with
//!   per-session locking
//! - **Api**: axum router and handlers mapping requests onto the store
//! - **Config**: layered server configuration (defaults, TOML, env, flags)
//!
//! # Example
//!
//! ```no_run
//! use tictac_server::{ServerConfig, SessionStore, app};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let router = app(SessionStore::new(), &config);
//! let listener = tokio::net::TcpListener::bind(("127.0.0.1", 8000)).await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod error;
mod store;

// Crate-level exports - HTTP layer
pub use api::{ApiError, CreateGameRequest, ErrorBody, HealthResponse, MakeMoveRequest, app, routes};

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Session management
pub use error::StoreError;
pub use store::SessionStore;
