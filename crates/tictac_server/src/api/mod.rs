//! REST API over the session store.

mod dto;
mod error;
mod handlers;
mod routes;

pub use dto::{CreateGameRequest, HealthResponse, MakeMoveRequest};
pub use error::{ApiError, ErrorBody};
pub use routes::{app, routes};
