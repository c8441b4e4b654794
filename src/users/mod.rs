use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod error;
pub mod handlers;
pub mod model;
pub mod password;
pub mod service;
pub mod store;
mod validate;

pub fn router() -> Router<AppState> {
    handlers::admin_routes()
}
