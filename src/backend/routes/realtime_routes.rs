//! Relay route configuration
//!
//! - `POST /app/{destination}` - publish a payload
//! - `GET /topic/{topic}` - subscribe over SSE
//!
//! Both use catch-all segments since names such as `note/move` contain '/'.

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::realtime::{handle_publish, handle_topic_subscription};
use crate::backend::server::state::AppState;

pub fn configure_realtime_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/app/{*destination}", post(handle_publish))
        .route("/topic/{*topic}", get(handle_topic_subscription))
}
