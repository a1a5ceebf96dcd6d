//! HTTP adapter for the chat relay endpoint.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ChatRequest, ChatResponse, ChatRoleDto, ChatTurnDto, ErrorResponse};
pub use handlers::{ChatApiError, ChatAppState};
pub use routes::{chat_router, chat_routes};
