mod auth;
pub use auth::{AUTH_SCHEME, extract_context_fn};
