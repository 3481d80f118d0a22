//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UserCommand, UserQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
}

impl HttpState {
    /// Construct state from the user port implementations.
    pub fn new(users: Arc<dyn UserCommand>, users_query: Arc<dyn UserQuery>) -> Self {
        Self { users, users_query }
    }
}
