//! Handler types and shared dependencies

use std::sync::Arc;

use crate::telegram::webapp::WebAppLinks;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    /// Web app links derived from WEB_APP_URL at startup.
    pub links: Arc<WebAppLinks>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(links: Arc<WebAppLinks>) -> Self {
        Self { links }
    }
}
