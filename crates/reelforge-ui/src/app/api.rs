//! API client context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one API client per app boot, holding the immutable base
//!   address resolved from build-time configuration.

use crate::core::endpoint::ApiBase;
use crate::services::api::ApiClient;
use std::rc::Rc;

/// Shared API client context for UI services.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    /// Singleton API client instance.
    pub client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Create a new context with the configured base address.
    pub(crate) fn new(base: ApiBase) -> Self {
        Self {
            client: Rc::new(ApiClient::new(base)),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
