//! Shared application context bound into fetched models.

use crate::{ApiRequest, Method, Route, Transport};
use plural_core::Intents;
use plural_error::IntentError;
use std::sync::Arc;
use tracing::debug;

/// The identity a model operates under: a transport plus the intent set
/// the token was issued with, and optionally an acting user.
///
/// Fetched resources keep an `Arc` of the context that produced them, so
/// later edits go out through the same transport under the same intents.
/// The intent set is fixed for the life of the context; widening it means
/// constructing a new application.
pub struct AppContext {
    transport: Arc<dyn Transport>,
    intents: Intents,
    user_id: Option<u64>,
}

impl AppContext {
    /// Bind a transport to an intent set.
    pub fn new(transport: Arc<dyn Transport>, intents: Intents) -> Self {
        Self {
            transport,
            intents,
            user_id: None,
        }
    }

    /// Derive a context acting on behalf of a user.
    ///
    /// Requests built under the derived context carry a `user_id` query
    /// parameter, and models fetched through it stay scoped to that user.
    pub fn as_user(&self, user_id: u64) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            intents: self.intents,
            user_id: Some(user_id),
        }
    }

    /// The intent set this identity holds.
    pub fn intents(&self) -> Intents {
        self.intents
    }

    /// The acting user, when scoped via [`AppContext::as_user`].
    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    /// The transport requests go out through.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Check that this identity holds every intent in `required`.
    ///
    /// Fails on the lowest-numbered missing flag. Callers run this before
    /// building a request, so a failed check means nothing was dispatched.
    pub fn require(&self, required: Intents) -> Result<(), IntentError> {
        if let Some(missing) = self.intents.first_missing(required) {
            debug!(missing = missing.name(), held = %self.intents, "intent check failed");
            return Err(IntentError::missing(missing.name()));
        }
        Ok(())
    }

    /// Start a request under this identity, seeding the acting-user
    /// parameter when scoped.
    pub fn request(&self, method: Method, route: Route) -> ApiRequest {
        let request = ApiRequest::new(method, route);
        match self.user_id {
            Some(user_id) => request.with_param("user_id", user_id.to_string()),
            None => request,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("intents", &self.intents)
            .field("user_id", &self.user_id)
            .finish_non_exhaustive()
    }
}
