use std::sync::Arc;

use http::{HeaderMap, Method, StatusCode};
use object_streamer_lib::types::{ObjectStore, ResponseDescriptor};
use object_streamer_lib::Resolver;

use crate::parse::fetch_request;

/// Serves object reads: one store lookup, then resolution.
pub struct HTTPService {
    store: Arc<dyn ObjectStore>,
    resolver: Resolver,
}

impl HTTPService {
    pub fn new(store: Arc<dyn ObjectStore>, resolver: Resolver) -> Self {
        Self { store, resolver }
    }

    /// Resolve one read of `path`.
    ///
    /// `HEAD` is sent to the store as a plain lookup, so an origin is asked for
    /// the object bytes; the body is released unread once resolved.
    pub async fn call(
        &self,
        method: &Method,
        path: &str,
        headers: &HeaderMap,
    ) -> Result<ResponseDescriptor, StatusCode> {
        // We can't handle methods other than GET or HEAD.
        if !matches!(*method, Method::GET | Method::HEAD) {
            return Err(StatusCode::METHOD_NOT_ALLOWED);
        }

        let request = fetch_request(path, headers);

        // Store faults are server errors, never a missing object.
        let outcome = self
            .store
            .get(request.path(), &request.options())
            .await
            .map_err(|e| {
                tracing::error!(path = request.path(), error = %e, "object store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            })?;

        let response = self.resolver.resolve(&request, outcome);

        // Remove the body from HEAD requests.
        if matches!(*method, Method::HEAD) {
            return Ok(response.without_body());
        }

        Ok(response)
    }
}
