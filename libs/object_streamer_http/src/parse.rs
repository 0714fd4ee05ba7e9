use headers::HeaderMap;
use http::header::RANGE;
use object_streamer_lib::types::FetchRequest;

use crate::header_util::collect_conditional_headers;

/// Builds the [`FetchRequest`] for an incoming read of `path`.
///
/// The `Range` header is kept as raw bytes. Checking it is left to the store.
pub fn fetch_request(path: &str, headers: &HeaderMap) -> FetchRequest {
    let path = path.strip_prefix('/').unwrap_or(path);
    let range = headers.get(RANGE).cloned();

    FetchRequest::new(path, range, collect_conditional_headers(headers))
}
