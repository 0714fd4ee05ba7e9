use bytes::Bytes;
use futures::StreamExt;
use headers::{ETag, HeaderMap, HeaderMapExt};
use http::header::{CONTENT_RANGE, RANGE};
use http::StatusCode;
use object_streamer_lib::types::{
    BodyStream, GetOptions, ObjectMetadata, ObjectStore, Result as BodyResult, StoreFuture,
    StoreOutcome,
};
use object_streamer_lib::StoreError;
use reqwest::{Client, Response as ReqwestResponse, Url};

use crate::header_util::collect_metadata_headers;

/// [`ObjectStore`] backed by an HTTP origin.
///
/// The origin evaluates ranges and preconditions itself; this store forwards
/// them and classifies the reply.
pub struct HTTPObjectStore {
    client: Client,
    base_url: Url,
}

impl HTTPObjectStore {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// The origin URL for `key`, below the path of the base URL.
    pub fn url_for_key(&self, key: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}/{}", url.path().trim_end_matches('/'), key);
        url.set_path(&path);
        url
    }
}

impl ObjectStore for HTTPObjectStore {
    fn get(&self, key: &str, options: &GetOptions) -> StoreFuture {
        let url = self.url_for_key(key);
        let ranged = options.range.is_some();
        tracing::debug!(%url, ranged, "fetching from origin");

        let req = self
            .client
            .get(url)
            .headers(request_headers(options))
            .send();

        Box::pin(async move {
            // Convert to an outcome here to avoid tying the lifetime to `self`
            let response = req.await.map_err(|e| StoreError::Transport(e.into()))?;
            into_outcome(response, ranged)
        })
    }
}

/// The headers to send to the origin: the range, then the validators.
pub(crate) fn request_headers(options: &GetOptions) -> HeaderMap {
    let mut headers = options.only_if.clone();

    if let Some(range) = &options.range {
        headers.insert(RANGE, range.clone());
    }

    headers
}

fn object_metadata(response_headers: &HeaderMap) -> Result<ObjectMetadata, StoreError> {
    let etag = response_headers
        .typed_get::<ETag>()
        .ok_or(StoreError::MissingEntityTag)?;

    Ok(ObjectMetadata::new(
        etag,
        collect_metadata_headers(response_headers),
    ))
}

/// Classify an origin reply.
///
/// A failed precondition is treated like an unchanged object: either way the
/// origin declined to send bytes. When `ranged` is set, object bytes must come
/// with a `content-range`; an origin that ignored the range is a fault.
pub(crate) fn into_outcome(
    response: ReqwestResponse,
    ranged: bool,
) -> Result<StoreOutcome, StoreError> {
    match response.status() {
        StatusCode::NOT_FOUND => Ok(StoreOutcome::Absent),
        StatusCode::NOT_MODIFIED | StatusCode::PRECONDITION_FAILED => Ok(
            StoreOutcome::NotModified(object_metadata(response.headers())?),
        ),
        StatusCode::OK | StatusCode::PARTIAL_CONTENT => {
            let metadata = object_metadata(response.headers())?;
            if ranged && !metadata.headers().contains_key(CONTENT_RANGE) {
                return Err(StoreError::RangeIgnored(response.status()));
            }

            let body: BodyStream =
                Box::pin(response.bytes_stream().map(|r| -> BodyResult<Bytes> {
                    r.map_err(|e| e.into())
                }));

            Ok(StoreOutcome::Present(metadata, body))
        }
        status => Err(StoreError::UnexpectedStatus(status)),
    }
}
