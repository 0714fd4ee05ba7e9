use headers::HeaderMap;
use http::header::{
    CACHE_CONTROL, CONTENT_LANGUAGE, CONTENT_LENGTH, CONTENT_RANGE, CONTENT_TYPE, ETAG,
    LAST_MODIFIED, SET_COOKIE,
};

use crate::header_util::collect_metadata_headers;

#[test]
fn test_collect_metadata_headers() {
    let mut upstream = HeaderMap::new();
    upstream.insert(CACHE_CONTROL, "max-age=60".parse().unwrap());
    upstream.insert(CONTENT_LANGUAGE, "en".parse().unwrap());
    upstream.insert(CONTENT_LENGTH, "100".parse().unwrap());
    upstream.insert(CONTENT_RANGE, "bytes 0-99/500".parse().unwrap());
    upstream.insert(CONTENT_TYPE, "image/png".parse().unwrap());
    upstream.insert(
        LAST_MODIFIED,
        "Wed, 21 Oct 2015 07:28:00 GMT".parse().unwrap(),
    );
    upstream.insert(ETAG, "\"x1\"".parse().unwrap());
    upstream.insert(SET_COOKIE, "a=b".parse().unwrap());

    let headers = collect_metadata_headers(&upstream);

    assert_eq!(headers[CACHE_CONTROL], "max-age=60");
    assert_eq!(headers[CONTENT_LANGUAGE], "en");
    assert_eq!(headers[CONTENT_LENGTH], "100");
    assert_eq!(headers[CONTENT_RANGE], "bytes 0-99/500");
    assert_eq!(headers[CONTENT_TYPE], "image/png");
    assert_eq!(headers[LAST_MODIFIED], "Wed, 21 Oct 2015 07:28:00 GMT");
    assert!(!headers.contains_key(ETAG));
    assert!(!headers.contains_key(SET_COOKIE));
}

#[test]
fn test_collect_nothing() {
    assert!(collect_metadata_headers(&HeaderMap::new()).is_empty());
}

#[test]
fn test_cache_control_is_copied_verbatim() {
    let mut upstream = HeaderMap::new();
    upstream.insert(
        CACHE_CONTROL,
        "max-age=60, stale-while-revalidate=30, stale-if-error=600"
            .parse()
            .unwrap(),
    );

    let headers = collect_metadata_headers(&upstream);
    assert_eq!(
        headers[CACHE_CONTROL],
        "max-age=60, stale-while-revalidate=30, stale-if-error=600"
    );
}
