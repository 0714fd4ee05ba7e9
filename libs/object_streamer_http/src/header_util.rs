use headers::{
    AcceptRanges, ContentDisposition, ContentEncoding, ContentLength, ContentRange,
    ContentType, Expires, Header, HeaderMap, HeaderMapExt, IfMatch, IfModifiedSince, IfNoneMatch,
    IfUnmodifiedSince, LastModified,
};
use http::header::{HeaderName, CACHE_CONTROL, CONTENT_LANGUAGE};

/// Take the object metadata headers from an upstream reply.
/// Currently, this list of headers is:
///    - `accept-ranges`
///    - `cache-control`
///    - `content-disposition`
///    - `content-encoding`
///    - `content-language`
///    - `content-length`
///    - `content-range`
///    - `content-type`
///    - `expires`
///    - `last-modified`
///
/// The entity tag is handled separately.
pub fn collect_metadata_headers(response_headers: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();

    clone_header::<AcceptRanges>(&mut headers, response_headers);
    clone_header::<ContentDisposition>(&mut headers, response_headers);
    clone_header::<ContentEncoding>(&mut headers, response_headers);
    clone_header::<ContentLength>(&mut headers, response_headers);
    clone_header::<ContentRange>(&mut headers, response_headers);
    clone_header::<ContentType>(&mut headers, response_headers);
    clone_header::<Expires>(&mut headers, response_headers);
    clone_header::<LastModified>(&mut headers, response_headers);

    // Copied verbatim: no typed header for `content-language`, and the typed
    // `cache-control` drops extension directives.
    clone_raw_header(&mut headers, response_headers, CACHE_CONTROL);
    clone_raw_header(&mut headers, response_headers, CONTENT_LANGUAGE);

    headers
}

/// Take the validators a client sent, to hand to the store untouched.
/// Unparseable validators are dropped, which makes the store ignore them.
pub fn collect_conditional_headers(request_headers: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();

    clone_header::<IfMatch>(&mut headers, request_headers);
    clone_header::<IfNoneMatch>(&mut headers, request_headers);
    clone_header::<IfModifiedSince>(&mut headers, request_headers);
    clone_header::<IfUnmodifiedSince>(&mut headers, request_headers);

    headers
}

fn clone_header<H: Header>(dest: &mut HeaderMap, src: &HeaderMap) {
    if let Some(header) = src.typed_get::<H>() {
        dest.typed_insert(header);
    }
}

fn clone_raw_header(dest: &mut HeaderMap, src: &HeaderMap, name: HeaderName) {
    for value in src.get_all(&name) {
        dest.append(name.clone(), value.clone());
    }
}
