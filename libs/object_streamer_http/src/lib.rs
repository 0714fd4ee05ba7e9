pub use http_object_store::HTTPObjectStore;
pub use http_service::HTTPService;
pub use parse::fetch_request;
pub use reqwest::{Client, Url};

mod header_util;
mod http_object_store;
mod http_service;
mod parse;
