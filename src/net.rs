mod encoding;
mod fetch;
mod json;
mod options;
mod response;
mod transport;

pub use encoding::Encoding;
pub use fetch::{raw_request, Fetcher};
pub use json::json_request;
pub use options::{ContentTypePattern, RequestOptions};
pub use response::{Body, Response};
pub use transport::Transport;
