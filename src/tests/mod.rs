//! Cross-module tests driving [`load_request`](crate::load_request) end to end.


use crate::{Request, RequestError, load_request};

pub(crate) fn load(text: &str) -> Request {
    load_request(text).unwrap()
}

pub(crate) fn load_err(text: &str) -> RequestError {
    load_request(text).unwrap_err()
}
