//! Status code label derivation.

use hyper::Response;

/// Calculates the `code` label from the response, `"0"` when there is none.
pub fn code_label<B>(response: Option<&Response<B>>) -> String {
    status_label(response.map(|r| r.status().as_u16()))
}

/// Same as [`code_label`] for callers that only kept the numeric status.
pub fn status_label(status: Option<u16>) -> String {
    status.unwrap_or(0).to_string()
}
