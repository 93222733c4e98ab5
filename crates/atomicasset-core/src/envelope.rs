//! The common response envelope.
//!
//! Every endpoint answers with
//! `{ "success": bool, "message"?: string, "query_time": Timestamp, "data": ... }`.
//! Error responses may instead carry only `{ "success": false, "message": ... }`,
//! or nothing structured at all.

use crate::timestamp::Timestamp;
use serde::Deserialize;

/// Media type every response must carry.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Whether an HTTP status code counts as a failure.
///
/// `0` means no status was received. Anything above 399 is a client or server
/// error. 1xx through 3xx are not failures.
#[must_use]
pub const fn is_error_status(status: u16) -> bool {
    status == 0 || status > 399
}

/// Compare a `Content-Type` header against `expected`, ignoring parameters
/// such as `; charset=utf-8`.
///
/// ```
/// use atomicasset_core::envelope::is_content_type;
///
/// assert!(is_content_type("application/json; charset=utf-8", "application/json"));
/// assert!(!is_content_type("text/plain", "application/json"));
/// ```
#[must_use]
pub fn is_content_type(header: &str, expected: &str) -> bool {
    let media_type = header.split_once(';').map_or(header, |(media, _)| media);
    media_type == expected
}

/// Decoded response for one call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiResponse<T> {
    /// HTTP status code of the response. Set by the client, never decoded.
    #[serde(skip)]
    pub http_status: u16,
    /// Upstream success flag
    pub success: bool,
    /// Optional message, usually present on failures
    pub message: Option<String>,
    /// Server-side time the query was executed
    pub query_time: Timestamp,
    /// Endpoint-specific payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Whether the recorded HTTP status counts as a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        is_error_status(self.http_status)
    }

    /// Transform the payload, keeping the envelope fields.
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            http_status: self.http_status,
            success: self.success,
            message: self.message,
            query_time: self.query_time,
            data: f(self.data),
        }
    }
}

/// Minimal error body read on failure statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// `None` when the field was absent or `null`
    #[serde(default)]
    pub success: Option<bool>,
    /// `None` when the field was absent or `null`
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Only an explicit `"success": false` counts as a declared failure.
    #[must_use]
    pub fn declares_failure(&self) -> bool {
        self.success == Some(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_classification() {
        for (status, expected) in [
            (0, true),
            (400, true),
            (404, true),
            (500, true),
            (502, true),
            (399, false),
            (312, false),
            (202, false),
            (200, false),
            (101, false),
        ] {
            assert_eq!(is_error_status(status), expected, "status {status}");
        }
    }

    #[test]
    fn content_type_ignores_parameters() {
        assert!(is_content_type("application/json", JSON_CONTENT_TYPE));
        assert!(is_content_type("application/json;charset=utf-8", JSON_CONTENT_TYPE));
        assert!(is_content_type("application/json; charset=utf-8", JSON_CONTENT_TYPE));
        assert!(!is_content_type("text/plain", JSON_CONTENT_TYPE));
        assert!(!is_content_type("text/plain; charset=utf-8", JSON_CONTENT_TYPE));
        assert!(!is_content_type("some-type", JSON_CONTENT_TYPE));
        assert!(!is_content_type("", JSON_CONTENT_TYPE));
    }

    #[test]
    fn envelope_decodes_query_time_forms() {
        let a: ApiResponse<Vec<u8>> =
            serde_json::from_str(r#"{"success":true,"data":[1],"query_time":1645374772067}"#)
                .unwrap();
        let b: ApiResponse<Vec<u8>> =
            serde_json::from_str(r#"{"success":true,"data":[1],"query_time":"1645374772067"}"#)
                .unwrap();

        assert!(a.success);
        assert_eq!(a.query_time, b.query_time);
        assert_eq!(a.data, vec![1]);
        assert_eq!(a.http_status, 0);
    }

    #[test]
    fn empty_object_decodes_to_zero_envelope() {
        let resp: ApiResponse<Vec<String>> = serde_json::from_str("{}").unwrap();
        assert_eq!(resp, ApiResponse::default());
    }

    #[test]
    fn empty_body_is_decode_error() {
        let err = serde_json::from_slice::<ApiResponse<Vec<String>>>(b"").unwrap_err();
        assert!(err.is_eof());
    }

    #[test]
    fn map_keeps_envelope() {
        let resp = ApiResponse {
            http_status: 200,
            success: true,
            message: None,
            query_time: Timestamp::from_millis(5),
            data: vec![1, 2, 3],
        };
        let mapped = resp.map(|v| v.len());
        assert_eq!(mapped.http_status, 200);
        assert_eq!(mapped.query_time, Timestamp::from_millis(5));
        assert_eq!(mapped.data, 3);
    }

    #[test]
    fn error_body_declares_failure_only_when_explicit() {
        let cases = [
            (r#"{"success":false,"message":"Some internal error"}"#, true),
            (r#"{"success":true}"#, false),
            (r#"{"success":null}"#, false),
            ("{}", false),
        ];
        for (raw, expected) in cases {
            let body: ApiErrorBody = serde_json::from_str(raw).unwrap();
            assert_eq!(body.declares_failure(), expected, "body {raw}");
        }
    }
}
