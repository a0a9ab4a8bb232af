//! Assertion macros for HTTP responses

/// Assert that a response carries the JSON error body for `status`
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr) => {{
        let response = &$response;
        response.assert_status($status);
        let body: serde_json::Value = response.json();
        assert_eq!(
            body["status"],
            serde_json::json!($status.as_u16()),
            "unexpected error body: {}",
            body
        );
        assert!(body["error"].is_string(), "missing error message: {}", body);
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
