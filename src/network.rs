//! Network URL constants.

/// Default marketplace REST API base URL.
pub const DEFAULT_API_URL: &str = "https://eb863a74-7a4e-4daf-9540-d2db8470c18e.mock.pstmn.io";

/// Environment variable the CLI reads to override [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "ORDER_REVIEW_API_URL";
