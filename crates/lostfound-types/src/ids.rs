//! Stable codes for errors and notices.
//!
//! Codes are short snake_case discriminators. Notices are dotted.

// Error codes
pub const CODE_INVALID_ARGUMENT: &str = "invalid_argument";
pub const CODE_INVALID_TRANSITION: &str = "invalid_transition";
pub const CODE_CONCURRENT_MODIFICATION: &str = "concurrent_modification";
pub const CODE_NOT_FOUND: &str = "not_found";
pub const CODE_VALIDATION_FAILED: &str = "validation_failed";
pub const CODE_PERMISSION_DENIED: &str = "permission_denied";
pub const CODE_NOT_SIGNED_IN: &str = "not_signed_in";
pub const CODE_STORE_IO: &str = "store_io";
pub const CODE_STORE_CORRUPT: &str = "store_corrupt";

// Notices attached to report views
pub const NOTICE_SECURITY_REDACTED: &str = "notice.security_redacted";
pub const NOTICE_MATCH: &str = "notice.match";
