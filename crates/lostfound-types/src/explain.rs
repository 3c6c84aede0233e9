//! Explain registry for error and notice codes.
//!
//! Maps codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the code.
    pub title: &'static str,
    /// When the code is produced.
    pub description: &'static str,
    /// What the caller should do about it.
    pub remediation: &'static str,
}

/// Look up an explanation by code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::CODE_INVALID_ARGUMENT => Some(explain_invalid_argument()),
        ids::CODE_INVALID_TRANSITION => Some(explain_invalid_transition()),
        ids::CODE_CONCURRENT_MODIFICATION => Some(explain_concurrent_modification()),
        ids::CODE_NOT_FOUND => Some(explain_not_found()),
        ids::CODE_VALIDATION_FAILED => Some(explain_validation_failed()),
        ids::CODE_PERMISSION_DENIED => Some(explain_permission_denied()),
        ids::CODE_NOT_SIGNED_IN => Some(explain_not_signed_in()),
        ids::CODE_STORE_IO => Some(explain_store_io()),
        ids::CODE_STORE_CORRUPT => Some(explain_store_corrupt()),
        ids::NOTICE_SECURITY_REDACTED => Some(explain_security_redacted()),
        ids::NOTICE_MATCH => Some(explain_match_notice()),
        _ => None,
    }
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_INVALID_ARGUMENT,
        ids::CODE_INVALID_TRANSITION,
        ids::CODE_CONCURRENT_MODIFICATION,
        ids::CODE_NOT_FOUND,
        ids::CODE_VALIDATION_FAILED,
        ids::CODE_PERMISSION_DENIED,
        ids::CODE_NOT_SIGNED_IN,
        ids::CODE_STORE_IO,
        ids::CODE_STORE_CORRUPT,
        ids::NOTICE_SECURITY_REDACTED,
        ids::NOTICE_MATCH,
    ]
}

fn explain_invalid_argument() -> Explanation {
    Explanation {
        title: "Invalid Argument",
        description: "\
A report or viewer handed to the disclosure policy was malformed: the report has
a blank id or blank owner, or the viewer carries a blank user id.",
        remediation: "\
This is a caller bug. Make sure reports come from the repository (which always
assigns ids and owners) and that viewers are built from the session provider.",
    }
}

fn explain_invalid_transition() -> Explanation {
    Explanation {
        title: "Invalid Status Transition",
        description: "\
The requested status change is not allowed. Only `active -> found` and
`active -> claimed` exist; `found` and `claimed` are final.",
        remediation: "\
Refresh the report and retry. If it is already found or claimed there is
nothing left to do.",
    }
}

fn explain_concurrent_modification() -> Explanation {
    Explanation {
        title: "Concurrent Modification",
        description: "\
The status update lost a race: another request changed the report after it was
read, so the expected prior status no longer holds. Nothing was written.",
        remediation: "Refresh the report and retry the action against its current status.",
    }
}

fn explain_not_found() -> Explanation {
    Explanation {
        title: "Report Not Found",
        description: "No report with the given id exists in the store.",
        remediation: "Check the id (see `lostfound list` or `lostfound mine`).",
    }
}

fn explain_validation_failed() -> Explanation {
    Explanation {
        title: "Submission Validation Failed",
        description: "\
A new report is missing required fields. Title, category, location, date,
contact info and description are all required; the date must be YYYY-MM-DD.",
        remediation: "Fill in every field listed in the error and submit again.",
    }
}

fn explain_permission_denied() -> Explanation {
    Explanation {
        title: "Permission Denied",
        description: "\
The signed-in user may not perform this action: only the owner of a lost report
can mark it recovered, and only a viewer whose lost report matches a found
report can claim it.",
        remediation: "\
Report your lost item first so it can be matched, or sign in as the owner.",
    }
}

fn explain_not_signed_in() -> Explanation {
    Explanation {
        title: "Not Signed In",
        description: "The action needs a signed-in user and the session is anonymous.",
        remediation: "Sign in (CLI: pass `--as <user>`) and retry.",
    }
}

fn explain_store_io() -> Explanation {
    Explanation {
        title: "Store IO Error",
        description: "The item store could not be read or written.",
        remediation: "Check the store path and its permissions.",
    }
}

fn explain_store_corrupt() -> Explanation {
    Explanation {
        title: "Store Corrupt",
        description: "\
The item store exists but is not a valid `lostfound.store.v1` JSON document.",
        remediation: "Restore the store from a backup or validate it against the published schema.",
    }
}

fn explain_security_redacted() -> Explanation {
    Explanation {
        title: "Found Item Redacted",
        description: "\
Details of found items are only shown to users whose own lost report matches
the item. Everyone else sees a redaction marker and an obscured image.",
        remediation: "If you believe this item might be yours, report your lost item first.",
    }
}

fn explain_match_notice() -> Explanation {
    Explanation {
        title: "Possible Match",
        description: "This found item matches one of your lost reports.",
        remediation: "Review the details and claim the item if it is yours.",
    }
}
