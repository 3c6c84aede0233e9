//! Validation of new report submissions.

use lostfound_types::{
    ImageRef, ItemReport, ItemStatus, ItemType, NewItemReport, ReportId, UserId, ids,
    parse_calendar_date,
};
use time::{Date, OffsetDateTime};

/// Every problem found in one submission, reported together.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.missing, .invalid))]
pub struct ValidationError {
    /// Required fields that were absent or blank.
    pub missing: Vec<&'static str>,
    /// Fields present but unparseable.
    pub invalid: Vec<&'static str>,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        ids::CODE_VALIDATION_FAILED
    }
}

fn describe(missing: &[&'static str], invalid: &[&'static str]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing required fields: {}", missing.join(", ")));
    }
    if !invalid.is_empty() {
        parts.push(format!("invalid fields: {}", invalid.join(", ")));
    }
    parts.join("; ")
}

/// A submission that passed validation, ready to be stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidSubmission {
    pub item_type: ItemType,
    pub title: String,
    pub category: String,
    pub location: String,
    pub date: Date,
    pub description: String,
    pub contact_info: String,
    pub image_ref: Option<ImageRef>,
}

impl ValidSubmission {
    pub fn into_report(self, id: ReportId, owner_id: UserId, now: OffsetDateTime) -> ItemReport {
        ItemReport {
            id,
            item_type: self.item_type,
            title: self.title,
            category: self.category,
            location: self.location,
            date: self.date,
            description: self.description,
            contact_info: self.contact_info,
            image_ref: self.image_ref,
            owner_id,
            status: ItemStatus::Active,
            created_at: now,
            updated_at: None,
        }
    }
}

/// Strip a leading "Lost at " / "Found at " that the report form prepends.
pub fn strip_location_prefix(location: &str) -> &str {
    let trimmed = location.trim();
    for prefix in ["lost at", "found at"] {
        if let Some(head) = trimmed.get(..prefix.len())
            && head.eq_ignore_ascii_case(prefix)
        {
            let rest = &trimmed[prefix.len()..];
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return rest.trim();
            }
        }
    }
    trimmed
}

pub fn validate(input: &NewItemReport) -> Result<ValidSubmission, ValidationError> {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();

    if input.item_type.is_none() {
        missing.push("type");
    }
    let mut required = |name: &'static str, value: &str| {
        let v = value.trim();
        if v.is_empty() {
            missing.push(name);
        }
        v.to_string()
    };
    let title = required("title", &input.title);
    let category = required("category", &input.category);
    let location = required("location", strip_location_prefix(&input.location));
    let date_text = required("date", &input.date);
    let contact_info = required("contact_info", &input.contact_info);
    let description = required("description", &input.description);

    let date = if date_text.is_empty() {
        None
    } else {
        match parse_calendar_date(&date_text) {
            Ok(d) => Some(d),
            Err(_) => {
                invalid.push("date");
                None
            }
        }
    };

    let image_ref = input.image_ref.clone().filter(|r| !r.is_blank());

    match (input.item_type, date) {
        (Some(item_type), Some(date)) if missing.is_empty() && invalid.is_empty() => {
            Ok(ValidSubmission {
                item_type,
                title,
                category,
                location,
                date,
                description,
                contact_info,
                image_ref,
            })
        }
        _ => Err(ValidationError { missing, invalid }),
    }
}
