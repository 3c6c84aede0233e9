use crate::{ImageRef, ReportId, UserId};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Stable schema identifier for the on-disk item store.
pub const SCHEMA_STORE_V1: &str = "lostfound.store.v1";

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` calendar date as entered on a report form.
pub fn parse_calendar_date(text: &str) -> Result<Date, time::error::Parse> {
    Date::parse(text.trim(), CALENDAR_DATE)
}

/// Format a calendar date as `YYYY-MM-DD`.
pub fn format_calendar_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

mod calendar_date {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_calendar_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_calendar_date(&text).map_err(D::Error::custom)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    Found,
}

impl ItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Lost => "lost",
            ItemType::Found => "found",
        }
    }
}

/// Lifecycle of a report. Transitions are monotone: `Active` is the only
/// state with outgoing edges.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Active,
    Found,
    Claimed,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Found => "found",
            ItemStatus::Claimed => "claimed",
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, ItemStatus::Active)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ItemReport {
    pub id: ReportId,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    pub category: String,
    pub location: String,
    #[schemars(with = "String")]
    #[serde(with = "calendar_date")]
    pub date: Date,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<ImageRef>,
    /// Set once at creation; repositories never rewrite it.
    pub owner_id: UserId,
    #[serde(default)]
    pub status: ItemStatus,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[schemars(with = "Option<String>")]
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub updated_at: Option<OffsetDateTime>,
}

impl ItemReport {
    pub fn is_lost(&self) -> bool {
        self.item_type == ItemType::Lost
    }

    pub fn is_found(&self) -> bool {
        self.item_type == ItemType::Found
    }

    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner_id == user
    }
}

/// Raw report submission, as typed into the report form.
///
/// Every text field is unvalidated; see `lostfound_domain::submission`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewItemReport {
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub contact_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<ImageRef>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Pending,
}

/// A claim that links one found report to the claimant's lost report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatchRecord {
    pub id: ReportId,
    pub lost_id: ReportId,
    pub found_id: ReportId,
    pub matched_by: UserId,
    #[serde(default)]
    pub status: MatchStatus,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl MatchRecord {
    pub fn involves(&self, id: &ReportId) -> bool {
        &self.lost_id == id || &self.found_id == id
    }
}

/// What a viewer may see of one report.
///
/// Derived per (viewer, report) pair and never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct DisclosureDecision {
    pub reveal_details: bool,
    pub reveal_contact: bool,
    pub allow_claim: bool,
}

impl DisclosureDecision {
    /// Everything visible, nothing to claim.
    pub const OPEN: Self = Self {
        reveal_details: true,
        reveal_contact: true,
        allow_claim: false,
    };

    /// Everything visible and the claim action enabled.
    pub const MATCHED: Self = Self {
        reveal_details: true,
        reveal_contact: true,
        allow_claim: true,
    };

    /// Placeholder only.
    pub const REDACTED: Self = Self {
        reveal_details: false,
        reveal_contact: false,
        allow_claim: false,
    };
}
