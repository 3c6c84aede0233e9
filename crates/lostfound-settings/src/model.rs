use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Schema identifier accepted in the optional `schema` key.
pub const SCHEMA_CONFIG_V1: &str = "lostfound.config.v1";

/// `lostfound.toml` schema v1.
///
/// This is a *user-facing* config model: every key is optional and profiles fill the gaps.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct LostfoundConfigV1 {
    /// Optional schema string for tooling (`lostfound.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `standard` (default), `strict` or `lenient`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// How many reports the recent-items strip shows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_limit: Option<u32>,

    #[serde(default)]
    pub redaction: RedactionConfig,

    #[serde(default)]
    pub matching: MatchingConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RedactionConfig {
    /// Text shown instead of hidden fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct MatchingConfig {
    /// Minimum title word overlap (Jaccard index) between 0.0 and 1.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_title_similarity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_same_category: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_location_overlap: Option<bool>,

    /// Reject matches where the item was found before it was lost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respect_dates: Option<bool>,
}
