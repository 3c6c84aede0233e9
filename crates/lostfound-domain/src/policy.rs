/// Rules used by [`crate::matching::AttributeMatcher`].
#[derive(Clone, Debug, PartialEq)]
pub struct MatchingPolicy {
    /// Minimum Jaccard similarity of the title word sets, in `[0, 1]`.
    pub min_title_similarity: f64,
    pub require_same_category: bool,
    pub require_location_overlap: bool,
    /// Reject pairs where the item was found before it was lost.
    pub respect_dates: bool,
}

impl Default for MatchingPolicy {
    fn default() -> Self {
        Self {
            min_title_similarity: 0.5,
            require_same_category: true,
            require_location_overlap: false,
            respect_dates: true,
        }
    }
}

/// Text shown in place of every redacted field.
pub const DEFAULT_REDACTION_MARKER: &str = "[hidden]";

/// Number of reports on the "recent items" strip.
pub const DEFAULT_RECENT_LIMIT: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct EffectivePolicy {
    pub profile: String,
    pub matching: MatchingPolicy,
    pub redaction_marker: String,
    pub recent_limit: usize,
}

impl Default for EffectivePolicy {
    fn default() -> Self {
        Self {
            profile: "standard".to_string(),
            matching: MatchingPolicy::default(),
            redaction_marker: DEFAULT_REDACTION_MARKER.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}
