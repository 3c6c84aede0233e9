use lostfound_domain::policy::{EffectivePolicy, MatchingPolicy};

/// Known profile names.
pub const PROFILES: &[&str] = &["standard", "strict", "lenient"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into the config file.
pub fn preset(profile: &str) -> Option<EffectivePolicy> {
    match profile {
        "standard" => Some(EffectivePolicy::default()),
        "strict" => Some(strict_profile()),
        "lenient" => Some(lenient_profile()),
        _ => None,
    }
}

fn strict_profile() -> EffectivePolicy {
    EffectivePolicy {
        profile: "strict".to_string(),
        matching: MatchingPolicy {
            min_title_similarity: 0.75,
            require_same_category: true,
            require_location_overlap: true,
            respect_dates: true,
        },
        ..EffectivePolicy::default()
    }
}

fn lenient_profile() -> EffectivePolicy {
    // Lenient still redacts; it only widens what counts as a match.
    EffectivePolicy {
        profile: "lenient".to_string(),
        matching: MatchingPolicy {
            min_title_similarity: 0.25,
            require_same_category: false,
            require_location_overlap: false,
            respect_dates: false,
        },
        ..EffectivePolicy::default()
    }
}
