use crate::{model::LostfoundConfigV1, model::SCHEMA_CONFIG_V1, presets};
use anyhow::Context;
use lostfound_domain::policy::EffectivePolicy;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub recent_limit: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectivePolicy,
}

pub fn resolve_config(
    cfg: LostfoundConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected one of {})",
            presets::PROFILES.join("|")
        )
    })?;

    // recent items
    if let Some(limit) = overrides.recent_limit.or(cfg.recent_limit) {
        if limit == 0 {
            anyhow::bail!("recent_limit must be at least 1");
        }
        effective.recent_limit = limit as usize;
    }

    // redaction
    if let Some(marker) = cfg.redaction.marker.as_deref() {
        if marker.trim().is_empty() {
            anyhow::bail!("redaction.marker must not be blank");
        }
        effective.redaction_marker = marker.to_string();
    }

    // matching
    let m = &cfg.matching;
    if let Some(sim) = m.min_title_similarity {
        validate_similarity(sim).context("matching.min_title_similarity")?;
        effective.matching.min_title_similarity = sim;
    }
    if let Some(v) = m.require_same_category {
        effective.matching.require_same_category = v;
    }
    if let Some(v) = m.require_location_overlap {
        effective.matching.require_location_overlap = v;
    }
    if let Some(v) = m.respect_dates {
        effective.matching.respect_dates = v;
    }

    Ok(ResolvedConfig { effective })
}

fn validate_similarity(v: f64) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&v) {
        anyhow::bail!("similarity {v} is outside 0.0..=1.0");
    }
    Ok(())
}
