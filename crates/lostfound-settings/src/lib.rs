//! Config parsing and profile resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{LostfoundConfigV1, MatchingConfig, RedactionConfig, SCHEMA_CONFIG_V1};
pub use presets::{PROFILES, preset};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `lostfound.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<LostfoundConfigV1> {
    let cfg: LostfoundConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective policy used by the app (profile + overrides + per-section config).
pub fn resolve_config(
    cfg: LostfoundConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
