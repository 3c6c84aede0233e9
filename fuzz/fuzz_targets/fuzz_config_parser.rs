//! Fuzz target for `lostfound.toml` parsing and resolution.
//!
//! Goal: parsing and resolving should **never panic** on any input.
//! They may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = lostfound_settings::parse_config_toml(text)
        && let Ok(resolved) = lostfound_settings::resolve_config(cfg, Default::default())
    {
        let policy = &resolved.effective;
        assert!((0.0..=1.0).contains(&policy.matching.min_title_similarity));
        assert!(policy.recent_limit > 0);
        assert!(!policy.redaction_marker.trim().is_empty());
    }
});
