//! Collaborators shared by every use case.

use anyhow::Context;
use lostfound_domain::MatchPredicate;
use lostfound_domain::matching::AttributeMatcher;
use lostfound_domain::model::Viewer;
use lostfound_domain::policy::EffectivePolicy;
use lostfound_repo::{ItemRepository, SessionProvider, viewer_for};
use lostfound_settings::Overrides;

use crate::AppError;

/// Parse and resolve configuration text. Empty text means defaults.
pub fn load_policy(config_text: &str, overrides: Overrides) -> anyhow::Result<EffectivePolicy> {
    let cfg = if config_text.trim().is_empty() {
        lostfound_settings::LostfoundConfigV1::default()
    } else {
        lostfound_settings::parse_config_toml(config_text).context("parse config")?
    };
    let resolved = lostfound_settings::resolve_config(cfg, overrides).context("resolve config")?;
    Ok(resolved.effective)
}

/// Repository, session and policy for one front end.
pub struct AppContext<'a> {
    pub repo: &'a dyn ItemRepository,
    pub session: &'a dyn SessionProvider,
    pub policy: EffectivePolicy,
    predicate: Box<dyn MatchPredicate + 'a>,
}

impl<'a> AppContext<'a> {
    /// Uses [`AttributeMatcher`] configured from `policy.matching`.
    pub fn new(
        repo: &'a dyn ItemRepository,
        session: &'a dyn SessionProvider,
        policy: EffectivePolicy,
    ) -> Self {
        let matcher = AttributeMatcher::new(policy.matching.clone());
        Self {
            repo,
            session,
            policy,
            predicate: Box::new(matcher),
        }
    }

    pub fn with_predicate(mut self, predicate: impl MatchPredicate + 'a) -> Self {
        self.predicate = Box::new(predicate);
        self
    }

    pub fn predicate(&self) -> &dyn MatchPredicate {
        self.predicate.as_ref()
    }

    /// Viewer for whoever is signed in right now.
    pub fn viewer(&self) -> Result<Viewer, AppError> {
        Ok(viewer_for(self.session, self.repo)?)
    }

    pub fn marker(&self) -> &str {
        &self.policy.redaction_marker
    }
}

impl std::fmt::Debug for AppContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
