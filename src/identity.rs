//! Learner identity resolution.
//!
//! Every command that reads or writes progress needs to know whose progress
//! it is. Rather than requiring `--as` on every invocation, the learner is
//! resolved through a chain:
//!
//! 1. `--as <learner>`: explicit per-command override
//! 2. `CODETRAIL_LEARNER` env var: shell or session level
//! 3. `learner` in `~/.codetrail/config.toml`: default for a single-learner machine

use std::env;

use crate::config::Config;

/// Environment variable consulted after `--as`.
pub const LEARNER_ENV: &str = "CODETRAIL_LEARNER";

/// Error message shown when the learner cannot be resolved.
pub const LEARNER_REQUIRED: &str = "learner required: pass --as <learner>, \
    set CODETRAIL_LEARNER, or add `learner = \"...\"` to ~/.codetrail/config.toml";

/// What a learner may see beyond their own progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Learner,
    Admin,
}

/// A resolved learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub learner: String,
    pub role: Role,
}

/// Resolve the acting learner from the tiered resolution chain.
pub fn resolve(explicit: Option<&str>, config: &Config) -> Result<Identity, String> {
    let from_env = env::var(LEARNER_ENV).ok();
    let learner = resolve_from(explicit, from_env.as_deref(), config.learner.as_deref())
        .ok_or_else(|| LEARNER_REQUIRED.to_string())?;
    let role = if config.is_admin(&learner) {
        Role::Admin
    } else {
        Role::Learner
    };
    Ok(Identity { learner, role })
}

/// First non-empty value in chain order.
fn resolve_from(
    explicit: Option<&str>,
    from_env: Option<&str>,
    configured: Option<&str>,
) -> Option<String> {
    [explicit, from_env, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|id| !id.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_wins() {
        let id = resolve_from(Some("kim"), Some("env"), Some("config"));
        assert_eq!(id.as_deref(), Some("kim"));
    }

    #[test]
    fn env_beats_config() {
        let id = resolve_from(None, Some("env"), Some("config"));
        assert_eq!(id.as_deref(), Some("env"));
    }

    #[test]
    fn empty_values_are_skipped() {
        let id = resolve_from(Some(""), Some("  "), Some("config"));
        assert_eq!(id.as_deref(), Some("config"));
        assert_eq!(resolve_from(None, Some(""), None), None);
    }

    #[test]
    fn admins_get_admin_role() {
        let config = Config {
            admins: vec!["root".into()],
            ..Config::default()
        };
        let admin = resolve(Some("root"), &config).unwrap();
        assert_eq!(admin.role, Role::Admin);

        let learner = resolve(Some("kim"), &config).unwrap();
        assert_eq!(learner.role, Role::Learner);
    }
}
