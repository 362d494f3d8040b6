//! CLI configuration: thin wrapper around `vlcwatch_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--host, --password, etc.).

use std::time::Duration;

use secrecy::SecretString;
use tracing::debug;

use vlcwatch_core::PlayerConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use vlcwatch_config::{
    Config, Defaults, KEYRING_SERVICE, Profile, config_path, keyring_user,
    load_config_or_default, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the `PlayerConfig` for this invocation.
///
/// Uses the active profile when one exists, otherwise the built-in defaults
/// (`127.0.0.1:8080`). Flags override profile values either way.
pub fn build_player_config(global: &GlobalOpts) -> Result<PlayerConfig, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    let (profile, from_file) = match cfg.profiles.get(&profile_name) {
        Some(p) => (p.clone(), true),
        None if global.profile.is_some() => {
            let mut available: Vec<_> = cfg.profiles.keys().cloned().collect();
            available.sort();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => (Profile::default(), false),
    };
    debug!(profile = %profile_name, from_file, "resolved profile");

    resolve_profile(&profile, &profile_name, &cfg.defaults, global)
}

/// Translate a `Profile` + global flags into a `PlayerConfig`.
///
/// CLI flag overrides take priority over profile values.
pub fn resolve_profile(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<PlayerConfig, CliError> {
    let mut profile = profile.clone();

    // 1. Address (flag > env > profile)
    if let Some(ref host) = global.host {
        profile.host.clone_from(host);
    }
    if let Some(port) = global.port {
        profile.port = port;
    }

    // 2. Password (flag > env > keyring > plaintext)
    let password = match global.password {
        Some(ref pw) => SecretString::from(pw.clone()),
        None => vlcwatch_config::resolve_password(&profile, profile_name)?,
    };

    let mut config = vlcwatch_config::player_config_with_password(&profile, defaults, password)?;

    // 3. Timeout
    if let Some(secs) = global.timeout {
        config.timeout = Duration::from_secs(secs);
    }

    Ok(config)
}
