//! Configuration for the vlcwatch CLI.
//!
//! TOML profiles (one per VLC instance), password resolution
//! (env + keyring + plaintext), and translation to
//! `vlcwatch_core::PlayerConfig`. The CLI layers its flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use vlcwatch_core::{PlayerConfig, ProbeRetry};

/// Keyring service under which profile passwords are stored.
pub const KEYRING_SERVICE: &str = "vlcwatch";

/// Environment variable consulted for the password when a profile names none.
pub const PASSWORD_ENV: &str = "VLCWATCH_PASSWORD";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    ProfileNotFound { name: String },

    #[error("no password configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named player profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile, falling back to `default_profile` when `name` is
    /// `None`. Returns the resolved name alongside the profile.
    pub fn profile(&self, name: Option<&str>) -> Result<(String, &Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get(name)
            .map(|p| (name.to_owned(), p))
            .ok_or_else(|| ConfigError::ProfileNotFound { name: name.into() })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Polling period in (fractional) milliseconds.
    #[serde(default = "default_tick_length_ms")]
    pub tick_length_ms: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            tick_length_ms: default_tick_length_ms(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    10
}
fn default_tick_length_ms() -> f64 {
    1000.0 / 30.0
}

/// A named player profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Host running VLC's HTTP interface.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Basic-auth user name; VLC accepts any value.
    pub username: Option<String>,

    /// Password (plaintext; prefer keyring or env var).
    pub password: Option<String>,

    /// Environment variable name containing the password.
    pub password_env: Option<String>,

    /// Override polling period (milliseconds).
    pub tick_length_ms: Option<f64>,

    /// Override auto-update (start polling after connecting).
    pub auto_update: Option<bool>,

    /// Override change events.
    pub change_events: Option<bool>,

    /// Override timeout (seconds).
    pub timeout: Option<u64>,

    /// Reachability probe attempts.
    pub probe_attempts: Option<u32>,

    /// Pause between probe attempts (milliseconds).
    pub probe_interval_ms: Option<u64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            username: None,
            password: None,
            password_env: None,
            tick_length_ms: None,
            auto_update: None,
            change_events: None,
            timeout: None,
            probe_attempts: None,
            probe_interval_ms: None,
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".into()
}
fn default_port() -> u16 {
    8080
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("", "vlcwatch", "vlcwatch").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("vlcwatch");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// Environment keys use a `VLCWATCH_` prefix and `__` as the nesting
/// separator, e.g. `VLCWATCH_PROFILES__HOME__PORT=9090`. A missing file is
/// not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("VLCWATCH_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Password resolution (without CLI flags) ─────────────────────────

/// Keyring entry name for a profile's password.
pub fn keyring_user(profile_name: &str) -> String {
    format!("{profile_name}/password")
}

/// Resolve the password from the credential chain (no CLI flag step):
/// the profile's `password_env`, then `VLCWATCH_PASSWORD`, then the system
/// keyring, then plaintext in the config.
pub fn resolve_password(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Env vars
    let env_names = profile.password_env.as_deref().into_iter().chain([PASSWORD_ENV]);
    for env_name in env_names {
        if let Ok(val) = std::env::var(env_name) {
            debug!(env = env_name, "password from environment");
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, &keyring_user(profile_name)) {
        if let Ok(secret) = entry.get_password() {
            debug!("password from keyring");
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref pw) = profile.password {
        return Ok(SecretString::from(pw.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Build a `PlayerConfig` from a profile and the global defaults, with no
/// CLI flag overrides. The password comes from [`resolve_password`].
pub fn profile_to_player_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<PlayerConfig, ConfigError> {
    let password = resolve_password(profile, profile_name)?;
    player_config_with_password(profile, defaults, password)
}

/// Build a `PlayerConfig` from a profile using an already-resolved password.
pub fn player_config_with_password(
    profile: &Profile,
    defaults: &Defaults,
    password: SecretString,
) -> Result<PlayerConfig, ConfigError> {
    if profile.host.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "host".into(),
            reason: "must not be empty".into(),
        });
    }

    let base = PlayerConfig::default();
    let probe = ProbeRetry {
        max_attempts: profile.probe_attempts.unwrap_or(base.probe.max_attempts),
        interval: profile
            .probe_interval_ms
            .map_or(base.probe.interval, Duration::from_millis),
    };

    Ok(PlayerConfig {
        host: profile.host.clone(),
        port: profile.port,
        username: profile.username.clone().unwrap_or_default(),
        password,
        auto_update: profile.auto_update.unwrap_or(base.auto_update),
        tick_length: PlayerConfig::tick_length_from_millis(
            profile.tick_length_ms.unwrap_or(defaults.tick_length_ms),
        ),
        change_events: profile.change_events.unwrap_or(base.change_events),
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
        probe,
    })
}
