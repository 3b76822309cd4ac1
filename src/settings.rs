//! Settings: env files, provider resolution and API key storage.
//!
//! Handles:
//! - Loading `.env.local` / `.env` into the process environment
//! - Picking the active provider
//! - API key lookup (env var, then OS keychain via the keyring crate)
//! - Building a ClassifierConfig from the environment

use crate::llm::{ClassifierConfig, ProviderKind};
use std::path::Path;
use std::time::Duration;

const KEYRING_SERVICE: &str = "support-triage";

/// Load `.env.local`, falling back to `.env`, from `dir`.
///
/// Only the first file found is loaded. Variables already set in the
/// environment win.
pub fn load_env_files(dir: &Path) {
    for env_file in [".env.local", ".env"] {
        let path = dir.join(env_file);
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => log::info!("[SETTINGS] Loaded {}", path.display()),
                Err(e) => log::warn!("[SETTINGS] Failed to load {}: {}", path.display(), e),
            }
            return;
        }
    }
}

// ── Provider resolution ──────────────────────────────────────────────

/// Determine which provider to use.
///
/// Priority:
/// 1. LLM_PROVIDER env var (explicit override)
/// 2. First provider with an API key set (env var or keychain)
/// 3. OpenAI as final default
pub fn resolve_provider() -> ProviderKind {
    if let Ok(p) = std::env::var("LLM_PROVIDER") {
        match p.parse::<ProviderKind>() {
            Ok(kind) => {
                log::info!("[SETTINGS] Provider override: {}", kind);
                return kind;
            }
            Err(e) => log::warn!("[SETTINGS] Ignoring LLM_PROVIDER: {}", e),
        }
    }

    ProviderKind::ALL
        .into_iter()
        .find(|kind| api_key_for(*kind).is_some())
        // No key anywhere: every classify call will take the heuristic path.
        .unwrap_or(ProviderKind::OpenAi)
}

/// API key for a provider: env var first, then the OS keychain.
pub fn api_key_for(provider: ProviderKind) -> Option<String> {
    if let Ok(key) = std::env::var(provider.env_key()) {
        if !key.trim().is_empty() {
            return Some(key);
        }
    }

    let entry = keyring::Entry::new(KEYRING_SERVICE, provider.id()).ok()?;
    match entry.get_password() {
        Ok(key) if !key.trim().is_empty() => {
            log::info!("[SETTINGS] Loaded {} key from OS keychain ({} chars)", provider, key.len());
            Some(key)
        }
        _ => None,
    }
}

/// Store an API key in the OS keychain.
pub fn save_api_key(provider: ProviderKind, api_key: &str) -> Result<(), String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, provider.id())
        .map_err(|e| format!("Keyring error: {}", e))?;
    entry
        .set_password(api_key)
        .map_err(|e| format!("Failed to save key: {}", e))?;
    log::info!("[SETTINGS] Saved {} key to OS keychain", provider);
    Ok(())
}

// ── Config ───────────────────────────────────────────────────────────

/// Build a ClassifierConfig from the environment.
///
/// Reads LLM_PROVIDER, the provider's key, and the optional TRIAGE_MODEL,
/// TRIAGE_ENDPOINT, TRIAGE_TEMPERATURE and TRIAGE_TIMEOUT_SECS overrides.
pub fn config_from_env() -> ClassifierConfig {
    let provider = resolve_provider();
    let mut config = ClassifierConfig::for_provider(provider);
    config.api_key = api_key_for(provider);

    if let Some(model) = non_empty_var("TRIAGE_MODEL") {
        config = config.with_model(model);
    }
    if let Some(endpoint) = non_empty_var("TRIAGE_ENDPOINT") {
        config = config.with_endpoint(endpoint);
    }
    if let Some(raw) = non_empty_var("TRIAGE_TEMPERATURE") {
        match raw.parse::<f64>() {
            Ok(t) if (0.0..=2.0).contains(&t) => config.temperature = t,
            _ => log::warn!("[SETTINGS] Ignoring TRIAGE_TEMPERATURE={}", raw),
        }
    }
    if let Some(raw) = non_empty_var("TRIAGE_TIMEOUT_SECS") {
        match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => config.timeout = Some(Duration::from_secs(secs)),
            _ => log::warn!("[SETTINGS] Ignoring TRIAGE_TIMEOUT_SECS={}", raw),
        }
    }

    log::info!(
        "[SETTINGS] Provider={}, model={}, key={}",
        config.provider,
        config.model,
        if config.api_key().is_some() { "present" } else { "missing" }
    );
    config
}

/// Path of the history file: TRIAGE_HISTORY_PATH or the default data dir.
pub fn history_path() -> std::path::PathBuf {
    non_empty_var("TRIAGE_HISTORY_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(crate::history::default_path)
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_local_takes_precedence_over_env() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".env.local"),
            "SUPPORT_TRIAGE_TEST_LOCAL=from-local\n",
        )
        .unwrap();
        std::fs::write(dir.path().join(".env"), "SUPPORT_TRIAGE_TEST_PLAIN=from-env\n").unwrap();

        load_env_files(dir.path());

        assert_eq!(std::env::var("SUPPORT_TRIAGE_TEST_LOCAL").unwrap(), "from-local");
        // .env is skipped once .env.local was found
        assert!(std::env::var("SUPPORT_TRIAGE_TEST_PLAIN").is_err());
    }

    #[test]
    fn missing_env_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        load_env_files(dir.path());
    }
}
