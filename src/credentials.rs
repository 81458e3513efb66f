use anyhow::Result;
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

const ENV_API_KEY: &str = "PENNA_API_KEY";

const KEYRING_SERVICE: &str = "penna";
const KEYRING_KEY: &str = "openrouter-api-key";

/// Values that ship in example configs and must never reach the wire.
const PLACEHOLDER_KEYS: &[&str] = &[
    "your-api-key-here",
    "your_api_key_here",
    "changeme",
    "sk-xxxx",
    "none",
];

/// Resolves the generation-service API key.
///
/// Lookup order: environment variable, OS keyring, restricted-permission
/// file under the config dir, then the config file value handed to
/// `resolve`. Placeholder values are treated as absent so a copy-pasted
/// example config behaves like no key at all.
pub struct CredentialStore {
    key_file: PathBuf,
}

impl CredentialStore {
    pub fn new() -> Self {
        let key_file = crate::config::Config::config_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".api_key");

        Self { key_file }
    }

    /// True when the value is usable as a credential.
    pub fn is_usable(key: &str) -> bool {
        let key = key.trim();
        !key.is_empty() && !PLACEHOLDER_KEYS.contains(&key.to_ascii_lowercase().as_str())
    }

    fn env_key() -> Option<String> {
        env::var(ENV_API_KEY).ok().filter(|k| Self::is_usable(k))
    }

    fn keyring_get(&self) -> Option<String> {
        let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_KEY).ok()?;
        entry.get_password().ok().filter(|k| Self::is_usable(k))
    }

    fn keyring_set(&self, key: &str) -> bool {
        if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, KEYRING_KEY) {
            entry.set_password(key).is_ok()
        } else {
            false
        }
    }

    fn file_get(&self) -> Option<String> {
        fs::read_to_string(&self.key_file)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|k| Self::is_usable(k))
    }

    /// Write the key to the file fallback (with restricted permissions)
    fn file_set(&self, key: &str) -> Result<()> {
        if let Some(parent) = self.key_file.parent() {
            fs::create_dir_all(parent)?;
        }

        // Create file with restricted permissions atomically to avoid TOCTOU
        #[cfg(unix)]
        {
            let mut file = fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.key_file)?;
            file.write_all(key.as_bytes())?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.key_file, key)?;
        }

        Ok(())
    }

    /// Resolve the API key, preferring env var, then keyring, then the
    /// key file, then the config file value. Returns `None` when nothing
    /// usable is found anywhere.
    pub fn resolve(&self, config_value: Option<&str>) -> Option<String> {
        if let Some(key) = Self::env_key() {
            return Some(key);
        }

        if let Some(key) = self.keyring_get() {
            return Some(key);
        }

        if let Some(key) = self.file_get() {
            return Some(key);
        }

        config_value
            .filter(|k| Self::is_usable(k))
            .map(|k| k.trim().to_string())
    }

    /// Store the key, keyring first with file fallback.
    pub fn store(&self, key: &str) -> Result<()> {
        if self.keyring_set(key) && self.keyring_get().is_some() {
            return Ok(());
        }

        eprintln!("Note: Keyring unavailable, using file-based storage.");
        self.file_set(key)?;

        Ok(())
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
