use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, env, fs, path::PathBuf, time::Duration};

use bizmate_core::auth::CredentialTable;

pub const DEFAULT_BASE_URL: &str = "https://integrate.api.nvidia.com/v1";
pub const DEFAULT_MODEL: &str = "nvidia/mistral-nemo-minitron-8b-base";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Optional overrides read from `config.toml`. Unknown keys are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct NvidiaFileConfig {
    pub model: Option<String>,
    pub timeout_ms: Option<u64>,
    /// Username -> hex SHA-256 password digest.
    pub users: Option<HashMap<String, String>>,
}

#[derive(Clone, Debug)]
pub struct NvidiaConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub proxy: Option<String>,
}

impl NvidiaConfig {
    /// The API key is the one required secret; without it the session cannot
    /// proceed at all, so absence is a hard error rather than a degraded
    /// mode. Everything else has a default or a file override.
    pub fn from_env_and_file() -> anyhow::Result<Self> {
        let api_key =
            env::var("NVIDIA_API_KEY").map_err(|_| anyhow::anyhow!("NVIDIA_API_KEY not set"))?;
        let base_url =
            env::var("NVIDIA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let proxy = env::var("HTTPS_PROXY")
            .ok()
            .or_else(|| env::var("HTTP_PROXY").ok());

        let mut cfg = NvidiaConfig {
            api_key,
            base_url,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            proxy,
        };
        if let Some(file_cfg) = read_file_config() {
            cfg.apply_file(file_cfg);
        }
        Ok(cfg)
    }

    fn apply_file(&mut self, file_cfg: NvidiaFileConfig) {
        if let Some(m) = file_cfg.model {
            self.model = m;
        }
        if let Some(t) = file_cfg.timeout_ms {
            self.timeout = Duration::from_millis(t);
        }
    }
}

/// Credential table from the `[users]` section of the config file, or the
/// built-in defaults when the file has none.
pub fn load_credentials() -> CredentialTable {
    credentials_from(read_file_config())
}

fn credentials_from(file_cfg: Option<NvidiaFileConfig>) -> CredentialTable {
    match file_cfg.and_then(|c| c.users) {
        Some(users) if !users.is_empty() => {
            let mut table = CredentialTable::empty();
            for (name, digest) in users {
                table.insert_digest(name, digest);
            }
            table
        }
        _ => CredentialTable::default(),
    }
}

fn read_file_config() -> Option<NvidiaFileConfig> {
    let path = config_path()?;
    let raw = fs::read_to_string(path).ok()?;
    toml::from_str(&raw).ok()
}

fn config_path() -> Option<PathBuf> {
    let base = BaseDirs::new()?;
    let p = if cfg!(target_os = "windows") {
        base.home_dir().join(".bizmate").join("config.toml")
    } else {
        base.config_dir().join("bizmate").join("config.toml")
    };
    Some(p)
}
