use crate::models::TriggerType;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// Trigger assigned to workflows created without an explicit one.
    pub default_trigger: TriggerType,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            default_trigger: TriggerType::default(),
        }
    }
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Self, String> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let log_level = env_or("FLOWKEEPER_LOG_LEVEL", "info");

        let default_trigger = env_or("FLOWKEEPER_DEFAULT_TRIGGER", TriggerType::MANUAL);
        if default_trigger.trim().is_empty() {
            return Err("Invalid FLOWKEEPER_DEFAULT_TRIGGER: value is blank".to_string());
        }

        Ok(Config {
            log_level,
            default_trigger: TriggerType::new(default_trigger.trim()),
        })
    }
}
