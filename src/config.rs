use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub app_name: String,
    pub environment: String,
    pub data_dir: PathBuf,
    pub sample_data_enabled: bool,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            app_name: env_or("APP_NAME", "Nyumba Rentals"),
            environment: env_or("ENVIRONMENT", "development"),
            data_dir: PathBuf::from(env_or("NYUMBA_DATA_DIR", ".nyumba")),
            sample_data_enabled: env_parse_bool_or("SAMPLE_DATA_ENABLED", true),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment.trim().eq_ignore_ascii_case("production")
    }

    /// Sample data is a development convenience only.
    pub fn sample_data_enabled_runtime(&self) -> bool {
        if self.is_production() {
            return false;
        }
        self.sample_data_enabled
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env_opt(key).unwrap_or_else(|| default.to_string())
}

fn env_parse_bool_or(key: &str, default: bool) -> bool {
    parse_bool(env_opt(key).as_deref(), default)
}

fn parse_bool(raw: Option<&str>, default: bool) -> bool {
    match raw.map(str::to_ascii_lowercase) {
        Some(value) if value == "1" || value == "true" || value == "yes" || value == "on" => true,
        Some(value) if value == "0" || value == "false" || value == "no" || value == "off" => false,
        Some(_) => default,
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_bool;

    #[test]
    fn parses_bool_flags() {
        assert!(parse_bool(Some("1"), false));
        assert!(parse_bool(Some("Yes"), false));
        assert!(!parse_bool(Some("off"), true));
        assert!(parse_bool(Some("gibberish"), true));
        assert!(!parse_bool(None, false));
    }
}
