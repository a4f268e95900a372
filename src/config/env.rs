use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerHost,
    ServerPort,
    TmdbApiKey,
    TmdbBaseUrl,
    TmdbImageBaseUrl,
    TmdbLanguage,
    TmdbTimeoutSecs,
    CertificationRegions,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerHost => "APP_HOST",
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::TmdbApiKey => "TMDB_API_KEY",
            EnvKey::TmdbBaseUrl => "TMDB_BASE_URL",
            EnvKey::TmdbImageBaseUrl => "TMDB_IMAGE_BASE_URL",
            EnvKey::TmdbLanguage => "TMDB_LANGUAGE",
            EnvKey::TmdbTimeoutSecs => "TMDB_TIMEOUT_SECS",
            EnvKey::CertificationRegions => "CERTIFICATION_REGIONS",
        }
    }
}

/// Reads a variable, treating a blank value the same as an unset one.
pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str()).and_then(|val| {
        if val.trim().is_empty() {
            Err(env::VarError::NotPresent)
        } else {
            Ok(val)
        }
    })
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    get(key).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Comma separated list, empty entries dropped.
pub fn get_list(key: EnvKey, default: &[&str]) -> Vec<String> {
    match get(key) {
        Ok(val) => val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}
