use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub music_root: PathBuf,
    pub google_service_account_path: PathBuf,
    pub drive_access_token: Option<String>,
    pub drive_api_base_url: String,
    pub contest_rps: u32,
    pub cors_origins: Vec<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            music_root: env::var("MUSIC_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./music")),
            google_service_account_path: env::var("GOOGLE_SERVICE_ACCOUNT_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config/google-sa.json")),
            drive_access_token: env::var("DRIVE_ACCESS_TOKEN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            drive_api_base_url: env::var("DRIVE_API_BASE_URL")
                .unwrap_or_else(|_| "https://www.googleapis.com/drive/v3".to_string()),
            contest_rps: get_env_parse_or("CONTEST_RPS", 20)?,
            cors_origins: env::var("CORS_ORIGINS")
                .map(|raw| split_list(&raw))
                .unwrap_or_default(),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::split_list;

    #[test]
    fn split_list_drops_blank_entries() {
        assert_eq!(
            split_list(" http://a.test, ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(split_list("").is_empty());
    }
}
