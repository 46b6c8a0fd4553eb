use dotenvy::dotenv;
use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:8001/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn load() -> Self {
        dotenv().ok();
        Self {
            base_url: env::var("HEALTHTALK_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout_secs: parse_timeout(env::var("HEALTHTALK_TIMEOUT_SECS").ok()),
        }
    }
}

fn parse_timeout(value: Option<String>) -> u64 {
    value
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}
