use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::export_service::ClubInfo;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub port: u16,

    /// Base of the analytics service, e.g. `http://localhost:8000/api/v1`.
    pub api_url: String,

    #[serde(default="default_club_name")]
    pub club_name: String,

    #[serde(default="default_home_venue")]
    pub home_venue: String,

    #[serde(default="default_platform_name")]
    pub platform_name: String,

    #[serde(default="default_request_timeout_s")]
    pub request_timeout_s: u64,
}

fn default_club_name() -> String {
    "Gil Vicente FC".to_string()
}

fn default_home_venue() -> String {
    "Estádio Cidade de Barcelos".to_string()
}

fn default_platform_name() -> String {
    "Tactical Intelligence Platform".to_string()
}

fn default_request_timeout_s() -> u64 {
    30
}

impl Config {
    pub fn club_info(&self) -> ClubInfo {
        ClubInfo {
            name: self.club_name.clone(),
            home_venue: self.home_venue.clone(),
            platform_name: self.platform_name.clone(),
        }
    }
}

pub fn parse_config(data: &str) -> anyhow::Result<Config> {
    let config: Config = serde_json::from_str(data)?;
    Ok(config)
}

pub fn get_config() -> anyhow::Result<Config> {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let data = fs::read_to_string(&path)
        .with_context(|| format!("Unable to read config at {path}"))?;
    let mut result = parse_config(&data)
        .with_context(|| format!("Could not parse JSON at {path}!"))?;
    if let Ok(api_url) = std::env::var("ANALYTICS_API_URL") {
        result.api_url = api_url;
        println!("[CONFIG] ANALYTICS_API_URL {}", result.api_url);
    }
    println!("[CONFIG] {:?}", result);
    Ok(result)
}
