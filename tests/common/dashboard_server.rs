use std::process::{Command, Child};

use assert_cmd::prelude::CommandCargoExt;
use reqwest::Response;
use tactics_dashboard_rs::config_handler::Config;

pub struct DashboardServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for DashboardServer {
    fn drop(&mut self) {
        if let Some(child) = self.child_process.as_mut() {
            child.kill().expect("Should kill");
        }
    }
}

impl DashboardServer {
    pub fn new(port: u16) -> DashboardServer {
        DashboardServer { port, child_process: None }
    }

    pub async fn start(&mut self, path: &str, api_url: &str) {
        let config = Config {
            port: self.port,
            api_url: api_url.to_string(),
            club_name: "Gil Vicente FC".to_string(),
            home_venue: "Estádio Cidade de Barcelos".to_string(),
            platform_name: "Tactical Intelligence Platform".to_string(),
            request_timeout_s: 5,
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("tactics-dashboard-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .env_remove("ANALYTICS_API_URL")
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
        self.wait_until_up().await;
    }

    async fn wait_until_up(&self) {
        let mut nr_loops = 0;
        while reqwest::get(self.url("/")).await.is_err() {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            nr_loops += 1;
            if nr_loops > 100 {
                panic!("dashboard did not start");
            }
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://localhost:{}{}", self.port, path)
    }

    pub async fn get(&self, path: &str) -> Result<Response, Box<dyn std::error::Error>> {
        Ok(reqwest::get(self.url(path)).await?)
    }
}
