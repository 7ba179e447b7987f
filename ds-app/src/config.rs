use anyhow::Context;

const DEFAULT_MODEL: &str = "deepseek-chat";

/// Process configuration for the demo. The environment is read here once at
/// startup; the client itself never touches it.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // A missing .env file is fine; real env vars still apply.
        dotenvy::dotenv().ok();

        let api_key =
            std::env::var("DEEPSEEK_API_KEY").context("DEEPSEEK_API_KEY is not set")?;
        let model =
            std::env::var("DEEPSEEK_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self { api_key, model })
    }
}
