use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub bind_host: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")?;
        let bind_host = env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Self { port, bind_host })
    }
}
