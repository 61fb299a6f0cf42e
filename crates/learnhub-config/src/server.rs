use crate::env::{parsed_or, string_or};

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: string_or("HOST", "0.0.0.0"),
            port: parsed_or("PORT", 3000),
            log_dir: string_or("LOG_DIR", "storage/logs"),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
