use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub static_dir: PathBuf,
    pub form_page: String,
    pub log_level: String,
    pub telegram_api_url: String,
    pub telegram: Option<TelegramConfig>,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host: IpAddr = var_or("HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid HOST: {e}"))?;

        let port: u16 = var_or("PORT", "5000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let max_body_size: usize = var_or("MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid MAX_BODY_SIZE: {e}"))?;

        let static_dir = PathBuf::from(var_or("STATIC_DIR", "."));
        let form_page = var_or("FORM_PAGE", "sinchon_project.html");
        let log_level = var_or("LOG_LEVEL", "info");

        let telegram_api_url = var_or("TELEGRAM_API_URL", "https://api.telegram.org")
            .trim_end_matches('/')
            .to_string();

        // Blank values count as unset, same as a missing variable.
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let telegram = match (non_blank("TELEGRAM_BOT_TOKEN"), non_blank("TELEGRAM_CHAT_ID")) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig { bot_token, chat_id }),
            _ => None,
        };

        Ok(Config {
            host,
            port,
            max_body_size,
            static_dir,
            form_page,
            log_level,
            telegram_api_url,
            telegram,
        })
    }

    pub fn telegram_configured(&self) -> bool {
        self.telegram.is_some()
    }
}
