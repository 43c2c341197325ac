pub const DEFAULT_DATABASE_PATH: &str = "tournament.db";

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
    pub pool_size: u32,
    pub connect_timeout_secs: u64,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 4,
            connect_timeout_secs: 5,
        }
    }
}

impl StoreSettings {
    pub fn from_env() -> Self {
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        Self {
            database_path,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            store: StoreSettings::from_env(),
        }
    }

    /// Command-line path wins over the environment.
    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.store.database_path = path;
        }
        self
    }
}
