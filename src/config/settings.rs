pub struct StorageSettings {
    pub database_path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_path: resolve_database_path(),
        }
    }
}

fn resolve_database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| "tournament.db".to_string())
}

pub struct AppConfig {
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            storage: StorageSettings::default(),
        }
    }
}
