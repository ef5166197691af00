//! Router fixtures shared by the handler tests.

use std::sync::Arc;

use salvo::Service;
use tasuku_core::config::{
    AuthConfig, DatabaseConfig, LimitsConfig, LoggingConfig, ServerConfig, Settings,
};
use tasuku_service::task::InMemoryTaskStore;

use crate::app::router;

pub const BASE_URL: &str = "http://127.0.0.1:5800";
pub const PASSWORD: &str = "hunter2";

pub fn settings() -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 7540,
        },
        database: DatabaseConfig {
            url: "scheduler.db".to_string(),
            max_connections: 1,
        },
        limits: LimitsConfig {
            tasks_limit: 50,
            max_upload_size: 8 * 1024 * 1024,
        },
        auth: AuthConfig {
            password: String::new(),
            secret_key: String::new(),
            token_ttl_secs: 3600,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
    }
}

/// Settings with sign-in enabled for [`PASSWORD`].
pub fn settings_with_auth() -> Settings {
    let mut settings = settings();
    settings.auth.password = PASSWORD.to_string();
    settings.auth.secret_key = "test signing key".to_string();
    settings
}

pub fn service_with(settings: Settings) -> Service {
    Service::new(router(settings, Arc::new(InMemoryTaskStore::new())))
}

pub fn service() -> Service {
    service_with(settings())
}
