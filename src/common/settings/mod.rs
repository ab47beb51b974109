use std::env;

use crate::settings::types::{
    ApplicationSettings, DatabaseSettings, Environment, GeocoderProvider, GeocoderSettings,
    SecretSettings, Settings, UploadSettings,
};

pub mod types;

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name)
        .map_err(|e| format!("Failed to fetch env file: {}", e.to_string()))?;

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => Ok(get_test_settings()),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => return Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

/// Self-contained settings for the test suite: in-memory sqlite, a fixed geocoder
/// and a throwaway token key. Nothing is read from the environment.
pub fn get_test_settings() -> Settings {
    let b = Settings::base_settings();
    Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            base_url: "http://127.0.0.1:5000".to_string(),
            ..b.application
        },
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            ..b.database
        },
        debug: true,
        secret: SecretSettings {
            secret_key: "testing-secret-key-of-32-bytes!!".to_string(),
            implicit_assertion: "tablelink-testing".to_string(),
            token_expiration: 30,
        },
        geocoder: GeocoderSettings {
            provider: GeocoderProvider::Fixed,
            fixed_latitude: 42.3601,
            fixed_longitude: -71.0589,
            ..b.geocoder
        },
        upload: UploadSettings {
            path: env::temp_dir()
                .join("tablelink-uploads")
                .to_string_lossy()
                .into_owned(),
            max_file_bytes: 1024,
        },
    }
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            base_url: "http://127.0.0.1:5000".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "https".to_string(),
            host: "0.0.0.0".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            base_url: env::var("APP_APPLICATION__BASE_URL").unwrap_or(s.application.base_url),
            port: match env::var("APP_APPLICATION__PORT") {
                Ok(port) => port.parse::<u16>().map_err(|e| e.to_string())?,
                Err(_) => s.application.port,
            },
            ..s.application
        },
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
            acquire_timeout_seconds: match env::var("DATABASE_ACQUIRE_TIMEOUT_SECONDS") {
                Ok(seconds) => seconds.parse::<u64>().map_err(|e| e.to_string())?,
                Err(_) => s.database.acquire_timeout_seconds,
            },
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        secret: SecretSettings {
            secret_key: get_env_var("APP_SECRET__SECRET_KEY")?,
            implicit_assertion: get_env_var("APP_SECRET__IMPLICIT_ASSERTION")?,
            token_expiration: match env::var("APP_SECRET__TOKEN_EXPIRATION_MINUTES") {
                Ok(minutes) => minutes.parse::<i64>().map_err(|e| e.to_string())?,
                Err(_) => s.secret.token_expiration,
            },
        },
        geocoder: GeocoderSettings {
            provider: match env::var("APP_GEOCODER__PROVIDER") {
                Ok(provider) => GeocoderProvider::try_from(provider)?,
                Err(_) => s.geocoder.provider,
            },
            api_key: env::var("APP_GEOCODER__API_KEY").unwrap_or(s.geocoder.api_key),
            ..s.geocoder
        },
        upload: UploadSettings {
            path: env::var("APP_UPLOAD__PATH").unwrap_or(s.upload.path),
            max_file_bytes: match env::var("APP_UPLOAD__MAX_FILE_BYTES") {
                Ok(bytes) => bytes.parse::<usize>().map_err(|e| e.to_string())?,
                Err(_) => s.upload.max_file_bytes,
            },
        },
        ..s
    })
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| format!("{}: {}", key, e))
}
