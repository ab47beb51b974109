use serde::Deserialize;

#[derive(Deserialize, Clone, Default)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub debug: bool,
    pub secret: SecretSettings,
    pub geocoder: GeocoderSettings,
    pub upload: UploadSettings,
}

impl Settings {
    pub fn base_settings() -> Self {
        Self {
            application: ApplicationSettings {
                port: 5000,
                max_log_files: 14,
                ..Default::default()
            },
            database: DatabaseSettings {
                acquire_timeout_seconds: 5,
                ..Default::default()
            },
            secret: SecretSettings {
                token_expiration: 60 * 24 * 30,
                ..Default::default()
            },
            geocoder: GeocoderSettings {
                provider: GeocoderProvider::MapQuest,
                base_url: "https://www.mapquestapi.com/geocoding/v1/address".to_string(),
                ..Default::default()
            },
            upload: UploadSettings {
                path: "./public/uploads".to_string(),
                max_file_bytes: 1_000_000,
            },
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Clone, Default)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    /// Prefix of every generated short url, e.g. `https://tbl.ink`.
    pub base_url: String,
    pub protocol: String,
    pub max_log_files: usize,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct DatabaseSettings {
    pub url: String,
    pub acquire_timeout_seconds: u64,
}

#[derive(Deserialize, Clone, Default)]
pub struct SecretSettings {
    /// v4.local key material, exactly 32 bytes.
    pub secret_key: String,
    pub implicit_assertion: String,
    /// Minutes.
    pub token_expiration: i64,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum GeocoderProvider {
    #[default]
    MapQuest,
    /// Answers every lookup with the configured coordinates. Used by tests and offline development.
    Fixed,
}

impl TryFrom<String> for GeocoderProvider {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "mapquest" => Ok(Self::MapQuest),
            "fixed" => Ok(Self::Fixed),
            other => Err(format!("{} is not a supported geocoder provider.", other)),
        }
    }
}

#[derive(Deserialize, Clone, Default)]
pub struct GeocoderSettings {
    pub provider: GeocoderProvider,
    pub api_key: String,
    pub base_url: String,
    pub fixed_latitude: f64,
    pub fixed_longitude: f64,
}

#[derive(Deserialize, Clone, Default)]
pub struct UploadSettings {
    pub path: String,
    pub max_file_bytes: usize,
}

pub enum Environment {
    Testing,
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment.", other)),
        }
    }
}
