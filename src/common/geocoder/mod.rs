use std::future::Future;

use serde::Deserialize;
use tracing::{event, Level};

use crate::settings::types::{GeocoderProvider, GeocoderSettings};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeocodedLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum GeocodeError {
    #[error("no location matches {0:?}")]
    NotFound(String),
    #[error("geocoding provider failed: {0}")]
    Provider(#[from] reqwest::Error),
}

pub trait GeocodeAddress {
    fn geocode(
        &self,
        address: &str,
    ) -> impl Future<Output = Result<GeocodedLocation, GeocodeError>>;
}

#[derive(Clone)]
pub struct Geocoder {
    client: reqwest::Client,
    settings: GeocoderSettings,
}

impl Geocoder {
    pub fn new(settings: &GeocoderSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings: settings.clone(),
        }
    }

    fn fixed_location(&self, address: &str) -> GeocodedLocation {
        GeocodedLocation {
            latitude: self.settings.fixed_latitude,
            longitude: self.settings.fixed_longitude,
            formatted_address: Some(address.trim().to_string()),
            ..Default::default()
        }
    }

    async fn ask_mapquest(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        let response: MapQuestResponse = self
            .client
            .get(&self.settings.base_url)
            .query(&[("key", self.settings.api_key.as_str()), ("location", address)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .results
            .into_iter()
            .flat_map(|result| result.locations)
            .next()
            .map(MapQuestLocation::into_geocoded)
            .ok_or_else(|| GeocodeError::NotFound(address.to_string()))
    }
}

impl GeocodeAddress for Geocoder {
    #[tracing::instrument(name = "Geocoding an address", skip(self))]
    async fn geocode(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        match self.settings.provider {
            GeocoderProvider::Fixed => Ok(self.fixed_location(address)),
            GeocoderProvider::MapQuest => self.ask_mapquest(address).await.map_err(|e| {
                event!(target: "backend", Level::WARN, "Geocoding failed: {}", e);
                e
            }),
        }
    }
}

#[derive(Deserialize)]
struct MapQuestResponse {
    #[serde(default)]
    results: Vec<MapQuestResult>,
}

#[derive(Deserialize)]
struct MapQuestResult {
    #[serde(default)]
    locations: Vec<MapQuestLocation>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapQuestLocation {
    street: Option<String>,
    /// City.
    admin_area5: Option<String>,
    /// State code.
    admin_area3: Option<String>,
    /// Country code.
    admin_area1: Option<String>,
    postal_code: Option<String>,
    lat_lng: MapQuestLatLng,
}

#[derive(Deserialize)]
struct MapQuestLatLng {
    lat: f64,
    lng: f64,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl MapQuestLocation {
    fn into_geocoded(self) -> GeocodedLocation {
        let street = non_empty(self.street);
        let city = non_empty(self.admin_area5);
        let county = non_empty(self.admin_area3);
        let postal_code = non_empty(self.postal_code);
        let country = non_empty(self.admin_area1);

        let region = [county.clone(), postal_code.clone()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        let parts: Vec<String> = [street.clone(), city.clone(), non_empty(Some(region)), country.clone()]
            .into_iter()
            .flatten()
            .collect();
        let formatted_address = match parts.is_empty() {
            true => None,
            false => Some(parts.join(", ")),
        };

        GeocodedLocation {
            latitude: self.lat_lng.lat,
            longitude: self.lat_lng.lng,
            formatted_address,
            street,
            city,
            county,
            postal_code,
            country,
        }
    }
}
