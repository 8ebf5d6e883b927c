use async_trait::async_trait;
use ecotrack_core::error::{EcotrackError, Result};
use ecotrack_core::models::{AirQualityReading, Coordinate};
use ecotrack_core::ports::AirQualitySource;
use serde::Deserialize;

/// Hourly variables requested from the service
pub const HOURLY_FIELDS: &str =
    "pm2_5,pm10,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone,us_aqi";

/// Open-Meteo air-quality client
pub struct OpenMeteoClient {
    /// Endpoint URL (e.g., "https://air-quality-api.open-meteo.com/v1/air-quality")
    endpoint: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OpenMeteoClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self { endpoint: endpoint.into(), client }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request URL for a coordinate
    pub fn request_url(&self, coordinate: Coordinate) -> Result<reqwest::Url> {
        let latitude = coordinate.latitude.to_string();
        let longitude = coordinate.longitude.to_string();

        reqwest::Url::parse_with_params(
            &self.endpoint,
            &[
                ("latitude", latitude.as_str()),
                ("longitude", longitude.as_str()),
                ("hourly", HOURLY_FIELDS),
            ],
        )
        .map_err(|e| EcotrackError::ConfigInvalid {
            key: "aqi_endpoint".to_string(),
            reason: format!("'{}' is not a valid URL: {}", self.endpoint, e),
        })
    }
}

#[async_trait]
impl AirQualitySource for OpenMeteoClient {
    async fn fetch_latest(&self, coordinate: Coordinate) -> Result<AirQualityReading> {
        let url = self.request_url(coordinate)?;
        tracing::debug!(url = %url, "Requesting air quality");

        let response = self.client.get(url).send().await.map_err(|e| EcotrackError::Fetch {
            reason: format!("Failed to reach air quality service: {}", e),
        })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(EcotrackError::Fetch {
                reason: format!("Failed to fetch air quality ({})", status),
            });
        }

        let body: OpenMeteoResponse = response.json().await.map_err(|e| EcotrackError::Fetch {
            reason: format!("Failed to parse air quality response: {}", e),
        })?;

        Ok(latest_reading(coordinate, &body))
    }
}

/// Response body of the air-quality endpoint; only the hourly block is used
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenMeteoResponse {
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
}

/// Parallel hourly arrays keyed by variable name
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySeries {
    #[serde(default)]
    pub time: Vec<String>,
    pub us_aqi: Option<Vec<Option<f64>>>,
    pub pm2_5: Option<Vec<Option<f64>>>,
    pub pm10: Option<Vec<Option<f64>>>,
    pub ozone: Option<Vec<Option<f64>>>,
    pub nitrogen_dioxide: Option<Vec<Option<f64>>>,
    pub carbon_monoxide: Option<Vec<Option<f64>>>,
    pub sulphur_dioxide: Option<Vec<Option<f64>>>,
}

fn value_at(series: &Option<Vec<Option<f64>>>, index: usize) -> Option<f64> {
    series.as_ref().and_then(|values| values.get(index).copied().flatten())
}

/// Select the sample at the last index of the time series.
///
/// A missing `hourly` block or an empty time series gives an all-absent reading.
pub fn latest_reading(coordinate: Coordinate, response: &OpenMeteoResponse) -> AirQualityReading {
    let Some(hourly) = response.hourly.as_ref() else {
        return AirQualityReading::empty(coordinate);
    };
    let Some(index) = hourly.time.len().checked_sub(1) else {
        return AirQualityReading::empty(coordinate);
    };

    AirQualityReading {
        coordinate,
        time: hourly.time.get(index).cloned(),
        aqi: value_at(&hourly.us_aqi, index),
        pm2_5: value_at(&hourly.pm2_5, index),
        pm10: value_at(&hourly.pm10, index),
        ozone: value_at(&hourly.ozone, index),
        nitrogen_dioxide: value_at(&hourly.nitrogen_dioxide, index),
        carbon_monoxide: value_at(&hourly.carbon_monoxide, index),
        sulphur_dioxide: value_at(&hourly.sulphur_dioxide, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecotrack_core::config::DEFAULT_AQI_ENDPOINT;

    fn parse(json: &str) -> OpenMeteoResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_url_carries_coordinate_and_fields() {
        let client = OpenMeteoClient::new(DEFAULT_AQI_ENDPOINT);
        let url = client.request_url(Coordinate::new(28.6139, 77.209)).unwrap();

        let pairs: Vec<(String, String)> =
            url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
        assert!(pairs.contains(&("latitude".to_string(), "28.6139".to_string())));
        assert!(pairs.contains(&("longitude".to_string(), "77.209".to_string())));
        assert!(pairs.contains(&("hourly".to_string(), HOURLY_FIELDS.to_string())));
        assert_eq!(url.host_str(), Some("air-quality-api.open-meteo.com"));
    }

    #[test]
    fn test_invalid_endpoint_is_config_error() {
        let client = OpenMeteoClient::new("not a url");
        let err = client.request_url(Coordinate::new(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, EcotrackError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_latest_reading_uses_last_index() {
        let response = parse(
            r#"{"hourly": {
                "time": ["2025-03-01T00:00", "2025-03-01T01:00"],
                "us_aqi": [40, 152],
                "pm2_5": [10.5, 61.2],
                "pm10": [20.0, 80.0],
                "ozone": [30.0, 31.0],
                "nitrogen_dioxide": [12.0, 14.5],
                "carbon_monoxide": [200.0, 230.0],
                "sulphur_dioxide": [4.0, 5.0]
            }}"#,
        );

        let reading = latest_reading(Coordinate::new(1.0, 2.0), &response);
        assert_eq!(reading.time.as_deref(), Some("2025-03-01T01:00"));
        assert_eq!(reading.aqi, Some(152.0));
        assert_eq!(reading.pm2_5, Some(61.2));
        assert_eq!(reading.sulphur_dioxide, Some(5.0));
    }

    #[test]
    fn test_missing_series_and_nulls_are_absent() {
        let response = parse(
            r#"{"hourly": {
                "time": ["2025-03-01T00:00"],
                "us_aqi": [null],
                "pm10": [18.0]
            }}"#,
        );

        let reading = latest_reading(Coordinate::new(0.0, 0.0), &response);
        assert_eq!(reading.aqi, None);
        assert_eq!(reading.pm2_5, None);
        assert_eq!(reading.pm10, Some(18.0));
    }

    #[test]
    fn test_short_series_is_absent_at_last_index() {
        let response = parse(
            r#"{"hourly": {"time": ["a", "b", "c"], "us_aqi": [10, 20]}}"#,
        );
        assert_eq!(latest_reading(Coordinate::new(0.0, 0.0), &response).aqi, None);
    }

    #[test]
    fn test_empty_time_series_gives_empty_reading() {
        let here = Coordinate::new(5.0, 5.0);
        let empty = parse(r#"{"hourly": {"time": [], "us_aqi": []}}"#);
        assert_eq!(latest_reading(here, &empty), AirQualityReading::empty(here));

        let missing = parse(r#"{"latitude": 5.0, "longitude": 5.0}"#);
        assert_eq!(latest_reading(here, &missing), AirQualityReading::empty(here));
    }
}
