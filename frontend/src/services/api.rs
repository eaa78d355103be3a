use gloo::net::http::{Request, RequestBuilder};
use shared::PostCodeLocation;
use thiserror::Error;

/// Failures talking to the backend
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client that talks to the origin the app was served from
    pub fn new() -> Self {
        Self::with_base_url(String::new())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn location_url(&self) -> String {
        format!("{}/appuser/location", self.base_url)
    }

    /// GET request for locations matching `location`, not yet sent
    pub fn location_request(&self, location: &str, jwt_token: &str) -> RequestBuilder {
        let mut request = Request::get(&self.location_url()).query(location_query(location));
        for (name, value) in location_headers(jwt_token) {
            request = request.header(name, &value);
        }
        request
    }

    /// Search postcode locations whose label contains `location`
    pub async fn get_locations(&self, location: &str, jwt_token: &str) -> Result<Vec<PostCodeLocation>, ApiError> {
        let response = self
            .location_request(location, jwt_token)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                body,
            });
        }

        decode_locations(&body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Query parameters of a location search; the text is sent as typed
pub fn location_query(location: &str) -> [(&'static str, &str); 1] {
    [("location", location)]
}

/// Headers sent with every location search
pub fn location_headers(jwt_token: &str) -> [(&'static str, String); 2] {
    [
        ("Content-Type", "application/json".to_string()),
        ("Authorization", bearer(jwt_token)),
    ]
}

/// Value of the `Authorization` header for a login token
pub fn bearer(jwt_token: &str) -> String {
    format!("Bearer {}", jwt_token)
}

fn decode_locations(body: &str) -> Result<Vec<PostCodeLocation>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_url_defaults_to_same_origin() {
        assert_eq!(ApiClient::new().location_url(), "/appuser/location");
    }

    #[test]
    fn test_location_url_with_base_url() {
        let client = ApiClient::with_base_url("http://localhost:3000/".to_string());
        assert_eq!(client.location_url(), "http://localhost:3000/appuser/location");
    }

    #[test]
    fn test_bearer_uses_token_verbatim() {
        assert_eq!(bearer("abc.def.ghi"), "Bearer abc.def.ghi");
        assert_eq!(bearer(""), "Bearer ");
    }

    #[test]
    fn test_location_query_keeps_text_untouched() {
        assert_eq!(location_query(" SW1A 1AA"), [("location", " SW1A 1AA")]);
    }

    #[test]
    fn test_location_headers() {
        let headers = location_headers("jwt-123");
        assert_eq!(headers[0], ("Content-Type", "application/json".to_string()));
        assert_eq!(headers[1], ("Authorization", "Bearer jwt-123".to_string()));
    }

    #[test]
    fn test_decode_locations() {
        let body = r#"[
            {"Longitude": -0.14, "Latitude": 51.5, "Label": "SW1A 1AA", "PostCode": 1, "SquareKM": 0.1, "Population": 50},
            {"Longitude": 13.38, "Latitude": 52.53, "Label": "10115 Berlin", "PostCode": 10115, "SquareKM": 2.4, "Population": 19843}
        ]"#;

        let locations = decode_locations(body).unwrap();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].label, "SW1A 1AA");
        assert_eq!(locations[1].post_code, 10115);
    }

    #[test]
    fn test_decode_locations_rejects_non_array() {
        assert!(matches!(decode_locations(r#"{"message": "Invalid"}"#), Err(ApiError::Decode(_))));
        assert!(matches!(decode_locations("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_error_messages() {
        let error = ApiError::Status {
            status: 401,
            body: "Unauthorized".to_string(),
        };
        assert_eq!(error.to_string(), "Server error 401: Unauthorized");
        assert_eq!(ApiError::Network("offline".to_string()).to_string(), "Network error: offline");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_location_request_carries_query_and_headers() {
        let client = ApiClient::with_base_url("http://localhost:3000".to_string());
        let request = client.location_request("SW1A 1AA", "jwt-123").build().unwrap();

        assert_eq!(request.url(), "http://localhost:3000/appuser/location?location=SW1A+1AA");
        assert_eq!(request.headers().get("Authorization"), Some("Bearer jwt-123".to_string()));
        assert_eq!(request.headers().get("Content-Type"), Some("application/json".to_string()));
    }
}
