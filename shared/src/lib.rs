use serde::{Deserialize, Serialize};

/// A postcode area returned by the location search endpoint
///
/// Field names on the wire are PascalCase and must match the backend exactly,
/// including the `SquareKM` spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostCodeLocation {
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Human-readable label shown in the suggestion list (e.g. "10115 Berlin")
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "PostCode")]
    pub post_code: u32,
    /// Area of the postcode region in square kilometres
    #[serde(rename = "SquareKM")]
    pub square_km: f64,
    #[serde(rename = "Population")]
    pub population: u64,
}

/// The user's search preferences, shared by every view of the client
///
/// The location dialog only edits the position and radius; the target prices
/// belong to other views and must be carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserDataState {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in kilometres
    pub search_radius: f64,
    pub target_diesel: f64,
    pub target_e10: f64,
    pub target_e5: f64,
}

impl UserDataState {
    /// Replace position and radius, keeping the target prices of `self`
    pub fn with_location(&self, longitude: f64, latitude: f64, search_radius: f64) -> Self {
        Self {
            latitude,
            longitude,
            search_radius,
            target_diesel: self.target_diesel,
            target_e10: self.target_e10,
            target_e5: self.target_e5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_code_location_reads_backend_field_names() {
        let body = json!([{
            "Longitude": 13.3846,
            "Latitude": 52.5311,
            "Label": "10115 Berlin",
            "PostCode": 10115,
            "SquareKM": 2.4,
            "Population": 19843
        }]);

        let locations: Vec<PostCodeLocation> = serde_json::from_value(body).unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].label, "10115 Berlin");
        assert_eq!(locations[0].post_code, 10115);
        assert_eq!(locations[0].square_km, 2.4);
        assert_eq!(locations[0].population, 19843);
    }

    #[test]
    fn test_post_code_location_rejects_lowercase_fields() {
        let body = json!({
            "longitude": 1.0,
            "latitude": 2.0,
            "label": "x",
            "post_code": 1,
            "square_km": 1.0,
            "population": 1
        });

        assert!(serde_json::from_value::<PostCodeLocation>(body).is_err());
    }

    #[test]
    fn test_user_data_state_serializes_pascal_case() {
        let state = UserDataState {
            latitude: 51.5,
            longitude: -0.1,
            search_radius: 5.0,
            target_diesel: 1.4,
            target_e10: 1.3,
            target_e5: 1.35,
        };

        let value = serde_json::to_value(state).unwrap();
        assert_eq!(value["Latitude"], 51.5);
        assert_eq!(value["Longitude"], -0.1);
        assert_eq!(value["SearchRadius"], 5.0);
        assert_eq!(value["TargetDiesel"], 1.4);
        assert_eq!(value["TargetE10"], 1.3);
        assert_eq!(value["TargetE5"], 1.35);
    }

    #[test]
    fn test_with_location_keeps_target_prices() {
        let state = UserDataState {
            latitude: 51.5,
            longitude: -0.1,
            search_radius: 5.0,
            target_diesel: 1.4,
            target_e10: 1.3,
            target_e5: 1.35,
        };

        let updated = state.with_location(-0.14, 51.50, 12.5);
        assert_eq!(updated.longitude, -0.14);
        assert_eq!(updated.latitude, 51.50);
        assert_eq!(updated.search_radius, 12.5);
        assert_eq!(updated.target_diesel, 1.4);
        assert_eq!(updated.target_e10, 1.3);
        assert_eq!(updated.target_e5, 1.35);
    }
}
