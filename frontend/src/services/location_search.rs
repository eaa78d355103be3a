use async_trait::async_trait;
use log::{debug, error};
use shared::PostCodeLocation;

use crate::services::api::{ApiClient, ApiError};
use crate::state::location_form::{LocationFormAction, LocationQuery};

/// Source of location suggestions for the autocomplete field
#[async_trait(?Send)]
pub trait LocationSearch {
    async fn find_locations(&self, location: &str, jwt_token: &str) -> Result<Vec<PostCodeLocation>, ApiError>;
}

#[async_trait(?Send)]
impl LocationSearch for ApiClient {
    async fn find_locations(&self, location: &str, jwt_token: &str) -> Result<Vec<PostCodeLocation>, ApiError> {
        self.get_locations(location, jwt_token).await
    }
}

/// Run `query` against `search` and return the action that applies its
/// result. A cleared query never touches the network. Failures are logged
/// and leave the current suggestions as they are.
pub async fn resolve_query<S>(search: &S, query: LocationQuery, jwt_token: &str) -> Option<LocationFormAction>
where
    S: LocationSearch + ?Sized,
{
    let (ticket, location) = match query {
        LocationQuery::Clear(_) => return None,
        LocationQuery::Fetch { ticket, location } => (ticket, location),
    };

    match search.find_locations(&location, jwt_token).await {
        Ok(options) => {
            debug!("Fetched {} locations for {:?}", options.len(), location);
            Some(LocationFormAction::SuggestionsLoaded { ticket, options })
        }
        Err(e) => {
            error!("Failed to fetch locations for {:?}: {}", location, e);
            None
        }
    }
}
