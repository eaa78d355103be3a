use log::info;
use shared::UserDataState;

use super::location_form::{LocationFormAction, LocationFormState};
use super::store::Store;

/// Client-side state shared between the app shell and its dialogs
///
/// Built once by the app root and handed to components as a prop. Each slot
/// is its own `Store`, so a component only re-renders for the slots it
/// subscribes to.
#[derive(Clone, PartialEq)]
pub struct GlobalState {
    /// Whether the location dialog is shown
    pub location_modal: Store<bool>,
    /// Bearer token issued at login; read-only for the dialogs
    pub jwt_token: Store<String>,
    pub user_data: Store<UserDataState>,
}

impl GlobalState {
    pub fn new(jwt_token: impl Into<String>, user_data: UserDataState) -> Self {
        Self {
            location_modal: Store::new(false),
            jwt_token: Store::new(jwt_token.into()),
            user_data: Store::new(user_data),
        }
    }

    pub fn open_location_modal(&self) {
        self.location_modal.set(true);
    }

    pub fn close_location_modal(&self) {
        self.location_modal.set(false);
    }

    /// Store a new position and radius, carrying the target prices over
    /// from the record as it is right now
    pub fn commit_location(&self, longitude: f64, latitude: f64, search_radius: f64) -> UserDataState {
        let current = self.user_data.get();
        let next = current.with_location(longitude, latitude, search_radius);
        info!(
            "Storing location: longitude={}, latitude={}, radius={}",
            longitude, latitude, search_radius
        );
        self.user_data.set(next);
        next
    }

    /// Submit the dialog: store the form's position and radius
    pub fn submit_location(&self, form: &LocationFormState) -> UserDataState {
        self.commit_location(form.longitude, form.latitude, form.search_radius)
    }

    /// Cancel the dialog: reset its local fields through `dispatch`, then hide it
    pub fn cancel_location(&self, dispatch: impl FnOnce(LocationFormAction)) {
        info!("Location dialog cancelled");
        dispatch(LocationFormAction::Cancelled);
        self.close_location_modal();
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new(String::new(), UserDataState::default())
    }
}
