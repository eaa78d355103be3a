pub mod autocomplete;
pub mod location_modal;
