pub mod global_state;
pub mod location_form;
pub mod store;
