pub mod use_location_form;
pub mod use_store_value;
