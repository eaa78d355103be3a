//! # Location Form State
//!
//! Local state of the location dialog, expressed as a reducer so that every
//! user interaction is a plain state transition.
//!
//! ## Responsibilities:
//! - Suggestion dropdown visibility and the current suggestion list
//! - Longitude, latitude and search radius being edited
//! - Sequencing of suggestion queries, so only the answer to the most
//!   recently issued query is ever shown
//!
//! Shared state (modal flag, token, user data) is not touched here; the
//! `use_location_form` hook performs those writes.

use std::rc::Rc;

use log::debug;
use shared::{PostCodeLocation, UserDataState};
use yew::functional::Reducible;

/// Identifies one suggestion query; later queries get larger tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct QueryTicket(u64);

/// Hands out query tickets in issue order
#[derive(Debug, Default)]
pub struct QuerySequence {
    last_issued: u64,
}

impl QuerySequence {
    pub fn next_ticket(&mut self) -> QueryTicket {
        self.last_issued += 1;
        QueryTicket(self.last_issued)
    }

    /// Turn the current text of the location field into a query
    pub fn begin(&mut self, text: &str) -> LocationQuery {
        let ticket = self.next_ticket();
        if text.is_empty() {
            LocationQuery::Clear(ticket)
        } else {
            LocationQuery::Fetch {
                ticket,
                location: text.to_string(),
            }
        }
    }
}

/// What a change of the location text asks for
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Empty text: drop all suggestions, no request
    Clear(QueryTicket),
    /// Fetch suggestions matching `location`
    Fetch { ticket: QueryTicket, location: String },
}

impl LocationQuery {
    pub fn ticket(&self) -> QueryTicket {
        match self {
            LocationQuery::Clear(ticket) => *ticket,
            LocationQuery::Fetch { ticket, .. } => *ticket,
        }
    }

    /// The action to dispatch as soon as the query is issued
    pub fn issued_action(&self) -> LocationFormAction {
        match self {
            LocationQuery::Clear(ticket) => LocationFormAction::QueryCleared(*ticket),
            LocationQuery::Fetch { ticket, .. } => LocationFormAction::QueryIssued(*ticket),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LocationFormAction {
    /// The suggestion dropdown was opened or closed
    DropdownToggled(bool),
    /// Re-seed position and radius from the shared user data
    Resync(UserDataState),
    QueryIssued(QueryTicket),
    QueryCleared(QueryTicket),
    SuggestionsLoaded {
        ticket: QueryTicket,
        options: Vec<PostCodeLocation>,
    },
    /// The autocomplete input changed, by typing or by picking a suggestion
    InputChanged(String),
    SearchRadiusChanged(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationFormState {
    /// Suggestion dropdown visibility
    pub open: bool,
    pub search_radius: f64,
    pub longitude: f64,
    pub latitude: f64,
    pub options: Vec<PostCodeLocation>,
    latest_query: QueryTicket,
}

impl LocationFormState {
    pub fn apply(&mut self, action: LocationFormAction) {
        match action {
            LocationFormAction::DropdownToggled(open) => {
                self.open = open;
            }
            LocationFormAction::Resync(user_data) => {
                if !self.open {
                    self.options.clear();
                }
                self.longitude = user_data.longitude;
                self.latitude = user_data.latitude;
                self.search_radius = user_data.search_radius;
            }
            LocationFormAction::QueryIssued(ticket) => {
                self.latest_query = self.latest_query.max(ticket);
            }
            LocationFormAction::QueryCleared(ticket) => {
                self.latest_query = self.latest_query.max(ticket);
                self.options.clear();
            }
            LocationFormAction::SuggestionsLoaded { ticket, options } => {
                if ticket == self.latest_query {
                    self.options = options;
                } else {
                    debug!(
                        "Dropping {} suggestions for superseded query {:?} (latest {:?})",
                        options.len(),
                        ticket,
                        self.latest_query
                    );
                }
            }
            LocationFormAction::InputChanged(value) => {
                if let Some(option) = self.options.iter().find(|option| option.label == value) {
                    self.longitude = option.longitude;
                    self.latitude = option.latitude;
                }
            }
            LocationFormAction::SearchRadiusChanged(text) => {
                if let Some(radius) = parse_float_prefix(&text) {
                    self.search_radius = radius;
                }
            }
            LocationFormAction::Cancelled => {
                self.search_radius = 0.0;
                self.longitude = 0.0;
                self.latitude = 0.0;
            }
        }
    }

    /// The record to store on submit, built on top of `current`
    pub fn submission(&self, current: &UserDataState) -> UserDataState {
        current.with_location(self.longitude, self.latitude, self.search_radius)
    }
}

impl Reducible for LocationFormState {
    type Action = LocationFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = Rc::unwrap_or_clone(self);
        next.apply(action);
        Rc::new(next)
    }
}

/// Text the radius field should show instead of `text`, when `text` is not a
/// number and the stored radius `current` stays as it is
pub fn corrected_radius_text(text: &str, current: f64) -> Option<String> {
    match parse_float_prefix(text) {
        Some(_) => None,
        None => Some(current.to_string()),
    }
}

/// Parse the leading number of `text` the way browsers' `parseFloat` does:
/// leading whitespace is skipped, trailing garbage is ignored, and
/// `Infinity` is accepted. Returns `None` when no number starts the text.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digits += end - frac_start;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end].parse().ok()
}
