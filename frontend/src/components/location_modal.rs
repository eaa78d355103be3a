use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::autocomplete::Autocomplete;
use crate::hooks::use_location_form::use_location_form;
use crate::hooks::use_store_value::use_store_value;
use crate::services::api::ApiClient;
use crate::state::global_state::GlobalState;
use crate::state::location_form::corrected_radius_text;

#[derive(Properties, PartialEq)]
pub struct LocationModalProps {
    pub globals: GlobalState,
    pub api_client: ApiClient,
}

/// Dialog for picking the search position and radius
///
/// Visibility follows the shared `location_modal` flag. Submitting stores the
/// position and radius in the shared user data but leaves the dialog open;
/// only Cancel hides it.
#[function_component(LocationModal)]
pub fn location_modal(props: &LocationModalProps) -> Html {
    let is_open = use_store_value(&props.globals.location_modal);
    let form = use_location_form(&props.globals, &props.api_client);
    let state = form.state;
    let actions = form.actions;

    let on_submit = {
        let on_submit = actions.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_search_radius_input = {
        let on_search_radius_change = actions.on_search_radius_change.clone();
        let current = state.search_radius;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let text = input.value();
            // An unchanged radius skips the re-render, so reset the field here
            if let Some(shown) = corrected_radius_text(&text, current) {
                input.set_value(&shown);
            }
            on_search_radius_change.emit(text);
        })
    };

    let on_cancel = {
        let on_cancel = actions.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    if !is_open {
        return html! {};
    }

    html! {
        <div class="location-modal-backdrop">
            <div class="location-modal">
                <div class="location-modal-content">
                    <form class="location-form" autocomplete="off" onsubmit={on_submit}>
                        <Autocomplete
                            label="Locations"
                            options={state.options.clone()}
                            open={state.open}
                            on_toggle={actions.on_dropdown_toggle.clone()}
                            on_text_change={actions.on_location_text.clone()}
                            on_input_change={actions.on_input_change.clone()}
                        />

                        <div class="location-coordinates">
                            <h3>{format!("Longitude: {}", state.longitude)}</h3>
                            <h3>{format!("Latitude: {}", state.latitude)}</h3>
                        </div>

                        <div class="form-group">
                            <label for="search-radius">{"Search Radius"}</label>
                            <input
                                id="search-radius"
                                type="text"
                                class="location-input"
                                value={state.search_radius.to_string()}
                                oninput={on_search_radius_input}
                                autofocus=true
                            />
                        </div>

                        <div class="location-modal-buttons">
                            <button type="submit" class="btn btn-primary">
                                {"Ok"}
                            </button>
                            <button type="button" class="btn btn-secondary" onclick={on_cancel}>
                                {"Cancel"}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
