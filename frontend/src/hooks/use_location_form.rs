use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::location_search::{resolve_query, LocationSearch};
use crate::state::global_state::GlobalState;
use crate::state::location_form::{LocationFormAction, LocationFormState, LocationQuery, QuerySequence};

pub struct UseLocationFormResult {
    pub state: LocationFormState,
    pub actions: UseLocationFormActions,
}

#[derive(Clone, PartialEq)]
pub struct UseLocationFormActions {
    /// Text typed into the location field; triggers a suggestion query
    pub on_location_text: Callback<String>,
    /// Any change of the location input, typed or picked from the list
    pub on_input_change: Callback<String>,
    pub on_dropdown_toggle: Callback<bool>,
    pub on_search_radius_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Local state and handlers of the location dialog
#[hook]
pub fn use_location_form<S: LocationSearch + Clone + 'static>(globals: &GlobalState, search: &S) -> UseLocationFormResult {
    let form = use_reducer_eq(LocationFormState::default);
    let sequence = use_mut_ref(QuerySequence::default);

    // Re-seed from shared user data whenever the dropdown opens or closes
    {
        let dispatcher = form.dispatcher();
        let user_data = globals.user_data.clone();
        use_effect_with(form.open, move |open| {
            debug!("Dropdown open={}, re-seeding from shared user data", open);
            dispatcher.dispatch(LocationFormAction::Resync(user_data.get()));
            || ()
        });
    }

    let on_location_text = {
        let dispatcher = form.dispatcher();
        let sequence = sequence.clone();
        let jwt_token = globals.jwt_token.clone();
        let search = search.clone();

        Callback::from(move |text: String| {
            let query = sequence.borrow_mut().begin(&text);
            debug!("Location query {:?} for {:?}", query.ticket(), text);
            dispatcher.dispatch(query.issued_action());

            if let LocationQuery::Fetch { .. } = query {
                let dispatcher = dispatcher.clone();
                let search = search.clone();
                let jwt_token = jwt_token.get();

                spawn_local(async move {
                    if let Some(action) = resolve_query(&search, query, &jwt_token).await {
                        dispatcher.dispatch(action);
                    }
                });
            }
        })
    };

    let on_input_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |value: String| {
            dispatcher.dispatch(LocationFormAction::InputChanged(value));
        })
    };

    let on_dropdown_toggle = {
        let dispatcher = form.dispatcher();
        Callback::from(move |open: bool| {
            dispatcher.dispatch(LocationFormAction::DropdownToggled(open));
        })
    };

    let on_search_radius_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |text: String| {
            dispatcher.dispatch(LocationFormAction::SearchRadiusChanged(text));
        })
    };

    let on_submit = {
        let form = form.clone();
        let globals = globals.clone();
        Callback::from(move |_| {
            globals.submit_location(&form);
        })
    };

    let on_cancel = {
        let dispatcher = form.dispatcher();
        let globals = globals.clone();
        Callback::from(move |_| {
            globals.cancel_location(|action| dispatcher.dispatch(action));
        })
    };

    let state = (*form).clone();

    let actions = UseLocationFormActions {
        on_location_text,
        on_input_change,
        on_dropdown_toggle,
        on_search_radius_change,
        on_submit,
        on_cancel,
    };

    UseLocationFormResult { state, actions }
}
