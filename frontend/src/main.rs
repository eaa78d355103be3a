use log::info;
use shared::UserDataState;
use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;

use components::location_modal::LocationModal;
use hooks::use_store_value::use_store_value;
use services::api::ApiClient;
use services::config::AppConfig;
use state::global_state::GlobalState;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let globals = use_memo(props.config.clone(), |config| {
        let jwt_token = config.dev_jwt_token.clone().unwrap_or_default();
        GlobalState::new(jwt_token, UserDataState::default())
    });
    let api_client = use_memo(props.config.api_base_url.clone(), |base_url| {
        ApiClient::with_base_url(base_url.clone())
    });
    let user_data = use_store_value(&globals.user_data);

    let on_change_location = {
        let globals = globals.clone();
        Callback::from(move |_: MouseEvent| {
            globals.open_location_modal();
        })
    };

    html! {
        <div class="app">
            <header class="header">
                <h1>{"Fuel Price Finder"}</h1>
            </header>

            <main class="main">
                <section class="search-settings">
                    <h2>{"Search Area"}</h2>
                    <div class="search-settings-values">
                        <div>{format!("Longitude: {}", user_data.longitude)}</div>
                        <div>{format!("Latitude: {}", user_data.latitude)}</div>
                        <div>{format!("Search Radius: {} km", user_data.search_radius)}</div>
                    </div>
                    <button type="button" class="btn btn-primary" onclick={on_change_location}>
                        {"Change location"}
                    </button>
                </section>
            </main>

            <LocationModal globals={(*globals).clone()} api_client={(*api_client).clone()} />
        </div>
    }
}

fn main() {
    let config = AppConfig::from_env();
    services::logging::init(config.log_level);
    info!("Starting location picker, api base url {:?}", config.api_base_url);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
