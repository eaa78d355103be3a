use shared::PostCodeLocation;
use unicode_normalization::UnicodeNormalization;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AutocompleteProps {
    pub label: AttrValue,
    pub options: Vec<PostCodeLocation>,
    /// Whether the suggestion list is shown; owned by the parent
    pub open: bool,
    pub on_toggle: Callback<bool>,
    /// Raw text typed into the field
    pub on_text_change: Callback<String>,
    /// Every change of the input value, typed or picked
    pub on_input_change: Callback<String>,
}

/// Text field with a dropdown of location suggestions
#[function_component(Autocomplete)]
pub fn autocomplete(props: &AutocompleteProps) -> Html {
    let input_text = use_state(String::new);

    let on_input = {
        let input_text = input_text.clone();
        let on_text_change = props.on_text_change.clone();
        let on_input_change = props.on_input_change.clone();
        let on_toggle = props.on_toggle.clone();
        let open = props.open;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            input_text.set(value.clone());
            if !open {
                on_toggle.emit(true);
            }
            on_text_change.emit(value.clone());
            on_input_change.emit(value);
        })
    };

    let on_focus = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: FocusEvent| on_toggle.emit(true))
    };

    let on_blur = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: FocusEvent| on_toggle.emit(false))
    };

    let on_keydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_toggle.emit(false);
            }
        })
    };

    let pick = |label: String| {
        let input_text = input_text.clone();
        let on_input_change = props.on_input_change.clone();
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            // mousedown instead of click so the input keeps focus until the pick lands
            e.prevent_default();
            input_text.set(label.clone());
            on_input_change.emit(label.clone());
            on_toggle.emit(false);
        })
    };

    let visible = visible_options(&props.options, &input_text);

    html! {
        <div class="autocomplete">
            <label class="autocomplete-label" for="location-search">{props.label.clone()}</label>
            <input
                id="location-search"
                type="text"
                class="autocomplete-input"
                autocomplete="off"
                value={(*input_text).clone()}
                oninput={on_input}
                onfocus={on_focus}
                onblur={on_blur}
                onkeydown={on_keydown}
            />
            {if props.open {
                html! {
                    <ul class="autocomplete-options" role="listbox">
                        {if visible.is_empty() {
                            html! { <li class="autocomplete-empty">{"No options"}</li> }
                        } else {
                            html! {
                                {for visible.iter().map(|option| {
                                    html! {
                                        <li
                                            class="autocomplete-option"
                                            role="option"
                                            onmousedown={pick(option.label.clone())}
                                        >
                                            {&option.label}
                                        </li>
                                    }
                                })}
                            }
                        }}
                    </ul>
                }
            } else { html! {} }}
        </div>
    }
}

/// Options whose label contains the typed text, ignoring case and accents.
/// Whitespace in the typed text counts.
pub fn visible_options<'a>(options: &'a [PostCodeLocation], input: &str) -> Vec<&'a PostCodeLocation> {
    let needle = fold(input);
    options
        .iter()
        .filter(|option| fold(&option.label).contains(&needle))
        .collect()
}

/// Lowercase and drop combining diacritical marks, so "Köln" reads "koln"
fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(label: &str) -> PostCodeLocation {
        PostCodeLocation {
            longitude: 0.0,
            latitude: 0.0,
            label: label.to_string(),
            post_code: 0,
            square_km: 0.0,
            population: 0,
        }
    }

    #[test]
    fn test_visible_options_filters_case_insensitively() {
        let options = vec![location("10115 Berlin"), location("Bernau"), location("Hamburg")];

        let labels: Vec<&str> = visible_options(&options, "BER")
            .into_iter()
            .map(|option| option.label.as_str())
            .collect();

        assert_eq!(labels, vec!["10115 Berlin", "Bernau"]);
    }

    #[test]
    fn test_visible_options_ignores_accents() {
        let options = vec![location("50667 Köln"), location("Kolberg"), location("München")];

        let labels: Vec<&str> = visible_options(&options, "koln")
            .into_iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, vec!["50667 Köln"]);

        assert_eq!(visible_options(&options, "Mü").len(), 1);
    }

    #[test]
    fn test_visible_options_does_not_trim_input() {
        let options = vec![location("10115 Berlin"), location("Bernau")];

        let labels: Vec<&str> = visible_options(&options, " ber")
            .into_iter()
            .map(|option| option.label.as_str())
            .collect();

        assert_eq!(labels, vec!["10115 Berlin"]);
    }

    #[test]
    fn test_visible_options_with_empty_input_shows_all() {
        let options = vec![location("a"), location("b")];
        assert_eq!(visible_options(&options, "").len(), 2);
    }

    #[test]
    fn test_visible_options_keeps_server_order() {
        let options = vec![location("Bernburg"), location("Bernau")];
        let labels: Vec<&str> = visible_options(&options, "Bern")
            .into_iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Bernburg", "Bernau"]);
    }
}
