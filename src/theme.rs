use yew::prelude::*;

use crate::storage;
use crate::types::Theme;

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::default(),
        toggle: Callback::noop(),
    })
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

/// Keeps the `dark` class on `<html>` in sync with the stored preference.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(storage::load_theme);

    use_effect_with(*theme, |theme| {
        let root = gloo_utils::document_element();
        if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
            log::warn!("Could not apply theme class: {:?}", err);
        }
        if let Err(err) = storage::save_theme(*theme) {
            log::warn!("Could not persist theme: {}", err);
        }
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| theme.set((*theme).toggled()))
    };

    let context = ThemeContext {
        theme: *theme,
        toggle,
    };

    html! {
        <ContextProvider<ThemeContext> {context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}
