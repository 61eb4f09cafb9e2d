use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::GEMINI_KEY_URL;

#[derive(Properties, PartialEq)]
pub struct ApiKeyInputProps {
    pub on_save: Callback<String>,
    #[prop_or_default]
    pub current_key: String,
}

/// Card asking for a Gemini key. Blank keys cannot be saved.
#[function_component(ApiKeyInput)]
pub fn api_key_input(props: &ApiKeyInputProps) -> Html {
    let key = {
        let current = props.current_key.clone();
        use_state(move || current)
    };

    let on_input = {
        let key = key.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                key.set(input.value());
            }
        })
    };

    let on_click = {
        let key = key.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            let trimmed = key.trim();
            if !trimmed.is_empty() {
                on_save.emit(trimmed.to_string());
            }
        })
    };

    html! {
        <div class="mb-4 p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
            <h3 class="flex items-center gap-2 text-lg font-semibold">
                {"🔑 Google Gemini API Key"}
            </h3>
            <div class="space-y-2">
                <label for="api-key" class="block text-sm font-medium">{"API Key"}</label>
                <input
                    id="api-key"
                    type="password"
                    placeholder="Enter your Google Gemini API key"
                    value={(*key).clone()}
                    oninput={on_input}
                    class="w-full px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm bg-white dark:bg-gray-950"
                />
            </div>
            <div class="flex gap-2">
                <button
                    onclick={on_click}
                    disabled={key.trim().is_empty()}
                    class="px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium hover:bg-blue-600 disabled:opacity-50"
                >
                    {"Save API Key"}
                </button>
                <a
                    href={GEMINI_KEY_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-2 px-4 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm"
                >
                    {"Get API Key ↗"}
                </a>
            </div>
            <p class="text-sm text-gray-500">
                {"Your API key is stored locally in your browser and never sent to our servers."}
            </p>
        </div>
    }
}
