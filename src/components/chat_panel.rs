use yew::prelude::*;
use web_sys::{Element, HtmlTextAreaElement, KeyboardEvent};
use crate::types::Message;
use crate::utils::format_clock;

/// Canned prompt shown under the input.
#[derive(Clone, PartialEq)]
pub struct QuickPrompt {
    pub label: &'static str,
    pub text: &'static str,
}

pub const STUDY_PROMPTS: &[QuickPrompt] = &[
    QuickPrompt { label: "📝 Explain my homework", text: "Can you explain this homework problem to me?" },
    QuickPrompt { label: "🧠 Create flashcards", text: "Create flashcards for the topic I'm studying" },
    QuickPrompt { label: "📊 Make a study plan", text: "Help me make a study plan for my upcoming exam" },
    QuickPrompt { label: "🎯 Quiz me", text: "Quiz me on this topic to test my knowledge" },
];

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    pub messages: Vec<Message>,
    pub is_loading: bool,
    /// Input is locked, e.g. while no API key is stored.
    #[prop_or_default]
    pub disabled: bool,
    pub on_send_message: Callback<String>,
    #[prop_or_default]
    pub prompts: Vec<QuickPrompt>,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let input_value = use_state(String::new);
    let end_ref = use_node_ref();
    let locked = props.is_loading || props.disabled;

    // Keep the newest message in view
    {
        let end_ref = end_ref.clone();
        use_effect_with((props.messages.len(), props.is_loading), move |_| {
            if let Some(end) = end_ref.cast::<Element>() {
                end.scroll_into_view();
            }
            || ()
        });
    }

    let on_input = {
        let input_value = input_value.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(textarea) = e.target_dyn_into::<HtmlTextAreaElement>() {
                input_value.set(textarea.value());
            }
        })
    };

    let send = {
        let input_value = input_value.clone();
        let on_send = props.on_send_message.clone();
        Callback::from(move |_: ()| {
            let value = (*input_value).clone();
            if !locked && !value.trim().is_empty() {
                on_send.emit(value);
                input_value.set(String::new());
            }
        })
    };

    let on_keydown = {
        let send = send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" && !e.shift_key() {
                e.prevent_default();
                send.emit(());
            }
        })
    };

    let on_submit = {
        let send = send.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            send.emit(());
        })
    };

    html! {
        <div class="space-y-4">
            <div class="h-96 border border-gray-200 dark:border-gray-800 rounded-lg p-4 overflow-y-auto bg-gray-50 dark:bg-gray-900">
                <div class="space-y-4">
                    {
                        props.messages.iter().map(|msg| html! {
                            <ChatMessage message={msg.clone()} />
                        }).collect::<Html>()
                    }
                    if props.is_loading {
                        <div class="flex gap-3">
                            <div class="w-8 h-8 rounded-full bg-blue-600 flex items-center justify-center animate-pulse">
                                {"🧠"}
                            </div>
                            <div class="flex-1 p-3 rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-950">
                                <p class="text-gray-500">{"AI is thinking..."}</p>
                            </div>
                        </div>
                    }
                    <div ref={end_ref} />
                </div>
            </div>

            <form onsubmit={on_submit} class="flex gap-2">
                <textarea
                    value={(*input_value).clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    disabled={locked}
                    placeholder="Ask me anything about your studies..."
                    class="flex-1 px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm resize-none bg-white dark:bg-gray-950 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                    rows="2"
                />
                <button
                    type="submit"
                    disabled={locked || input_value.trim().is_empty()}
                    class="px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium hover:bg-blue-600 transition-colors disabled:opacity-50"
                >
                    {"Send"}
                </button>
            </form>

            <div class="flex flex-wrap gap-2">
                {
                    props.prompts.iter().map(|prompt| {
                        let input_value = input_value.clone();
                        let text = prompt.text;
                        let onclick = Callback::from(move |_: MouseEvent| input_value.set(text.to_string()));
                        html! {
                            <button
                                type="button"
                                {onclick}
                                disabled={props.is_loading}
                                class="px-3 py-1 text-sm border border-gray-300 dark:border-gray-700 rounded-lg hover:bg-gray-100 dark:hover:bg-gray-800 disabled:opacity-50"
                            >
                                {prompt.label}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatMessageProps {
    pub message: Message,
}

#[function_component(ChatMessage)]
pub fn chat_message(props: &ChatMessageProps) -> Html {
    let msg = &props.message;
    let is_assistant = msg.is_assistant();

    html! {
        <div class={classes!("flex", "gap-3", (!is_assistant).then_some("flex-row-reverse"))}>
            <div
                class={classes!(
                    "w-8",
                    "h-8",
                    "rounded-full",
                    "flex",
                    "items-center",
                    "justify-center",
                    "shrink-0",
                    if is_assistant { "bg-blue-600" } else { "bg-gray-200 dark:bg-gray-700" }
                )}
            >
                {if is_assistant { "🧠" } else { "👤" }}
            </div>
            <div class={classes!("flex-1", (!is_assistant).then_some("text-right"))}>
                <div
                    class={classes!(
                        "p-3",
                        "rounded-lg",
                        "text-left",
                        if is_assistant {
                            "bg-white dark:bg-gray-950 border border-gray-200 dark:border-gray-700"
                        } else {
                            "bg-blue-600 text-white ml-12"
                        }
                    )}
                >
                    <p class="text-sm whitespace-pre-wrap">{&msg.content}</p>
                </div>
                <p class="text-xs text-gray-500 mt-1">{format_clock(msg.timestamp)}</p>
            </div>
        </div>
    }
}
