use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{use_toast, TabBar};
use crate::fixtures::{Difficulty, QuestionStatus, RECENT_QUESTIONS, TUTORS};
use crate::gemini::GeminiClient;
use crate::storage;
use crate::types::{HomeworkTab, SelectedFile};
use crate::utils::{initials, input_value, selected_file};

const TABS: [(HomeworkTab, &str); 3] = [
    (HomeworkTab::Assistant, "AI Assistant"),
    (HomeworkTab::Tutors, "Expert Tutors"),
    (HomeworkTab::History, "My Questions"),
];

/// Prompt sent for a homework question, with the subject when one is given.
pub fn homework_prompt(subject: &str, question: &str) -> String {
    let subject = subject.trim();
    if subject.is_empty() {
        question.trim().to_string()
    } else {
        format!("Subject: {}\n\n{}", subject, question.trim())
    }
}

#[function_component(HomeworkHelpPage)]
pub fn homework_help_page() -> Html {
    let active_tab = use_state(|| HomeworkTab::Assistant);
    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: HomeworkTab| active_tab.set(tab))
    };

    html! {
        <div class="max-w-6xl mx-auto p-4">
            <div class="mb-6">
                <h1 class="text-3xl font-bold mb-2">{"Homework Help"}</h1>
                <p class="text-gray-500">{"Get instant AI assistance or connect with expert tutors"}</p>
            </div>

            <div class="space-y-6">
                <TabBar<HomeworkTab> tabs={TABS.to_vec()} active={*active_tab} {on_select} />
                {
                    match *active_tab {
                        HomeworkTab::Assistant => html! { <AssistantTab /> },
                        HomeworkTab::Tutors => tutors_tab(),
                        HomeworkTab::History => history_tab(),
                    }
                }
            </div>
        </div>
    }
}

#[function_component(AssistantTab)]
fn assistant_tab() -> Html {
    let subject = use_state(String::new);
    let question = use_state(String::new);
    let selected = use_state(|| None::<SelectedFile>);
    let answer = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let toast = use_toast();

    let on_subject = {
        let subject = subject.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                subject.set(value);
            }
        })
    };

    let on_question = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                question.set(value);
            }
        })
    };

    let on_file = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Some(file) = selected_file(&input) {
                    selected.set(Some(file));
                }
            }
        })
    };

    let on_ask = {
        let subject = subject.clone();
        let question = question.clone();
        let answer = answer.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_loading || question.trim().is_empty() {
                return;
            }
            let client = match storage::load_api_key().map(|key| GeminiClient::new(&key)) {
                Some(Ok(client)) => client,
                _ => {
                    toast.error(
                        "API Key Required",
                        "Add your Google Gemini API key on the Study page first.",
                    );
                    return;
                }
            };

            let prompt = homework_prompt(&subject, &question);
            let answer = answer.clone();
            let is_loading = is_loading.clone();
            let toast = toast.clone();
            is_loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match client.generate(&prompt).await {
                    Ok(reply) => answer.set(Some(reply)),
                    Err(err) => {
                        log::error!("Homework help request failed: {}", err);
                        toast.error(
                            "Error",
                            "Failed to get AI response. Please check your API key and try again.",
                        );
                    }
                }
                is_loading.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm bg-white dark:bg-gray-950";

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
                <h2 class="text-lg font-semibold">{"🧠 Ask AI Homework Helper"}</h2>
                <div>
                    <label for="subject" class="block text-sm font-medium mb-1">{"Subject"}</label>
                    <input
                        id="subject"
                        placeholder="e.g., Mathematics, Physics, Chemistry"
                        value={(*subject).clone()}
                        oninput={on_subject}
                        class={input_class}
                    />
                </div>
                <div>
                    <label for="question" class="block text-sm font-medium mb-1">{"Your Question"}</label>
                    <textarea
                        id="question"
                        rows="4"
                        placeholder="Describe your homework problem in detail..."
                        value={(*question).clone()}
                        oninput={on_question}
                        class={input_class}
                    />
                </div>
                <div class="border-2 border-dashed border-gray-300 dark:border-gray-700 rounded-lg p-6 text-center">
                    <p class="text-sm text-gray-500 mb-2">{"Upload homework images or documents"}</p>
                    <label for="homework-upload" class="inline-block px-4 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm cursor-pointer">
                        {"Choose Files"}
                        <input
                            id="homework-upload"
                            type="file"
                            class="hidden"
                            accept="image/*,.pdf,.doc,.docx"
                            onchange={on_file}
                        />
                    </label>
                    if let Some(file) = (*selected).as_ref() {
                        <p class="text-sm text-blue-600 mt-2">{format!("Selected: {}", file.name)}</p>
                    }
                </div>
                <div class="flex gap-2">
                    <button
                        onclick={on_ask}
                        disabled={*is_loading || question.trim().is_empty()}
                        class="flex-1 px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium hover:bg-blue-600 disabled:opacity-50"
                    >
                        {if *is_loading { "Thinking..." } else { "⚡ Get Instant Help" }}
                    </button>
                    <button class="px-4 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm">
                        {"📷 Scan Problem"}
                    </button>
                </div>
                if let Some(text) = (*answer).as_ref() {
                    <div class="p-4 rounded-lg border border-gray-200 dark:border-gray-700 bg-gray-50 dark:bg-gray-900">
                        <p class="text-sm whitespace-pre-wrap">{text}</p>
                    </div>
                }
            </section>

            <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
                <h2 class="text-lg font-semibold">{"AI Features"}</h2>
                { feature("🧠", "Step-by-Step Solutions", "Get detailed explanations for every step of the problem") }
                { feature("💬", "Interactive Chat", "Ask follow-up questions and get clarifications") }
                { feature("📄", "Multiple Formats", "Upload images, PDFs, or type your questions") }
                <div class="bg-blue-50 dark:bg-blue-900/20 p-4 rounded-lg">
                    <h4 class="font-medium mb-2">{"💡 Pro Tip"}</h4>
                    <p class="text-sm text-gray-500">
                        {"For best results, include all relevant information like formulas, given values, and what you're trying to find."}
                    </p>
                </div>
            </section>
        </div>
    }
}

fn feature(icon: &'static str, title: &'static str, description: &'static str) -> Html {
    html! {
        <div class="flex items-start gap-3">
            <div class="w-10 h-10 bg-blue-50 dark:bg-blue-900/20 rounded-lg flex items-center justify-center">{icon}</div>
            <div>
                <h3 class="font-semibold">{title}</h3>
                <p class="text-sm text-gray-500">{description}</p>
            </div>
        </div>
    }
}

fn tutors_tab() -> Html {
    html! {
        <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
            <h2 class="text-lg font-semibold">{"Connect with Expert Tutors"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {
                    TUTORS.iter().map(|tutor| html! {
                        <div key={tutor.name} class="p-4 border-2 border-gray-200 dark:border-gray-800 rounded-lg">
                            <div class="text-center mb-3">
                                <div class="w-12 h-12 bg-blue-50 dark:bg-blue-900/20 rounded-full mx-auto mb-2 flex items-center justify-center">
                                    <span class="text-blue-600 font-semibold">{initials(tutor.name)}</span>
                                </div>
                                <h3 class="font-semibold">{tutor.name}</h3>
                                <p class="text-sm text-gray-500">{tutor.subject}</p>
                            </div>
                            <div class="space-y-2 text-sm">
                                <div class="flex justify-between"><span>{"Rating:"}</span><span>{format!("⭐ {}", tutor.rating)}</span></div>
                                <div class="flex justify-between"><span>{"Response:"}</span><span class="text-green-600">{tutor.response_time}</span></div>
                                <div class="flex justify-between"><span>{"Price:"}</span><span class="font-semibold">{tutor.price}</span></div>
                            </div>
                            <button class="w-full mt-3 px-3 py-1.5 bg-blue-500 text-white rounded-lg text-sm">{"Connect Now"}</button>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

fn history_tab() -> Html {
    html! {
        <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
            <h2 class="text-lg font-semibold">{"Recent Questions"}</h2>
            {
                RECENT_QUESTIONS.iter().map(|q| {
                    let answered = q.status == QuestionStatus::Answered;
                    let difficulty_class = match q.difficulty {
                        Difficulty::Easy => "bg-blue-600 text-white",
                        Difficulty::Medium => "bg-gray-200 text-gray-900",
                        Difficulty::Hard => "bg-red-600 text-white",
                    };
                    html! {
                        <div key={q.id} class="border border-gray-200 dark:border-gray-800 rounded-lg p-4">
                            <div class="flex items-start justify-between mb-2">
                                <div class="flex items-center gap-2">
                                    <span class="px-2 py-0.5 rounded text-xs bg-gray-200 text-gray-900">{q.subject}</span>
                                    <span class={classes!("px-2", "py-0.5", "rounded", "text-xs", difficulty_class)}>
                                        {q.difficulty.label()}
                                    </span>
                                </div>
                                <div class="flex items-center gap-2 text-sm text-gray-500">
                                    <span>{if answered { "✅" } else { "🕑" }}</span>
                                    <span>{q.asked}</span>
                                </div>
                            </div>
                            <p class="text-sm mb-2">{q.question}</p>
                            <button class="px-3 py-1 text-sm border border-gray-300 dark:border-gray-700 rounded-lg">
                                {if answered { "View Answer" } else { "View Status" }}
                            </button>
                        </div>
                    }
                }).collect::<Html>()
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_subject() {
        assert_eq!(
            homework_prompt("Physics", "  What is momentum? "),
            "Subject: Physics\n\nWhat is momentum?"
        );
    }

    #[test]
    fn test_prompt_without_subject() {
        assert_eq!(homework_prompt("  ", "Solve x^2 = 4"), "Solve x^2 = 4");
    }
}
