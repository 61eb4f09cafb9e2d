use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::chat::{use_study_chat, StudyChat};
use crate::components::{ApiKeyInput, ChatPanel, TabBar, STUDY_PROMPTS};
use crate::types::{SelectedFile, StudyTab};
use crate::utils::{format_megabytes, selected_file};

const TABS: [(StudyTab, &str); 4] = [
    (StudyTab::Chat, "AI Chat"),
    (StudyTab::Upload, "Upload"),
    (StudyTab::Voice, "Voice AI"),
    (StudyTab::Scan, "Live Scan"),
];

#[function_component(StudyPage)]
pub fn study_page() -> Html {
    let active_tab = use_state(|| StudyTab::Chat);
    let chat = use_study_chat();
    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: StudyTab| active_tab.set(tab))
    };

    html! {
        <div class="max-w-4xl mx-auto p-4">
            <div class="mb-6">
                <h1 class="text-3xl font-bold mb-2">{"AI Study Assistant"}</h1>
                <p class="text-gray-500">
                    {"Upload materials, ask questions, and get personalized help powered by Google Gemini"}
                </p>
            </div>

            <div class="space-y-6">
                <TabBar<StudyTab> tabs={TABS.to_vec()} active={*active_tab} {on_select} />
                {
                    match *active_tab {
                        StudyTab::Chat => html! { <ChatTab {chat} /> },
                        StudyTab::Upload => html! { <UploadTab /> },
                        StudyTab::Voice => html! { <VoiceTab /> },
                        StudyTab::Scan => html! { <ScanTab /> },
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ChatTabProps {
    chat: StudyChat,
}

#[function_component(ChatTab)]
fn chat_tab(props: &ChatTabProps) -> Html {
    let chat = &props.chat;

    html! {
        <>
            if chat.api_key.is_none() {
                <ApiKeyInput on_save={chat.save_api_key.clone()} />
            }
            <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
                <h2 class="text-lg font-semibold">{"💬 AI Study Chat - Powered by Google Gemini"}</h2>
                <ChatPanel
                    messages={chat.messages.clone()}
                    is_loading={chat.is_loading}
                    disabled={chat.api_key.is_none()}
                    on_send_message={chat.send_message.clone()}
                    prompts={STUDY_PROMPTS.to_vec()}
                />
            </section>
        </>
    }
}

#[function_component(UploadTab)]
fn upload_tab() -> Html {
    let uploaded = use_state(|| None::<SelectedFile>);

    let on_change = {
        let uploaded = uploaded.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Some(file) = selected_file(&input) {
                    log::debug!("Selected study file {}", file.name);
                    uploaded.set(Some(file));
                }
            }
        })
    };

    html! {
        <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
            <h2 class="text-lg font-semibold">{"⬆️ Upload Study Material"}</h2>
            <div class="border-2 border-dashed border-gray-300 dark:border-gray-700 rounded-lg p-8 text-center">
                <div class="text-5xl mb-4">{"📄"}</div>
                <h3 class="text-lg font-medium mb-2">{"Drop your files here"}</h3>
                <p class="text-gray-500 mb-4">{"Support for PDFs, images, documents, and more"}</p>
                <label for="file-upload" class="inline-block px-4 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm cursor-pointer">
                    {"Choose Files"}
                    <input
                        id="file-upload"
                        type="file"
                        class="hidden"
                        accept=".pdf,.doc,.docx,.txt,.jpg,.png"
                        onchange={on_change}
                    />
                </label>
            </div>

            if let Some(file) = (*uploaded).as_ref() {
                <div class="p-4 border border-gray-200 dark:border-gray-800 rounded-lg">
                    <div class="flex items-center gap-3">
                        <span>{"📄"}</span>
                        <div>
                            <p class="font-medium">{&file.name}</p>
                            <p class="text-sm text-gray-500">{format_megabytes(file.size)}</p>
                        </div>
                    </div>
                    <button class="mt-3 w-full px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium">
                        {"Process with AI"}
                    </button>
                </div>
            }
        </section>
    }
}

#[function_component(VoiceTab)]
fn voice_tab() -> Html {
    let recording = use_state(|| false);
    let onclick = {
        let recording = recording.clone();
        Callback::from(move |_: MouseEvent| recording.set(!*recording))
    };
    let label = if *recording { "Stop Recording" } else { "Start Recording" };

    html! {
        <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
            <h2 class="text-lg font-semibold">{"🎤 Voice-to-Summary AI"}</h2>
            <div class="text-center p-8">
                <div class={classes!(
                    "mx-auto", "w-24", "h-24", "rounded-full", "border-4", "flex", "items-center", "justify-center", "text-4xl",
                    if *recording { "border-red-500 bg-red-50" } else { "border-blue-500 bg-blue-50" }
                )}>
                    {"🎤"}
                </div>
                <h3 class="text-lg font-medium mt-4 mb-2">
                    {if *recording { "Recording..." } else { "Start Recording" }}
                </h3>
                <p class="text-gray-500 mb-4">
                    {"Record a lecture, discussion, or voice notes for AI summarization"}
                </p>
                <button
                    {onclick}
                    class={classes!(
                        "px-6", "py-3", "rounded-lg", "text-white", "font-medium",
                        if *recording { "bg-red-600" } else { "bg-blue-500" }
                    )}
                >
                    {label}
                </button>
            </div>

            <div class="border-t border-gray-200 dark:border-gray-800 pt-4">
                <h4 class="font-medium mb-2">{"Recent Recordings"}</h4>
                <div class="flex items-center justify-between p-3 border border-gray-200 dark:border-gray-800 rounded">
                    <div class="flex items-center gap-3">
                        <span>{"🔊"}</span>
                        <div>
                            <p class="font-medium">{"Math Lecture - Chapter 5"}</p>
                            <p class="text-sm text-gray-500">{"15 minutes • 2 hours ago"}</p>
                        </div>
                    </div>
                    <button class="px-3 py-1 text-sm border border-gray-300 dark:border-gray-700 rounded-lg">
                        {"View Summary"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[function_component(ScanTab)]
fn scan_tab() -> Html {
    html! {
        <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
            <h2 class="text-lg font-semibold">{"📷 Live Scan-to-Explain"}</h2>
            <div class="aspect-video bg-gray-100 dark:bg-gray-900 rounded-lg flex items-center justify-center">
                <div class="text-center">
                    <div class="text-6xl mb-4">{"📷"}</div>
                    <h3 class="text-lg font-medium mb-2">{"Camera Preview"}</h3>
                    <p class="text-gray-500">{"Point your camera at whiteboards, textbooks, or handouts"}</p>
                </div>
            </div>
            <div class="flex gap-2">
                <button class="flex-1 px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium">
                    {"📷 Capture & Analyze"}
                </button>
                <button class="px-4 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm">
                    {"Switch Camera"}
                </button>
            </div>
            <p class="text-sm text-gray-500">
                {"AI will extract text, identify key concepts, and provide explanations with citations."}
            </p>
        </section>
    }
}
