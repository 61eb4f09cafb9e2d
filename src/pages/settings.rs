use yew::prelude::*;

use crate::components::use_toast;
use crate::config::APP_NAME;
use crate::storage;
use crate::theme::use_theme;
use crate::utils::input_value;

const CARD: &str = "p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4";
const INPUT: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm bg-white dark:bg-gray-950";
const OUTLINE_BUTTON: &str = "px-3 py-1 text-sm border border-gray-300 dark:border-gray-700 rounded-lg";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub grade: String,
    pub school: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub study_reminders: bool,
    pub homework_deadlines: bool,
    pub group_updates: bool,
    pub email: bool,
    pub push: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            study_reminders: true,
            homework_deadlines: true,
            group_updates: true,
            email: true,
            push: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacyPrefs {
    pub profile_visibility: bool,
    pub study_stats: bool,
    pub online_status: bool,
}

impl Default for PrivacyPrefs {
    fn default() -> Self {
        Self {
            profile_visibility: true,
            study_stats: true,
            online_status: false,
        }
    }
}

/// Callback that applies `change` to a copy of the state and stores it.
fn updater<T, V>(state: &UseStateHandle<T>, change: fn(&mut T, V)) -> Callback<V>
where
    T: Clone + 'static,
    V: 'static,
{
    let state = state.clone();
    Callback::from(move |value: V| {
        let mut next = (*state).clone();
        change(&mut next, value);
        state.set(next);
    })
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let theme = use_theme();
    let toast = use_toast();
    let profile = use_state(ProfileFields::default);
    let notifications = use_state(NotificationPrefs::default);
    let privacy = use_state(PrivacyPrefs::default);
    let has_api_key = use_state(|| storage::load_api_key().is_some());

    let on_theme = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: bool| toggle.emit(()))
    };

    let on_remove_key = {
        let has_api_key = has_api_key.clone();
        let toast = toast.clone();
        Callback::from(move |_: MouseEvent| {
            storage::clear_api_key();
            has_api_key.set(false);
            toast.notify("API Key Removed", "Add a new key on the Study page to keep chatting.");
        })
    };

    let on_save = Callback::from(move |_: MouseEvent| {
        log::info!("Settings saved for this session");
        toast.notify("Settings saved", "Your preferences have been updated successfully.");
    });

    let profile_field = |id: &'static str, label: &'static str, kind: &'static str, placeholder: &'static str, value: &str, change: fn(&mut ProfileFields, String)| {
        let set = updater(&profile, change);
        let oninput = Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                set.emit(value);
            }
        });
        html! {
            <div class="space-y-2">
                <label for={id} class="block text-sm font-medium">{label}</label>
                <input id={id} type={kind} {placeholder} value={value.to_string()} {oninput} class={INPUT} />
            </div>
        }
    };

    html! {
        <div class="max-w-4xl mx-auto py-8 px-4 space-y-6">
            <div>
                <h1 class="text-3xl font-bold">{"Settings"}</h1>
                <p class="text-gray-500 mt-2">{"Manage your account settings and preferences"}</p>
            </div>

            <section class={CARD}>
                <CardHeader
                    title={if theme.theme.is_dark() { "🌙 Appearance" } else { "☀️ Appearance" }}
                    description={format!("Customize how {} looks and feels", APP_NAME)}
                />
                <SwitchRow
                    label="Theme"
                    description="Choose between light and dark mode"
                    checked={theme.theme.is_dark()}
                    on_toggle={on_theme}
                />
            </section>

            <section class={CARD}>
                <CardHeader title="👤 Profile Information" description="Update your personal information" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    { profile_field("name", "Full Name", "text", "Your full name", profile.name.as_str(), |p, v| p.name = v) }
                    { profile_field("email", "Email", "email", "your.email@example.com", profile.email.as_str(), |p, v| p.email = v) }
                    { profile_field("phone", "Phone Number", "tel", "+1 (555) 123-4567", profile.phone.as_str(), |p, v| p.phone = v) }
                    { profile_field("grade", "Grade Level", "text", "e.g., Grade 12", profile.grade.as_str(), |p, v| p.grade = v) }
                </div>
                { profile_field("school", "School/Institution", "text", "Your school name", profile.school.as_str(), |p, v| p.school = v) }
            </section>

            <section class={CARD}>
                <CardHeader title="🔔 Notifications" description="Choose what notifications you want to receive" />
                <SwitchRow
                    label="Study Reminders"
                    description="Get reminded about your study sessions"
                    checked={notifications.study_reminders}
                    on_toggle={updater(&notifications, |n: &mut NotificationPrefs, v: bool| n.study_reminders = v)}
                />
                <SwitchRow
                    label="Homework Deadlines"
                    description="Never miss an assignment deadline"
                    checked={notifications.homework_deadlines}
                    on_toggle={updater(&notifications, |n: &mut NotificationPrefs, v: bool| n.homework_deadlines = v)}
                />
                <SwitchRow
                    label="Study Group Updates"
                    description="Get notified about group activities"
                    checked={notifications.group_updates}
                    on_toggle={updater(&notifications, |n: &mut NotificationPrefs, v: bool| n.group_updates = v)}
                />
                <hr class="border-gray-200 dark:border-gray-800" />
                <SwitchRow
                    label="✉️ Email Notifications"
                    description="Receive updates via email"
                    checked={notifications.email}
                    on_toggle={updater(&notifications, |n: &mut NotificationPrefs, v: bool| n.email = v)}
                />
                <SwitchRow
                    label="📱 Push Notifications"
                    description="Get instant notifications on your device"
                    checked={notifications.push}
                    on_toggle={updater(&notifications, |n: &mut NotificationPrefs, v: bool| n.push = v)}
                />
            </section>

            <section class={CARD}>
                <CardHeader title="🛡️ Privacy & Security" description="Control your privacy and data sharing preferences" />
                <SwitchRow
                    label="Profile Visibility"
                    description="Allow others to see your profile"
                    checked={privacy.profile_visibility}
                    on_toggle={updater(&privacy, |p: &mut PrivacyPrefs, v: bool| p.profile_visibility = v)}
                />
                <SwitchRow
                    label="Study Statistics"
                    description="Share your study progress with others"
                    checked={privacy.study_stats}
                    on_toggle={updater(&privacy, |p: &mut PrivacyPrefs, v: bool| p.study_stats = v)}
                />
                <SwitchRow
                    label="Online Status"
                    description="Show when you're online and active"
                    checked={privacy.online_status}
                    on_toggle={updater(&privacy, |p: &mut PrivacyPrefs, v: bool| p.online_status = v)}
                />
            </section>

            <section class={CARD}>
                <CardHeader title="🗄️ Data & Storage" description="Manage your data and storage preferences" />
                <div class="flex items-center justify-between p-4 border border-gray-200 dark:border-gray-800 rounded-lg">
                    <div>
                        <h4 class="font-medium">{"Study Data"}</h4>
                        <p class="text-sm text-gray-500">{"Your flashcards, notes, and progress"}</p>
                    </div>
                    <button class={OUTLINE_BUTTON}>{"Export Data"}</button>
                </div>
                <div class="flex items-center justify-between p-4 border border-gray-200 dark:border-gray-800 rounded-lg">
                    <div>
                        <h4 class="font-medium">{"Clear Cache"}</h4>
                        <p class="text-sm text-gray-500">{"Free up storage space"}</p>
                    </div>
                    <button class={OUTLINE_BUTTON}>{"Clear Cache"}</button>
                </div>
            </section>

            <section class={CARD}>
                <CardHeader title="🧠 AI Assistant" description="Your Google Gemini API key is stored in this browser only" />
                <div class="flex items-center justify-between p-4 border border-gray-200 dark:border-gray-800 rounded-lg">
                    <div>
                        <h4 class="font-medium">{"Gemini API Key"}</h4>
                        <p class="text-sm text-gray-500">
                            {if *has_api_key { "A key is saved and ready to use" } else { "No key saved yet" }}
                        </p>
                    </div>
                    <button onclick={on_remove_key} disabled={!*has_api_key} class={classes!(OUTLINE_BUTTON, "disabled:opacity-50")}>
                        {"Remove Key"}
                    </button>
                </div>
            </section>

            <div class="flex justify-end">
                <button onclick={on_save} class="px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium hover:bg-blue-600">
                    {"💾 Save All Settings"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct CardHeaderProps {
    #[prop_or_default]
    title: AttrValue,
    #[prop_or_default]
    description: AttrValue,
}

#[function_component(CardHeader)]
fn card_header(props: &CardHeaderProps) -> Html {
    html! {
        <div>
            <h2 class="text-lg font-semibold">{&props.title}</h2>
            <p class="text-sm text-gray-500">{&props.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SwitchRowProps {
    label: AttrValue,
    description: AttrValue,
    checked: bool,
    on_toggle: Callback<bool>,
}

/// Labelled on/off switch; emits the new state.
#[function_component(SwitchRow)]
fn switch_row(props: &SwitchRowProps) -> Html {
    let checked = props.checked;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(!checked))
    };

    html! {
        <div class="flex items-center justify-between">
            <div class="space-y-0.5">
                <div class="text-sm font-medium">{&props.label}</div>
                <p class="text-sm text-gray-500">{&props.description}</p>
            </div>
            <button
                role="switch"
                aria-checked={checked.to_string()}
                {onclick}
                class={classes!(
                    "relative", "inline-flex", "h-6", "w-11", "items-center", "rounded-full", "transition-colors",
                    if checked { "bg-blue-600" } else { "bg-gray-300 dark:bg-gray-700" }
                )}
            >
                <span class={classes!(
                    "inline-block", "h-5", "w-5", "rounded-full", "bg-white", "shadow", "transition-transform",
                    if checked { "translate-x-5" } else { "translate-x-0.5" }
                )} />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_defaults() {
        let prefs = NotificationPrefs::default();
        assert!(prefs.study_reminders && prefs.homework_deadlines && prefs.group_updates);
        assert!(prefs.email);
        assert!(!prefs.push);
    }

    #[test]
    fn test_privacy_defaults() {
        let prefs = PrivacyPrefs::default();
        assert!(prefs.profile_visibility);
        assert!(prefs.study_stats);
        assert!(!prefs.online_status);
    }

    #[test]
    fn test_profile_starts_blank() {
        assert_eq!(ProfileFields::default().name, "");
        assert_eq!(ProfileFields::default().school, "");
    }
}
