use yew::prelude::*;

use crate::components::TabBar;
use crate::fixtures::{
    search_groups, GroupRole, Visibility, MY_GROUPS, STUDY_GROUPS, UPCOMING_SESSIONS,
};
use crate::types::GroupsTab;
use crate::utils::{initials, input_value};

const TABS: [(GroupsTab, &str); 4] = [
    (GroupsTab::Discover, "Discover"),
    (GroupsTab::MyGroups, "My Groups"),
    (GroupsTab::Schedule, "Schedule"),
    (GroupsTab::Create, "Create Group"),
];

const CARD: &str = "p-6 border border-gray-200 dark:border-gray-800 rounded-lg";
const INPUT: &str = "w-full px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm bg-white dark:bg-gray-950";

#[function_component(StudyGroupsPage)]
pub fn study_groups_page() -> Html {
    let active_tab = use_state(|| GroupsTab::Discover);
    let on_select = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: GroupsTab| active_tab.set(tab))
    };

    html! {
        <div class="max-w-6xl mx-auto p-4">
            <div class="mb-6">
                <h1 class="text-3xl font-bold mb-2">{"Study Groups"}</h1>
                <p class="text-gray-500">{"Join collaborative study sessions and learn together"}</p>
            </div>

            <div class="space-y-6">
                <TabBar<GroupsTab> tabs={TABS.to_vec()} active={*active_tab} {on_select} />
                {
                    match *active_tab {
                        GroupsTab::Discover => html! { <DiscoverTab /> },
                        GroupsTab::MyGroups => my_groups_tab(),
                        GroupsTab::Schedule => schedule_tab(),
                        GroupsTab::Create => create_tab(),
                    }
                }
            </div>
        </div>
    }
}

#[function_component(DiscoverTab)]
fn discover_tab() -> Html {
    let search_term = use_state(String::new);
    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = input_value(&e) {
                search_term.set(value);
            }
        })
    };

    let groups = search_groups(STUDY_GROUPS, &search_term);
    let no_matches = groups.is_empty();

    html! {
        <div class="space-y-6">
            <div class={classes!(CARD, "p-4")}>
                <input
                    placeholder="Search study groups by subject, topic, or keyword..."
                    value={(*search_term).clone()}
                    oninput={on_search}
                    class={INPUT}
                />
            </div>

            if no_matches {
                <p class="text-sm text-gray-500 text-center py-4">
                    {format!("No study groups match \"{}\".", search_term.trim())}
                </p>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {
                    groups.into_iter().map(|group| html! {
                        <div key={group.id} class={classes!(CARD, "space-y-3", "hover:shadow-lg", "transition-shadow")}>
                            <div class="flex items-start justify-between">
                                <div class="w-12 h-12 rounded-full bg-blue-50 dark:bg-blue-900/20 flex items-center justify-center font-semibold text-blue-600">
                                    {initials(group.name)}
                                </div>
                                <span title={if group.visibility == Visibility::Private { "Private" } else { "Public" }}>
                                    {if group.visibility == Visibility::Private { "🔒" } else { "🌐" }}
                                </span>
                            </div>
                            <h3 class="text-lg font-semibold">{group.name}</h3>
                            <span class="inline-block px-2 py-0.5 rounded text-xs bg-gray-200 text-gray-900">{group.subject}</span>
                            <p class="text-sm text-gray-500">{group.description}</p>
                            <div class="space-y-2 text-sm">
                                <div>{format!("👥 {}/{} members", group.members, group.max_members)}</div>
                                <div>{format!("📅 {}", group.next_session)}</div>
                                <div>{format!("📍 {}", group.location)}</div>
                                <div>{format!("⭐ {}/5.0", group.rating)}</div>
                            </div>
                            <button class="w-full px-3 py-1.5 bg-blue-500 text-white rounded-lg text-sm">{"Join Group"}</button>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

fn my_groups_tab() -> Html {
    html! {
        <div class="space-y-6">
            {
                MY_GROUPS.iter().map(|group| {
                    let is_admin = group.role == GroupRole::Admin;
                    html! {
                        <div key={group.id} class={CARD}>
                            <div class="flex items-center justify-between">
                                <div class="flex items-center gap-4">
                                    <div class="w-12 h-12 rounded-full bg-blue-50 dark:bg-blue-900/20 flex items-center justify-center font-semibold text-blue-600">
                                        {initials(group.name)}
                                    </div>
                                    <div>
                                        <h3 class="font-semibold">{group.name}</h3>
                                        <div class="flex items-center gap-4 text-sm text-gray-500">
                                            <span class="px-2 py-0.5 rounded text-xs border border-gray-300">{group.subject}</span>
                                            <span>{format!("{} members", group.members)}</span>
                                            <span class={classes!(
                                                "px-2", "py-0.5", "rounded", "text-xs",
                                                if is_admin { "bg-blue-600 text-white" } else { "bg-gray-200 text-gray-900" }
                                            )}>
                                                {if is_admin { "Admin" } else { "Member" }}
                                            </span>
                                        </div>
                                    </div>
                                </div>
                                <div class="flex items-center gap-2">
                                    if group.unread_messages > 0 {
                                        <span class="px-2 py-0.5 rounded-full text-xs bg-red-600 text-white">
                                            {group.unread_messages.to_string()}
                                        </span>
                                    }
                                    <button class="px-3 py-1 text-sm border border-gray-300 dark:border-gray-700 rounded-lg">{"💬 Chat"}</button>
                                    <button class="px-3 py-1 text-sm bg-blue-500 text-white rounded-lg">{"🎥 Join Session"}</button>
                                </div>
                            </div>
                            <div class="mt-4 text-sm text-gray-500">
                                {format!("🕑 Next session: {}", group.next_session)}
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

fn schedule_tab() -> Html {
    html! {
        <section class={classes!(CARD, "space-y-4")}>
            <h2 class="text-lg font-semibold">{"Upcoming Study Sessions"}</h2>
            {
                UPCOMING_SESSIONS.iter().map(|session| html! {
                    <div key={session.group} class="flex items-center justify-between p-4 border border-gray-200 dark:border-gray-800 rounded-lg">
                        <div class="flex items-center gap-4">
                            <div class="w-12 h-12 bg-blue-50 dark:bg-blue-900/20 rounded-lg flex items-center justify-center text-xl">
                                {if session.online { "🎥" } else { "📍" }}
                            </div>
                            <div>
                                <h3 class="font-semibold">{session.group}</h3>
                                <div class="flex items-center gap-4 text-sm text-gray-500">
                                    <span>{session.time}</span>
                                    <span>{format!("Duration: {}", session.duration)}</span>
                                    <span class="px-2 py-0.5 rounded text-xs border border-gray-300">
                                        {if session.online { "Online" } else { "In-person" }}
                                    </span>
                                </div>
                            </div>
                        </div>
                        <button class="px-3 py-1 text-sm bg-blue-500 text-white rounded-lg">{"Join Session"}</button>
                    </div>
                }).collect::<Html>()
            }
        </section>
    }
}

fn create_tab() -> Html {
    let field = |id: &'static str, label: &'static str, placeholder: &'static str| html! {
        <div>
            <label for={id} class="block text-sm font-medium mb-1">{label}</label>
            <input id={id} {placeholder} class={INPUT} />
        </div>
    };

    html! {
        <section class={classes!(CARD, "space-y-4")}>
            <h2 class="text-lg font-semibold">{"Create New Study Group"}</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { field("group-name", "Group Name", "e.g., Advanced Biology Study Group") }
                { field("group-subject", "Subject", "e.g., Biology, Mathematics, Chemistry") }
            </div>
            <div>
                <label for="description" class="block text-sm font-medium mb-1">{"Description"}</label>
                <textarea
                    id="description"
                    rows="3"
                    placeholder="Describe what your study group is about, goals, and expectations..."
                    class={INPUT}
                />
            </div>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                <div>
                    <label for="max-members" class="block text-sm font-medium mb-1">{"Max Members"}</label>
                    <input id="max-members" type="number" placeholder="15" class={INPUT} />
                </div>
                { field("meeting-frequency", "Meeting Frequency", "e.g., Weekly, Bi-weekly") }
                <div>
                    <label for="group-type" class="block text-sm font-medium mb-1">{"Group Type"}</label>
                    <select id="group-type" class={INPUT}>
                        <option>{"Public"}</option>
                        <option>{"Private"}</option>
                    </select>
                </div>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                { field("meeting-location", "Meeting Location", "Online, Library, Classroom, etc.") }
                { field("preferred-time", "Preferred Meeting Time", "e.g., Weekdays 6PM, Weekend mornings") }
            </div>
            <button class="w-full px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium">
                {"＋ Create Study Group"}
            </button>
        </section>
    }
}
