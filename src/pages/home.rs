use yew::prelude::*;
use yew_router::prelude::*;

use crate::fixtures::{QUICK_ACTIONS, TODAYS_TASKS, USER_STATS, WEEKLY_PROGRESS};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator();

    html! {
        <div>
            <div class="bg-blue-600 text-white p-6">
                <div class="max-w-4xl mx-auto">
                    <h1 class="text-2xl font-bold mb-2">{"Good morning! 👋"}</h1>
                    <p class="text-white/80">{"Ready to continue your learning journey?"}</p>
                </div>
            </div>

            <div class="max-w-4xl mx-auto p-4 space-y-6">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {
                        USER_STATS.iter().map(|stat| html! {
                            <div class="p-4 text-center border border-gray-200 dark:border-gray-800 rounded-lg">
                                <div class="text-2xl font-bold text-blue-600">{stat.value}</div>
                                <div class="text-sm text-gray-500">{stat.label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-3">
                    <h2 class="text-lg font-semibold">{"🕑 Today's Assignments"}</h2>
                    {
                        TODAYS_TASKS.iter().map(|task| html! {
                            <div key={task.id} class="flex items-center justify-between p-3 border border-gray-200 dark:border-gray-800 rounded-lg">
                                <div>
                                    <h4 class="font-medium">{task.title}</h4>
                                    <p class="text-sm text-gray-500">{format!("Due: {}", task.due)}</p>
                                </div>
                                <span class={classes!("px-2", "py-1", "rounded", "text-xs", task.priority.badge_class())}>
                                    {task.priority.label()}
                                </span>
                            </div>
                        }).collect::<Html>()
                    }
                </section>

                <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
                    <h2 class="text-lg font-semibold">{"⚡ Quick Actions"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {
                            QUICK_ACTIONS.iter().map(|action| {
                                let navigator = navigator.clone();
                                let route = action.route;
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    if let Some(navigator) = &navigator {
                                        navigator.push(&route);
                                    }
                                });
                                html! {
                                    <button
                                        {onclick}
                                        class="flex items-start gap-3 p-4 text-left border border-gray-200 dark:border-gray-800 rounded-lg hover:bg-gray-50 dark:hover:bg-gray-900"
                                    >
                                        <span class="text-xl">{action.icon}</span>
                                        <div>
                                            <div class="font-medium">{action.title}</div>
                                            <div class="text-sm text-gray-500">{action.description}</div>
                                        </div>
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <section class="p-6 border border-gray-200 dark:border-gray-800 rounded-lg space-y-4">
                    <div>
                        <h2 class="text-lg font-semibold">{"📈 Weekly Progress"}</h2>
                        <p class="text-sm text-gray-500">{"You're doing great! Keep up the momentum."}</p>
                    </div>
                    {
                        WEEKLY_PROGRESS.iter().map(|(label, percent)| html! {
                            <ProgressBar label={*label} value={*percent} />
                        }).collect::<Html>()
                    }
                </section>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProgressBarProps {
    label: &'static str,
    value: u8,
}

#[function_component(ProgressBar)]
fn progress_bar(props: &ProgressBarProps) -> Html {
    let value = props.value.min(100);
    html! {
        <div>
            <div class="flex justify-between text-sm mb-1">
                <span>{props.label}</span>
                <span>{format!("{}%", value)}</span>
            </div>
            <div class="h-2 w-full rounded-full bg-gray-200 dark:bg-gray-800 overflow-hidden">
                <div class="h-full bg-blue-600" style={format!("width: {}%", value)} />
            </div>
        </div>
    }
}
