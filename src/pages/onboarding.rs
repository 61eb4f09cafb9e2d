use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::use_toast;
use crate::config::APP_NAME;
use crate::onboarding::{Advance, OnboardingForm, Step, SCHOOL_LEVELS, STUDY_GOALS, SUBJECTS};
use crate::routes::Route;
use crate::storage;

#[function_component(OnboardingPage)]
pub fn onboarding_page() -> Html {
    let form = use_state(OnboardingForm::new);
    let navigator = use_navigator();
    let toast = use_toast();

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                edit(&form, |f| f.set_name(input.value()));
            }
        })
    };

    let on_level = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                edit(&form, |f| f.set_school_level(select.value()));
            }
        })
    };

    let on_back = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| edit(&form, |f| f.back()))
    };

    let on_next = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            match next.advance() {
                Advance::Blocked => {}
                Advance::Moved(_) => form.set(next),
                Advance::Finished => match storage::save_onboarding(&next.finished_profile()) {
                    Ok(()) => {
                        log::info!("Onboarding complete");
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Home);
                        }
                    }
                    Err(err) => {
                        log::error!("Could not save onboarding profile: {}", err);
                        toast.error("Error", "Your answers could not be saved. Please try again.");
                    }
                },
            }
        })
    };

    let checkbox_list = |options: &'static [&'static str], selected: &[String], subjects: bool| -> Html {
        options.iter().map(|option| {
            let checked = selected.iter().any(|s| s == option);
            let form = form.clone();
            let onchange = Callback::from(move |_: Event| {
                edit(&form, |f| {
                    if subjects {
                        f.toggle_subject(option)
                    } else {
                        f.toggle_goal(option)
                    }
                })
            });
            html! {
                <label key={*option} class="flex items-center space-x-2 text-sm cursor-pointer">
                    <input type="checkbox" {checked} {onchange} class="h-4 w-4 rounded border-gray-300" />
                    <span>{*option}</span>
                </label>
            }
        }).collect::<Html>()
    };

    let can_advance = form.can_advance();
    let primary = "flex-1 px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium hover:bg-blue-600 disabled:opacity-50";
    let secondary = "flex-1 px-4 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm font-medium";

    html! {
        <div class="min-h-screen flex items-center justify-center p-4 bg-white dark:bg-gray-950 text-gray-900 dark:text-gray-100">
            <div class="w-full max-w-lg p-6 border border-gray-200 dark:border-gray-800 rounded-lg shadow-sm space-y-6">
                <div class="text-center">
                    <div class="text-5xl mb-4">{"🎓"}</div>
                    <h1 class="text-2xl font-bold">{format!("Welcome to {}", APP_NAME)}</h1>
                    <p class="text-sm text-gray-500 mt-2">
                        {"Your AI-powered study companion. Let's personalize your learning experience."}
                    </p>
                </div>

                {
                    match form.step {
                        Step::Basics => html! {
                            <div class="space-y-4">
                                <div class="space-y-2">
                                    <label for="name" class="block text-sm font-medium">{"What's your name?"}</label>
                                    <input
                                        id="name"
                                        placeholder="Enter your name"
                                        value={form.profile.name.clone()}
                                        oninput={on_name}
                                        class="w-full px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm bg-white dark:bg-gray-950"
                                    />
                                </div>
                                <div class="space-y-2">
                                    <label for="school-level" class="block text-sm font-medium">{"What's your school level?"}</label>
                                    <select
                                        id="school-level"
                                        onchange={on_level}
                                        class="w-full px-3 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm bg-white dark:bg-gray-950"
                                    >
                                        <option value="" selected={form.profile.school_level.is_empty()} disabled=true>
                                            {"Select your school level"}
                                        </option>
                                        {
                                            SCHOOL_LEVELS.iter().map(|level| html! {
                                                <option value={*level} selected={form.profile.school_level == *level}>
                                                    {*level}
                                                </option>
                                            }).collect::<Html>()
                                        }
                                    </select>
                                </div>
                                <button onclick={on_next} disabled={!can_advance} class={classes!("w-full", primary)}>
                                    {"Next →"}
                                </button>
                            </div>
                        },
                        Step::Subjects => html! {
                            <div class="space-y-4">
                                <p class="text-sm font-medium">{"📖 Which subjects are you studying?"}</p>
                                <div class="grid grid-cols-2 gap-2">
                                    {checkbox_list(SUBJECTS, &form.profile.subjects, true)}
                                </div>
                                <div class="flex gap-2">
                                    <button onclick={on_back} class={secondary}>{"Back"}</button>
                                    <button onclick={on_next} disabled={!can_advance} class={primary}>{"Next →"}</button>
                                </div>
                            </div>
                        },
                        Step::Goals => html! {
                            <div class="space-y-4">
                                <p class="text-sm font-medium">{"🎯 What are your study goals?"}</p>
                                <div class="space-y-2">
                                    {checkbox_list(STUDY_GOALS, &form.profile.study_goals, false)}
                                </div>
                                <div class="flex gap-2">
                                    <button onclick={on_back} class={secondary}>{"Back"}</button>
                                    <button onclick={on_next} disabled={!can_advance} class={primary}>{"Get Started!"}</button>
                                </div>
                            </div>
                        },
                    }
                }

                <div class="flex justify-center space-x-2">
                    {
                        Step::ALL.iter().map(|step| html! {
                            <div class={classes!(
                                "h-2",
                                "w-2",
                                "rounded-full",
                                if *step == form.step { "bg-blue-500" } else { "bg-gray-300 dark:bg-gray-700" }
                            )} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

fn edit(form: &UseStateHandle<OnboardingForm>, change: impl FnOnce(&mut OnboardingForm)) {
    let mut next = (**form).clone();
    change(&mut next);
    form.set(next);
}
