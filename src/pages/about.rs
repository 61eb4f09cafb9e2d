use yew::prelude::*;

use crate::config::APP_NAME;
use crate::fixtures::{FOUNDER, IMPACT, VALUES};
use crate::utils::initials;

const CARD: &str = "p-6 border border-gray-200 dark:border-gray-800 rounded-lg";
const OUTLINE_BUTTON: &str = "flex items-center gap-2 px-3 py-1.5 border border-gray-300 dark:border-gray-700 rounded-lg text-sm";

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="max-w-4xl mx-auto p-4 space-y-6">
            <div class="text-center mb-8">
                <h1 class="text-3xl font-bold mb-2">{format!("About {}", APP_NAME)}</h1>
                <p class="text-gray-500 text-lg">{"Empowering students through AI-powered learning"}</p>
            </div>

            <section class={classes!(CARD, "space-y-4")}>
                <div class="text-center">
                    <div class="w-24 h-24 mx-auto mb-4 rounded-full bg-blue-50 dark:bg-blue-900/20 flex items-center justify-center text-xl font-semibold text-blue-600">
                        {initials(FOUNDER.name)}
                    </div>
                    <h2 class="text-2xl font-semibold">{FOUNDER.name}</h2>
                    <p class="text-lg text-gray-500">{FOUNDER.title}</p>
                </div>
                <p class="text-center text-gray-500 leading-relaxed">{FOUNDER.bio}</p>
                <div class="bg-blue-50 dark:bg-blue-900/20 p-4 rounded-lg">
                    <h3 class="font-semibold mb-2">{"🎓 Our Mission"}</h3>
                    <p class="text-gray-500 italic">{format!("\"{}\"", FOUNDER.mission)}</p>
                </div>
                <div class="flex justify-center gap-4 pt-4">
                    <button class={OUTLINE_BUTTON} title={FOUNDER.email}>{format!("✉️ {}", FOUNDER.email)}</button>
                    <button class={OUTLINE_BUTTON} title={FOUNDER.linkedin}>{"LinkedIn"}</button>
                    <button class={OUTLINE_BUTTON} title={FOUNDER.twitter}>{"Twitter"}</button>
                </div>
            </section>

            <section class={CARD}>
                <h2 class="text-lg font-semibold">{"Our Values"}</h2>
                <p class="text-sm text-gray-500 mb-4">
                    {format!("The principles that guide everything we do at {}", APP_NAME)}
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {
                        VALUES.iter().map(|(icon, title, description)| html! {
                            <div key={*title} class="flex gap-4">
                                <div class="flex-shrink-0 w-10 h-10 bg-blue-50 dark:bg-blue-900/20 rounded-lg flex items-center justify-center">
                                    {*icon}
                                </div>
                                <div>
                                    <h3 class="font-semibold mb-1">{*title}</h3>
                                    <p class="text-sm text-gray-500 leading-relaxed">{*description}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class={CARD}>
                <h2 class="text-lg font-semibold">{format!("{} Impact", APP_NAME)}</h2>
                <p class="text-sm text-gray-500 mb-4">{"Helping students succeed every day"}</p>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-center">
                    {
                        IMPACT.iter().map(|stat| html! {
                            <div key={stat.label}>
                                <div class="text-2xl font-bold text-blue-600">{stat.value}</div>
                                <div class="text-sm text-gray-500">{stat.label}</div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class={CARD}>
                <h2 class="text-lg font-semibold">{"Get in Touch"}</h2>
                <p class="text-sm text-gray-500 mb-4">{"Have questions or feedback? We'd love to hear from you!"}</p>
                <div class="flex flex-col sm:flex-row gap-4">
                    <button class="flex-1 px-4 py-2 bg-blue-500 text-white rounded-lg text-sm font-medium">
                        {"✉️ Contact Support"}
                    </button>
                    <button class="flex-1 px-4 py-2 border border-gray-300 dark:border-gray-700 rounded-lg text-sm font-medium">
                        {"👥 Join Community"}
                    </button>
                </div>
            </section>
        </div>
    }
}
