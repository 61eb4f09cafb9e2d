use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    let path = use_location().map(|location| location.path().to_string());
    use_effect_with(path, |path| {
        if let Some(path) = path {
            log::warn!("404: no page at {}", path);
        }
        || ()
    });

    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            <div class="text-center">
                <h1 class="text-4xl font-bold mb-4">{"404"}</h1>
                <p class="text-xl text-gray-600 dark:text-gray-400 mb-4">{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home} classes="text-blue-500 hover:text-blue-700 underline">
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}
