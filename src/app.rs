use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastProvider;
use crate::routes::{switch, Route};
use crate::theme::ThemeProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ThemeProvider>
    }
}
