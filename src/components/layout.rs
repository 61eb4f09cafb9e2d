use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::APP_NAME;
use crate::routes::{Route, NAV_ITEMS};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Header, desktop sidebar and mobile bottom bar around a page.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current = use_route::<Route>();

    html! {
        <div class="min-h-screen bg-white text-gray-900 dark:bg-gray-950 dark:text-gray-100">
            <header class="sticky top-0 z-50 w-full border-b border-gray-200 dark:border-gray-800 bg-white/95 dark:bg-gray-950/95 backdrop-blur">
                <div class="flex h-14 items-center px-4">
                    <Link<Route> to={Route::Home} classes="flex items-center space-x-2">
                        <span class="text-2xl">{"🎓"}</span>
                        <span class="font-bold text-lg">{APP_NAME}</span>
                    </Link<Route>>
                </div>
            </header>

            // Desktop sidebar
            <aside class="fixed left-0 top-14 z-40 hidden w-64 h-[calc(100vh-3.5rem)] border-r border-gray-200 dark:border-gray-800 md:block">
                <nav class="flex flex-col h-full p-4 space-y-2">
                    {
                        NAV_ITEMS.iter().map(|item| {
                            let is_active = current == Some(item.route);
                            html! {
                                <Link<Route>
                                    to={item.route}
                                    classes={classes!(
                                        "flex",
                                        "items-center",
                                        "gap-2",
                                        "px-3",
                                        "py-2",
                                        "rounded-lg",
                                        "text-sm",
                                        "font-medium",
                                        if is_active {
                                            "bg-blue-100 text-blue-700 dark:bg-blue-900/40 dark:text-blue-300"
                                        } else {
                                            "hover:bg-gray-100 dark:hover:bg-gray-800"
                                        }
                                    )}
                                >
                                    <span>{item.icon}</span>
                                    {item.name}
                                </Link<Route>>
                            }
                        }).collect::<Html>()
                    }
                </nav>
            </aside>

            <main class="pb-16 md:pb-0 md:pl-64">
                {props.children.clone()}
            </main>

            // Mobile bottom navigation
            <nav class="fixed bottom-0 left-0 right-0 z-50 border-t border-gray-200 dark:border-gray-800 bg-white dark:bg-gray-950 md:hidden">
                <div class="grid grid-cols-6 h-16">
                    {
                        NAV_ITEMS.iter().map(|item| {
                            let is_active = current == Some(item.route);
                            html! {
                                <Link<Route>
                                    to={item.route}
                                    classes={classes!(
                                        "flex",
                                        "flex-col",
                                        "items-center",
                                        "justify-center",
                                        "space-y-1",
                                        "text-xs",
                                        if is_active { "text-blue-600 bg-blue-50 dark:bg-blue-900/30" } else { "text-gray-500 hover:text-gray-900" }
                                    )}
                                >
                                    <span>{item.icon}</span>
                                    <span class="text-[10px]">{item.name}</span>
                                </Link<Route>>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </nav>
        </div>
    }
}
