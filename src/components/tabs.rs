use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps<T: Clone + PartialEq + 'static> {
    pub tabs: Vec<(T, &'static str)>,
    pub active: T,
    pub on_select: Callback<T>,
}

/// Row of equal-width tab triggers.
#[function_component(TabBar)]
pub fn tab_bar<T: Clone + PartialEq + 'static>(props: &TabBarProps<T>) -> Html {
    html! {
        <div
            class="grid w-full gap-1 p-1 rounded-lg bg-gray-100 dark:bg-gray-800"
            style={format!("grid-template-columns: repeat({}, minmax(0, 1fr))", props.tabs.len())}
        >
            {
                props.tabs.iter().map(|(tab, label)| {
                    let is_active = *tab == props.active;
                    let on_select = props.on_select.clone();
                    let tab = tab.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(tab.clone()));

                    html! {
                        <button
                            {onclick}
                            class={classes!(
                                "px-3",
                                "py-1.5",
                                "rounded-md",
                                "text-sm",
                                "font-medium",
                                "transition-colors",
                                if is_active {
                                    "bg-white dark:bg-gray-950 shadow-sm"
                                } else {
                                    "text-gray-500 hover:text-gray-900 dark:hover:text-gray-100"
                                }
                            )}
                        >
                            {*label}
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
