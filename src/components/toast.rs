//! Transient notifications shared by every page.

use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    Show(Toast),
    Dismiss(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Show(toast) => self.toasts.push(toast),
            ToastAction::Dismiss(id) => self.toasts.retain(|t| t.id != id),
        }
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Handle for raising toasts, obtained with [`use_toast`].
#[derive(Clone, Default, PartialEq)]
pub struct ToastHandle {
    show: Callback<(String, String, ToastVariant)>,
}

impl ToastHandle {
    pub fn notify(&self, title: &str, description: &str) {
        self.show
            .emit((title.to_string(), description.to_string(), ToastVariant::Default));
    }

    pub fn error(&self, title: &str, description: &str) {
        self.show
            .emit((title.to_string(), description.to_string(), ToastVariant::Destructive));
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Html,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);

    let next_id = use_mut_ref(|| 0usize);

    let show = {
        let dispatcher = state.dispatcher();
        use_callback((), move |(title, description, variant): (String, String, ToastVariant), _| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            dispatcher.dispatch(ToastAction::Show(Toast {
                id,
                title,
                description,
                variant,
            }));

            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(TOAST_DURATION_MS).await;
                dispatcher.dispatch(ToastAction::Dismiss(id));
            });
        })
    };
    let handle = ToastHandle { show };

    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: usize| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            {props.children.clone()}
            <ToastViewport toasts={state.toasts.clone()} {on_dismiss} />
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewportProps {
    toasts: Vec<Toast>,
    on_dismiss: Callback<usize>,
}

#[function_component(ToastViewport)]
fn toast_viewport(props: &ToastViewportProps) -> Html {
    html! {
        <div class="fixed top-4 right-4 z-[100] flex flex-col gap-2 w-80">
            {
                props.toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_dismiss = props.on_dismiss.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(id));

                    html! {
                        <div
                            key={id}
                            role="status"
                            class={classes!(
                                "p-4",
                                "rounded-lg",
                                "border",
                                "shadow-lg",
                                match toast.variant {
                                    ToastVariant::Default => "bg-white border-gray-200 text-gray-900",
                                    ToastVariant::Destructive => "bg-red-600 border-red-700 text-white",
                                }
                            )}
                        >
                            <div class="flex items-start justify-between gap-2">
                                <div>
                                    <div class="text-sm font-semibold">{&toast.title}</div>
                                    <div class="text-sm opacity-90">{&toast.description}</div>
                                </div>
                                <button {onclick} class="text-xs opacity-70 hover:opacity-100">
                                    {"✕"}
                                </button>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(id: usize, title: &str) -> ToastAction {
        ToastAction::Show(Toast {
            id,
            title: title.to_string(),
            description: String::new(),
            variant: ToastVariant::Default,
        })
    }

    #[test]
    fn test_toasts_keep_order() {
        let mut state = ToastState::default();
        state.apply(show(1, "a"));
        state.apply(show(2, "b"));
        let titles: Vec<&str> = state.toasts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn test_dismiss_removes_only_target() {
        let mut state = ToastState::default();
        state.apply(show(1, "a"));
        state.apply(show(2, "b"));
        state.apply(ToastAction::Dismiss(1));
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].title, "b");

        state.apply(ToastAction::Dismiss(42));
        assert_eq!(state.toasts.len(), 1);
    }
}
