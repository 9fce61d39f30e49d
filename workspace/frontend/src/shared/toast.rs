use yew::prelude::*;

use crate::settings;

#[derive(Clone, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastType::Info => "alert-info",
            ToastType::Success => "alert-success",
            ToastType::Warning => "alert-warning",
            ToastType::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fas fa-info-circle",
            ToastType::Success => "fas fa-check-circle",
            ToastType::Warning => "fas fa-exclamation-triangle",
            ToastType::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub title: String,
    pub message: String,
    pub toast_type: ToastType,
}

/// Transient notifications. Outside a provider every call is a no-op.
#[derive(Clone, PartialEq, Default)]
pub struct ToastContext {
    pub add_toast: Callback<(String, String, ToastType)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_info(&self, title: &str, message: impl Into<String>) {
        self.add_toast
            .emit((title.to_string(), message.into(), ToastType::Info));
    }

    pub fn show_success(&self, title: &str, message: impl Into<String>) {
        self.add_toast
            .emit((title.to_string(), message.into(), ToastType::Success));
    }

    pub fn show_warning(&self, title: &str, message: impl Into<String>) {
        self.add_toast
            .emit((title.to_string(), message.into(), ToastType::Warning));
    }

    pub fn show_error(&self, title: &str, message: impl Into<String>) {
        self.add_toast
            .emit((title.to_string(), message.into(), ToastType::Error));
    }
}

#[hook]
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0usize);

    let add_toast = {
        let toasts = toasts.clone();

        Callback::from(move |(title, message, toast_type): (String, String, ToastType)| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            toasts.dispatch(ToastAction::Add(Toast {
                id,
                title,
                message,
                toast_type,
            }));

            let duration = settings::get_settings().toast_duration_ms;
            let toasts = toasts.clone();
            let timeout_handle = gloo_timers::callback::Timeout::new(duration, move || {
                toasts.dispatch(ToastAction::Remove(id));
            });
            timeout_handle.forget();
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: usize| toasts.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.items.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.toast_type.alert_class(), "shadow-lg")}>
                            <i class={toast.toast_type.icon()}></i>
                            <div class="flex flex-col">
                                <span class="font-semibold">{&toast.title}</span>
                                <span class="text-sm">{&toast.message}</span>
                            </div>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[derive(Default, PartialEq)]
struct ToastList {
    items: Vec<Toast>,
}

enum ToastAction {
    Add(Toast),
    Remove(usize),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: std::rc::Rc<Self>, action: ToastAction) -> std::rc::Rc<Self> {
        let mut items = self.items.clone();
        match action {
            ToastAction::Add(toast) => items.push(toast),
            ToastAction::Remove(id) => items.retain(|t| t.id != id),
        }
        std::rc::Rc::new(Self { items })
    }
}
