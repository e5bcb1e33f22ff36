use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::lead::Notifier;

pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub description: String,
}

pub enum ToastAction {
    Push { title: String, description: String },
    Dismiss(u32),
}

/// Toasts on screen. Only the newest one is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

impl ToastQueue {
    pub fn apply(&mut self, action: ToastAction) {
        match action {
            ToastAction::Push { title, description } => {
                let id = self.next_id;
                self.next_id = self.next_id.wrapping_add(1);
                self.toasts = vec![Toast { id, title, description }];
            }
            ToastAction::Dismiss(id) => self.toasts.retain(|toast| toast.id != id),
        }
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Handle handed out through context to anything that wants to show a toast.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatcher: Option<UseReducerDispatcher<ToastQueue>>,
}

impl Toaster {
    /// Toaster with no host mounted; messages only reach the log.
    pub fn detached() -> Self {
        Self { dispatcher: None }
    }
}

impl Notifier for Toaster {
    fn notify(&self, title: &str, description: &str) {
        match &self.dispatcher {
            Some(dispatcher) => dispatcher.dispatch(ToastAction::Push {
                title: title.to_string(),
                description: description.to_string(),
            }),
            None => info!("Toast without host: {} - {}", title, description),
        }
    }
}

#[hook]
pub fn use_toast() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(Toaster::detached)
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let toaster = Toaster {
        dispatcher: Some(queue.dispatcher()),
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <style>
                {r#"
                    .toast-viewport {
                        position: fixed;
                        bottom: 0;
                        right: 0;
                        z-index: 100;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                        padding: 16px;
                        max-width: 420px;
                        width: 100%;
                    }
                    .toast {
                        position: relative;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        border-radius: 8px;
                        padding: 16px 40px 16px 16px;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-title { font-weight: 600; font-size: 0.9rem; }
                    .toast-description { font-size: 0.9rem; opacity: 0.9; }
                    .toast-close {
                        position: absolute;
                        top: 8px;
                        right: 8px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: #6b7280;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <ol class="toast-viewport">
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastView key={toast.id} toast={toast.clone()} dispatcher={queue.dispatcher()} />
                }) }
            </ol>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastViewProps {
    toast: Toast,
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastViewProps) -> Html {
    let id = props.toast.id;

    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(TOAST_DURATION_MS, move || {
                    dispatcher.dispatch(ToastAction::Dismiss(id));
                });
                // Dropping the timeout on unmount cancels it.
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <li class="toast" role="status">
            <div class="toast-title">{ &props.toast.title }</div>
            <div class="toast-description">{ &props.toast.description }</div>
            <button class="toast-close" onclick={close}>{"✕"}</button>
        </li>
    }
}
