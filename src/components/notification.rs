use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Context handle components use to raise a toast.
#[derive(Clone, PartialEq)]
pub struct Toaster(pub Callback<(ToastKind, String)>);

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.0.emit((ToastKind::Success, message.into()));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.0.emit((ToastKind::Error, message.into()));
    }
}

#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| {
        Toaster(Callback::from(|(_, message): (ToastKind, String)| {
            log::info!("Toast without provider: {}", message);
        }))
    })
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    // Dismiss after a fixed time; a newer toast replaces the timer.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<Toast>| {
                let timeout = toast.as_ref().map(|t| {
                    let id = t.id;
                    Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(id))
                });
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let (class, icon) = match toast.kind {
        ToastKind::Success => ("toast toast-success", "✔"),
        ToastKind::Error => ("toast toast-error", "✖"),
    };
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        let id = toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class="toast-layer" role="status" aria-live="polite">
            <style>
                {r#"
                    .toast-layer {
                        position: fixed;
                        top: 1.25rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 100;
                    }
                    .toast {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        padding: 0.7rem 1.2rem;
                        border-radius: 10px;
                        background: #ffffff;
                        color: #1f2937;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                        animation: slideIn 0.3s ease-out;
                        cursor: pointer;
                    }
                    .toast-success .toast-icon { color: #16a34a; }
                    .toast-error .toast-icon { color: #dc2626; }
                "#}
            </style>
            <div key={toast.id} class={class} onclick={dismiss}>
                <span class="toast-icon">{icon}</span>
                <span>{&toast.message}</span>
            </div>
        </div>
    }
}
