use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::state::{Toast, ToastKind};

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(config::TOAST_DURATION_MS, move || {
                    on_dismiss.emit(id);
                });
                // Dropping the handle cancels the timer if the toast goes away first.
                move || drop(timeout)
            },
            props.toast.id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.toast.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let kind_class = match props.toast.kind {
        ToastKind::Success => "toast-success",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status" {onclick}>
            <span class="toast-mark">{"✓"}</span>
            <span class="toast-message">{&props.toast.message}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    html! {
        <div class="toaster" aria-live="polite">
            <style>
                {r#"
                .toaster {
                    position: fixed;
                    top: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 100;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    width: min(480px, calc(100% - 2rem));
                }
                .toast {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    padding: 1rem 1.25rem;
                    border-radius: 10px;
                    background: #ffffff;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
                    cursor: pointer;
                    animation: toastIn 0.3s ease-out;
                    font-size: 0.95rem;
                    color: #111827;
                }
                .toast-success {
                    border: 1px solid #bbf7d0;
                }
                .toast-success .toast-mark {
                    color: #16a34a;
                    font-weight: bold;
                }
                @keyframes toastIn {
                    from { transform: translateY(-20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            }) }
        </div>
    }
}
