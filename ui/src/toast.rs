//! Transient toast notifications.
//!
//! A context-held list of entries plus a host component that renders
//! them top-right. Success/info toasts auto-dismiss in the browser;
//! every toast can also be clicked away.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Push a toast and schedule its dismissal.
pub fn push_toast(toasts: &mut Signal<Toasts>, level: ToastLevel, message: &str) {
    let id = {
        let mut t = toasts.write();
        t.next_id += 1;
        let id = t.next_id;
        t.entries.push(Toast {
            id,
            level,
            message: message.to_string(),
        });
        id
    };

    #[cfg(target_arch = "wasm32")]
    {
        let mut toasts = *toasts;
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
            toasts.write().entries.retain(|t| t.id != id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

pub fn toast_success(toasts: &mut Signal<Toasts>, message: &str) {
    push_toast(toasts, ToastLevel::Success, message);
}

pub fn toast_error(toasts: &mut Signal<Toasts>, message: &str) {
    push_toast(toasts, ToastLevel::Error, message);
}

/// Provides the toast context and renders the stack above `children`.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        ToastHost { toasts: toasts }
        {children}
    }
}

#[component]
fn ToastHost(toasts: Signal<Toasts>) -> Element {
    let mut toasts = toasts;

    let entries: Vec<(u64, &'static str, String)> = toasts()
        .entries
        .iter()
        .map(|t| (t.id, t.level.css_class(), t.message.clone()))
        .collect();

    rsx! {
        div {
            class: "toast-stack",
            for (id, class, message) in entries {
                div {
                    key: "{id}",
                    class: "{class}",
                    onclick: move |_| {
                        toasts.write().entries.retain(|t| t.id != id);
                    },
                    "{message}"
                }
            }
        }
    }
}
