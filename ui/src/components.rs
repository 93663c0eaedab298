//! Small shared components every view composes.

use dioxus::prelude::*;

use crate::nav::NavTarget;

/// Centered spinner with an optional caption.
#[component]
pub fn Loader(#[props(default)] message: Option<String>) -> Element {
    rsx! {
        div { class: "loader",
            div { class: "spinner" }
            if let Some(message) = message {
                p { "{message}" }
            }
        }
    }
}

/// Placeholder for an empty list.
#[component]
pub fn EmptyState(title: String, #[props(default)] hint: Option<String>) -> Element {
    rsx! {
        div { class: "empty-state",
            h3 { "{title}" }
            if let Some(hint) = hint {
                p { "{hint}" }
            }
        }
    }
}

/// One dashboard-style stat card.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] accent: Option<String>,
    children: Element,
) -> Element {
    let accent = accent.unwrap_or_default();
    rsx! {
        div { class: "stat-card {accent}",
            div { class: "stat-icon", {children} }
            div { class: "stat-body",
                span { class: "stat-value", "{value}" }
                span { class: "stat-label", "{label}" }
            }
        }
    }
}

/// Modal confirmation dialog. Clicking the backdrop cancels.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    #[props(default)] danger: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let confirm_class = if danger {
        "btn btn-danger"
    } else {
        "btn btn-primary"
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                h3 { "{title}" }
                p { "{message}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "{confirm_class}",
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}

/// Inline panel for a failed page load. Expired sessions get a way back
/// to the login screen; everything else can retry via a reload.
#[component]
pub fn LoadError(
    message: String,
    #[props(default)] unauthorized: bool,
    on_nav: EventHandler<NavTarget>,
) -> Element {
    rsx! {
        div { class: "load-error",
            p { "{message}" }
            if unauthorized {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_nav.call(NavTarget::Login),
                    "Log in"
                }
            }
        }
    }
}

/// Colored status badge; `class` comes from the classifier.
#[component]
pub fn StatusBadge(label: &'static str, class: &'static str) -> Element {
    rsx! {
        span { class: "badge {class}", "{label}" }
    }
}
