use chrono::Local;
use dioxus::prelude::*;

use api::classify::{classify, Classification};
use api::models::{Fee, Student};
use api::notify::{ReminderContext, REMINDER_MESSAGE};

use crate::client::use_client;
use crate::components::{EmptyState, LoadError, Loader, StatusBadge};
use crate::format::{format_date, format_inr, initials};
use crate::nav::NavTarget;
use crate::reminder::place_call;
use crate::toast::use_toasts;

/// One student: profile, fee totals, and their fee history.
#[component]
pub fn StudentDetailView(id: String, on_nav: EventHandler<NavTarget>) -> Element {
    let client = use_client();
    let toasts = use_toasts();

    let student = use_resource({
        let client = client.clone();
        let id = id.clone();
        move || {
            let client = client.clone();
            let id = id.clone();
            async move { client.get_student(&id).await }
        }
    });
    let fees = use_resource({
        let client = client.clone();
        let id = id.clone();
        move || {
            let client = client.clone();
            let id = id.clone();
            async move { client.student_fees(&id).await }
        }
    });

    let body = match &*student.read_unchecked() {
        None => rsx! { Loader { message: "Loading student...".to_string() } },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(s)) => {
            let s: Student = s.clone();
            let avatar = initials(&s.name);
            let phone = s.phone.clone();
            let call_disabled = phone.as_deref().map_or(true, str::is_empty);

            let call_client = client.clone();
            let call_name = s.name.clone();
            let on_call = move |_| {
                let ctx = ReminderContext {
                    student_name: call_name.clone(),
                    phone: phone.clone().filter(|p| !p.is_empty()),
                    message: REMINDER_MESSAGE.to_string(),
                    ..Default::default()
                };
                place_call(call_client.clone(), toasts, ctx);
            };

            rsx! {
                div { class: "profile-card",
                    div { class: "avatar avatar-lg", "{avatar}" }
                    div { class: "profile-meta",
                        h3 { "{s.name}" }
                        p { "Roll {s.roll_number} | {s.class_name} {s.section}" }
                        p { {s.phone.clone().unwrap_or_else(|| "No phone".to_string())} }
                        p { {s.email.clone().unwrap_or_else(|| "No email".to_string())} }
                        p { "Admitted: " {format_date(s.admission_date.as_deref())} }
                        if let Some(parent) = s.parent_name.clone().filter(|p| !p.is_empty()) {
                            p { "Parent: {parent}" }
                        }
                    }
                    div { class: "profile-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: {
                                let id = s.id.clone();
                                move |_| on_nav.call(NavTarget::AddFee { student_id: Some(id.clone()) })
                            },
                            "Collect Fee"
                        }
                        button {
                            class: "btn btn-secondary",
                            onclick: {
                                let id = s.id.clone();
                                move |_| on_nav.call(NavTarget::EditStudent(id.clone()))
                            },
                            "Edit"
                        }
                        button {
                            class: "btn btn-secondary",
                            disabled: call_disabled,
                            onclick: on_call,
                            "Call"
                        }
                    }
                }

                div { class: "totals-row",
                    div { class: "total-chip",
                        span { "Total Fee" }
                        strong { {format_inr(s.total_fee)} }
                    }
                    div { class: "total-chip total-paid",
                        span { "Paid" }
                        strong { {format_inr(s.paid_amount)} }
                    }
                    div { class: "total-chip total-due",
                        span { "Due" }
                        strong { {format_inr(s.due_amount())} }
                    }
                }
            }
        }
    };

    let today = Local::now().date_naive();
    let fees_body = match &*fees.read_unchecked() {
        None => rsx! { Loader {} },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(list)) => {
            if list.is_empty() {
                rsx! {
                    EmptyState { title: "No fee records for this student".to_string() }
                }
            } else {
                let rows: Vec<(Fee, Classification)> = list
                    .iter()
                    .map(|f| (f.clone(), classify(f, today)))
                    .collect();
                rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Fee Type" }
                                th { "Amount" }
                                th { "Paid" }
                                th { "Due" }
                                th { "Due Date" }
                                th { "Status" }
                                th { "" }
                            }
                        }
                        tbody {
                            for (fee, c) in rows {
                                tr { key: "{fee.id}",
                                    td { {fee.fee_type.label()} }
                                    td { {format_inr(fee.amount)} }
                                    td { {format_inr(fee.paid_amount)} }
                                    td { {format_inr(c.due_amount)} }
                                    td { {format_date(fee.due_date.as_deref())} }
                                    td {
                                        StatusBadge { label: c.status.label(), class: c.status.css_class() }
                                    }
                                    td {
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let id = fee.id.clone();
                                                move |_| on_nav.call(NavTarget::FeeDetail(id.clone()))
                                            },
                                            "View"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "page student-detail",
            div { class: "page-header",
                h2 { "Student Details" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_nav.call(NavTarget::Students),
                    "Back to Students"
                }
            }
            {body}
            h3 { "Fee History" }
            {fees_body}
        }
    }
}
