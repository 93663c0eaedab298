use chrono::Local;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBell, FaIndianRupeeSign, FaTriangleExclamation};
use dioxus_free_icons::Icon;

use api::classify::{classify, is_due, Classification, Priority};
use api::models::Fee;
use api::notify::{build_bulk, bulk_result_texts, ReminderChannel, ReminderContext};

use crate::client::{handle_api_error, use_client};
use crate::components::{EmptyState, LoadError, Loader, StatCard, StatusBadge};
use crate::format::{format_date, format_inr};
use crate::nav::NavTarget;
use crate::reminder::{place_call, ReminderDialog};
use crate::toast::{toast_error, toast_success, use_toasts};

/// Due fees: the collection worklist. Sorted most urgent first, with
/// per-row collect/remind/call and a bulk-reminder action.
#[component]
pub fn DueFeesView(on_nav: EventHandler<NavTarget>) -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut search = use_signal(String::new);
    let mut reminder_for = use_signal(|| Option::<Fee>::None);
    let mut bulk_busy = use_signal(|| false);

    let fees = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.due_fees().await }
        }
    });

    let today = Local::now().date_naive();
    let needle = search().to_lowercase();
    let due_list: Vec<(Fee, Classification)> = match &*fees.read_unchecked() {
        Some(Ok(list)) => {
            let mut rows: Vec<(Fee, Classification)> = list
                .iter()
                .map(|f| (f.clone(), classify(f, today)))
                .filter(|(_, c)| is_due(c))
                .filter(|(f, _)| {
                    needle.is_empty() || f.student_name().to_lowercase().contains(&needle)
                })
                .collect();
            rows.sort_by(|(_, a), (_, b)| {
                a.priority
                    .cmp(&b.priority)
                    .then(a.days_left.unwrap_or(i64::MAX).cmp(&b.days_left.unwrap_or(i64::MAX)))
            });
            rows
        }
        _ => Vec::new(),
    };

    let send_bulk = {
        let client = client.clone();
        let bulk_fees: Vec<Fee> = due_list.iter().map(|(f, _)| f.clone()).collect();
        move |_| {
            if bulk_busy() {
                return;
            }
            match build_bulk(&bulk_fees, ReminderChannel::Both) {
                Err(err) => toast_error(&mut toasts, &err.to_string()),
                Ok(request) => {
                    bulk_busy.set(true);
                    let client = client.clone();
                    spawn(async move {
                        match client.send_bulk(&request).await {
                            Ok(response) => {
                                let (success, failure) = bulk_result_texts(&response.summary);
                                toast_success(&mut toasts, &success);
                                if let Some(failure) = failure {
                                    toast_error(&mut toasts, &failure);
                                }
                            }
                            Err(err) => handle_api_error(&mut toasts, &err),
                        }
                        bulk_busy.set(false);
                    });
                }
            }
        }
    };

    let total_due: f64 = due_list.iter().map(|(_, c)| c.due_amount).sum();
    let due_count = due_list.len();
    let critical = due_list
        .iter()
        .filter(|(_, c)| c.priority == Priority::Critical)
        .count();

    let body = match &*fees.read_unchecked() {
        None => rsx! { Loader { message: "Loading due fees...".to_string() } },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(_)) => {
            if due_list.is_empty() {
                rsx! {
                    EmptyState {
                        title: "No due fees".to_string(),
                        hint: "Every fee is settled. Well done.".to_string(),
                    }
                }
            } else {
                let rows = due_list.clone();
                rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Student" }
                                th { "Fee Type" }
                                th { "Due" }
                                th { "Due Date" }
                                th { "Priority" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for (fee, c) in rows {
                                tr { key: "{fee.id}",
                                    td { {fee.student_name().to_string()} }
                                    td { {fee.fee_type.label()} }
                                    td { {format_inr(c.due_amount)} }
                                    td {
                                        {format_date(fee.due_date.as_deref())}
                                        span { class: "days-note", {c.days_text()} }
                                    }
                                    td {
                                        StatusBadge { label: c.priority.label(), class: c.priority.css_class() }
                                    }
                                    td { class: "row-actions",
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let id = fee.student.as_ref().map(|s| s.id().to_string());
                                                move |_| on_nav.call(NavTarget::AddFee { student_id: id.clone() })
                                            },
                                            "Collect"
                                        }
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let fee = fee.clone();
                                                move |_| reminder_for.set(Some(fee.clone()))
                                            },
                                            "Remind"
                                        }
                                        button {
                                            class: "btn btn-link",
                                            disabled: fee.student_phone().is_none(),
                                            onclick: {
                                                let client = client.clone();
                                                let ctx = ReminderContext::from_fee(&fee);
                                                move |_| place_call(client.clone(), toasts, ctx.clone())
                                            },
                                            "Call"
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
        section { class: "page due-fees",
            div { class: "page-header",
                h2 { "Due Fees" }
                button {
                    class: "btn btn-primary",
                    disabled: bulk_busy() || due_list.is_empty(),
                    onclick: send_bulk,
                    Icon { width: 16, height: 16, icon: FaBell }
                    if bulk_busy() { "Sending..." } else { "Send Bulk Reminders" }
                }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search by student",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }

            div { class: "stat-grid",
                StatCard {
                    label: "Total Outstanding",
                    value: format_inr(total_due),
                    accent: "accent-red".to_string(),
                    Icon { width: 24, height: 24, icon: FaIndianRupeeSign }
                }
                StatCard {
                    label: "Due Records",
                    value: "{due_count}",
                    accent: "accent-amber".to_string(),
                    Icon { width: 24, height: 24, icon: FaBell }
                }
                StatCard {
                    label: "Critical",
                    value: "{critical}",
                    accent: "accent-red".to_string(),
                    Icon { width: 24, height: 24, icon: FaTriangleExclamation }
                }
            }

            {body}

            if let Some(fee) = reminder_for() {
                ReminderDialog { fee, on_close: move |_| reminder_for.set(None) }
            }
        }
    }
}
