use chrono::Local;
use dioxus::prelude::*;

use api::classify::{classify, Classification, DisplayStatus};
use api::models::{Fee, PayFeeRequest};

use crate::client::{handle_api_error, use_client};
use crate::components::{ConfirmDialog, EmptyState, LoadError, Loader, StatusBadge};
use crate::format::{format_date, format_inr};
use crate::nav::NavTarget;
use crate::reminder::ReminderDialog;
use crate::toast::{toast_success, use_toasts};

const FILTERS: [(Option<DisplayStatus>, &str); 5] = [
    (None, "All"),
    (Some(DisplayStatus::Pending), "Pending"),
    (Some(DisplayStatus::Partial), "Partial"),
    (Some(DisplayStatus::Paid), "Paid"),
    (Some(DisplayStatus::Overdue), "Overdue"),
];

/// All fees: status filter chips with counts, paid/unpaid totals, search,
/// mark-paid, reminders, delete.
#[component]
pub fn FeesView(on_nav: EventHandler<NavTarget>) -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut search = use_signal(String::new);
    let mut filter = use_signal(|| Option::<DisplayStatus>::None);
    let mut reminder_for = use_signal(|| Option::<Fee>::None);
    let mut pay_pending = use_signal(|| Option::<Fee>::None);
    let mut delete_pending = use_signal(|| Option::<Fee>::None);

    let mut fees = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_fees().await }
        }
    });

    let confirm_pay = {
        let client = client.clone();
        move |_| {
            let Some(fee) = pay_pending() else {
                return;
            };
            pay_pending.set(None);
            let client = client.clone();
            spawn(async move {
                match client.pay_fee(&fee.id, &PayFeeRequest::full()).await {
                    Ok(()) => {
                        toast_success(&mut toasts, "Fee marked as paid");
                        fees.restart();
                    }
                    Err(err) => handle_api_error(&mut toasts, &err),
                }
            });
        }
    };

    let confirm_delete = {
        let client = client.clone();
        move |_| {
            let Some(fee) = delete_pending() else {
                return;
            };
            delete_pending.set(None);
            let client = client.clone();
            spawn(async move {
                match client.delete_fee(&fee.id).await {
                    Ok(()) => {
                        toast_success(&mut toasts, "Fee record deleted");
                        fees.restart();
                    }
                    Err(err) => handle_api_error(&mut toasts, &err),
                }
            });
        }
    };

    let today = Local::now().date_naive();
    let body = match &*fees.read_unchecked() {
        None => rsx! { Loader { message: "Loading fees...".to_string() } },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(list)) => {
            let classified: Vec<(Fee, Classification)> = list
                .iter()
                .map(|f| (f.clone(), classify(f, today)))
                .collect();

            let count_for = |status: Option<DisplayStatus>| {
                classified
                    .iter()
                    .filter(|(_, c)| status.map_or(true, |s| c.status == s))
                    .count()
            };
            let chips: Vec<(Option<DisplayStatus>, String)> = FILTERS
                .iter()
                .map(|(status, label)| (*status, format!("{label} ({})", count_for(*status))))
                .collect();
            let paid_total: f64 = classified.iter().map(|(f, _)| f.paid_amount).sum();
            let unpaid_total: f64 = classified.iter().map(|(_, c)| c.due_amount).sum();

            let needle = search().to_lowercase();
            let active = filter();
            let rows: Vec<(Fee, Classification)> = classified
                .iter()
                .filter(|(f, c)| {
                    active.map_or(true, |s| c.status == s)
                        && (needle.is_empty()
                            || f.student_name().to_lowercase().contains(&needle)
                            || f.fee_type.label().to_lowercase().contains(&needle))
                })
                .cloned()
                .collect();

            rsx! {
                div { class: "totals-row",
                    div { class: "total-chip total-paid",
                        span { "Collected" }
                        strong { {format_inr(paid_total)} }
                    }
                    div { class: "total-chip total-due",
                        span { "Outstanding" }
                        strong { {format_inr(unpaid_total)} }
                    }
                }

                div { class: "filter-chips",
                    for (status, label) in chips {
                        button {
                            class: if filter() == status { "chip chip-active" } else { "chip" },
                            onclick: move |_| filter.set(status),
                            "{label}"
                        }
                    }
                }

                if rows.is_empty() {
                    EmptyState {
                        title: "No fees match".to_string(),
                        hint: "Change the filter or search, or add a fee.".to_string(),
                    }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Student" }
                                th { "Fee Type" }
                                th { "Amount" }
                                th { "Due" }
                                th { "Due Date" }
                                th { "Status" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for (fee, c) in rows {
                                tr { key: "{fee.id}",
                                    td { {fee.student_name().to_string()} }
                                    td { {fee.fee_type.label()} }
                                    td { {format_inr(fee.amount)} }
                                    td { {format_inr(c.due_amount)} }
                                    td { {format_date(fee.due_date.as_deref())} }
                                    td {
                                        StatusBadge { label: c.status.label(), class: c.status.css_class() }
                                    }
                                    td { class: "row-actions",
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let id = fee.id.clone();
                                                move |_| on_nav.call(NavTarget::FeeDetail(id.clone()))
                                            },
                                            "View"
                                        }
                                        if c.status != DisplayStatus::Paid {
                                            button {
                                                class: "btn btn-link",
                                                onclick: {
                                                    let fee = fee.clone();
                                                    move |_| pay_pending.set(Some(fee.clone()))
                                                },
                                                "Mark Paid"
                                            }
                                            button {
                                                class: "btn btn-link",
                                                onclick: {
                                                    let fee = fee.clone();
                                                    move |_| reminder_for.set(Some(fee.clone()))
                                                },
                                                "Remind"
                                            }
                                        }
                                        button {
                                            class: "btn btn-link btn-link-danger",
                                            onclick: {
                                                let fee = fee.clone();
                                                move |_| delete_pending.set(Some(fee.clone()))
                                            },
                                            "Delete"
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
        section { class: "page fees",
            div { class: "page-header",
                h2 { "All Fees" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_nav.call(NavTarget::AddFee { student_id: None }),
                    "Add Fee"
                }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search by student or fee type",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }

            {body}

            if let Some(fee) = reminder_for() {
                ReminderDialog { fee, on_close: move |_| reminder_for.set(None) }
            }

            if let Some(fee) = pay_pending() {
                ConfirmDialog {
                    title: "Mark Fee as Paid".to_string(),
                    message: format!(
                        "Record full payment of {} for {}?",
                        format_inr(fee.due_amount()),
                        fee.student_name()
                    ),
                    confirm_label: "Mark Paid".to_string(),
                    on_confirm: confirm_pay,
                    on_cancel: move |_| pay_pending.set(None),
                }
            }

            if let Some(fee) = delete_pending() {
                ConfirmDialog {
                    title: "Delete Fee".to_string(),
                    message: format!(
                        "Delete this {} record for {}? This cannot be undone.",
                        fee.fee_type.label(),
                        fee.student_name()
                    ),
                    confirm_label: "Delete".to_string(),
                    danger: true,
                    on_confirm: confirm_delete,
                    on_cancel: move |_| delete_pending.set(None),
                }
            }
        }
    }
}
