use chrono::Local;
use dioxus::prelude::*;

use api::classify::{classify, is_upcoming, Classification};
use api::models::Fee;

use crate::client::use_client;
use crate::components::{EmptyState, LoadError, Loader, StatusBadge};
use crate::format::{format_date, format_inr};
use crate::nav::NavTarget;
use crate::reminder::ReminderDialog;

const WINDOWS: [(Option<i64>, &str); 4] = [
    (Some(7), "Next 7 days"),
    (Some(15), "Next 15 days"),
    (Some(30), "Next 30 days"),
    (None, "All upcoming"),
];

/// Upcoming fees: what falls due soon, bucketed by urgency.
#[component]
pub fn UpcomingFeesView(on_nav: EventHandler<NavTarget>) -> Element {
    let client = use_client();
    let mut window = use_signal(|| Some(30i64));
    let mut reminder_for = use_signal(|| Option::<Fee>::None);

    let fees = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.upcoming_fees().await }
        }
    });

    let today = Local::now().date_naive();
    let body = match &*fees.read_unchecked() {
        None => rsx! { Loader { message: "Loading upcoming fees...".to_string() } },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(list)) => {
            let limit = window();
            let mut rows: Vec<(Fee, Classification)> = list
                .iter()
                .map(|f| (f.clone(), classify(f, today)))
                .filter(|(_, c)| is_upcoming(c))
                .filter(|(_, c)| match (limit, c.days_left) {
                    (Some(limit), Some(days)) => days <= limit,
                    (Some(_), None) => false,
                    (None, _) => true,
                })
                .collect();
            rows.sort_by_key(|(_, c)| c.days_left.unwrap_or(i64::MAX));

            let total: f64 = rows.iter().map(|(_, c)| c.due_amount).sum();
            let count = rows.len();
            let total_text = format_inr(total);

            if rows.is_empty() {
                rsx! {
                    EmptyState {
                        title: "Nothing due in this window".to_string(),
                        hint: "Widen the window to see later fees.".to_string(),
                    }
                }
            } else {
                rsx! {
                    p { class: "window-summary", "{count} fees, {total_text} expected" }
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Student" }
                                th { "Fee Type" }
                                th { "Amount Due" }
                                th { "Due Date" }
                                th { "Priority" }
                                th { "" }
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
                                                let fee = fee.clone();
                                                move |_| reminder_for.set(Some(fee.clone()))
                                            },
                                            "Remind"
                                        }
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
        section { class: "page upcoming-fees",
            div { class: "page-header",
                h2 { "Upcoming Fees" }
            }

            div { class: "filter-chips",
                for (limit, label) in WINDOWS {
                    button {
                        class: if window() == limit { "chip chip-active" } else { "chip" },
                        onclick: move |_| window.set(limit),
                        "{label}"
                    }
                }
            }

            {body}

            if let Some(fee) = reminder_for() {
                ReminderDialog { fee, on_close: move |_| reminder_for.set(None) }
            }
        }
    }
}
