use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaClock, FaIndianRupeeSign, FaTriangleExclamation, FaUsers,
};
use dioxus_free_icons::Icon;

use api::models::Fee;

use crate::client::use_client;
use crate::components::{EmptyState, LoadError, Loader, StatCard};
use crate::format::{format_date, format_inr};
use crate::nav::NavTarget;

/// Landing page: the four headline counters, quick actions, and the
/// latest payments.
#[component]
pub fn DashboardView(on_nav: EventHandler<NavTarget>) -> Element {
    let client = use_client();
    let stats = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.dashboard_stats().await }
        }
    });
    let fees = use_resource(move || {
        let client = client.clone();
        async move { client.list_fees().await }
    });

    let recent_body = match &*fees.read_unchecked() {
        None => rsx! { Loader {} },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(list)) => {
            // Latest five payments, newest first. ISO dates sort
            // lexicographically.
            let mut paid: Vec<Fee> = list
                .iter()
                .filter(|f| f.paid_amount > 0.0)
                .cloned()
                .collect();
            paid.sort_by(|a, b| b.paid_date.cmp(&a.paid_date));
            paid.truncate(5);

            if paid.is_empty() {
                rsx! {
                    EmptyState { title: "No payments recorded yet".to_string() }
                }
            } else {
                rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Student" }
                                th { "Fee Type" }
                                th { "Paid" }
                                th { "Paid On" }
                            }
                        }
                        tbody {
                            for fee in paid {
                                tr { key: "{fee.id}",
                                    td { {fee.student_name().to_string()} }
                                    td { {fee.fee_type.label()} }
                                    td { {format_inr(fee.paid_amount)} }
                                    td { {format_date(fee.paid_date.as_deref())} }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "page dashboard",
            h2 { "Dashboard" }

            match &*stats.read_unchecked() {
                None => rsx! { Loader { message: "Loading dashboard...".to_string() } },
                Some(Err(err)) => rsx! {
                    LoadError {
                        message: err.user_message(),
                        unauthorized: err.is_unauthorized(),
                        on_nav,
                    }
                },
                Some(Ok(s)) => rsx! {
                    div { class: "stat-grid",
                        StatCard {
                            label: "Total Students",
                            value: "{s.total_students}",
                            accent: "accent-blue".to_string(),
                            Icon { width: 24, height: 24, icon: FaUsers }
                        }
                        StatCard {
                            label: "Total Fees",
                            value: format_inr(s.total_fees),
                            accent: "accent-green".to_string(),
                            Icon { width: 24, height: 24, icon: FaIndianRupeeSign }
                        }
                        StatCard {
                            label: "Pending Fees",
                            value: format_inr(s.pending_fees),
                            accent: "accent-red".to_string(),
                            Icon { width: 24, height: 24, icon: FaTriangleExclamation }
                        }
                        StatCard {
                            label: "Upcoming Fees",
                            value: format_inr(s.upcoming_fees),
                            accent: "accent-amber".to_string(),
                            Icon { width: 24, height: 24, icon: FaClock }
                        }
                    }
                },
            }

            div { class: "quick-actions",
                h3 { "Quick Actions" }
                div { class: "quick-actions-grid",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_nav.call(NavTarget::AddStudent),
                        "Add Student"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_nav.call(NavTarget::AddFee { student_id: None }),
                        "Add Fee"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_nav.call(NavTarget::DueFees),
                        "Review Due Fees"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_nav.call(NavTarget::UpcomingFees),
                        "Review Upcoming Fees"
                    }
                }
            }

            div { class: "recent-payments",
                h3 { "Recent Payments" }
                {recent_body}
            }
        }
    }
}
