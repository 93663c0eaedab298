use chrono::Local;
use dioxus::prelude::*;

use api::classify::{classify, DisplayStatus};
use api::models::{Fee, PayFeeRequest};

use crate::client::{handle_api_error, use_client};
use crate::components::{ConfirmDialog, LoadError, Loader, StatusBadge};
use crate::format::{format_date, format_inr};
use crate::nav::NavTarget;
use crate::reminder::ReminderDialog;
use crate::toast::{toast_success, use_toasts};

/// One fee record in full, with mark-paid, reminder and delete actions.
#[component]
pub fn FeeDetailView(id: String, on_nav: EventHandler<NavTarget>) -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut reminder_open = use_signal(|| false);
    let mut pay_open = use_signal(|| false);
    let mut delete_open = use_signal(|| false);

    let mut fee = use_resource({
        let client = client.clone();
        let id = id.clone();
        move || {
            let client = client.clone();
            let id = id.clone();
            async move { client.get_fee(&id).await }
        }
    });

    let confirm_pay = {
        let client = client.clone();
        let id = id.clone();
        move |_| {
            pay_open.set(false);
            let client = client.clone();
            let id = id.clone();
            spawn(async move {
                match client.pay_fee(&id, &PayFeeRequest::full()).await {
                    Ok(()) => {
                        toast_success(&mut toasts, "Fee marked as paid");
                        fee.restart();
                    }
                    Err(err) => handle_api_error(&mut toasts, &err),
                }
            });
        }
    };

    let confirm_delete = {
        let client = client.clone();
        let id = id.clone();
        move |_| {
            delete_open.set(false);
            let client = client.clone();
            let id = id.clone();
            spawn(async move {
                match client.delete_fee(&id).await {
                    Ok(()) => {
                        toast_success(&mut toasts, "Fee record deleted");
                        on_nav.call(NavTarget::Fees);
                    }
                    Err(err) => handle_api_error(&mut toasts, &err),
                }
            });
        }
    };

    let today = Local::now().date_naive();
    let body = match &*fee.read_unchecked() {
        None => rsx! { Loader { message: "Loading fee...".to_string() } },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(record)) => {
            let record: Fee = record.clone();
            let c = classify(&record, today);
            let unsettled = c.status != DisplayStatus::Paid;
            let days = c.days_text();
            let dialog_fee = record.clone();

            rsx! {
                div { class: "detail-card",
                    div { class: "detail-head",
                        h3 { {record.fee_type.label()} }
                        StatusBadge { label: c.status.label(), class: c.status.css_class() }
                    }
                    dl { class: "detail-grid",
                        dt { "Student" }
                        dd { {record.student_name().to_string()} }
                        dt { "Amount" }
                        dd { {format_inr(record.amount)} }
                        dt { "Paid" }
                        dd { {format_inr(record.paid_amount)} }
                        dt { "Due" }
                        dd { {format_inr(c.due_amount)} }
                        dt { "Due Date" }
                        dd { {format_date(record.due_date.as_deref())} " ({days})" }
                        dt { "Priority" }
                        dd {
                            StatusBadge { label: c.priority.label(), class: c.priority.css_class() }
                        }
                        if let Some(method) = record.payment_method.clone().filter(|m| !m.is_empty()) {
                            dt { "Payment Method" }
                            dd { "{method}" }
                        }
                        if let Some(receipt) = record.receipt_number.clone().filter(|r| !r.is_empty()) {
                            dt { "Receipt No" }
                            dd { "{receipt}" }
                        }
                        if let Some(paid_date) = record.paid_date.clone() {
                            dt { "Paid On" }
                            dd { {format_date(Some(paid_date.as_str()))} }
                        }
                        if let Some(description) = record.description.clone().filter(|d| !d.is_empty()) {
                            dt { "Description" }
                            dd { "{description}" }
                        }
                        if let Some(remarks) = record.remarks.clone().filter(|r| !r.is_empty()) {
                            dt { "Remarks" }
                            dd { "{remarks}" }
                        }
                    }
                    div { class: "detail-actions",
                        if unsettled {
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| pay_open.set(true),
                                "Mark Paid"
                            }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| reminder_open.set(true),
                                "Send Reminder"
                            }
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| delete_open.set(true),
                            "Delete"
                        }
                    }
                }

                if reminder_open() {
                    ReminderDialog {
                        fee: dialog_fee.clone(),
                        on_close: move |_| reminder_open.set(false),
                    }
                }

                if pay_open() {
                    ConfirmDialog {
                        title: "Mark Fee as Paid".to_string(),
                        message: format!(
                            "Record full payment of {} for {}?",
                            format_inr(c.due_amount),
                            record.student_name()
                        ),
                        confirm_label: "Mark Paid".to_string(),
                        on_confirm: confirm_pay.clone(),
                        on_cancel: move |_| pay_open.set(false),
                    }
                }

                if delete_open() {
                    ConfirmDialog {
                        title: "Delete Fee".to_string(),
                        message: "Delete this fee record? This cannot be undone.".to_string(),
                        confirm_label: "Delete".to_string(),
                        danger: true,
                        on_confirm: confirm_delete.clone(),
                        on_cancel: move |_| delete_open.set(false),
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "page fee-detail",
            div { class: "page-header",
                h2 { "Fee Details" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_nav.call(NavTarget::Fees),
                    "Back to Fees"
                }
            }
            {body}
        }
    }
}
