//! Reminder dialog and the send helpers behind it.
//!
//! Channels are attempted independently: a failed email never blocks
//! the SMS, and each outcome gets its own toast.

use dioxus::prelude::*;

use api::models::Fee;
use api::notify::{build_call, build_reminders, ChannelPayload, ReminderChannel, ReminderContext};
use api::ApiError;

use crate::client::{handle_api_error, use_client, AppClient};
use crate::toast::{toast_error, toast_success, use_toasts, Toasts};

/// Submit each payload in turn, collecting per-channel outcomes.
pub async fn send_payloads(
    client: &AppClient,
    payloads: Vec<ChannelPayload>,
) -> (Vec<&'static str>, Vec<(&'static str, ApiError)>) {
    let mut sent = Vec::new();
    let mut failed = Vec::new();
    for payload in payloads {
        match payload {
            ChannelPayload::Email(p) => match client.send_email(&p).await {
                Ok(()) => sent.push("Email"),
                Err(e) => failed.push(("Email", e)),
            },
            ChannelPayload::Sms(p) => match client.send_sms(&p).await {
                Ok(()) => sent.push("SMS"),
                Err(e) => failed.push(("SMS", e)),
            },
        }
    }
    (sent, failed)
}

fn toast_outcomes(
    toasts: &mut Signal<Toasts>,
    student_name: &str,
    sent: Vec<&'static str>,
    failed: Vec<(&'static str, ApiError)>,
) {
    for label in sent {
        toast_success(toasts, &format!("{label} reminder sent to {student_name}"));
    }
    for (label, err) in failed {
        if err.is_unauthorized() {
            handle_api_error(toasts, &err);
        } else {
            toast_error(toasts, &format!("{label} failed to send"));
        }
    }
}

/// Place an automated call for one fee's student.
pub fn place_call(client: AppClient, mut toasts: Signal<Toasts>, ctx: ReminderContext) {
    match build_call(&ctx) {
        Err(err) => toast_error(&mut toasts, &err.to_string()),
        Ok(payload) => {
            spawn(async move {
                match client.make_call(&payload).await {
                    Ok(()) => toast_success(
                        &mut toasts,
                        &format!("Call initiated to {}", payload.student_name),
                    ),
                    Err(err) => handle_api_error(&mut toasts, &err),
                }
            });
        }
    }
}

/// Modal for sending a payment reminder over email, SMS, or both.
#[component]
pub fn ReminderDialog(fee: Fee, on_close: EventHandler<()>) -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut channel = use_signal(|| ReminderChannel::Both);
    let mut sending = use_signal(|| false);

    let ctx = ReminderContext::from_fee(&fee);
    let student_name = ctx.student_name.clone();
    let has_email = ctx.email.is_some();
    let has_phone = ctx.phone.is_some();

    let send_ctx = ctx.clone();
    let send_name = student_name.clone();
    let on_send = move |_| {
        if sending() {
            return;
        }
        match build_reminders(&send_ctx, channel()) {
            Err(err) => {
                toast_error(&mut toasts, &err.to_string());
                on_close.call(());
            }
            Ok(payloads) => {
                sending.set(true);
                let client = client.clone();
                let student_name = send_name.clone();
                spawn(async move {
                    let (sent, failed) = send_payloads(&client, payloads).await;
                    toast_outcomes(&mut toasts, &student_name, sent, failed);
                    sending.set(false);
                    on_close.call(());
                });
            }
        }
    };

    let selected = match channel() {
        ReminderChannel::Email => "email",
        ReminderChannel::Sms => "sms",
        ReminderChannel::Both => "both",
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                h3 { "Send Reminder" }
                p { "Send a payment reminder to {student_name}." }

                div { class: "form-field",
                    label { "Channel" }
                    select {
                        value: "{selected}",
                        onchange: move |e| {
                            channel.set(match e.value().as_str() {
                                "email" => ReminderChannel::Email,
                                "sms" => ReminderChannel::Sms,
                                _ => ReminderChannel::Both,
                            });
                        },
                        option { value: "both", {ReminderChannel::Both.label()} }
                        option { value: "email", disabled: !has_email, {ReminderChannel::Email.label()} }
                        option { value: "sms", disabled: !has_phone, {ReminderChannel::Sms.label()} }
                    }
                }

                if !has_email && !has_phone {
                    p { class: "form-error", "No email or phone number available for this student" }
                }

                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: sending() || (!has_email && !has_phone),
                        onclick: on_send,
                        if sending() { "Sending..." } else { "Send Reminder" }
                    }
                }
            }
        }
    }
}
