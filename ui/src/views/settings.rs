use dioxus::prelude::*;

use api::models::{Admin, AdminInput, ChangePasswordRequest};

use crate::client::{handle_api_error, use_client};
use crate::components::{ConfirmDialog, LoadError, Loader};
use crate::nav::NavTarget;
use crate::session::use_session;
use crate::toast::{toast_error, toast_success, use_toasts};

/// Settings: change the signed-in admin's password, manage admins.
#[component]
pub fn SettingsView(on_nav: EventHandler<NavTarget>) -> Element {
    rsx! {
        section { class: "page settings",
            h2 { "Settings" }
            ChangePasswordCard {}
            AdminsCard { on_nav }
        }
    }
}

#[component]
fn ChangePasswordCard() -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut current = use_signal(String::new);
    let mut new = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }
        let current_password = current();
        let new_password = new();
        if current_password.is_empty() {
            toast_error(&mut toasts, "Please enter your current password");
            return;
        }
        if new_password.len() < 6 {
            toast_error(&mut toasts, "New password must be at least 6 characters");
            return;
        }
        if new_password != confirm() {
            toast_error(&mut toasts, "New passwords do not match");
            return;
        }

        busy.set(true);
        let client = client.clone();
        let request = ChangePasswordRequest {
            current_password,
            new_password,
        };
        spawn(async move {
            match client.change_password(&request).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Password changed successfully");
                    current.set(String::new());
                    new.set(String::new());
                    confirm.set(String::new());
                }
                Err(err) => handle_api_error(&mut toasts, &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        form { class: "form-card", onsubmit: submit,
            h3 { "Change Password" }
            div { class: "form-field",
                label { "Current Password" }
                input {
                    r#type: "password",
                    value: "{current}",
                    oninput: move |e| current.set(e.value()),
                }
            }
            div { class: "form-field",
                label { "New Password" }
                input {
                    r#type: "password",
                    value: "{new}",
                    oninput: move |e| new.set(e.value()),
                }
            }
            div { class: "form-field",
                label { "Confirm New Password" }
                input {
                    r#type: "password",
                    value: "{confirm}",
                    oninput: move |e| confirm.set(e.value()),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: busy(),
                if busy() { "Saving..." } else { "Change Password" }
            }
        }
    }
}

#[component]
fn AdminsCard(on_nav: EventHandler<NavTarget>) -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let session = use_session();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Admin>::None);

    let mut admins = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_admins().await }
        }
    });

    let own_email = session()
        .user
        .as_ref()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    let submit = {
        let client = client.clone();
        move |e: FormEvent| {
            e.prevent_default();
            if busy() {
                return;
            }
            let input = AdminInput {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
            };
            if input.name.is_empty() || input.email.is_empty() {
                toast_error(&mut toasts, "Name and email are required");
                return;
            }
            if input.password.len() < 6 {
                toast_error(&mut toasts, "Password must be at least 6 characters");
                return;
            }

            busy.set(true);
            let client = client.clone();
            spawn(async move {
                match client.add_admin(&input).await {
                    Ok(_) => {
                        toast_success(&mut toasts, "Admin added successfully");
                        name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        admins.restart();
                    }
                    Err(err) => handle_api_error(&mut toasts, &err),
                }
                busy.set(false);
            });
        }
    };

    let confirm_delete = move |_| {
        let Some(admin) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let client = client.clone();
        spawn(async move {
            match client.delete_admin(&admin.id).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Admin removed");
                    admins.restart();
                }
                Err(err) => handle_api_error(&mut toasts, &err),
            }
        });
    };

    let list_body = match &*admins.read_unchecked() {
        None => rsx! { Loader {} },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(list)) => {
            let rows: Vec<Admin> = list.clone();
            let own_email = own_email.clone();
            rsx! {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "" }
                        }
                    }
                    tbody {
                        for admin in rows {
                            tr { key: "{admin.id}",
                                td { "{admin.name}" }
                                td { "{admin.email}" }
                                td { {admin.role.clone().unwrap_or_else(|| "admin".to_string())} }
                                td {
                                    // An admin cannot remove their own account.
                                    if admin.email != own_email {
                                        button {
                                            class: "btn btn-link btn-link-danger",
                                            onclick: {
                                                let admin = admin.clone();
                                                move |_| pending_delete.set(Some(admin.clone()))
                                            },
                                            "Remove"
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
        div { class: "form-card",
            h3 { "Administrators" }
            {list_body}

            form { class: "admin-add-form", onsubmit: submit,
                h4 { "Add Admin" }
                div { class: "form-grid",
                    div { class: "form-field",
                        label { "Name" }
                        input {
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Password" }
                        input {
                            r#type: "password",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Adding..." } else { "Add Admin" }
                }
            }
        }

        if let Some(admin) = pending_delete() {
            ConfirmDialog {
                title: "Remove Admin".to_string(),
                message: format!("Remove {} from the administrators?", admin.name),
                confirm_label: "Remove".to_string(),
                danger: true,
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}
