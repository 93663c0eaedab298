use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaGraduationCap;
use dioxus_free_icons::Icon;

use api::models::LoginRequest;

use crate::client::use_client;
use crate::nav::NavTarget;
use crate::session::{session_login, use_session};
use crate::toast::{toast_error, toast_success, use_toasts};

/// Admin login screen.
#[component]
pub fn LoginView(on_nav: EventHandler<NavTarget>) -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }
        let email = email().trim().to_string();
        let password = password();
        if email.is_empty() || password.is_empty() {
            toast_error(&mut toasts, "Please enter email and password");
            return;
        }
        busy.set(true);
        let client = client.clone();
        spawn(async move {
            match client.login(&LoginRequest { email, password }).await {
                Ok(response) => {
                    session_login(&mut session, response.admin);
                    toast_success(&mut toasts, "Login successful");
                    on_nav.call(NavTarget::Dashboard);
                }
                Err(err) => toast_error(&mut toasts, &err.user_message()),
            }
            busy.set(false);
        });
    };

    rsx! {
        section { class: "login-page",
            form { class: "login-card", onsubmit: submit,
                div { class: "login-brand",
                    Icon { width: 40, height: 40, icon: FaGraduationCap }
                    h1 { "FeeDesk" }
                    p { "Fee Management Admin" }
                }
                div { class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "admin@school.test",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign In" }
                }
            }
        }
    }
}
