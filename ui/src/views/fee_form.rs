use dioxus::prelude::*;

use api::models::{FeeInput, FeeType, Student};

use crate::client::use_client;
use crate::components::{LoadError, Loader};
use crate::nav::NavTarget;
use crate::toast::{toast_error, toast_success, use_toasts};

/// Add-fee form. A `student_id` preselects the student ("Collect Fee"
/// entry points).
#[component]
pub fn FeeFormView(
    #[props(default)] student_id: Option<String>,
    on_nav: EventHandler<NavTarget>,
) -> Element {
    let client = use_client();
    let mut toasts = use_toasts();

    let mut selected_student = use_signal({
        let student_id = student_id.clone();
        move || student_id.unwrap_or_default()
    });
    let mut fee_type = use_signal(|| FeeType::Tuition);
    let mut amount = use_signal(String::new);
    let mut due_date = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let students = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_students().await }
        }
    });

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }
        let student_id = selected_student();
        if student_id.is_empty() {
            toast_error(&mut toasts, "Please select a student");
            return;
        }
        let parsed = amount().trim().parse::<f64>();
        let amount = match parsed {
            Ok(a) if a > 0.0 => a,
            _ => {
                toast_error(&mut toasts, "Please enter a valid amount");
                return;
            }
        };
        let due_date = due_date();
        if due_date.is_empty() {
            toast_error(&mut toasts, "Please pick a due date");
            return;
        }

        let input = FeeInput {
            student_id,
            fee_type: fee_type(),
            amount,
            due_date,
            description: Some(description()).filter(|d| !d.trim().is_empty()),
            ..Default::default()
        };

        busy.set(true);
        let client = client.clone();
        spawn(async move {
            match client.create_fee(&input).await {
                Ok(_) => {
                    toast_success(&mut toasts, "Fee added successfully");
                    on_nav.call(NavTarget::Fees);
                }
                Err(err) => toast_error(&mut toasts, &err.user_message()),
            }
            busy.set(false);
        });
    };

    let student_select = match &*students.read_unchecked() {
        None => rsx! { Loader {} },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(list)) => {
            let options: Vec<Student> = list.clone();
            rsx! {
                select {
                    value: "{selected_student}",
                    onchange: move |e| selected_student.set(e.value()),
                    option { value: "", "Select a student" }
                    for student in options {
                        option {
                            key: "{student.id}",
                            value: "{student.id}",
                            selected: selected_student() == student.id,
                            "{student.name} ({student.class_name} {student.section})"
                        }
                    }
                }
            }
        }
    };

    let selected_type = fee_type().label();

    rsx! {
        section { class: "page fee-form",
            div { class: "page-header",
                h2 { "Add Fee" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_nav.call(NavTarget::Fees),
                    "Back to Fees"
                }
            }

            form { class: "form-card", onsubmit: submit,
                div { class: "form-field",
                    label { "Student *" }
                    {student_select}
                }
                div { class: "form-field",
                    label { "Fee Type *" }
                    select {
                        value: "{selected_type}",
                        onchange: move |e| fee_type.set(FeeType::from_label(&e.value())),
                        for t in FeeType::ALL {
                            option { value: t.label(), selected: fee_type() == t, {t.label()} }
                        }
                    }
                }
                div { class: "form-field",
                    label { "Amount *" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        placeholder: "0.00",
                        value: "{amount}",
                        oninput: move |e| amount.set(e.value()),
                    }
                }
                div { class: "form-field",
                    label { "Due Date *" }
                    input {
                        r#type: "date",
                        value: "{due_date}",
                        oninput: move |e| due_date.set(e.value()),
                    }
                }
                div { class: "form-field",
                    label { "Description" }
                    textarea {
                        value: "{description}",
                        oninput: move |e| description.set(e.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Saving..." } else { "Add Fee" }
                }
            }
        }
    }
}
