use dioxus::prelude::*;

use api::models::{Student, StudentInput};

use crate::client::use_client;
use crate::components::{LoadError, Loader};
use crate::nav::NavTarget;
use crate::toast::{toast_error, toast_success, use_toasts};

/// Add/edit student form. With an `id` the existing record is loaded and
/// the submit becomes an update.
#[component]
pub fn StudentFormView(
    #[props(default)] id: Option<String>,
    on_nav: EventHandler<NavTarget>,
) -> Element {
    let client = use_client();

    let existing = use_resource({
        let client = client.clone();
        let id = id.clone();
        move || {
            let client = client.clone();
            let id = id.clone();
            async move {
                match id {
                    Some(id) => client.get_student(&id).await.map(Some),
                    None => Ok(None),
                }
            }
        }
    });

    let title = if id.is_some() {
        "Edit Student"
    } else {
        "Add Student"
    };

    let body = match &*existing.read_unchecked() {
        None => rsx! { Loader {} },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(loaded)) => {
            let (initial, editing_id) = match loaded {
                Some(student) => (input_from(student), Some(student.id.clone())),
                None => (StudentInput::default(), None),
            };
            rsx! {
                StudentForm { initial, editing_id, on_nav }
            }
        }
    };

    rsx! {
        section { class: "page student-form",
            div { class: "page-header",
                h2 { "{title}" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_nav.call(NavTarget::Students),
                    "Back to Students"
                }
            }
            {body}
        }
    }
}

fn input_from(student: &Student) -> StudentInput {
    StudentInput {
        name: student.name.clone(),
        roll_number: student.roll_number.clone(),
        class_name: student.class_name.clone(),
        section: student.section.clone(),
        phone: student.phone.clone().unwrap_or_default(),
        email: student.email.clone().unwrap_or_default(),
        address: student.address.clone().unwrap_or_default(),
        parent_name: student.parent_name.clone().unwrap_or_default(),
        parent_phone: student.parent_phone.clone().unwrap_or_default(),
        admission_date: student
            .admission_date
            .clone()
            .map(|d| d.chars().take(10).collect())
            .unwrap_or_default(),
        total_fee: student.total_fee,
    }
}

#[component]
fn StudentForm(
    initial: StudentInput,
    #[props(default)] editing_id: Option<String>,
    on_nav: EventHandler<NavTarget>,
) -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let total_fee_init = initial.total_fee;
    let mut form = use_signal(move || initial);
    let mut total_fee = use_signal(move || {
        if total_fee_init > 0.0 {
            total_fee_init.to_string()
        } else {
            String::new()
        }
    });
    let mut busy = use_signal(|| false);

    let editing = editing_id.is_some();
    let submit = move |e: FormEvent| {
        e.prevent_default();
        if busy() {
            return;
        }
        let mut input = form();
        input.name = input.name.trim().to_string();
        if input.name.is_empty() || input.roll_number.trim().is_empty() || input.class_name.trim().is_empty() {
            toast_error(&mut toasts, "Name, roll number and class are required");
            return;
        }
        match total_fee().trim().parse::<f64>() {
            Ok(amount) if amount >= 0.0 => input.total_fee = amount,
            _ => {
                toast_error(&mut toasts, "Please enter a valid total fee amount");
                return;
            }
        }

        busy.set(true);
        let client = client.clone();
        let editing_id = editing_id.clone();
        spawn(async move {
            let result = match &editing_id {
                Some(id) => client.update_student(id, &input).await.map(|_| ()),
                None => client.create_student(&input).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    let message = if editing_id.is_some() {
                        "Student updated successfully"
                    } else {
                        "Student added successfully"
                    };
                    toast_success(&mut toasts, message);
                    on_nav.call(NavTarget::Students);
                }
                Err(err) => toast_error(&mut toasts, &err.user_message()),
            }
            busy.set(false);
        });
    };

    rsx! {
        form { class: "form-card", onsubmit: submit,
            div { class: "form-grid",
                div { class: "form-field",
                    label { "Name *" }
                    input {
                        value: "{form().name}",
                        oninput: move |e| form.write().name = e.value(),
                    }
                }
                div { class: "form-field",
                    label { "Roll Number *" }
                    input {
                        value: "{form().roll_number}",
                        oninput: move |e| form.write().roll_number = e.value(),
                    }
                }
                div { class: "form-field",
                    label { "Class *" }
                    input {
                        value: "{form().class_name}",
                        oninput: move |e| form.write().class_name = e.value(),
                    }
                }
                div { class: "form-field",
                    label { "Section" }
                    input {
                        value: "{form().section}",
                        oninput: move |e| form.write().section = e.value(),
                    }
                }
                div { class: "form-field",
                    label { "Phone" }
                    input {
                        r#type: "tel",
                        value: "{form().phone}",
                        oninput: move |e| form.write().phone = e.value(),
                    }
                }
                div { class: "form-field",
                    label { "Email" }
                    input {
                        r#type: "email",
                        value: "{form().email}",
                        oninput: move |e| form.write().email = e.value(),
                    }
                }
                div { class: "form-field",
                    label { "Parent Name" }
                    input {
                        value: "{form().parent_name}",
                        oninput: move |e| form.write().parent_name = e.value(),
                    }
                }
                div { class: "form-field",
                    label { "Parent Phone" }
                    input {
                        r#type: "tel",
                        value: "{form().parent_phone}",
                        oninput: move |e| form.write().parent_phone = e.value(),
                    }
                }
                div { class: "form-field",
                    label { "Admission Date" }
                    input {
                        r#type: "date",
                        value: "{form().admission_date}",
                        oninput: move |e| form.write().admission_date = e.value(),
                    }
                }
                div { class: "form-field",
                    label { "Total Fee *" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.01",
                        value: "{total_fee}",
                        oninput: move |e| total_fee.set(e.value()),
                    }
                }
                div { class: "form-field form-field-wide",
                    label { "Address" }
                    textarea {
                        value: "{form().address}",
                        oninput: move |e| form.write().address = e.value(),
                    }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: busy(),
                if busy() {
                    "Saving..."
                } else if editing {
                    "Update Student"
                } else {
                    "Add Student"
                }
            }
        }
    }
}
