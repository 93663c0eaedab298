use dioxus::prelude::*;

use api::models::Student;

use crate::client::{handle_api_error, use_client};
use crate::components::{ConfirmDialog, EmptyState, LoadError, Loader};
use crate::format::format_inr;
use crate::nav::NavTarget;
use crate::toast::{toast_success, use_toasts};

/// All students: searchable table with view/collect/edit/delete actions.
#[component]
pub fn StudentsView(on_nav: EventHandler<NavTarget>) -> Element {
    let client = use_client();
    let mut toasts = use_toasts();
    let mut search = use_signal(String::new);
    let mut pending_delete = use_signal(|| Option::<Student>::None);

    let mut students = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { client.list_students().await }
        }
    });

    let confirm_delete = move |_| {
        let Some(student) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        let client = client.clone();
        spawn(async move {
            match client.delete_student(&student.id).await {
                Ok(()) => {
                    toast_success(&mut toasts, "Student deleted successfully");
                    students.restart();
                }
                Err(err) => handle_api_error(&mut toasts, &err),
            }
        });
    };

    let body = match &*students.read_unchecked() {
        None => rsx! { Loader {} },
        Some(Err(err)) => rsx! {
            LoadError {
                message: err.user_message(),
                unauthorized: err.is_unauthorized(),
                on_nav,
            }
        },
        Some(Ok(list)) => {
            let needle = search().to_lowercase();
            let filtered: Vec<Student> = list
                .iter()
                .filter(|s| {
                    needle.is_empty()
                        || s.name.to_lowercase().contains(&needle)
                        || s.roll_number.to_lowercase().contains(&needle)
                        || s.class_name.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();

            if filtered.is_empty() {
                rsx! {
                    EmptyState {
                        title: "No students found".to_string(),
                        hint: "Try a different search, or add a student.".to_string(),
                    }
                }
            } else {
                rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Roll No" }
                                th { "Class" }
                                th { "Phone" }
                                th { "Due Amount" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for student in filtered {
                                tr { key: "{student.id}",
                                    td { "{student.name}" }
                                    td { "{student.roll_number}" }
                                    td { "{student.class_name} {student.section}" }
                                    td { {student.phone.clone().unwrap_or_else(|| "N/A".to_string())} }
                                    td { {format_inr(student.due_amount())} }
                                    td { class: "row-actions",
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let id = student.id.clone();
                                                move |_| on_nav.call(NavTarget::StudentDetail(id.clone()))
                                            },
                                            "View"
                                        }
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let id = student.id.clone();
                                                move |_| on_nav.call(NavTarget::AddFee { student_id: Some(id.clone()) })
                                            },
                                            "Collect Fee"
                                        }
                                        button {
                                            class: "btn btn-link",
                                            onclick: {
                                                let id = student.id.clone();
                                                move |_| on_nav.call(NavTarget::EditStudent(id.clone()))
                                            },
                                            "Edit"
                                        }
                                        button {
                                            class: "btn btn-link btn-link-danger",
                                            onclick: {
                                                let student = student.clone();
                                                move |_| pending_delete.set(Some(student.clone()))
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
        section { class: "page students",
            div { class: "page-header",
                h2 { "Students" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_nav.call(NavTarget::AddStudent),
                    "Add Student"
                }
            }

            input {
                class: "search-input",
                r#type: "search",
                placeholder: "Search by name, roll number or class",
                value: "{search}",
                oninput: move |e| search.set(e.value()),
            }

            {body}

            if let Some(student) = pending_delete() {
                ConfirmDialog {
                    title: "Delete Student".to_string(),
                    message: format!(
                        "Delete {} and all their fee records? This cannot be undone.",
                        student.name
                    ),
                    confirm_label: "Delete".to_string(),
                    danger: true,
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
