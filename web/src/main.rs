use dioxus::prelude::*;

use ui::{
    session_logout, use_client, use_session, ClientProvider, DashboardView, DueFeesView,
    FeeDetailView, FeeFormView, FeesView, LoginView, NavSection, NavTarget, SessionProvider,
    SettingsView, StudentDetailView, StudentFormView, StudentsView, ToastProvider,
    UpcomingFeesView,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/students/show")]
        Students {},
        #[route("/students/add")]
        AddStudent {},
        #[route("/students/edit/:id")]
        EditStudent { id: String },
        #[route("/students/details/:id")]
        StudentDetail { id: String },
        #[route("/fees/show")]
        Fees {},
        #[route("/fees/add?:student")]
        AddFee { student: String },
        #[route("/fees/details/:id")]
        FeeDetail { id: String },
        #[route("/fees/due")]
        DueFees {},
        #[route("/fees/upcoming")]
        UpcomingFees {},
        #[route("/settings")]
        Settings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ClientProvider {
            SessionProvider {
                ToastProvider {
                    Router::<Route> {}
                }
            }
        }
    }
}

/// Map the UI's navigation targets onto this app's routes.
fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::Login => Route::Login {},
        NavTarget::Dashboard => Route::Dashboard {},
        NavTarget::Students => Route::Students {},
        NavTarget::AddStudent => Route::AddStudent {},
        NavTarget::EditStudent(id) => Route::EditStudent { id },
        NavTarget::StudentDetail(id) => Route::StudentDetail { id },
        NavTarget::Fees => Route::Fees {},
        NavTarget::AddFee { student_id } => Route::AddFee {
            student: student_id.unwrap_or_default(),
        },
        NavTarget::FeeDetail(id) => Route::FeeDetail { id },
        NavTarget::DueFees => Route::DueFees {},
        NavTarget::UpcomingFees => Route::UpcomingFees {},
        NavTarget::Settings => Route::Settings {},
    }
}

fn section_for(route: &Route) -> NavSection {
    match route {
        Route::Students {}
        | Route::AddStudent {}
        | Route::EditStudent { .. }
        | Route::StudentDetail { .. } => NavSection::Students,
        Route::AddFee { .. } => NavSection::AddFee,
        Route::Fees {} | Route::FeeDetail { .. } => NavSection::Fees,
        Route::DueFees {} => NavSection::DueFees,
        Route::UpcomingFees {} => NavSection::UpcomingFees,
        Route::Settings {} => NavSection::Settings,
        _ => NavSection::Dashboard,
    }
}

/// Authenticated shell: sidebar plus the routed page. Unauthenticated
/// visitors are sent to the login screen.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();
    let mut session = use_session();
    let client = use_client();
    let route = use_route::<Route>();

    if !session().authenticated {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    let on_logout = move |_| {
        session_logout(client.session(), &mut session);
        nav.push(Route::Login {});
    };

    rsx! {
        div { class: "app-shell",
            ui::AppSidebar {
                active: section_for(&route),
                on_nav: move |target| {
                    nav.push(route_for(target));
                },
                on_logout,
            }
            main { class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect `/` by session state.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    let session = use_session();
    if session().authenticated {
        nav.replace(Route::Dashboard {});
    } else {
        nav.replace(Route::Login {});
    }
    rsx! {}
}

#[component]
fn Login() -> Element {
    let nav = use_navigator();
    let session = use_session();
    if session().authenticated {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }
    rsx! {
        LoginView {
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView {
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn Students() -> Element {
    let nav = use_navigator();
    rsx! {
        StudentsView {
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn AddStudent() -> Element {
    let nav = use_navigator();
    rsx! {
        StudentFormView {
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn EditStudent(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        StudentFormView {
            id,
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn StudentDetail(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        StudentDetailView {
            id,
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn Fees() -> Element {
    let nav = use_navigator();
    rsx! {
        FeesView {
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn AddFee(student: String) -> Element {
    let nav = use_navigator();
    let student_id = Some(student).filter(|s| !s.is_empty());
    rsx! {
        FeeFormView {
            student_id,
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn FeeDetail(id: String) -> Element {
    let nav = use_navigator();
    rsx! {
        FeeDetailView {
            id,
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn DueFees() -> Element {
    let nav = use_navigator();
    rsx! {
        DueFeesView {
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn UpcomingFees() -> Element {
    let nav = use_navigator();
    rsx! {
        UpcomingFeesView {
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}

#[component]
fn Settings() -> Element {
    let nav = use_navigator();
    rsx! {
        SettingsView {
            on_nav: move |target| {
                nav.push(route_for(target));
            },
        }
    }
}
