//! App sidebar: brand, nav entries, the signed-in admin, logout.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChartLine, FaClock, FaGear, FaGraduationCap, FaIndianRupeeSign, FaPlus,
    FaRightFromBracket, FaTriangleExclamation, FaUsers,
};
use dioxus_free_icons::Icon;

use crate::format::initials;
use crate::nav::{NavSection, NavTarget};
use crate::session::use_session;

#[component]
pub fn AppSidebar(
    active: NavSection,
    on_nav: EventHandler<NavTarget>,
    on_logout: EventHandler<()>,
) -> Element {
    let session = use_session();
    let state = session();
    let name = state.display_name().to_string();
    let role = state.role().to_string();
    let avatar = initials(&name);

    let entry_class = |section: NavSection| {
        if section == active {
            "nav-entry active"
        } else {
            "nav-entry"
        }
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar-brand",
                Icon { width: 28, height: 28, icon: FaGraduationCap }
                span { "FeeDesk" }
            }

            div { class: "sidebar-user",
                div { class: "avatar", "{avatar}" }
                div { class: "sidebar-user-meta",
                    span { class: "sidebar-user-name", "{name}" }
                    span { class: "sidebar-user-role", "{role}" }
                }
            }

            nav { class: "sidebar-nav",
                button {
                    class: entry_class(NavSection::Dashboard),
                    onclick: move |_| on_nav.call(NavTarget::Dashboard),
                    Icon { width: 18, height: 18, icon: FaChartLine }
                    "Dashboard"
                }
                button {
                    class: entry_class(NavSection::Students),
                    onclick: move |_| on_nav.call(NavTarget::Students),
                    Icon { width: 18, height: 18, icon: FaUsers }
                    "Students"
                }
                button {
                    class: entry_class(NavSection::AddFee),
                    onclick: move |_| on_nav.call(NavTarget::AddFee { student_id: None }),
                    Icon { width: 18, height: 18, icon: FaPlus }
                    "Add Fee"
                }
                button {
                    class: entry_class(NavSection::Fees),
                    onclick: move |_| on_nav.call(NavTarget::Fees),
                    Icon { width: 18, height: 18, icon: FaIndianRupeeSign }
                    "All Fees"
                }
                button {
                    class: entry_class(NavSection::DueFees),
                    onclick: move |_| on_nav.call(NavTarget::DueFees),
                    Icon { width: 18, height: 18, icon: FaTriangleExclamation }
                    "Due Fees"
                }
                button {
                    class: entry_class(NavSection::UpcomingFees),
                    onclick: move |_| on_nav.call(NavTarget::UpcomingFees),
                    Icon { width: 18, height: 18, icon: FaClock }
                    "Upcoming Fees"
                }
            }

            div { class: "sidebar-footer",
                button {
                    class: entry_class(NavSection::Settings),
                    onclick: move |_| on_nav.call(NavTarget::Settings),
                    Icon { width: 18, height: 18, icon: FaGear }
                    "Settings"
                }
                button {
                    class: "nav-entry",
                    onclick: move |_| on_logout.call(()),
                    Icon { width: 18, height: 18, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    }
}
