//! # UI crate: shared components and pages for FeeDesk
//!
//! Everything visual lives here; the platform packages only provide the
//! route table and mount the providers.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`views`] | The pages: login, dashboard, students, fees, due/upcoming, settings |
//! | [`sidebar`] | App navigation with the signed-in admin |
//! | [`components`] | Loader, empty state, stat cards, confirm dialog, badges |
//! | [`toast`] | Transient notifications via context |
//! | [`reminder`] | Reminder dialog and send helpers |
//! | [`session`] | Reactive session state hydrated from the store |
//! | [`client`] | Platform store selection and shared [`client::AppClient`] |
//! | [`nav`] | Router-agnostic navigation targets |
//! | [`format`] | Rupee amounts, dates, initials |

pub mod client;
pub mod components;
pub mod format;
pub mod nav;
pub mod reminder;
pub mod session;
pub mod sidebar;
pub mod toast;
pub mod views;

pub use client::{handle_api_error, make_client, use_client, AppClient, AppStore, ClientProvider};
pub use nav::{NavSection, NavTarget};
pub use session::{is_public_route, session_logout, use_session, SessionProvider, SessionState};
pub use sidebar::AppSidebar;
pub use toast::{toast_error, toast_success, use_toasts, ToastProvider};
pub use views::{
    DashboardView, DueFeesView, FeeDetailView, FeeFormView, FeesView, LoginView, SettingsView,
    StudentDetailView, StudentFormView, StudentsView, UpcomingFeesView,
};
