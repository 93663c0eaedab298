//! The app's pages. Every view takes an `on_nav` handler instead of
//! touching the router, so the platform package stays in charge of URLs.

mod dashboard;
mod due_fees;
mod fee_detail;
mod fee_form;
mod fees;
mod login;
mod settings;
mod student_detail;
mod student_form;
mod students;
mod upcoming_fees;

pub use dashboard::DashboardView;
pub use due_fees::DueFeesView;
pub use fee_detail::FeeDetailView;
pub use fee_form::FeeFormView;
pub use fees::FeesView;
pub use login::LoginView;
pub use settings::SettingsView;
pub use student_detail::StudentDetailView;
pub use student_form::StudentFormView;
pub use students::StudentsView;
pub use upcoming_fees::UpcomingFeesView;
