//! Navigation targets shared by views and the sidebar.
//!
//! Views never touch the router directly; they emit a [`NavTarget`] and
//! the platform package maps it onto its route table. This keeps every
//! view testable and router-agnostic.

/// Somewhere the user can be taken.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Login,
    Dashboard,
    Students,
    AddStudent,
    EditStudent(String),
    StudentDetail(String),
    Fees,
    /// Add-fee form, optionally prefilled for one student ("Collect Fee").
    AddFee { student_id: Option<String> },
    FeeDetail(String),
    DueFees,
    UpcomingFees,
    Settings,
}

/// Sidebar sections, for highlighting the active entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Dashboard,
    Students,
    AddFee,
    Fees,
    DueFees,
    UpcomingFees,
    Settings,
}
