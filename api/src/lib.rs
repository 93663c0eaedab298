//! # API crate: REST client and domain logic for FeeDesk
//!
//! Everything the UI needs to talk to the fees backend lives here, plus
//! the two pieces of pure logic every page shares.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: bearer-token injection, 401 handling, response-envelope unwrapping, one method per backend endpoint |
//! | [`models`] | Wire types (`Student`, `Fee`, `DashboardStats`, ...) with forgiving deserialization for the backend's inconsistencies |
//! | [`classify`] | The fee-status classifier (display status, priority bucket, day counts), the single rule set all views render |
//! | [`notify`] | Reminder payload builder for email/SMS/call/bulk, with client-side contact validation |
//! | [`error`] | [`ApiError`] and its user-facing message mapping |
//!
//! The crate is UI-framework free and compiles for both native (tests)
//! and wasm32 (the app); all HTTP goes through `reqwest`, which is
//! fetch-backed in the browser.

pub mod classify;
pub mod client;
pub mod error;
pub mod models;
pub mod notify;

pub use classify::{classify, is_due, is_upcoming, Classification, DisplayStatus, Priority};
pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Admin, AdminInput, BulkSummary, ChangePasswordRequest, DashboardStats, Fee, FeeInput,
    FeeStatus, FeeType, LoginRequest, LoginResponse, PayFeeRequest, Student, StudentInput,
    StudentRef,
};
pub use notify::{
    build_bulk, build_call, build_reminders, bulk_result_texts, BulkRequest, BulkResponse,
    ChannelPayload, NotifyError, ReminderChannel, ReminderContext,
};
