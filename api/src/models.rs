//! # Wire models for the fees backend
//!
//! Shapes mirror what the REST backend actually sends rather than an
//! idealized schema: ids arrive as `_id` or `id`, most numeric fields can
//! be absent, dates are ISO strings that are sometimes full datetimes,
//! and a fee's student reference is either a populated object or a bare
//! id depending on the endpoint. Deserialization is forgiving in all of
//! those spots so a list view never fails on one odd record.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

/// A student record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(rename = "class", default)]
    pub class_name: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_phone: Option<String>,
    /// ISO date string; see [`parse_iso_date`].
    #[serde(default)]
    pub admission_date: Option<String>,
    #[serde(default)]
    pub total_fee: f64,
    #[serde(default)]
    pub paid_amount: f64,
}

impl Student {
    /// Outstanding balance, clamped at zero.
    pub fn due_amount(&self) -> f64 {
        (self.total_fee - self.paid_amount).max(0.0)
    }
}

/// Form payload for creating or updating a student.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub name: String,
    pub roll_number: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub section: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub parent_name: String,
    pub parent_phone: String,
    pub admission_date: String,
    pub total_fee: f64,
}

/// A fee's student reference: populated object or bare id, depending on
/// whether the endpoint ran the join.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentRef {
    Populated(StudentSummary),
    Id(String),
}

/// The subset of student fields the backend embeds in populated fees.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "class", default)]
    pub class_name: String,
    #[serde(default)]
    pub roll_number: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl StudentRef {
    pub fn id(&self) -> &str {
        match self {
            StudentRef::Populated(s) => &s.id,
            StudentRef::Id(id) => id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            StudentRef::Populated(s) if !s.name.is_empty() => Some(&s.name),
            _ => None,
        }
    }

    pub fn class_name(&self) -> Option<&str> {
        match self {
            StudentRef::Populated(s) if !s.class_name.is_empty() => Some(&s.class_name),
            _ => None,
        }
    }

    pub fn phone(&self) -> Option<&str> {
        match self {
            StudentRef::Populated(s) => s.phone.as_deref().filter(|p| !p.is_empty()),
            StudentRef::Id(_) => None,
        }
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            StudentRef::Populated(s) => s.email.as_deref().filter(|e| !e.is_empty()),
            StudentRef::Id(_) => None,
        }
    }
}

/// The eight fixed fee types plus a catch-all for anything the backend
/// invents later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeType {
    #[serde(rename = "Tuition Fee")]
    Tuition,
    #[serde(rename = "Admission Fee")]
    Admission,
    #[serde(rename = "Exam Fee")]
    Exam,
    #[serde(rename = "Library Fee")]
    Library,
    #[serde(rename = "Lab Fee")]
    Lab,
    #[serde(rename = "Sports Fee")]
    Sports,
    #[serde(rename = "Transport Fee")]
    Transport,
    #[serde(rename = "Hostel Fee")]
    Hostel,
    #[serde(other, rename = "Fee Payment")]
    Other,
}

impl FeeType {
    /// The selectable types, in form order.
    pub const ALL: [FeeType; 8] = [
        FeeType::Tuition,
        FeeType::Admission,
        FeeType::Exam,
        FeeType::Library,
        FeeType::Lab,
        FeeType::Sports,
        FeeType::Transport,
        FeeType::Hostel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeeType::Tuition => "Tuition Fee",
            FeeType::Admission => "Admission Fee",
            FeeType::Exam => "Exam Fee",
            FeeType::Library => "Library Fee",
            FeeType::Lab => "Lab Fee",
            FeeType::Sports => "Sports Fee",
            FeeType::Transport => "Transport Fee",
            FeeType::Hostel => "Hostel Fee",
            FeeType::Other => "Fee Payment",
        }
    }

    pub fn from_label(label: &str) -> FeeType {
        FeeType::ALL
            .into_iter()
            .find(|t| t.label() == label)
            .unwrap_or(FeeType::Other)
    }
}

impl Default for FeeType {
    fn default() -> Self {
        FeeType::Other
    }
}

impl std::fmt::Display for FeeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Backend-supplied fee status. Naming is inconsistent across the
/// backend's own endpoints, so deserialization is case-insensitive-ish
/// via aliases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    #[default]
    #[serde(alias = "Pending", alias = "due")]
    Pending,
    #[serde(alias = "Partial")]
    Partial,
    #[serde(alias = "Paid")]
    Paid,
    #[serde(alias = "Overdue")]
    Overdue,
}

impl std::fmt::Display for FeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FeeStatus::Pending => "Pending",
            FeeStatus::Partial => "Partial",
            FeeStatus::Paid => "Paid",
            FeeStatus::Overdue => "Overdue",
        };
        f.write_str(s)
    }
}

/// A single fee record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "studentId", default)]
    pub student: Option<StudentRef>,
    #[serde(default)]
    pub fee_type: FeeType,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub paid_amount: f64,
    /// ISO date string; see [`Fee::due_on`].
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub status: FeeStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub receipt_number: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub paid_date: Option<String>,
}

impl Fee {
    /// Outstanding balance, clamped at zero.
    pub fn due_amount(&self) -> f64 {
        (self.amount - self.paid_amount).max(0.0)
    }

    /// The due date as a calendar date, when present and parseable.
    pub fn due_on(&self) -> Option<NaiveDate> {
        self.due_date.as_deref().and_then(parse_iso_date)
    }

    pub fn student_name(&self) -> &str {
        self.student
            .as_ref()
            .and_then(|s| s.name())
            .unwrap_or("Unknown Student")
    }

    pub fn student_phone(&self) -> Option<&str> {
        self.student.as_ref().and_then(|s| s.phone())
    }

    pub fn student_email(&self) -> Option<&str> {
        self.student.as_ref().and_then(|s| s.email())
    }
}

/// Form payload for creating a fee.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeInput {
    pub student_id: String,
    pub fee_type: FeeType,
    pub amount: f64,
    pub due_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

/// Body for `PUT /fees/:id/pay`. An empty body records a full payment;
/// amount is forwarded for backends that honor partial payments.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayFeeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
}

impl PayFeeRequest {
    /// Record the remaining balance as paid.
    pub fn full() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.payment_method.is_none()
    }
}

/// Counters for the dashboard cards. Everything defaults to zero so a
/// partial payload still renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_students: u64,
    pub total_fees: f64,
    pub pending_fees: f64,
    pub upcoming_fees: f64,
}

/// An administrator account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub admin: Option<Admin>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Aggregate result of a bulk notification request, surfaced verbatim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSummary {
    pub successful: u32,
    pub failed: u32,
    pub total: u32,
}

/// Parse the date part of an ISO string. The backend sends both bare
/// dates ("2024-01-20") and full datetimes ("2024-01-20T00:00:00.000Z");
/// only the first ten characters matter here.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_with_populated_student() {
        let json = r#"{
            "_id": "f1",
            "studentId": {"_id": "s1", "name": "Jane Smith", "class": "Class 11", "email": "jane@example.com"},
            "feeType": "Tuition Fee",
            "amount": 18000,
            "paidAmount": 10000,
            "dueDate": "2024-01-20",
            "status": "partial"
        }"#;
        let fee: Fee = serde_json::from_str(json).unwrap();
        assert_eq!(fee.id, "f1");
        assert_eq!(fee.fee_type, FeeType::Tuition);
        assert_eq!(fee.student_name(), "Jane Smith");
        assert_eq!(fee.student_email(), Some("jane@example.com"));
        assert_eq!(fee.student_phone(), None);
        assert_eq!(fee.due_amount(), 8000.0);
    }

    #[test]
    fn test_fee_with_bare_student_id() {
        let json = r#"{"id": "f2", "studentId": "s2", "amount": 5000}"#;
        let fee: Fee = serde_json::from_str(json).unwrap();
        assert_eq!(fee.student.as_ref().unwrap().id(), "s2");
        assert_eq!(fee.student_name(), "Unknown Student");
        assert_eq!(fee.status, FeeStatus::Pending);
        assert_eq!(fee.fee_type, FeeType::Other);
    }

    #[test]
    fn test_unknown_fee_type_is_other() {
        let json = r#"{"id": "f3", "feeType": "Donation", "amount": 100}"#;
        let fee: Fee = serde_json::from_str(json).unwrap();
        assert_eq!(fee.fee_type, FeeType::Other);
        assert_eq!(fee.fee_type.label(), "Fee Payment");
    }

    #[test]
    fn test_status_aliases() {
        let fee: Fee = serde_json::from_str(r#"{"id": "f4", "status": "Overdue"}"#).unwrap();
        assert_eq!(fee.status, FeeStatus::Overdue);
        let fee: Fee = serde_json::from_str(r#"{"id": "f5", "status": "paid"}"#).unwrap();
        assert_eq!(fee.status, FeeStatus::Paid);
    }

    #[test]
    fn test_parse_iso_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(parse_iso_date("2024-01-20"), Some(expected));
        assert_eq!(parse_iso_date("2024-01-20T00:00:00.000Z"), Some(expected));
        assert_eq!(parse_iso_date("soon"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_dashboard_stats_defaults() {
        let stats: DashboardStats = serde_json::from_str(r#"{"totalStudents": 42}"#).unwrap();
        assert_eq!(stats.total_students, 42);
        assert_eq!(stats.pending_fees, 0.0);
    }

    #[test]
    fn test_student_input_wire_names() {
        let input = StudentInput {
            name: "Rahul Kumar".to_string(),
            roll_number: "21".to_string(),
            class_name: "1st Year".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["rollNumber"], "21");
        assert_eq!(value["class"], "1st Year");
    }
}
