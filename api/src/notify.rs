//! # Reminder payload builder
//!
//! Assembles the request bodies for the backend's notification endpoints
//! from a fee + student pair. Pure construction only: the caller submits
//! each payload itself, one channel at a time, so a failed email never
//! blocks the SMS attempt and partial success is a normal outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BulkSummary, Fee, FeeType};

/// Default single-reminder message.
pub const REMINDER_MESSAGE: &str = "Please pay your fee at the earliest to avoid late charges.";

/// Message used when the backend already marked the fee overdue.
pub const OVERDUE_MESSAGE: &str =
    "Your fee payment is overdue. Please pay immediately to avoid penalties.";

/// Default bulk-reminder message and subject.
pub const BULK_MESSAGE: &str =
    "This is a reminder for your pending fee payment. Please pay at the earliest to avoid late charges.";
pub const BULK_SUBJECT: &str = "Fee Payment Reminder - Urgent";

/// Which channel(s) the user picked in the reminder dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderChannel {
    Email,
    Sms,
    Both,
}

impl ReminderChannel {
    pub fn label(&self) -> &'static str {
        match self {
            ReminderChannel::Email => "Email Only",
            ReminderChannel::Sms => "SMS Only",
            ReminderChannel::Both => "Both Email & SMS",
        }
    }
}

/// Why a reminder could not even be built. These are caught client-side
/// before any network call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotifyError {
    #[error("No email or phone number available for this student")]
    NoContact,
    #[error("Email not available")]
    NoEmail,
    #[error("Phone number not available")]
    NoPhone,
    #[error("No students with due fees found")]
    EmptyBulk,
}

/// Everything the builder needs about one fee + student pair.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReminderContext {
    pub student_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub amount: f64,
    pub due_date: Option<String>,
    pub fee_type: FeeType,
    pub message: String,
}

impl ReminderContext {
    /// Build a context from a fee record, using the fee's populated
    /// student reference for contact details and the default message.
    pub fn from_fee(fee: &Fee) -> Self {
        Self {
            student_name: fee.student_name().to_string(),
            email: fee.student_email().map(|s| s.to_string()),
            phone: fee.student_phone().map(|s| s.to_string()),
            amount: fee.due_amount(),
            due_date: fee.due_date.clone(),
            fee_type: fee.fee_type,
            message: REMINDER_MESSAGE.to_string(),
        }
    }

    pub fn has_contact(&self) -> bool {
        self.email.is_some() || self.phone.is_some()
    }
}

/// Body for `POST /notifications/send-email`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPayload {
    pub to: String,
    pub student_name: String,
    pub amount: f64,
    pub due_date: Option<String>,
    pub fee_type: FeeType,
    pub message: String,
}

/// Body for `POST /notifications/send-sms`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsPayload {
    pub phone: String,
    pub student_name: String,
    pub amount: f64,
    pub due_date: Option<String>,
    pub fee_type: FeeType,
    pub message: String,
}

/// Body for `POST /notifications/make-call`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallPayload {
    pub phone: String,
    pub student_name: String,
}

/// One ready-to-send channel request.
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelPayload {
    Email(EmailPayload),
    Sms(SmsPayload),
}

/// Build the per-channel payloads for one reminder.
///
/// `Both` yields up to two payloads and tolerates one missing contact
/// field; the single-channel variants insist on theirs. An empty result
/// is impossible: missing contact info errors instead.
pub fn build_reminders(
    ctx: &ReminderContext,
    channel: ReminderChannel,
) -> Result<Vec<ChannelPayload>, NotifyError> {
    if !ctx.has_contact() {
        return Err(NotifyError::NoContact);
    }

    let email_payload = ctx.email.as_ref().map(|to| {
        ChannelPayload::Email(EmailPayload {
            to: to.clone(),
            student_name: ctx.student_name.clone(),
            amount: ctx.amount,
            due_date: ctx.due_date.clone(),
            fee_type: ctx.fee_type,
            message: ctx.message.clone(),
        })
    });
    let sms_payload = ctx.phone.as_ref().map(|phone| {
        ChannelPayload::Sms(SmsPayload {
            phone: phone.clone(),
            student_name: ctx.student_name.clone(),
            amount: ctx.amount,
            due_date: ctx.due_date.clone(),
            fee_type: ctx.fee_type,
            message: ctx.message.clone(),
        })
    });

    match channel {
        ReminderChannel::Email => Ok(vec![email_payload.ok_or(NotifyError::NoEmail)?]),
        ReminderChannel::Sms => Ok(vec![sms_payload.ok_or(NotifyError::NoPhone)?]),
        ReminderChannel::Both => {
            Ok(email_payload.into_iter().chain(sms_payload).collect())
        }
    }
}

/// Build the payload for a call reminder. Calls need a phone number.
pub fn build_call(ctx: &ReminderContext) -> Result<CallPayload, NotifyError> {
    let phone = ctx.phone.clone().ok_or(NotifyError::NoPhone)?;
    Ok(CallPayload {
        phone,
        student_name: ctx.student_name.clone(),
    })
}

/// One recipient inside a bulk request.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRecipient {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub amount: f64,
    pub due_date: Option<String>,
    pub fee_type: FeeType,
}

impl BulkRecipient {
    pub fn from_fee(fee: &Fee) -> Self {
        Self {
            name: fee.student_name().to_string(),
            email: fee.student_email().map(|s| s.to_string()),
            phone: fee.student_phone().map(|s| s.to_string()),
            amount: fee.due_amount(),
            due_date: fee.due_date.clone(),
            fee_type: fee.fee_type,
        }
    }
}

/// Body for `POST /notifications/send-bulk`: one request for the whole
/// list, never fanned out client-side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BulkRequest {
    pub students: Vec<BulkRecipient>,
    #[serde(rename = "type")]
    pub channel: ReminderChannel,
    pub message: String,
    pub subject: String,
}

/// Response body for `POST /notifications/send-bulk`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub summary: BulkSummary,
}

/// Build a bulk request over the given fees with the default message.
pub fn build_bulk(fees: &[Fee], channel: ReminderChannel) -> Result<BulkRequest, NotifyError> {
    if fees.is_empty() {
        return Err(NotifyError::EmptyBulk);
    }
    Ok(BulkRequest {
        students: fees.iter().map(BulkRecipient::from_fee).collect(),
        channel,
        message: BULK_MESSAGE.to_string(),
        subject: BULK_SUBJECT.to_string(),
    })
}

/// Toast texts for a bulk summary: the success line, plus an error line
/// when anything failed.
pub fn bulk_result_texts(summary: &BulkSummary) -> (String, Option<String>) {
    let success = format!(
        "Bulk reminders completed! {}/{} sent successfully",
        summary.successful, summary.total
    );
    let failure = (summary.failed > 0).then(|| format!("{} reminders failed to send", summary.failed));
    (success, failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{StudentRef, StudentSummary};

    fn ctx(email: Option<&str>, phone: Option<&str>) -> ReminderContext {
        ReminderContext {
            student_name: "Jane Smith".to_string(),
            email: email.map(|s| s.to_string()),
            phone: phone.map(|s| s.to_string()),
            amount: 8000.0,
            due_date: Some("2025-01-20".to_string()),
            fee_type: FeeType::Tuition,
            message: REMINDER_MESSAGE.to_string(),
        }
    }

    #[test]
    fn test_no_contact_rejected_before_any_payload() {
        let err = build_reminders(&ctx(None, None), ReminderChannel::Both).unwrap_err();
        assert_eq!(err, NotifyError::NoContact);
        assert_eq!(
            err.to_string(),
            "No email or phone number available for this student"
        );
    }

    #[test]
    fn test_single_channel_requires_its_contact() {
        let err = build_reminders(&ctx(None, Some("+91 9876543210")), ReminderChannel::Email)
            .unwrap_err();
        assert_eq!(err, NotifyError::NoEmail);

        let err = build_reminders(&ctx(Some("jane@example.com"), None), ReminderChannel::Sms)
            .unwrap_err();
        assert_eq!(err, NotifyError::NoPhone);
    }

    #[test]
    fn test_both_yields_two_independent_payloads() {
        let payloads = build_reminders(
            &ctx(Some("jane@example.com"), Some("+91 9876543210")),
            ReminderChannel::Both,
        )
        .unwrap();
        assert_eq!(payloads.len(), 2);
        assert!(matches!(&payloads[0], ChannelPayload::Email(e) if e.to == "jane@example.com"));
        assert!(matches!(&payloads[1], ChannelPayload::Sms(s) if s.phone == "+91 9876543210"));
    }

    #[test]
    fn test_both_with_one_contact_degrades_to_one() {
        let payloads =
            build_reminders(&ctx(Some("jane@example.com"), None), ReminderChannel::Both).unwrap();
        assert_eq!(payloads.len(), 1);
        assert!(matches!(&payloads[0], ChannelPayload::Email(_)));
    }

    #[test]
    fn test_call_needs_phone() {
        assert_eq!(
            build_call(&ctx(Some("jane@example.com"), None)).unwrap_err(),
            NotifyError::NoPhone
        );
        let call = build_call(&ctx(None, Some("+91 9876543210"))).unwrap();
        assert_eq!(call.student_name, "Jane Smith");
    }

    #[test]
    fn test_context_from_fee_uses_due_amount() {
        let fee = Fee {
            id: "f1".to_string(),
            student: Some(StudentRef::Populated(StudentSummary {
                id: "s1".to_string(),
                name: "Jane Smith".to_string(),
                email: Some("jane@example.com".to_string()),
                ..Default::default()
            })),
            fee_type: FeeType::Tuition,
            amount: 18000.0,
            paid_amount: 10000.0,
            ..Default::default()
        };
        let ctx = ReminderContext::from_fee(&fee);
        assert_eq!(ctx.amount, 8000.0);
        assert!(ctx.has_contact());
        assert!(ctx.phone.is_none());
    }

    #[test]
    fn test_bulk_request_shape() {
        let fee = Fee {
            id: "f1".to_string(),
            amount: 5000.0,
            ..Default::default()
        };
        let request = build_bulk(&[fee], ReminderChannel::Both).unwrap();
        assert_eq!(request.students.len(), 1);
        assert_eq!(request.subject, BULK_SUBJECT);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["type"], "both");

        assert_eq!(build_bulk(&[], ReminderChannel::Email).unwrap_err(), NotifyError::EmptyBulk);
    }

    #[test]
    fn test_bulk_summary_texts() {
        let (success, failure) = bulk_result_texts(&BulkSummary {
            successful: 2,
            failed: 1,
            total: 3,
        });
        assert!(success.contains("2/3"));
        assert_eq!(failure.as_deref(), Some("1 reminders failed to send"));

        let (_, failure) = bulk_result_texts(&BulkSummary {
            successful: 3,
            failed: 0,
            total: 3,
        });
        assert!(failure.is_none());
    }
}
