//! # Fee-status classification
//!
//! The one piece of business logic in the client: mapping a fee record's
//! amount/paidAmount/dueDate onto a display status, an urgency bucket,
//! and a day count. The original pages each recomputed this with
//! slightly different rules; here there is exactly one rule set and
//! every view renders its output.
//!
//! ## Rules
//!
//! - `due_amount = max(amount - paid_amount, 0)`
//! - Status: `Paid` iff nothing remains owed; else `Partial` iff
//!   anything was paid; else the backend's own status is trusted
//!   (`overdue` stays Overdue, everything else shows Pending).
//! - `days_left` is the signed whole-day difference `due_date - today`
//!   (negative once the date has passed); `days_overdue` clamps the
//!   negation at zero. A missing due date yields `None` and renders
//!   "N/A".
//! - Priority bands on `days_left`: ≤3 Critical, ≤7 High, ≤15 Medium,
//!   else Low. Overdue records are therefore always Critical. No due
//!   date means Low.

use chrono::NaiveDate;

use crate::models::{Fee, FeeStatus};

/// What a fee row should display as its status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayStatus {
    Paid,
    Partial,
    Pending,
    Overdue,
}

impl DisplayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DisplayStatus::Paid => "Paid",
            DisplayStatus::Partial => "Partial",
            DisplayStatus::Pending => "Pending",
            DisplayStatus::Overdue => "Overdue",
        }
    }

    /// CSS class suffix for the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayStatus::Paid => "status-paid",
            DisplayStatus::Partial => "status-partial",
            DisplayStatus::Pending => "status-pending",
            DisplayStatus::Overdue => "status-overdue",
        }
    }
}

/// Urgency bucket used for sort order and color coding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// CSS class suffix for the priority badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Priority::Critical => "priority-critical",
            Priority::High => "priority-high",
            Priority::Medium => "priority-medium",
            Priority::Low => "priority-low",
        }
    }
}

/// Classifier output for one fee record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub status: DisplayStatus,
    pub priority: Priority,
    /// Signed days until the due date; `None` when there is no due date.
    pub days_left: Option<i64>,
    /// `max(0, -days_left)`; zero when not yet due or undated.
    pub days_overdue: i64,
    pub due_amount: f64,
}

impl Classification {
    /// "3 days left", "5 days overdue", "Due today", or "N/A".
    pub fn days_text(&self) -> String {
        match self.days_left {
            None => "N/A".to_string(),
            Some(0) => "Due today".to_string(),
            Some(d) if d < 0 => format!("{} days overdue", -d),
            Some(d) => format!("{d} days left"),
        }
    }
}

/// Signed whole-day difference `due_date - today`.
pub fn days_left(due_date: NaiveDate, today: NaiveDate) -> i64 {
    (due_date - today).num_days()
}

/// Priority band for a day count. Undated fees are never urgent.
pub fn priority_for(days_left: Option<i64>) -> Priority {
    match days_left {
        None => Priority::Low,
        Some(d) if d <= 3 => Priority::Critical,
        Some(d) if d <= 7 => Priority::High,
        Some(d) if d <= 15 => Priority::Medium,
        Some(_) => Priority::Low,
    }
}

/// Classify one fee as of `today`.
pub fn classify(fee: &Fee, today: NaiveDate) -> Classification {
    let due_amount = (fee.amount - fee.paid_amount).max(0.0);

    let status = if fee.amount - fee.paid_amount <= 0.0 {
        DisplayStatus::Paid
    } else if fee.paid_amount > 0.0 {
        DisplayStatus::Partial
    } else if fee.status == FeeStatus::Overdue {
        DisplayStatus::Overdue
    } else {
        DisplayStatus::Pending
    };

    let days = fee.due_on().map(|d| days_left(d, today));
    let days_overdue = days.map(|d| (-d).max(0)).unwrap_or(0);

    // Settled fees carry no urgency regardless of date.
    let priority = if status == DisplayStatus::Paid {
        Priority::Low
    } else {
        priority_for(days)
    };

    Classification {
        status,
        priority,
        days_left: days,
        days_overdue,
        due_amount,
    }
}

/// Whether a fee belongs in the "upcoming" window: dated, unsettled, and
/// due today or later.
pub fn is_upcoming(c: &Classification) -> bool {
    c.status != DisplayStatus::Paid && matches!(c.days_left, Some(d) if d >= 0)
}

/// Whether a fee belongs in the "due" list: unsettled with a past (or
/// missing) due date trusted from the backend's due feed.
pub fn is_due(c: &Classification) -> bool {
    c.status != DisplayStatus::Paid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeeType;

    fn fee(amount: f64, paid: f64, due_date: Option<&str>, status: FeeStatus) -> Fee {
        Fee {
            id: "f1".to_string(),
            fee_type: FeeType::Tuition,
            amount,
            paid_amount: paid,
            due_date: due_date.map(|s| s.to_string()),
            status,
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_partial_payment_vector() {
        // 18000 owed, 10000 paid: due 8000, Partial.
        let c = classify(&fee(18000.0, 10000.0, Some("2025-01-20"), FeeStatus::Pending), today());
        assert_eq!(c.due_amount, 8000.0);
        assert_eq!(c.status, DisplayStatus::Partial);
    }

    #[test]
    fn test_paid_iff_nothing_owed() {
        let c = classify(&fee(5000.0, 5000.0, Some("2025-01-20"), FeeStatus::Pending), today());
        assert_eq!(c.status, DisplayStatus::Paid);
        assert_eq!(c.due_amount, 0.0);
        assert_eq!(c.priority, Priority::Low);

        // Overpayment still classifies as Paid, due amount clamped.
        let c = classify(&fee(5000.0, 6000.0, None, FeeStatus::Pending), today());
        assert_eq!(c.status, DisplayStatus::Paid);
        assert_eq!(c.due_amount, 0.0);
    }

    #[test]
    fn test_backend_status_trusted_when_unpaid() {
        let c = classify(&fee(3000.0, 0.0, Some("2025-01-10"), FeeStatus::Overdue), today());
        assert_eq!(c.status, DisplayStatus::Overdue);

        let c = classify(&fee(3000.0, 0.0, Some("2025-01-10"), FeeStatus::Pending), today());
        assert_eq!(c.status, DisplayStatus::Pending);
    }

    #[test]
    fn test_day_arithmetic() {
        let c = classify(&fee(3000.0, 0.0, Some("2025-01-18"), FeeStatus::Pending), today());
        assert_eq!(c.days_left, Some(3));
        assert_eq!(c.days_overdue, 0);
        assert_eq!(c.days_text(), "3 days left");

        let c = classify(&fee(3000.0, 0.0, Some("2025-01-10"), FeeStatus::Overdue), today());
        assert_eq!(c.days_left, Some(-5));
        assert_eq!(c.days_overdue, 5);
        assert_eq!(c.days_text(), "5 days overdue");

        let c = classify(&fee(3000.0, 0.0, Some("2025-01-15"), FeeStatus::Pending), today());
        assert_eq!(c.days_left, Some(0));
        assert_eq!(c.days_text(), "Due today");
    }

    #[test]
    fn test_missing_due_date() {
        let c = classify(&fee(3000.0, 0.0, None, FeeStatus::Pending), today());
        assert_eq!(c.days_left, None);
        assert_eq!(c.days_overdue, 0);
        assert_eq!(c.days_text(), "N/A");
        assert_eq!(c.priority, Priority::Low);
        assert!(!is_upcoming(&c));
    }

    #[test]
    fn test_priority_bands() {
        assert_eq!(priority_for(Some(-10)), Priority::Critical);
        assert_eq!(priority_for(Some(0)), Priority::Critical);
        assert_eq!(priority_for(Some(3)), Priority::Critical);
        assert_eq!(priority_for(Some(4)), Priority::High);
        assert_eq!(priority_for(Some(7)), Priority::High);
        assert_eq!(priority_for(Some(8)), Priority::Medium);
        assert_eq!(priority_for(Some(15)), Priority::Medium);
        assert_eq!(priority_for(Some(16)), Priority::Low);
        assert_eq!(priority_for(None), Priority::Low);
    }

    #[test]
    fn test_past_due_excluded_from_upcoming_included_in_due() {
        let c = classify(&fee(3000.0, 0.0, Some("2025-01-01"), FeeStatus::Overdue), today());
        assert!(c.days_left.unwrap() < 0);
        assert!(!is_upcoming(&c));
        assert!(is_due(&c));

        let c = classify(&fee(3000.0, 0.0, Some("2025-02-01"), FeeStatus::Pending), today());
        assert!(is_upcoming(&c));
    }

    #[test]
    fn test_priority_ordering_sorts_critical_first() {
        let mut buckets = vec![Priority::Low, Priority::Critical, Priority::Medium, Priority::High];
        buckets.sort();
        assert_eq!(
            buckets,
            vec![Priority::Critical, Priority::High, Priority::Medium, Priority::Low]
        );
    }
}
