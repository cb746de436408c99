//! Rule primitives shared by the form schemas. Each rule appends its
//! message to the report when the input violates it; rules never
//! short-circuit each other.

use crate::report::FormReport;

/// Reject values outside an inclusive character-count range.
pub fn length(
    report: &mut FormReport,
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
    label: &str,
) {
    let count = value.chars().count();

    if count < min {
        report.push(field, format!("{label} must be at least {min} characters"));
    }
    if count > max {
        report.push(field, format!("{label} must not exceed {max} characters"));
    }
}

/// Reject values longer than `max`; empty input is fine (optional field).
pub fn max_length(
    report: &mut FormReport,
    field: &'static str,
    value: &str,
    max: usize,
    label: &str,
) {
    if value.chars().count() > max {
        report.push(field, format!("{label} must not exceed {max} characters"));
    }
}

pub fn required(report: &mut FormReport, field: &'static str, value: &str, label: &str) {
    if value.is_empty() {
        report.push(field, format!("{label} is required"));
    }
}

/// Letters only, no spaces.
pub fn letters(report: &mut FormReport, field: &'static str, value: &str, label: &str) {
    if !value.chars().all(char::is_alphabetic) {
        report.push(field, format!("{label} can only contain letters"));
    }
}

/// Letters and spaces.
pub fn letters_and_spaces(report: &mut FormReport, field: &'static str, value: &str, label: &str) {
    if !value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        report.push(field, format!("{label} can only contain letters and spaces"));
    }
}

/// Digits with one optional leading `+` (phone numbers).
pub fn digits_with_plus(report: &mut FormReport, field: &'static str, value: &str, label: &str) {
    let digits = value.strip_prefix('+').unwrap_or(value);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        report.push(
            field,
            format!("{label} can only contain numbers and an optional '+'"),
        );
    }
}

/// Structural email shape: one `@` with a dotted, non-empty domain.
pub fn email(report: &mut FormReport, field: &'static str, value: &str) {
    if !is_email(value) {
        report.push(field, "Invalid email format");
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || value.contains(' ') {
        return false;
    }

    // dotted domain with non-empty labels
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Password strength: minimum length plus one of each character class.
pub fn password(report: &mut FormReport, field: &'static str, value: &str) {
    if value.chars().count() < 6 {
        report.push(field, "Password must be at least 6 characters");
    }
    if !value.chars().any(char::is_uppercase) {
        report.push(field, "Password must contain at least one uppercase letter");
    }
    if !value.chars().any(char::is_lowercase) {
        report.push(field, "Password must contain at least one lowercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        report.push(field, "Password must contain at least one number");
    }
    if !value.chars().any(|c| !c.is_alphanumeric()) {
        report.push(field, "Password must contain at least one special character");
    }
}
