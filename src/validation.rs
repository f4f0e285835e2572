//! Input validation for the intake form and chat input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::record::{ApplicantForm, ApplicantRecord, Field};

static INT_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("integer prefix regex is valid"));
static FLOAT_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("float prefix regex is valid")
});

/// Parse the leading integer of `input`, ignoring anything after it.
///
/// `"42 years"` is 42, `"  -7"` is -7, `"abc"` and `""` are `None`.
/// Values beyond the `i64` range saturate instead of being rejected.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let caps = INT_PREFIX_RE.captures(input)?;
    let digits = &caps[1];
    match digits.parse::<i64>() {
        Ok(value) => Some(value),
        // The pattern only admits digits, so the only failure is overflow
        Err(_) if digits.starts_with('-') => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

/// Parse the leading decimal number of `input`, ignoring anything after it.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let caps = FLOAT_PREFIX_RE.captures(input)?;
    caps[1].parse().ok().filter(|v: &f64| v.is_finite())
}

/// Validate the form and build the record.
///
/// Fields are checked in form order and the first missing one aborts the
/// whole submission. A value is missing when it is empty (text) or not a
/// number (numeric); zero is a valid number.
pub fn validate_form(form: &ApplicantForm) -> Result<ApplicantRecord, ValidationError> {
    for field in Field::ALL {
        check_present(form, field)?;
    }

    Ok(ApplicantRecord {
        full_name: text_value(form, Field::FullName),
        age: int_value(form, Field::Age)?,
        education_level: text_value(form, Field::EducationLevel),
        course: text_value(form, Field::Course),
        income: int_value(form, Field::Income)?,
        category: text_value(form, Field::Category),
        state: text_value(form, Field::State),
        percentage: float_value(form, Field::Percentage)?,
        aadhar: text_value(form, Field::Aadhar),
        email: text_value(form, Field::Email),
    })
}

fn check_present(form: &ApplicantForm, field: Field) -> Result<(), ValidationError> {
    let raw = form.get(field);
    let present = match field {
        Field::Percentage => parse_float_prefix(raw).is_some(),
        f if f.is_numeric() => parse_int_prefix(raw).is_some(),
        _ => !text_value(form, field).is_empty(),
    };
    if present {
        Ok(())
    } else {
        Err(ValidationError::MissingField(field))
    }
}

fn text_value(form: &ApplicantForm, field: Field) -> String {
    let raw = form.get(field);
    if field.is_trimmed() {
        raw.trim().to_string()
    } else {
        raw.to_string()
    }
}

fn int_value(form: &ApplicantForm, field: Field) -> Result<i64, ValidationError> {
    parse_int_prefix(form.get(field)).ok_or(ValidationError::MissingField(field))
}

fn float_value(form: &ApplicantForm, field: Field) -> Result<f64, ValidationError> {
    parse_float_prefix(form.get(field)).ok_or(ValidationError::MissingField(field))
}

/// Normalize an outbound chat line. Blank input yields `None` and is dropped.
pub fn normalize_chat_input(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
