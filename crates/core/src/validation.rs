//! Per-section form validators.
//!
//! Every validator is a pure function of its input: no I/O, no panics,
//! and no short-circuiting. All violations are collected in a single
//! pass so the editor can display them together. Empty or absent
//! optional fields never produce errors; out-of-range values always do.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_phone;
use crate::sections::{
    BasicSection, EducationSection, MediaSection, ResultsSection, SectionForm, TeachersSection,
    SCHOOL_TYPES,
};

/// Normalized phone pattern: `+` followed by 7 to 15 digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{7,15}$").expect("phone regex is valid"));

/// IELTS band score bounds.
const IELTS_MIN: f64 = 0.0;
const IELTS_MAX: f64 = 9.0;
/// SAT composite score bounds.
const SAT_MIN: f64 = 400.0;
const SAT_MAX: f64 = 1600.0;
/// National attestation score bounds.
const NATIONAL_MIN: f64 = 0.0;
const NATIONAL_MAX: f64 = 100.0;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Aggregated result of validating one section form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a section form, collecting all violations.
pub fn validate_section(form: &SectionForm) -> ValidationResult {
    let errors = match form {
        SectionForm::Basic(basic) => validate_basic(basic),
        SectionForm::Education(edu) => validate_education(edu),
        SectionForm::Teachers(teachers) => validate_teachers(teachers),
        SectionForm::Results(results) => validate_results(results),
        SectionForm::Media(media) => validate_media(media),
    };
    ValidationResult::from_errors(errors)
}

fn err(errors: &mut Vec<FieldError>, field: impl Into<String>, message: impl Into<String>) {
    errors.push(FieldError {
        field: field.into(),
        message: message.into(),
    });
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn validate_basic(basic: &BasicSection) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if is_blank(&basic.name_uz) {
        err(&mut errors, "name_uz", "name is required");
    }

    match basic.phone.as_deref() {
        None => err(&mut errors, "phone", "phone is required"),
        Some(raw) => match normalize_phone(raw) {
            Some(normalized) if PHONE_RE.is_match(&normalized) => {}
            _ => err(&mut errors, "phone", "phone must contain 7 to 15 digits"),
        },
    }

    for (i, extra) in basic.additional_phones.iter().enumerate() {
        match normalize_phone(&extra.phone) {
            Some(normalized) if PHONE_RE.is_match(&normalized) => {}
            _ => err(
                &mut errors,
                format!("additional_phones[{i}].phone"),
                "phone must contain 7 to 15 digits",
            ),
        }
    }

    if is_blank(&basic.address) {
        err(&mut errors, "address", "address is required");
    }

    match basic.school_type.as_deref() {
        None => err(&mut errors, "school_type", "school type is required"),
        Some(t) if !SCHOOL_TYPES.contains(&t) => err(
            &mut errors,
            "school_type",
            format!("school type must be one of: {}", SCHOOL_TYPES.join(", ")),
        ),
        Some(_) => {}
    }

    if let Some(email) = basic.email.as_deref() {
        if !email.trim().is_empty() && !email.contains('@') {
            err(&mut errors, "email", "email must contain '@'");
        }
    }

    if let Some(lat) = basic.latitude {
        if !(-90.0..=90.0).contains(&lat) {
            err(&mut errors, "latitude", "latitude must be within -90..90");
        }
    }
    if let Some(lon) = basic.longitude {
        if !(-180.0..=180.0).contains(&lon) {
            err(&mut errors, "longitude", "longitude must be within -180..180");
        }
    }

    // A district only makes sense inside a region; the composite FK in
    // the store enforces the actual membership.
    if basic.district_id.is_some() && basic.region_id.is_none() {
        err(&mut errors, "district_id", "district requires a region");
    }

    errors
}

fn validate_education(edu: &EducationSection) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if edu.accepted_grades.is_empty() {
        err(&mut errors, "accepted_grades", "at least one grade is required");
    }
    for grade in &edu.accepted_grades {
        if !(0..=11).contains(grade) {
            err(
                &mut errors,
                "accepted_grades",
                format!("grade {grade} is outside 0..11"),
            );
        }
    }

    if edu.primary_languages.is_empty() {
        err(
            &mut errors,
            "primary_languages",
            "at least one instruction language is required",
        );
    }

    for (i, tier) in edu.pricing_tiers.iter().enumerate() {
        if tier.price <= 0 {
            err(
                &mut errors,
                format!("pricing_tiers[{i}].price"),
                "tier price must be positive",
            );
        }
        if tier.grades.is_empty() {
            err(
                &mut errors,
                format!("pricing_tiers[{i}].grades"),
                "tier must cover at least one grade",
            );
        }
        for grade in &tier.grades {
            if !edu.accepted_grades.contains(grade) {
                err(
                    &mut errors,
                    format!("pricing_tiers[{i}].grades"),
                    format!("grade {grade} is not in accepted_grades"),
                );
            }
        }
    }

    // Flat range is only user input when there are no tiers.
    if edu.pricing_tiers.is_empty() {
        if let (Some(min), Some(max)) = (edu.price_min, edu.price_max) {
            if min > max {
                err(&mut errors, "price_min", "price_min exceeds price_max");
            }
        }
        for (field, value) in [("price_min", edu.price_min), ("price_max", edu.price_max)] {
            if let Some(v) = value {
                if v < 0 {
                    err(&mut errors, field, "price must not be negative");
                }
            }
        }
    }

    errors
}

fn validate_teachers(teachers: &TeachersSection) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for (i, entry) in teachers.teachers.iter().enumerate() {
        if entry.full_name.trim().is_empty() {
            err(
                &mut errors,
                format!("teachers[{i}].full_name"),
                "full name is required",
            );
        }
    }
    errors
}

fn validate_results(results: &ResultsSection) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for (i, result) in results.exam_results.iter().enumerate() {
        let field = format!("exam_results[{i}].score");
        match result.exam.as_str() {
            "ielts" => {
                if !(IELTS_MIN..=IELTS_MAX).contains(&result.score) {
                    err(&mut errors, field, "IELTS score must be within 0.0..9.0");
                }
            }
            "sat" => {
                if !(SAT_MIN..=SAT_MAX).contains(&result.score) {
                    err(&mut errors, field, "SAT score must be within 400..1600");
                }
            }
            "national" => {
                if !(NATIONAL_MIN..=NATIONAL_MAX).contains(&result.score) {
                    err(&mut errors, field, "national score must be within 0..100");
                }
            }
            other => err(
                &mut errors,
                format!("exam_results[{i}].exam"),
                format!("unknown exam: {other}"),
            ),
        }
    }
    errors
}

fn validate_media(media: &MediaSection) -> Vec<FieldError> {
    let mut errors = Vec::new();

    for (kind, items) in [("photos", &media.photos), ("videos", &media.videos)] {
        for (i, item) in items.iter().enumerate() {
            if item.url.trim().is_empty() {
                err(&mut errors, format!("{kind}[{i}].url"), "url is required");
            }
        }
    }

    let cover_count = media.photos.iter().filter(|p| p.is_cover).count();
    if cover_count > 1 {
        err(&mut errors, "photos", "at most one photo can be the cover");
    }

    errors
}
