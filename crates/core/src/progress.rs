//! Section completeness scoring.
//!
//! Each tracked field contributes a fixed weight when present; the
//! weights for a section sum to exactly 100 (enforced by tests), so the
//! score is a plain integer sum with no rounding. Presence means a
//! non-blank string, a non-null number, or a non-empty list.
//!
//! The API recomputes this server-side on every successful section save;
//! clients may compute the same value locally for immediate feedback but
//! the stored score is authoritative.

use crate::sections::{
    BasicSection, EducationSection, MediaSection, ResultsSection, SectionForm, TeachersSection,
};

// -- Basic section weights --
const W_BASIC_NAME: u8 = 15;
const W_BASIC_PHONE: u8 = 15;
const W_BASIC_ADDRESS: u8 = 15;
const W_BASIC_SCHOOL_TYPE: u8 = 10;
const W_BASIC_REGION: u8 = 10;
const W_BASIC_DISTRICT: u8 = 5;
const W_BASIC_EMAIL: u8 = 10;
const W_BASIC_WEBSITE: u8 = 10;
const W_BASIC_DESCRIPTION: u8 = 10;
const W_BASIC_SOCIAL: u8 = 10;

// -- Education section weights --
const W_EDU_GRADES: u8 = 25;
const W_EDU_LANGUAGES: u8 = 20;
const W_EDU_CURRICULUM: u8 = 20;
const W_EDU_PRICING: u8 = 25;
const W_EDU_EXTRA_LANGUAGES: u8 = 5;
const W_EDU_SPECIALIZATIONS: u8 = 5;

// -- Teachers section weights --
const W_TEACHERS_ANY: u8 = 40;
const W_TEACHERS_THREE: u8 = 20;
const W_TEACHERS_POSITIONS: u8 = 20;
const W_TEACHERS_BIOS: u8 = 20;

// -- Results section weights --
const W_RESULTS_EXAMS: u8 = 50;
const W_RESULTS_OLYMPIADS: u8 = 25;
const W_RESULTS_UNIVERSITIES: u8 = 25;

// -- Media section weights --
const W_MEDIA_PHOTOS: u8 = 40;
const W_MEDIA_FIVE_PHOTOS: u8 = 15;
const W_MEDIA_COVER: u8 = 15;
const W_MEDIA_VIDEOS: u8 = 15;
const W_MEDIA_LOGO: u8 = 15;

/// Minimum score a fully required-complete basic section reports: the
/// sum of the weights of all fields the validator treats as required.
pub const BASIC_REQUIRED_WEIGHT: u8 =
    W_BASIC_NAME + W_BASIC_PHONE + W_BASIC_ADDRESS + W_BASIC_SCHOOL_TYPE;

/// Compute a section's completeness score in `[0, 100]`.
///
/// Deterministic and monotonic: filling a previously-missing field never
/// decreases the score, clearing a present field never increases it.
pub fn section_progress(form: &SectionForm) -> u8 {
    let score = match form {
        SectionForm::Basic(basic) => basic_progress(basic),
        SectionForm::Education(edu) => education_progress(edu),
        SectionForm::Teachers(teachers) => teachers_progress(teachers),
        SectionForm::Results(results) => results_progress(results),
        SectionForm::Media(media) => media_progress(media),
    };
    score.min(100)
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn basic_progress(basic: &BasicSection) -> u8 {
    let mut score = 0u8;
    score += if present(&basic.name_uz) { W_BASIC_NAME } else { 0 };
    score += if present(&basic.phone) { W_BASIC_PHONE } else { 0 };
    score += if present(&basic.address) { W_BASIC_ADDRESS } else { 0 };
    score += if present(&basic.school_type) { W_BASIC_SCHOOL_TYPE } else { 0 };
    score += if basic.region_id.is_some() { W_BASIC_REGION } else { 0 };
    score += if basic.district_id.is_some() { W_BASIC_DISTRICT } else { 0 };
    score += if present(&basic.email) { W_BASIC_EMAIL } else { 0 };
    score += if present(&basic.website) { W_BASIC_WEBSITE } else { 0 };
    score += if present(&basic.description) { W_BASIC_DESCRIPTION } else { 0 };
    let any_social =
        present(&basic.instagram) || present(&basic.telegram) || present(&basic.facebook);
    score += if any_social { W_BASIC_SOCIAL } else { 0 };
    score
}

fn education_progress(edu: &EducationSection) -> u8 {
    let mut score = 0u8;
    score += if !edu.accepted_grades.is_empty() { W_EDU_GRADES } else { 0 };
    score += if !edu.primary_languages.is_empty() { W_EDU_LANGUAGES } else { 0 };
    score += if !edu.curriculum.is_empty() { W_EDU_CURRICULUM } else { 0 };
    let has_pricing = !edu.pricing_tiers.is_empty() || edu.price_min.is_some();
    score += if has_pricing { W_EDU_PRICING } else { 0 };
    score += if !edu.additional_languages.is_empty() { W_EDU_EXTRA_LANGUAGES } else { 0 };
    score += if !edu.specializations.is_empty() { W_EDU_SPECIALIZATIONS } else { 0 };
    score
}

fn teachers_progress(teachers: &TeachersSection) -> u8 {
    let entries = &teachers.teachers;
    let mut score = 0u8;
    score += if !entries.is_empty() { W_TEACHERS_ANY } else { 0 };
    score += if entries.len() >= 3 { W_TEACHERS_THREE } else { 0 };
    score += if entries.iter().any(|t| present(&t.position)) { W_TEACHERS_POSITIONS } else { 0 };
    score += if entries.iter().any(|t| present(&t.bio)) { W_TEACHERS_BIOS } else { 0 };
    score
}

fn results_progress(results: &ResultsSection) -> u8 {
    let mut score = 0u8;
    score += if !results.exam_results.is_empty() { W_RESULTS_EXAMS } else { 0 };
    score += if !results.olympiad_achievements.is_empty() { W_RESULTS_OLYMPIADS } else { 0 };
    score += if !results.university_admissions.is_empty() { W_RESULTS_UNIVERSITIES } else { 0 };
    score
}

fn media_progress(media: &MediaSection) -> u8 {
    let mut score = 0u8;
    score += if !media.photos.is_empty() { W_MEDIA_PHOTOS } else { 0 };
    score += if media.photos.len() >= 5 { W_MEDIA_FIVE_PHOTOS } else { 0 };
    score += if media.photos.iter().any(|p| p.is_cover) { W_MEDIA_COVER } else { 0 };
    score += if !media.videos.is_empty() { W_MEDIA_VIDEOS } else { 0 };
    score += if present(&media.logo_url) { W_MEDIA_LOGO } else { 0 };
    score
}
