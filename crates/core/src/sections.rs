//! Section identifiers and typed form payloads for the school-profile
//! editor.
//!
//! Each section of the admin editor (basic info, education, teachers,
//! results, media) has its own form struct. The API deserializes a PATCH
//! body into [`SectionForm`] using the section named in the URL, then
//! runs the validators and progress scoring in [`crate::validation`] and
//! [`crate::progress`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pricing::PricingTier;
use crate::types::DbId;

/// Valid school types for the basic section.
pub const SCHOOL_TYPES: &[&str] = &["private", "public", "international", "specialized"];

/// One logical group of an organization's editable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Basic,
    Education,
    Teachers,
    Results,
    Media,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Basic,
        SectionId::Education,
        SectionId::Teachers,
        SectionId::Results,
        SectionId::Media,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Basic => "basic",
            SectionId::Education => "education",
            SectionId::Teachers => "teachers",
            SectionId::Results => "results",
            SectionId::Media => "media",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(SectionId::Basic),
            "education" => Ok(SectionId::Education),
            "teachers" => Ok(SectionId::Teachers),
            "results" => Ok(SectionId::Results),
            "media" => Ok(SectionId::Media),
            other => Err(format!("unknown section: {other}")),
        }
    }
}

/// A secondary phone with a free-text comment ("reception", "director").
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdditionalPhone {
    pub phone: String,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Basic info section: identity, contacts, location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicSection {
    pub name_uz: Option<String>,
    pub name_ru: Option<String>,
    pub phone: Option<String>,
    pub additional_phones: Vec<AdditionalPhone>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub instagram: Option<String>,
    pub telegram: Option<String>,
    pub facebook: Option<String>,
    pub region_id: Option<DbId>,
    pub district_id: Option<DbId>,
    pub address: Option<String>,
    pub landmark: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub school_type: Option<String>,
}

/// Education section: grades, languages, curriculum, pricing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationSection {
    /// Authoritative grades list. Grade 0 is the preparatory grade.
    pub accepted_grades: Vec<i32>,
    pub primary_languages: Vec<String>,
    pub additional_languages: Vec<String>,
    pub curriculum: Vec<String>,
    /// When non-empty, the flat price range is derived from these.
    pub pricing_tiers: Vec<PricingTier>,
    /// Flat range, only meaningful when `pricing_tiers` is empty.
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub specializations: Vec<String>,
}

/// One staff member in the teachers section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StaffEntry {
    pub full_name: String,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
}

/// Teachers section: the staff roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeachersSection {
    pub teachers: Vec<StaffEntry>,
}

/// A single exam score entry in the results section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    /// One of `ielts`, `sat`, `national`.
    pub exam: String,
    pub score: f64,
}

/// Results section: exam scores and achievements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsSection {
    pub exam_results: Vec<ExamResult>,
    pub olympiad_achievements: Vec<String>,
    pub university_admissions: Vec<String>,
}

/// One photo or video entry in the media section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaItem {
    pub url: String,
    pub category: Option<String>,
    pub is_cover: bool,
}

/// Media section: photos, videos, logo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaSection {
    pub photos: Vec<MediaItem>,
    pub videos: Vec<MediaItem>,
    pub logo_url: Option<String>,
}

/// A section PATCH payload, tagged by the section it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionForm {
    Basic(BasicSection),
    Education(EducationSection),
    Teachers(TeachersSection),
    Results(ResultsSection),
    Media(MediaSection),
}

impl SectionForm {
    /// Deserialize a form body for the section named in the request URL.
    pub fn from_value(
        section: SectionId,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        Ok(match section {
            SectionId::Basic => SectionForm::Basic(serde_json::from_value(value)?),
            SectionId::Education => SectionForm::Education(serde_json::from_value(value)?),
            SectionId::Teachers => SectionForm::Teachers(serde_json::from_value(value)?),
            SectionId::Results => SectionForm::Results(serde_json::from_value(value)?),
            SectionId::Media => SectionForm::Media(serde_json::from_value(value)?),
        })
    }

    pub fn section(&self) -> SectionId {
        match self {
            SectionForm::Basic(_) => SectionId::Basic,
            SectionForm::Education(_) => SectionId::Education,
            SectionForm::Teachers(_) => SectionId::Teachers,
            SectionForm::Results(_) => SectionId::Results,
            SectionForm::Media(_) => SectionId::Media,
        }
    }
}
