//! Maktab domain logic.
//!
//! Pure building blocks shared by the API and repository layers: field
//! normalizers, per-section form validation and progress scoring, the
//! autosave controller, and listing filter/sort helpers. This crate has
//! zero internal dependencies so any future CLI or worker tooling can
//! reuse it.

pub mod autosave;
pub mod error;
pub mod listing;
pub mod merge;
pub mod normalize;
pub mod pricing;
pub mod progress;
pub mod sections;
pub mod types;
pub mod validation;
