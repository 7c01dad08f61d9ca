//! HTTP handlers, one module per resource.

pub mod brand;
pub mod geocode;
pub mod media;
pub mod region;
pub mod review;
pub mod school;
pub mod section;
pub mod staff;
