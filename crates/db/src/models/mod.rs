pub mod listing;
pub mod media;
pub mod organization;
pub mod region;
pub mod review;
pub mod school_details;
pub mod section_progress;
pub mod staff;
