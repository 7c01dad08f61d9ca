mod listing_repo;
mod media_repo;
mod organization_repo;
mod region_repo;
mod review_repo;
mod school_details_repo;
mod section_progress_repo;
mod staff_repo;

pub use listing_repo::ListingRepo;
pub use media_repo::MediaRepo;
pub use organization_repo::OrganizationRepo;
pub use region_repo::RegionRepo;
pub use review_repo::ReviewRepo;
pub use school_details_repo::SchoolDetailsRepo;
pub use section_progress_repo::SectionProgressRepo;
pub use staff_repo::StaffRepo;
