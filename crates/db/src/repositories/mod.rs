//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod category_repo;
pub mod company_profile_repo;
pub mod seeker_profile_repo;
pub mod skill_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use company_profile_repo::CompanyProfileRepo;
pub use seeker_profile_repo::SeekerProfileRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
