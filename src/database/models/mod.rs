pub mod office;
pub mod org_unit;
pub mod user;
