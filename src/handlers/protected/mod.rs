pub mod org_unit;
