pub mod org_unit_service;
