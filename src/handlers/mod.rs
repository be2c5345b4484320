// Two security tiers:
// Protected (JWT auth) -> /org-units/*
// Internal (shared-token) -> /org-units/internal/*
pub mod internal;
pub mod protected;
