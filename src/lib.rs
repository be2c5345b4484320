pub mod auth;
pub mod chain;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod permissions;
pub mod services;
pub mod validation;
