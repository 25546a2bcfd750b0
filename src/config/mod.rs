//! Configuration modules for the Bookstack API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with sensible defaults:
//!
//! - [`borrow`]: Membership-tier borrowing quotas
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL database connection pool initialization
//! - [`jwt`]: JWT authentication configuration
//! - [`rate_limit`]: API rate limiting configuration

pub mod borrow;
pub mod cors;
pub mod database;
pub mod jwt;
pub mod rate_limit;
