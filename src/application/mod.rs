/// Session management and login
pub mod auth;
/// Client facade
pub mod client;
/// Application configuration module
pub mod config;
/// Request execution with session-aware retries
pub mod executor;
/// Service traits per resource
pub mod interfaces;
/// Listing aggregation across pages
pub mod paginator;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Name and path to id resolution
pub mod resolver;
/// Service implementations on the client
pub mod services;
