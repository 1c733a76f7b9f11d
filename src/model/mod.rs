/// Catalog of upstream endpoints
pub mod endpoints;
/// Entity kinds and keys
pub mod entity;
/// Single-attempt HTTP transport and response classification
pub mod http;
/// Request descriptors, cursors and filter expressions
pub mod requests;
/// Parameters of resource operations
pub mod resources;
/// Response models and acknowledgements
pub mod responses;
/// Re-authentication retry budget
pub mod retry;
