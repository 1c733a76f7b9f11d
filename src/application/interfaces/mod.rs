/// Agent and runtime environment interface
pub mod agent;
/// User group interface
pub mod group;
/// Job control interface
pub mod job;
/// Repository object interface
pub mod object;
/// Object permission interface
pub mod permission;
/// Role interface
pub mod role;
/// Schedule interface
pub mod schedule;
/// Source control interface
pub mod source_control;
/// User interface
pub mod user;
