// Shared type definitions
// Each submodule defines types used across the crate.

pub mod errors;
pub mod home;
pub mod search;
pub mod settings;
pub mod video;
