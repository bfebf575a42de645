// Adapters layer: turn files and loose JSON into domain types.

pub mod files;
pub mod profile;
