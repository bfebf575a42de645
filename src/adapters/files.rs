use crate::domain::model::{Listing, VendorProfile};
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

pub fn read_profile<P: AsRef<Path>>(path: P) -> Result<VendorProfile> {
    let path = path.as_ref();
    tracing::debug!("📁 Reading vendor profile from {}", path.display());
    let content = fs::read_to_string(path)?;
    VendorProfile::from_json_str(&content)
}

pub fn read_listing<P: AsRef<Path>>(path: P) -> Result<Listing> {
    let path = path.as_ref();
    tracing::debug!("📁 Reading listing from {}", path.display());
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn read_listings<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let listings: Vec<Listing> = serde_json::from_str(&content)?;
    tracing::debug!("📁 Read {} listings from {}", listings.len(), path.display());
    Ok(listings)
}
