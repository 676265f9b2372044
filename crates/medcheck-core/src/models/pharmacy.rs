//! Pharmacy directory records.

use serde::{Deserialize, Serialize};

/// Licence code sentinel for a pharmacy that never had a licence checked.
pub const LICENSE_UNVERIFIED: &str = "UNVERIFIED";
/// Licence code sentinel for a lapsed licence.
pub const LICENSE_EXPIRED: &str = "EXPIRED";

/// A pharmacy in the static directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PharmacyRecord {
    pub id: String,
    pub name: String,
    /// Free-text location (town, street)
    pub location: String,
    /// Whether the directory lists an active licence
    pub verified: bool,
    /// Licence number, or a sentinel such as "UNVERIFIED" / "EXPIRED"
    pub license_code: String,
    pub phone: String,
}

/// Interpretation of a pharmacy licence code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "code", rename_all = "snake_case")]
pub enum LicenseStatus {
    Licensed(String),
    Unverified,
    Expired,
}

impl PharmacyRecord {
    /// Decode the licence code. Sentinels are matched without regard to case.
    pub fn license_status(&self) -> LicenseStatus {
        let code = self.license_code.trim();
        if code.eq_ignore_ascii_case(LICENSE_UNVERIFIED) {
            LicenseStatus::Unverified
        } else if code.eq_ignore_ascii_case(LICENSE_EXPIRED) {
            LicenseStatus::Expired
        } else {
            LicenseStatus::Licensed(code.to_string())
        }
    }

    /// Case-insensitive substring match on name or location.
    /// `needle_lower` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.location.to_lowercase().contains(needle_lower)
    }
}
