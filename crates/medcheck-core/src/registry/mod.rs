//! Read-only record store for medicines and pharmacies.
//!
//! A [`Registry`] is built once from a snapshot and never mutated. Building
//! one validates the key invariants (unique ids, unique batch numbers and QR
//! codes ignoring case) so lookups can rely on them, and fingerprints the
//! snapshot so results can be tied to the dataset they came from.

mod data;

use data::{DEMO_QR_CODES, SUGGESTED_BATCHES};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::models::{MedicineRecord, PharmacyRecord};

/// Registry errors.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate medicine id: {0}")]
    DuplicateMedicineId(String),

    #[error("Duplicate batch number: {0}")]
    DuplicateBatchNumber(String),

    #[error("Duplicate QR code: {0}")]
    DuplicateQrCode(String),

    #[error("Duplicate pharmacy id: {0}")]
    DuplicatePharmacyId(String),

    #[error("Medicine {0} has a blank batch number or QR code")]
    BlankKey(String),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Serializable contents of a registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrySnapshot {
    pub medicines: Vec<MedicineRecord>,
    pub pharmacies: Vec<PharmacyRecord>,
}

/// Validated, immutable medicine and pharmacy collections.
#[derive(Debug, Clone)]
pub struct Registry {
    snapshot: RegistrySnapshot,
    digest: String,
}

impl Registry {
    /// Build a registry, rejecting snapshots that break key uniqueness.
    pub fn new(
        medicines: Vec<MedicineRecord>,
        pharmacies: Vec<PharmacyRecord>,
    ) -> RegistryResult<Self> {
        Self::from_snapshot(RegistrySnapshot {
            medicines,
            pharmacies,
        })
    }

    /// Build a registry from an already assembled snapshot.
    pub fn from_snapshot(snapshot: RegistrySnapshot) -> RegistryResult<Self> {
        validate(&snapshot)?;
        let digest = hash_data(serde_json::to_string(&snapshot)?.as_bytes());
        tracing::debug!(
            medicines = snapshot.medicines.len(),
            pharmacies = snapshot.pharmacies.len(),
            digest = %digest,
            "registry loaded"
        );
        Ok(Self { snapshot, digest })
    }

    /// Parse a JSON snapshot (`{"medicines": [...], "pharmacies": [...]}`).
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let snapshot: RegistrySnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// The built-in demo dataset.
    pub fn builtin() -> RegistryResult<Self> {
        Self::from_json(data::BUILTIN_SNAPSHOT)
    }

    /// All medicines, in store order.
    pub fn medicines(&self) -> &[MedicineRecord] {
        &self.snapshot.medicines
    }

    /// All pharmacies, in store order.
    pub fn pharmacies(&self) -> &[PharmacyRecord] {
        &self.snapshot.pharmacies
    }

    /// Get a medicine by id.
    pub fn medicine(&self, id: &str) -> Option<&MedicineRecord> {
        self.snapshot.medicines.iter().find(|m| m.id == id)
    }

    /// Hex SHA-256 of the canonical JSON snapshot.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn snapshot(&self) -> &RegistrySnapshot {
        &self.snapshot
    }

    /// Sample batch numbers offered on the entry screen.
    pub fn suggested_batches() -> &'static [&'static str] {
        &SUGGESTED_BATCHES
    }

    /// QR values the demo scanner can read.
    pub fn demo_qr_codes() -> &'static [&'static str] {
        &DEMO_QR_CODES
    }

    /// Export the snapshot as pretty JSON.
    pub fn to_json(&self) -> RegistryResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot)?)
    }
}

fn validate(snapshot: &RegistrySnapshot) -> RegistryResult<()> {
    let mut ids = HashSet::new();
    let mut batches = HashSet::new();
    let mut qr_codes = HashSet::new();

    for med in &snapshot.medicines {
        if med.batch_number.trim().is_empty() || med.qr_code.trim().is_empty() {
            return Err(RegistryError::BlankKey(med.id.clone()));
        }
        if !ids.insert(med.id.as_str()) {
            return Err(RegistryError::DuplicateMedicineId(med.id.clone()));
        }
        if !batches.insert(med.batch_number.to_lowercase()) {
            return Err(RegistryError::DuplicateBatchNumber(med.batch_number.clone()));
        }
        if !qr_codes.insert(med.qr_code.to_lowercase()) {
            return Err(RegistryError::DuplicateQrCode(med.qr_code.clone()));
        }
    }

    let mut pharmacy_ids = HashSet::new();
    for pharmacy in &snapshot.pharmacies {
        if !pharmacy_ids.insert(pharmacy.id.as_str()) {
            return Err(RegistryError::DuplicatePharmacyId(pharmacy.id.clone()));
        }
    }

    Ok(())
}

/// Hash data with SHA-256 and return hex string.
fn hash_data(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
