//! Lookup service over the record store.
//!
//! Medicine lookups are exact (ignoring case) on machine-readable keys, since
//! a partial match could tie a counterfeit code to a genuine record. Pharmacy
//! search is a discovery aid and uses substring matching. "Not found" is
//! always a value (`None` or an empty `Vec`), never an error.

mod query;

pub use query::*;

use thiserror::Error;

use crate::models::{MedicineRecord, PharmacyRecord};
use crate::registry::Registry;

/// Lookup errors. Only raised at the input boundary.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("Query is empty")]
    EmptyQuery,
}

pub type LookupResult<T> = Result<T, LookupError>;

/// Pure lookups against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Lookup<'a> {
    registry: &'a Registry,
}

impl<'a> Lookup<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Find the medicine whose batch number equals `key`, ignoring case.
    pub fn find_medicine_by_batch(&self, key: &str) -> Option<&'a MedicineRecord> {
        let found = self
            .registry
            .medicines()
            .iter()
            .find(|m| m.matches_batch(key));
        tracing::debug!(key, found = found.is_some(), "batch lookup");
        found
    }

    /// Find the medicine whose QR value equals `key`, ignoring case.
    pub fn find_medicine_by_qr(&self, key: &str) -> Option<&'a MedicineRecord> {
        let found = self
            .registry
            .medicines()
            .iter()
            .find(|m| m.matches_qr(key));
        tracing::debug!(key, found = found.is_some(), "qr lookup");
        found
    }

    /// Pharmacies whose name or location contains `query`, ignoring case,
    /// in store order. An empty query returns the whole directory.
    pub fn search_pharmacies(&self, query: &str) -> Vec<&'a PharmacyRecord> {
        let pharmacies = self.registry.pharmacies();
        if query.is_empty() {
            return pharmacies.iter().collect();
        }
        let needle = query.to_lowercase();
        pharmacies
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// Verified pharmacies only, first `limit` in store order.
    pub fn nearby_pharmacies(&self, limit: usize) -> Vec<&'a PharmacyRecord> {
        self.registry
            .pharmacies()
            .iter()
            .filter(|p| p.verified)
            .take(limit)
            .collect()
    }
}

/// Count the verified pharmacies in a result list.
pub fn verified_count(results: &[&PharmacyRecord]) -> usize {
    results.iter().filter(|p| p.verified).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(results: &[&PharmacyRecord]) -> Vec<String> {
        results.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_find_by_batch_any_case() {
        let registry = Registry::builtin().unwrap();
        let lookup = Lookup::new(&registry);

        let upper = lookup.find_medicine_by_batch("PCT2024001").unwrap();
        let lower = lookup.find_medicine_by_batch("pct2024001").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.name, "Paracetamol 500mg");
        assert!(upper.is_authentic);
    }

    #[test]
    fn test_find_by_batch_counterfeit() {
        let registry = Registry::builtin().unwrap();
        let fake = Lookup::new(&registry).find_medicine_by_batch("FAKE001").unwrap();
        assert!(!fake.is_authentic);
        assert_eq!(fake.price, "N/A");
    }

    #[test]
    fn test_find_by_batch_not_found() {
        let registry = Registry::builtin().unwrap();
        let lookup = Lookup::new(&registry);
        assert!(lookup.find_medicine_by_batch("NOTREAL999").is_none());
        // Exact match only: prefixes and the QR value do not hit
        assert!(lookup.find_medicine_by_batch("PCT2024").is_none());
        assert!(lookup.find_medicine_by_batch("QR-PCT2024001").is_none());
    }

    #[test]
    fn test_find_by_qr() {
        let registry = Registry::builtin().unwrap();
        let lookup = Lookup::new(&registry);
        assert_eq!(lookup.find_medicine_by_qr("qr-amx2024002").unwrap().id, "2");
        assert!(lookup.find_medicine_by_qr("AMX2024002").is_none());
    }

    #[test]
    fn test_search_empty_returns_all_in_order() {
        let registry = Registry::builtin().unwrap();
        let all = Lookup::new(&registry).search_pharmacies("");
        let ids: Vec<_> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_search_kampala() {
        let registry = Registry::builtin().unwrap();
        let results = Lookup::new(&registry).search_pharmacies("kampala");
        assert_eq!(names(&results), vec!["Care Pharmacy", "Discount Drugs"]);
        assert_eq!(verified_count(&results), 1);
    }

    #[test]
    fn test_search_matches_name() {
        let registry = Registry::builtin().unwrap();
        let results = Lookup::new(&registry).search_pharmacies("PHARMACY");
        assert_eq!(
            names(&results),
            vec![
                "Care Pharmacy",
                "HealthPlus Pharmacy",
                "Wellness Pharmacy",
                "Trusted Pharmacy"
            ]
        );
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let registry = Registry::builtin().unwrap();
        assert!(Lookup::new(&registry).search_pharmacies("Nairobi").is_empty());
    }

    #[test]
    fn test_nearby_is_verified_only() {
        let registry = Registry::builtin().unwrap();
        let nearby = Lookup::new(&registry).nearby_pharmacies(4);
        assert_eq!(
            names(&nearby),
            vec![
                "Care Pharmacy",
                "HealthPlus Pharmacy",
                "Community Drug Shop",
                "Wellness Pharmacy"
            ]
        );
        assert_eq!(verified_count(&nearby), 4);
    }
}
