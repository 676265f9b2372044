//! Medicine registry records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A medicine as registered by its manufacturer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicineRecord {
    /// Stable unique identifier
    pub id: String,
    /// Product name with strength (e.g., "Paracetamol 500mg")
    pub name: String,
    /// Lot identifier printed on the packaging, unique case-insensitively
    pub batch_number: String,
    /// Value encoded in the package QR code, unique case-insensitively
    pub qr_code: String,
    pub manufacturer: String,
    pub expiry_date: NaiveDate,
    pub dosage_instructions: String,
    /// Whether this record matches a known legitimate manufacturer record
    pub is_authentic: bool,
    pub side_effects: Vec<String>,
    /// Display price ("N/A" for non-authentic products)
    pub price: String,
}

/// Day thresholds used to band expiry dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExpiryThresholds {
    /// Fewer days than this left is critical
    pub critical_days: i64,
    /// Fewer days than this left is a warning; also the "expiring soon" window
    pub expiring_soon_days: i64,
}

impl Default for ExpiryThresholds {
    fn default() -> Self {
        Self {
            critical_days: 30,
            expiring_soon_days: 90,
        }
    }
}

/// Expiry band of a medicine relative to a given day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExpiryStatus {
    Expired { days_ago: i64 },
    Critical { days_left: i64 },
    Warning { days_left: i64 },
    Good { days_left: i64 },
}

impl MedicineRecord {
    /// Create a record with the identifying fields; the rest start empty.
    pub fn new(
        id: String,
        name: String,
        batch_number: String,
        qr_code: String,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name,
            batch_number,
            qr_code,
            manufacturer: String::new(),
            expiry_date,
            dosage_instructions: String::new(),
            is_authentic: true,
            side_effects: Vec::new(),
            price: String::new(),
        }
    }

    /// Check the batch number against a key, ignoring case.
    pub fn matches_batch(&self, key: &str) -> bool {
        self.batch_number.to_lowercase() == key.to_lowercase()
    }

    /// Check the QR code value against a key, ignoring case.
    pub fn matches_qr(&self, key: &str) -> bool {
        self.qr_code.to_lowercase() == key.to_lowercase()
    }

    /// Whole days from `today` until expiry. Negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.days_until_expiry(today) < 0
    }

    /// Still valid with fewer than `threshold_days` left. Agrees with the
    /// `Warning` and `Critical` bands of [`expiry_status`](Self::expiry_status).
    pub fn is_expiring_soon(&self, today: NaiveDate, threshold_days: i64) -> bool {
        let days = self.days_until_expiry(today);
        days > 0 && days < threshold_days
    }

    /// Band the expiry date for display.
    pub fn expiry_status(&self, today: NaiveDate, thresholds: ExpiryThresholds) -> ExpiryStatus {
        let days = self.days_until_expiry(today);
        if days < 0 {
            ExpiryStatus::Expired { days_ago: -days }
        } else if days < thresholds.critical_days {
            ExpiryStatus::Critical { days_left: days }
        } else if days < thresholds.expiring_soon_days {
            ExpiryStatus::Warning { days_left: days }
        } else {
            ExpiryStatus::Good { days_left: days }
        }
    }

    /// Expiry date as shown on screen, e.g. "31 Dec 2026".
    pub fn formatted_expiry(&self) -> String {
        self.expiry_date.format("%d %b %Y").to_string()
    }
}
