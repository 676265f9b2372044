//! In-session reports of suspicious medicines and pharmacies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Why a medicine is being reported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ReportReason {
    SuspectedCounterfeit,
    ExpiredMedicine,
    DamagedPackaging,
    SuspiciousAppearance,
    MissingInformation,
    Other,
}

impl ReportReason {
    pub const ALL: [ReportReason; 6] = [
        ReportReason::SuspectedCounterfeit,
        ReportReason::ExpiredMedicine,
        ReportReason::DamagedPackaging,
        ReportReason::SuspiciousAppearance,
        ReportReason::MissingInformation,
        ReportReason::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ReportReason::SuspectedCounterfeit => "suspected-counterfeit",
            ReportReason::ExpiredMedicine => "expired-medicine",
            ReportReason::DamagedPackaging => "damaged-packaging",
            ReportReason::SuspiciousAppearance => "suspicious-appearance",
            ReportReason::MissingInformation => "missing-information",
            ReportReason::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportReason::SuspectedCounterfeit => "Suspected counterfeit",
            ReportReason::ExpiredMedicine => "Expired medicine",
            ReportReason::DamagedPackaging => "Damaged packaging",
            ReportReason::SuspiciousAppearance => "Suspicious appearance",
            ReportReason::MissingInformation => "Missing information",
            ReportReason::Other => "Other",
        }
    }
}

impl FromStr for ReportReason {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ReportReason::ALL
            .into_iter()
            .find(|r| r.key().eq_ignore_ascii_case(key) || r.label().eq_ignore_ascii_case(key))
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for ReportReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a report is about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportSubject {
    Medicine {
        medicine_id: String,
        reason: ReportReason,
        /// Where it was bought, if the user said
        pharmacy: Option<String>,
    },
    Pharmacy {
        /// Name as the user searched for it
        name: String,
    },
}

/// A report filed during this session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Report {
    pub report_id: String,
    pub subject: ReportSubject,
    pub created_at: String,
}

impl Report {
    pub fn new(subject: ReportSubject) -> Self {
        Self {
            report_id: uuid::Uuid::new_v4().to_string(),
            subject,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
