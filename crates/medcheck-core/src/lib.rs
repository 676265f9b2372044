//! MedCheck Core Library
//!
//! Offline medicine verification: batch and QR lookups against a static
//! registry, a pharmacy directory, and the session state the app screens
//! are driven from.
//!
//! # Architecture
//!
//! ```text
//!   QR reader ─┐      batch number ─┐        SMS "MED <batch>" ─┐
//!              ▼                    ▼                           ▼
//!        ┌──────────────────────────────────────────────────────────┐
//!        │            Verifier (delays + pending gates)             │
//!        └────────────────────────────┬─────────────────────────────┘
//!                                     │ CodeQuery
//!                                     ▼
//!        ┌──────────────────┐   ┌──────────┐   ┌─────────────────────┐
//!        │ Registry (read)  │◀──│  Lookup  │──▶│ Session             │
//!        │ medicines        │   └──────────┘   │ screen, selection,  │
//!        │ pharmacies       │                  │ saved list, reports │
//!        └──────────────────┘                  └─────────────────────┘
//! ```
//!
//! # Core Principle
//!
//! **A counterfeit is a successful lookup.** A record with
//! `is_authentic == false` is found, selected and shown like any other;
//! only the notice differs. "Not found" is a separate outcome.
//!
//! # Modules
//!
//! - [`registry`]: Validated read-only medicine and pharmacy records
//! - [`lookup`]: Exact key lookups and pharmacy search
//! - [`session`]: Screen, selection, saved list and reports
//! - [`verify`]: Simulated scan, batch search and SMS flows
//! - [`config`]: TOML configuration for delays and thresholds
//! - [`models`]: Domain types

pub mod config;
pub mod lookup;
pub mod models;
pub mod registry;
pub mod session;
pub mod verify;

// Re-export commonly used types
pub use config::MedCheckConfig;
pub use lookup::{CodeQuery, Lookup};
pub use models::{
    ExpiryStatus, ExpiryThresholds, LicenseStatus, MedicineRecord, PharmacyRecord, Report,
    ReportReason, ReportSubject,
};
pub use registry::Registry;
pub use session::{LookupOutcome, NavTab, Operation, Screen, Session, SmsReply, SmsStatus};
pub use verify::{CodeReader, Verifier};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use medcheck_content::{Category, ContentError, Language, LocalizedTip, SharePlatform};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum MedCheckError {
    #[error("Registry error: {0}")]
    RegistryError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Busy: {0}")]
    Busy(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Lock error: {0}")]
    LockError(String),
}

impl From<registry::RegistryError> for MedCheckError {
    fn from(e: registry::RegistryError) -> Self {
        MedCheckError::RegistryError(e.to_string())
    }
}

impl From<config::ConfigError> for MedCheckError {
    fn from(e: config::ConfigError) -> Self {
        MedCheckError::ConfigError(e.to_string())
    }
}

impl From<lookup::LookupError> for MedCheckError {
    fn from(e: lookup::LookupError) -> Self {
        MedCheckError::InvalidInput(e.to_string())
    }
}

impl From<ContentError> for MedCheckError {
    fn from(e: ContentError) -> Self {
        MedCheckError::InvalidInput(e.to_string())
    }
}

impl From<verify::VerifyError> for MedCheckError {
    fn from(e: verify::VerifyError) -> Self {
        match e {
            verify::VerifyError::Lookup(e) => e.into(),
            verify::VerifyError::Busy(op) => MedCheckError::Busy(op.key().to_string()),
            verify::VerifyError::LockPoisoned(msg) => MedCheckError::LockError(msg),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for MedCheckError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        MedCheckError::LockError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a session over the built-in dataset with default settings.
#[uniffi::export]
pub fn open_medcheck() -> Result<Arc<MedCheckCore>, MedCheckError> {
    MedCheckCore::build(MedCheckConfig::default(), Registry::builtin()?)
}

/// Open a session over the built-in dataset with a TOML config document.
#[uniffi::export]
pub fn open_medcheck_with_config(config_toml: String) -> Result<Arc<MedCheckCore>, MedCheckError> {
    let config = MedCheckConfig::from_toml_str(&config_toml)?;
    MedCheckCore::build(config, Registry::builtin()?)
}

/// Open a session over a JSON registry snapshot.
#[uniffi::export]
pub fn open_medcheck_with_registry(
    registry_json: String,
    config_toml: String,
) -> Result<Arc<MedCheckCore>, MedCheckError> {
    let config = MedCheckConfig::from_toml_str(&config_toml)?;
    MedCheckCore::build(config, Registry::from_json(&registry_json)?)
}

/// Install a `tracing` subscriber writing to stderr. `filter` uses
/// `RUST_LOG` syntax; an unparsable filter falls back to `info`.
/// Returns false if a subscriber was already installed.
#[uniffi::export]
pub fn init_logging(filter: String) -> bool {
    let filter = tracing_subscriber::EnvFilter::try_new(&filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe session wrapper for FFI.
#[derive(uniffi::Object)]
pub struct MedCheckCore {
    session: Arc<Mutex<Session>>,
    verifier: Verifier,
    config: MedCheckConfig,
}

impl MedCheckCore {
    fn build(config: MedCheckConfig, registry: Registry) -> Result<Arc<Self>, MedCheckError> {
        let verifier =
            Verifier::new(config.simulation.clone()).with_sms(config.sms.clone());
        Ok(Arc::new(Self {
            session: Arc::new(Mutex::new(Session::new(Arc::new(registry)))),
            verifier,
            config,
        }))
    }

    /// Calendar day on the device clock.
    fn today() -> chrono::NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[uniffi::export]
impl MedCheckCore {
    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn current_screen(&self) -> Result<String, MedCheckError> {
        let session = self.session.lock()?;
        Ok(session.current_screen().key().to_string())
    }

    /// Follow a home tile (e.g. "batch-entry"). Returns the screen shown.
    pub fn handle_home_action(&self, action: String) -> Result<String, MedCheckError> {
        let mut session = self.session.lock()?;
        Ok(session.handle_home_action(&action).key().to_string())
    }

    pub fn back(&self) -> Result<String, MedCheckError> {
        let mut session = self.session.lock()?;
        Ok(session.back().key().to_string())
    }

    /// Jump to a bottom-bar tab by screen key (e.g. "my-medicines").
    pub fn bottom_nav(&self, tab: String) -> Result<String, MedCheckError> {
        let tab: NavTab = tab
            .parse()
            .map_err(|t| MedCheckError::InvalidInput(format!("unknown tab: {}", t)))?;
        let mut session = self.session.lock()?;
        Ok(session.bottom_nav(tab).key().to_string())
    }

    /// Bottom-bar tab to highlight for the current screen, if any.
    pub fn active_tab(&self) -> Result<Option<String>, MedCheckError> {
        let session = self.session.lock()?;
        Ok(NavTab::for_screen(session.current_screen()).map(|tab| tab.screen().key().to_string()))
    }

    /// Currently running operations ("scan", "batch-search", "sms").
    pub fn pending_operations(&self) -> Result<Vec<String>, MedCheckError> {
        let session = self.session.lock()?;
        Ok(session
            .pending_operations()
            .into_iter()
            .map(|op| op.key().to_string())
            .collect())
    }

    // =========================================================================
    // Medicines
    // =========================================================================

    pub fn selected_medicine(&self) -> Result<Option<FfiMedicine>, MedCheckError> {
        let session = self.session.lock()?;
        Ok(session.selected_medicine().cloned().map(|m| m.into()))
    }

    /// Saved medicines with their expiry band as of today.
    pub fn saved_medicines(&self) -> Result<Vec<FfiSavedMedicine>, MedCheckError> {
        let session = self.session.lock()?;
        let today = Self::today();
        let thresholds = self.config.expiry.thresholds();
        Ok(session
            .saved_medicines()
            .iter()
            .map(|m| FfiSavedMedicine::new(m, today, thresholds))
            .collect())
    }

    /// Save the medicine on the result screen. Returns "saved" or
    /// "already-saved".
    pub fn save_selected(&self) -> Result<String, MedCheckError> {
        let mut session = self.session.lock()?;
        let outcome = session
            .save_selected()
            .ok_or_else(|| MedCheckError::NotFound("no medicine selected".into()))?;
        Ok(match outcome {
            session::SaveOutcome::Saved => "saved",
            session::SaveOutcome::AlreadySaved => "already-saved",
        }
        .to_string())
    }

    pub fn remove_saved(&self, id: String) -> Result<bool, MedCheckError> {
        let mut session = self.session.lock()?;
        Ok(session.remove(&id))
    }

    /// Open a saved medicine on the result screen.
    pub fn view_saved(&self, id: String) -> Result<bool, MedCheckError> {
        let mut session = self.session.lock()?;
        Ok(session.view_saved(&id))
    }

    pub fn expiring_soon_count(&self) -> Result<u32, MedCheckError> {
        let session = self.session.lock()?;
        let count =
            session.expiring_soon_count(Self::today(), self.config.expiry.expiring_soon_days);
        Ok(count as u32)
    }

    /// Batch numbers offered as examples on the entry screen.
    pub fn suggested_batches(&self) -> Vec<String> {
        Registry::suggested_batches()
            .iter()
            .map(|b| b.to_string())
            .collect()
    }

    // =========================================================================
    // Pharmacies
    // =========================================================================

    pub fn search_pharmacies(&self, query: String) -> Result<Vec<FfiPharmacy>, MedCheckError> {
        let session = self.session.lock()?;
        Ok(session
            .lookup()
            .search_pharmacies(&query)
            .into_iter()
            .map(|p| p.into())
            .collect())
    }

    pub fn nearby_pharmacies(&self) -> Result<Vec<FfiPharmacy>, MedCheckError> {
        let session = self.session.lock()?;
        Ok(session
            .lookup()
            .nearby_pharmacies(self.config.directory.nearby_limit)
            .into_iter()
            .map(|p| p.into())
            .collect())
    }

    // =========================================================================
    // Reports and Profile
    // =========================================================================

    /// Report the selected medicine. `reason` is a reason key or label.
    pub fn report_medicine(
        &self,
        reason: String,
        pharmacy: Option<String>,
    ) -> Result<FfiReport, MedCheckError> {
        let reason: ReportReason = reason
            .parse()
            .map_err(|r| MedCheckError::InvalidInput(format!("unknown report reason: {}", r)))?;
        let mut session = self.session.lock()?;
        let report = session
            .report_medicine(reason, pharmacy.as_deref())
            .ok_or_else(|| MedCheckError::NotFound("no medicine selected".into()))?;
        Ok(report.into())
    }

    pub fn report_pharmacy(&self, name: String) -> Result<FfiReport, MedCheckError> {
        let mut session = self.session.lock()?;
        let report = session
            .report_pharmacy(&name)
            .ok_or_else(|| MedCheckError::InvalidInput("pharmacy name is empty".into()))?;
        Ok(report.into())
    }

    pub fn profile_summary(&self) -> Result<FfiProfileSummary, MedCheckError> {
        let session = self.session.lock()?;
        Ok(session.profile_summary().into())
    }

    // =========================================================================
    // SMS
    // =========================================================================

    /// "idle", "sending", "awaiting-reply" or "replied".
    pub fn sms_status(&self) -> Result<String, MedCheckError> {
        let session = self.session.lock()?;
        Ok(session.sms_status().key().to_string())
    }

    pub fn sms_link(&self, batch_number: String, offline: bool) -> Result<String, MedCheckError> {
        Ok(self.verifier.sms_link(&batch_number, offline)?)
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Education tips in a language ("en", "lg", "ach"), optionally one
    /// category only.
    pub fn education_tips(
        &self,
        language: String,
        category: Option<String>,
    ) -> Result<Vec<FfiTip>, MedCheckError> {
        let language: Language = language.parse()?;
        let tips = match category {
            Some(category) => {
                let category: Category = category.parse()?;
                medcheck_content::tips_in(language, category)
            }
            None => medcheck_content::tips_for(language),
        };
        Ok(tips.into_iter().map(|t| t.into()).collect())
    }

    pub fn fact_at(&self, tick: u32) -> String {
        medcheck_content::fact_at(tick as usize).to_string()
    }

    /// Invite link for "whatsapp", "sms" or "email".
    pub fn invite_link(&self, platform: String) -> Result<String, MedCheckError> {
        let platform: SharePlatform = platform.parse()?;
        Ok(medcheck_content::invite_link(platform))
    }

    /// Languages the tips are available in.
    pub fn supported_languages(&self) -> Vec<FfiLanguage> {
        Language::ALL.into_iter().map(|l| l.into()).collect()
    }

    /// Loaded dataset as a JSON snapshot.
    pub fn registry_json(&self) -> Result<String, MedCheckError> {
        let session = self.session.lock()?;
        Ok(session.registry().to_json()?)
    }

    /// Fingerprint of the loaded dataset.
    pub fn registry_digest(&self) -> Result<String, MedCheckError> {
        let session = self.session.lock()?;
        Ok(session.registry().digest().to_string())
    }
}

#[uniffi::export(async_runtime = "tokio")]
impl MedCheckCore {
    /// Look up a typed batch number after the search delay.
    pub async fn verify_batch(&self, batch_number: String) -> Result<FfiLookupOutcome, MedCheckError> {
        let outcome = self.verifier.verify_batch(&self.session, &batch_number).await?;
        Ok(outcome.into())
    }

    /// Simulate a camera scan and look up the code it reads.
    pub async fn scan_qr(&self) -> Result<FfiLookupOutcome, MedCheckError> {
        let outcome = self.verifier.scan_qr(&self.session).await?;
        Ok(outcome.into())
    }

    /// Simulate the SMS round trip for a batch number.
    pub async fn verify_by_sms(&self, batch_number: String) -> Result<FfiSmsReply, MedCheckError> {
        let reply = self.verifier.verify_by_sms(&self.session, &batch_number).await?;
        Ok(reply.into())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe medicine record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicine {
    pub id: String,
    pub name: String,
    pub batch_number: String,
    pub qr_code: String,
    pub manufacturer: String,
    /// ISO date (YYYY-MM-DD)
    pub expiry_date: String,
    /// Display date (e.g. "31 Dec 2026")
    pub formatted_expiry: String,
    pub dosage_instructions: String,
    pub is_authentic: bool,
    pub side_effects: Vec<String>,
    pub price: String,
}

impl From<MedicineRecord> for FfiMedicine {
    fn from(med: MedicineRecord) -> Self {
        Self {
            expiry_date: med.expiry_date.to_string(),
            formatted_expiry: med.formatted_expiry(),
            id: med.id,
            name: med.name,
            batch_number: med.batch_number,
            qr_code: med.qr_code,
            manufacturer: med.manufacturer,
            dosage_instructions: med.dosage_instructions,
            is_authentic: med.is_authentic,
            side_effects: med.side_effects,
            price: med.price,
        }
    }
}

/// FFI-safe saved medicine with its expiry band.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSavedMedicine {
    pub medicine: FfiMedicine,
    /// "expired", "critical", "warning" or "good"
    pub expiry_status: String,
    /// Negative once expired
    pub days_until_expiry: i64,
}

impl FfiSavedMedicine {
    fn new(med: &MedicineRecord, today: chrono::NaiveDate, thresholds: ExpiryThresholds) -> Self {
        let expiry_status = match med.expiry_status(today, thresholds) {
            ExpiryStatus::Expired { .. } => "expired",
            ExpiryStatus::Critical { .. } => "critical",
            ExpiryStatus::Warning { .. } => "warning",
            ExpiryStatus::Good { .. } => "good",
        };
        Self {
            days_until_expiry: med.days_until_expiry(today),
            expiry_status: expiry_status.to_string(),
            medicine: med.clone().into(),
        }
    }
}

/// FFI-safe pharmacy.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPharmacy {
    pub id: String,
    pub name: String,
    pub location: String,
    pub verified: bool,
    pub license_code: String,
    /// "licensed", "unverified" or "expired"
    pub license_status: String,
    pub phone: String,
}

impl From<&PharmacyRecord> for FfiPharmacy {
    fn from(pharmacy: &PharmacyRecord) -> Self {
        let license_status = match pharmacy.license_status() {
            LicenseStatus::Licensed(_) => "licensed",
            LicenseStatus::Unverified => "unverified",
            LicenseStatus::Expired => "expired",
        };
        Self {
            id: pharmacy.id.clone(),
            name: pharmacy.name.clone(),
            location: pharmacy.location.clone(),
            verified: pharmacy.verified,
            license_code: pharmacy.license_code.clone(),
            license_status: license_status.to_string(),
            phone: pharmacy.phone.clone(),
        }
    }
}

/// FFI-safe lookup outcome.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLookupOutcome {
    pub medicine: Option<FfiMedicine>,
    /// "verified", "counterfeit-warning" or "not-found"
    pub notice: String,
    pub message: String,
}

impl From<LookupOutcome> for FfiLookupOutcome {
    fn from(outcome: LookupOutcome) -> Self {
        let notice = outcome.notice();
        let notice_key = match notice {
            session::Notice::Verified => "verified",
            session::Notice::CounterfeitWarning => "counterfeit-warning",
            session::Notice::NotFound => "not-found",
        };
        Self {
            medicine: outcome.medicine().cloned().map(|m| m.into()),
            notice: notice_key.to_string(),
            message: notice.message().to_string(),
        }
    }
}

/// FFI-safe SMS reply.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSmsReply {
    pub is_authentic: bool,
    pub medicine_name: String,
    pub manufacturer: String,
}

impl From<SmsReply> for FfiSmsReply {
    fn from(reply: SmsReply) -> Self {
        Self {
            is_authentic: reply.is_authentic,
            medicine_name: reply.medicine_name,
            manufacturer: reply.manufacturer,
        }
    }
}

/// FFI-safe filed report.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiReport {
    pub report_id: String,
    /// "medicine" or "pharmacy"
    pub kind: String,
    pub created_at: String,
}

impl From<Report> for FfiReport {
    fn from(report: Report) -> Self {
        let kind = match report.subject {
            ReportSubject::Medicine { .. } => "medicine",
            ReportSubject::Pharmacy { .. } => "pharmacy",
        };
        Self {
            report_id: report.report_id,
            kind: kind.to_string(),
            created_at: report.created_at,
        }
    }
}

/// FFI-safe localized tip.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiTip {
    pub id: String,
    pub category: String,
    /// Category heading (e.g. "Spotting Fakes")
    pub category_label: String,
    pub title: String,
    pub content: String,
}

impl From<LocalizedTip> for FfiTip {
    fn from(tip: LocalizedTip) -> Self {
        Self {
            id: tip.id,
            category: tip.category.code().to_string(),
            category_label: tip.category.label().to_string(),
            title: tip.title,
            content: tip.content,
        }
    }
}

/// FFI-safe language choice.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLanguage {
    pub code: String,
    pub label: String,
}

impl From<Language> for FfiLanguage {
    fn from(language: Language) -> Self {
        Self {
            code: language.code().to_string(),
            label: language.label().to_string(),
        }
    }
}

/// FFI-safe profile counters.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiProfileSummary {
    pub saved_count: u32,
    pub report_count: u32,
}

impl From<session::ProfileSummary> for FfiProfileSummary {
    fn from(summary: session::ProfileSummary) -> Self {
        Self {
            saved_count: summary.saved_count as u32,
            report_count: summary.report_count as u32,
        }
    }
}
