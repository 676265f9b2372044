//! # Session State and Navigation
//!
//! One owned object holds everything the app remembers while it runs:
//!
//! ```text
//! Session
//! ├── registry: Arc<Registry>          // read-only records
//! ├── current_screen: Screen           // exactly one active
//! ├── saved: Vec<MedicineRecord>       // insertion order, unique by id
//! ├── selected: Option<MedicineRecord> // what the result screen shows
//! ├── reports: Vec<Report>             // filed this session
//! ├── sms_status: SmsStatus            // SMS verification exchange
//! └── gates: PendingGates              // one in-flight op per kind
//! ```
//!
//! Fields are private; every change goes through a named operation so the
//! uniqueness and single-selection rules live in one place. Navigation is
//! flat: back always returns to `home`, there is no history stack.
//!
//! The result screen can only be entered together with a record to show,
//! through a successful lookup or by opening a saved entry. Neither home
//! actions nor bottom tabs can name it, so "result screen with nothing
//! selected" cannot be reached.
//!
//! Nothing here is persisted. Dropping the session loses saved medicines.

mod pending;
mod screen;

pub use pending::*;
pub use screen::*;

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::lookup::{CodeQuery, Lookup};
use crate::models::{MedicineRecord, Report, ReportReason, ReportSubject};
use crate::registry::Registry;

/// Result of a batch or QR lookup, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Selected and moved to the result screen.
    Found(MedicineRecord),
    /// Nothing matched; screen and selection untouched.
    NotFound { query: String },
}

impl LookupOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            LookupOutcome::Found(med) if med.is_authentic => Notice::Verified,
            LookupOutcome::Found(_) => Notice::CounterfeitWarning,
            LookupOutcome::NotFound { .. } => Notice::NotFound,
        }
    }

    pub fn medicine(&self) -> Option<&MedicineRecord> {
        match self {
            LookupOutcome::Found(med) => Some(med),
            LookupOutcome::NotFound { .. } => None,
        }
    }
}

/// Banner or toast the presentation layer shows after a lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Notice {
    Verified,
    CounterfeitWarning,
    NotFound,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Verified => "Medicine verified successfully!",
            Notice::CounterfeitWarning => "WARNING: Unverified medicine detected!",
            Notice::NotFound => "Batch number not found",
        }
    }
}

/// Result of saving a medicine to the personal list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

/// Reply to an SMS verification request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SmsReply {
    pub is_authentic: bool,
    pub medicine_name: String,
    pub manufacturer: String,
}

pub const UNKNOWN_MEDICINE_NAME: &str = "Unknown Medicine";
pub const UNKNOWN_MANUFACTURER: &str = "Unknown";

impl SmsReply {
    /// Build the reply for a looked-up record. Unknown batches are reported
    /// as not authentic.
    pub fn for_medicine(medicine: Option<&MedicineRecord>) -> Self {
        match medicine {
            Some(med) => Self {
                is_authentic: med.is_authentic,
                medicine_name: med.name.clone(),
                manufacturer: med.manufacturer.clone(),
            },
            None => Self {
                is_authentic: false,
                medicine_name: UNKNOWN_MEDICINE_NAME.to_string(),
                manufacturer: UNKNOWN_MANUFACTURER.to_string(),
            },
        }
    }
}

/// Progress of the SMS verification exchange.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum SmsStatus {
    #[default]
    Idle,
    Sending,
    AwaitingReply,
    Replied(SmsReply),
}

impl SmsStatus {
    pub fn key(&self) -> &'static str {
        match self {
            SmsStatus::Idle => "idle",
            SmsStatus::Sending => "sending",
            SmsStatus::AwaitingReply => "awaiting-reply",
            SmsStatus::Replied(_) => "replied",
        }
    }

    pub fn reply(&self) -> Option<&SmsReply> {
        match self {
            SmsStatus::Replied(reply) => Some(reply),
            _ => None,
        }
    }
}

/// Counters shown on the profile screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSummary {
    pub saved_count: usize,
    pub report_count: usize,
}

pub struct Session {
    registry: Arc<Registry>,
    current_screen: Screen,
    saved: Vec<MedicineRecord>,
    selected: Option<MedicineRecord>,
    reports: Vec<Report>,
    sms_status: SmsStatus,
    gates: PendingGates,
}

impl Session {
    /// Fresh session: home screen, nothing saved, nothing selected.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            current_screen: Screen::Home,
            saved: Vec::new(),
            selected: None,
            reports: Vec::new(),
            sms_status: SmsStatus::Idle,
            gates: PendingGates::default(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn lookup(&self) -> Lookup<'_> {
        Lookup::new(&self.registry)
    }

    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    pub fn selected_medicine(&self) -> Option<&MedicineRecord> {
        self.selected.as_ref()
    }

    pub fn saved_medicines(&self) -> &[MedicineRecord] {
        &self.saved
    }

    pub fn is_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|m| m.id == id)
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn sms_status(&self) -> &SmsStatus {
        &self.sms_status
    }

    pub fn gates(&self) -> &PendingGates {
        &self.gates
    }

    pub fn is_pending(&self, op: Operation) -> bool {
        self.gates.is_pending(op)
    }

    /// Operations currently in flight.
    pub fn pending_operations(&self) -> Vec<Operation> {
        Operation::ALL
            .into_iter()
            .filter(|op| self.gates.is_pending(*op))
            .collect()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Follow a home screen tile. Only acts on the home screen; unknown keys
    /// leave the screen unchanged.
    pub fn handle_home_action(&mut self, key: &str) -> Screen {
        if self.current_screen != Screen::Home {
            tracing::debug!(key, screen = %self.current_screen, "home action ignored off home");
            return self.current_screen;
        }
        match HomeAction::from_key(key) {
            Some(action) => self.go_to(action.destination()),
            None => tracing::debug!(key, "unrecognized home action"),
        }
        self.current_screen
    }

    /// Back always lands on home.
    pub fn back(&mut self) -> Screen {
        self.go_to(Screen::Home);
        self.current_screen
    }

    /// Jump straight to a bottom-bar tab from any screen.
    pub fn bottom_nav(&mut self, tab: NavTab) -> Screen {
        self.go_to(tab.screen());
        self.current_screen
    }

    /// Open a saved entry on the result screen. Returns false if `id` is not
    /// in the saved list.
    pub fn view_saved(&mut self, id: &str) -> bool {
        match self.saved.iter().find(|m| m.id == id).cloned() {
            Some(med) => {
                self.show_result(med);
                true
            }
            None => false,
        }
    }

    /// The only way onto the result screen: select a record and show it.
    pub(crate) fn show_result(&mut self, medicine: MedicineRecord) {
        if !medicine.is_authentic {
            tracing::warn!(
                id = %medicine.id,
                batch = %medicine.batch_number,
                "unverified medicine surfaced"
            );
        }
        self.selected = Some(medicine);
        self.go_to(Screen::MedicineResult);
    }

    fn go_to(&mut self, screen: Screen) {
        debug_assert!(screen != Screen::MedicineResult || self.selected.is_some());
        if self.current_screen != screen {
            tracing::info!(from = %self.current_screen, to = %screen, "navigate");
        }
        self.current_screen = screen;
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Look up a batch number. A hit selects the record and moves to the
    /// result screen whether or not it is authentic.
    pub fn apply_batch_lookup(&mut self, query: &CodeQuery) -> LookupOutcome {
        let found = self.lookup().find_medicine_by_batch(query.as_str()).cloned();
        self.apply_found(found, query)
    }

    /// Same as [`apply_batch_lookup`](Self::apply_batch_lookup), keyed on QR value.
    pub fn apply_qr_lookup(&mut self, query: &CodeQuery) -> LookupOutcome {
        let found = self.lookup().find_medicine_by_qr(query.as_str()).cloned();
        self.apply_found(found, query)
    }

    fn apply_found(&mut self, found: Option<MedicineRecord>, query: &CodeQuery) -> LookupOutcome {
        match found {
            Some(med) => {
                self.show_result(med.clone());
                LookupOutcome::Found(med)
            }
            None => {
                tracing::info!(query = %query, screen = %self.current_screen, "no medicine matched");
                LookupOutcome::NotFound {
                    query: query.to_string(),
                }
            }
        }
    }

    // =========================================================================
    // Saved medicines
    // =========================================================================

    /// Add a medicine to the saved list. Saving one that is already there
    /// (by id) changes nothing.
    pub fn save(&mut self, medicine: &MedicineRecord) -> SaveOutcome {
        if self.is_saved(&medicine.id) {
            return SaveOutcome::AlreadySaved;
        }
        tracing::info!(id = %medicine.id, name = %medicine.name, "medicine saved");
        self.saved.push(medicine.clone());
        SaveOutcome::Saved
    }

    /// Save whatever the result screen is showing.
    pub fn save_selected(&mut self) -> Option<SaveOutcome> {
        let medicine = self.selected.clone()?;
        Some(self.save(&medicine))
    }

    /// Remove a saved medicine by id. Absent ids are ignored.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.saved.len();
        self.saved.retain(|m| m.id != id);
        let removed = self.saved.len() != before;
        if removed {
            tracing::info!(id, "medicine removed");
        }
        removed
    }

    /// Saved medicines still valid with fewer than `threshold_days` left.
    pub fn expiring_soon_count(&self, today: NaiveDate, threshold_days: i64) -> usize {
        self.saved
            .iter()
            .filter(|m| m.is_expiring_soon(today, threshold_days))
            .count()
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Report the selected medicine. Returns `None` when nothing is selected.
    pub fn report_medicine(&mut self, reason: ReportReason, pharmacy: Option<&str>) -> Option<Report> {
        let medicine_id = self.selected.as_ref()?.id.clone();
        let pharmacy = pharmacy
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);
        Some(self.file_report(ReportSubject::Medicine {
            medicine_id,
            reason,
            pharmacy,
        }))
    }

    /// Report a pharmacy by name. Blank names are ignored.
    pub fn report_pharmacy(&mut self, name: &str) -> Option<Report> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(self.file_report(ReportSubject::Pharmacy {
            name: name.to_string(),
        }))
    }

    fn file_report(&mut self, subject: ReportSubject) -> Report {
        let report = Report::new(subject);
        tracing::info!(report_id = %report.report_id, "report filed");
        self.reports.push(report.clone());
        report
    }

    pub fn profile_summary(&self) -> ProfileSummary {
        ProfileSummary {
            saved_count: self.saved.len(),
            report_count: self.reports.len(),
        }
    }

    // =========================================================================
    // SMS exchange
    // =========================================================================

    pub(crate) fn set_sms_status(&mut self, status: SmsStatus) {
        self.sms_status = status;
    }

    /// Build the SMS reply for a batch number.
    pub fn sms_reply_for(&self, query: &CodeQuery) -> SmsReply {
        SmsReply::for_medicine(self.lookup().find_medicine_by_batch(query.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Arc::new(Registry::builtin().unwrap()))
    }

    fn query(raw: &str) -> CodeQuery {
        CodeQuery::parse(raw).unwrap()
    }

    #[test]
    fn test_new_session_defaults() {
        let s = session();
        assert_eq!(s.current_screen(), Screen::Home);
        assert!(s.saved_medicines().is_empty());
        assert!(s.selected_medicine().is_none());
        assert_eq!(s.sms_status(), &SmsStatus::Idle);
    }

    #[test]
    fn test_home_actions() {
        let mut s = session();
        assert_eq!(s.handle_home_action("pharmacy-check"), Screen::PharmacyCheck);
        s.back();
        assert_eq!(s.handle_home_action("qr-scan"), Screen::Scan);
    }

    #[test]
    fn test_unknown_home_action_stays_home() {
        let mut s = session();
        assert_eq!(s.handle_home_action("teleport"), Screen::Home);
        assert_eq!(s.handle_home_action("medicine-result"), Screen::Home);
    }

    #[test]
    fn test_home_action_ignored_off_home() {
        let mut s = session();
        s.handle_home_action("education");
        assert_eq!(s.handle_home_action("invite"), Screen::Education);
    }

    #[test]
    fn test_back_from_every_reachable_screen() {
        let mut s = session();
        for action in HomeAction::ALL {
            s.handle_home_action(action.key());
            assert_eq!(s.back(), Screen::Home);
        }
        s.apply_batch_lookup(&query("PCT2024001"));
        assert_eq!(s.current_screen(), Screen::MedicineResult);
        assert_eq!(s.back(), Screen::Home);
        // Selection survives navigation
        assert!(s.selected_medicine().is_some());
    }

    #[test]
    fn test_bottom_nav_from_any_screen() {
        let mut s = session();
        s.handle_home_action("invite");
        assert_eq!(s.bottom_nav(NavTab::Profile), Screen::Profile);
        assert_eq!(s.bottom_nav(NavTab::Scan), Screen::Scan);
        assert_eq!(s.bottom_nav(NavTab::Home), Screen::Home);
    }

    #[test]
    fn test_batch_lookup_authentic() {
        let mut s = session();
        s.handle_home_action("batch-entry");
        let outcome = s.apply_batch_lookup(&query("PCT2024001"));

        assert_eq!(outcome.notice(), Notice::Verified);
        assert_eq!(outcome.medicine().unwrap().name, "Paracetamol 500mg");
        assert_eq!(s.current_screen(), Screen::MedicineResult);
        assert_eq!(s.selected_medicine().unwrap().batch_number, "PCT2024001");
    }

    #[test]
    fn test_batch_lookup_counterfeit_same_transition() {
        let mut s = session();
        s.handle_home_action("batch-entry");
        let outcome = s.apply_batch_lookup(&query("fake001"));

        assert_eq!(outcome.notice(), Notice::CounterfeitWarning);
        assert!(!s.selected_medicine().unwrap().is_authentic);
        assert_eq!(s.current_screen(), Screen::MedicineResult);
    }

    #[test]
    fn test_batch_lookup_not_found_keeps_state() {
        let mut s = session();
        s.handle_home_action("batch-entry");
        s.apply_batch_lookup(&query("AMX2024002"));
        s.back();
        s.handle_home_action("batch-entry");

        let outcome = s.apply_batch_lookup(&query("NOTREAL999"));
        assert_eq!(
            outcome,
            LookupOutcome::NotFound {
                query: "NOTREAL999".into()
            }
        );
        assert_eq!(outcome.notice(), Notice::NotFound);
        assert_eq!(s.current_screen(), Screen::BatchEntry);
        assert_eq!(s.selected_medicine().unwrap().id, "2");
    }

    #[test]
    fn test_qr_lookup() {
        let mut s = session();
        s.handle_home_action("qr-scan");
        let outcome = s.apply_qr_lookup(&query("qr-alu2024003"));
        assert_eq!(outcome.medicine().unwrap().id, "3");
        assert_eq!(s.current_screen(), Screen::MedicineResult);
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut s = session();
        let paracetamol = s.registry().medicine("1").unwrap().clone();

        assert_eq!(s.save(&paracetamol), SaveOutcome::Saved);
        assert_eq!(s.save(&paracetamol), SaveOutcome::AlreadySaved);
        assert_eq!(s.saved_medicines().len(), 1);
    }

    #[test]
    fn test_save_keeps_insertion_order() {
        let mut s = session();
        for id in ["3", "1", "2", "1"] {
            let med = s.registry().medicine(id).unwrap().clone();
            s.save(&med);
        }
        let ids: Vec<_> = s.saved_medicines().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_save_selected() {
        let mut s = session();
        assert_eq!(s.save_selected(), None);
        s.apply_batch_lookup(&query("CIP2024004"));
        assert_eq!(s.save_selected(), Some(SaveOutcome::Saved));
        assert!(s.is_saved("4"));
    }

    #[test]
    fn test_remove() {
        let mut s = session();
        let med = s.registry().medicine("6").unwrap().clone();
        s.save(&med);

        assert!(!s.remove("999"));
        assert_eq!(s.saved_medicines().len(), 1);
        assert!(s.remove("6"));
        assert!(s.saved_medicines().is_empty());
        assert!(!s.remove("6"));
    }

    #[test]
    fn test_view_saved() {
        let mut s = session();
        let med = s.registry().medicine("8").unwrap().clone();
        s.save(&med);
        s.bottom_nav(NavTab::MyMedicines);

        assert!(!s.view_saved("1"));
        assert_eq!(s.current_screen(), Screen::MyMedicines);
        assert!(s.selected_medicine().is_none());

        assert!(s.view_saved("8"));
        assert_eq!(s.current_screen(), Screen::MedicineResult);
        assert_eq!(s.selected_medicine().unwrap().name, "Omeprazole 20mg");
    }

    #[test]
    fn test_expiring_soon_count() {
        let mut s = session();
        for id in ["1", "6", "9"] {
            let med = s.registry().medicine(id).unwrap().clone();
            s.save(&med);
        }
        // Paracetamol 2026-12-31, Metformin 2026-11-25, Ibuprofen 2026-09-18
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(s.expiring_soon_count(today, 90), 2);
    }

    #[test]
    fn test_expiring_soon_count_excludes_day_ninety() {
        let mut s = session();
        let paracetamol = s.registry().medicine("1").unwrap().clone();
        s.save(&paracetamol);

        // Paracetamol expires 2026-12-31
        let day_90 = NaiveDate::from_ymd_opt(2026, 10, 2).unwrap();
        let day_89 = NaiveDate::from_ymd_opt(2026, 10, 3).unwrap();
        assert_eq!(s.expiring_soon_count(day_90, 90), 0);
        assert_eq!(s.expiring_soon_count(day_89, 90), 1);
    }

    #[test]
    fn test_reports() {
        let mut s = session();
        assert!(s.report_medicine(ReportReason::Other, None).is_none());

        s.apply_batch_lookup(&query("FAKE002"));
        let report = s
            .report_medicine(ReportReason::SuspectedCounterfeit, Some("  Quick Meds "))
            .unwrap();
        assert_eq!(
            report.subject,
            ReportSubject::Medicine {
                medicine_id: "10".into(),
                reason: ReportReason::SuspectedCounterfeit,
                pharmacy: Some("Quick Meds".into()),
            }
        );

        assert!(s.report_pharmacy("   ").is_none());
        assert!(s.report_pharmacy("Shady Chemist").is_some());
        assert_eq!(
            s.profile_summary(),
            ProfileSummary {
                saved_count: 0,
                report_count: 2
            }
        );
    }

    #[test]
    fn test_sms_reply_for_unknown_batch() {
        let s = session();
        let reply = s.sms_reply_for(&query("NOTREAL999"));
        assert!(!reply.is_authentic);
        assert_eq!(reply.medicine_name, UNKNOWN_MEDICINE_NAME);
        assert_eq!(reply.manufacturer, UNKNOWN_MANUFACTURER);

        let known = s.sms_reply_for(&query("met2024006"));
        assert!(known.is_authentic);
        assert_eq!(known.manufacturer, "Quality Pharma Ltd");
    }
}
