//! Simulated verification flows.
//!
//! Scanning, searching and texting are instant lookups dressed up with a
//! configurable delay. Each flow:
//!
//! 1. rejects blank input before anything else,
//! 2. closes its pending gate (a second start while pending is `Busy`),
//! 3. sleeps, then applies the lookup to the session.
//!
//! The session lock is taken only for the instant a flow reads or changes
//! state, never across an `.await`.

mod scanner;
mod sms;

pub use scanner::*;

use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tokio::time::sleep;

use crate::config::{SimulationConfig, SmsConfig};
use crate::lookup::{CodeQuery, LookupError};
use crate::session::{LookupOutcome, Operation, PendingGuard, Session};

/// Verification errors.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Invalid input: {0}")]
    Lookup(#[from] LookupError),

    #[error("Operation already in progress: {0:?}")]
    Busy(Operation),

    #[error("Session lock poisoned: {0}")]
    LockPoisoned(String),
}

impl<T> From<PoisonError<T>> for VerifyError {
    fn from(e: PoisonError<T>) -> Self {
        VerifyError::LockPoisoned(e.to_string())
    }
}

pub type VerifyResult<T> = Result<T, VerifyError>;

/// Runs the simulated flows against a shared session.
pub struct Verifier {
    simulation: SimulationConfig,
    sms: SmsConfig,
    reader: Arc<dyn CodeReader>,
}

impl Verifier {
    /// Verifier with the demo QR reader and default SMS settings.
    pub fn new(simulation: SimulationConfig) -> Self {
        Self::with_reader(simulation, Arc::new(DemoCodeReader))
    }

    pub fn with_reader(simulation: SimulationConfig, reader: Arc<dyn CodeReader>) -> Self {
        Self {
            simulation,
            sms: SmsConfig::default(),
            reader,
        }
    }

    pub fn with_sms(mut self, sms: SmsConfig) -> Self {
        self.sms = sms;
        self
    }

    /// Search for a typed batch number.
    ///
    /// A hit selects the medicine and opens the result screen; a miss leaves
    /// the user on the entry screen with the selection unchanged.
    pub async fn verify_batch(&self, session: &Mutex<Session>, input: &str) -> VerifyResult<LookupOutcome> {
        let query = CodeQuery::parse(input)?;
        let _pending = begin(session, Operation::BatchSearch)?;

        sleep(self.simulation.batch_search_delay()).await;

        let outcome = session.lock()?.apply_batch_lookup(&query);
        Ok(outcome)
    }

    /// "Scan" a QR code with the configured reader and look it up.
    pub async fn scan_qr(&self, session: &Mutex<Session>) -> VerifyResult<LookupOutcome> {
        let _pending = begin(session, Operation::Scan)?;

        sleep(self.simulation.scan_delay()).await;

        let query = CodeQuery::parse(&self.reader.read_code())?;
        let found = session
            .lock()?
            .lookup()
            .find_medicine_by_qr(query.as_str())
            .cloned();

        match found {
            Some(medicine) => {
                sleep(self.simulation.scan_handoff_delay()).await;
                session.lock()?.show_result(medicine.clone());
                Ok(LookupOutcome::Found(medicine))
            }
            None => {
                tracing::info!(code = %query, "scanned code not registered");
                Ok(LookupOutcome::NotFound {
                    query: query.to_string(),
                })
            }
        }
    }
}

fn begin(session: &Mutex<Session>, op: Operation) -> VerifyResult<PendingGuard> {
    session
        .lock()?
        .gates()
        .try_begin(op)
        .ok_or(VerifyError::Busy(op))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use crate::session::Screen;
    use std::time::Duration;
    use tokio::time::Instant;

    fn shared_session() -> Arc<Mutex<Session>> {
        let mut session = Session::new(Arc::new(Registry::builtin().unwrap()));
        session.handle_home_action("batch-entry");
        Arc::new(Mutex::new(session))
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_batch_waits_then_opens_result() {
        let session = shared_session();
        let verifier = Verifier::new(SimulationConfig::default());

        let start = Instant::now();
        let outcome = verifier.verify_batch(&session, "pct2024001").await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(outcome.medicine().unwrap().name, "Paracetamol 500mg");
        let s = session.lock().unwrap();
        assert_eq!(s.current_screen(), Screen::MedicineResult);
        assert!(!s.is_pending(Operation::BatchSearch));
    }

    #[tokio::test(start_paused = true)]
    async fn test_verify_batch_not_found_stays_on_entry() {
        let session = shared_session();
        let verifier = Verifier::new(SimulationConfig::default());

        let outcome = verifier.verify_batch(&session, "NOTREAL999").await.unwrap();

        assert!(matches!(outcome, LookupOutcome::NotFound { .. }));
        let s = session.lock().unwrap();
        assert_eq!(s.current_screen(), Screen::BatchEntry);
        assert!(s.selected_medicine().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_input_rejected_without_waiting() {
        let session = shared_session();
        let verifier = Verifier::new(SimulationConfig::default());

        let start = Instant::now();
        let result = verifier.verify_batch(&session, "   ").await;

        assert!(matches!(result, Err(VerifyError::Lookup(LookupError::EmptyQuery))));
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert!(!session.lock().unwrap().is_pending(Operation::BatchSearch));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_search_rejected_while_pending() {
        let session = shared_session();
        let verifier = Arc::new(Verifier::new(SimulationConfig::default()));

        let first = {
            let session = Arc::clone(&session);
            let verifier = Arc::clone(&verifier);
            tokio::spawn(async move { verifier.verify_batch(&session, "AMX2024002").await })
        };
        tokio::task::yield_now().await;
        assert!(session.lock().unwrap().is_pending(Operation::BatchSearch));

        let second = verifier.verify_batch(&session, "FAKE001").await;
        assert!(matches!(second, Err(VerifyError::Busy(Operation::BatchSearch))));

        let first = first.await.unwrap().unwrap();
        assert_eq!(first.medicine().unwrap().id, "2");
        assert_eq!(session.lock().unwrap().selected_medicine().unwrap().id, "2");
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_scan_rejected_while_pending() {
        let session = shared_session();
        let verifier = Arc::new(Verifier::with_reader(
            SimulationConfig::default(),
            Arc::new(FixedCodeReader("QR-PCT2024001".into())),
        ));

        let first = {
            let session = Arc::clone(&session);
            let verifier = Arc::clone(&verifier);
            tokio::spawn(async move { verifier.scan_qr(&session).await })
        };
        tokio::task::yield_now().await;
        assert!(session.lock().unwrap().is_pending(Operation::Scan));

        let second = verifier.scan_qr(&session).await;
        assert!(matches!(second, Err(VerifyError::Busy(Operation::Scan))));

        let first = first.await.unwrap().unwrap();
        assert_eq!(first.medicine().unwrap().id, "1");
        assert!(!session.lock().unwrap().is_pending(Operation::Scan));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_with_fixed_reader() {
        let session = shared_session();
        let verifier = Verifier::with_reader(
            SimulationConfig::default(),
            Arc::new(FixedCodeReader("QR-FAKE001".into())),
        );

        let start = Instant::now();
        let outcome = verifier.scan_qr(&session).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert!(!outcome.medicine().unwrap().is_authentic);
        assert_eq!(session.lock().unwrap().current_screen(), Screen::MedicineResult);
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_unknown_code() {
        let session = shared_session();
        session.lock().unwrap().back();
        session.lock().unwrap().handle_home_action("qr-scan");
        let verifier = Verifier::with_reader(
            SimulationConfig::default(),
            Arc::new(FixedCodeReader("QR-NOPE".into())),
        );

        let outcome = verifier.scan_qr(&session).await.unwrap();

        assert_eq!(outcome, LookupOutcome::NotFound { query: "QR-NOPE".into() });
        assert_eq!(session.lock().unwrap().current_screen(), Screen::Scan);
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_scan_always_finds_a_medicine() {
        let session = shared_session();
        let verifier = Verifier::new(SimulationConfig::instant());

        let outcome = verifier.scan_qr(&session).await.unwrap();
        assert!(outcome.medicine().is_some());
    }
}
