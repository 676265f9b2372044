//! Offline verification by text message.
//!
//! The exchange is simulated: the "send" and the "reply" are two delays, and
//! the reply is computed from the local registry.

use std::sync::Mutex;

use tokio::time::sleep;

use super::{begin, Verifier, VerifyResult};
use crate::lookup::CodeQuery;
use crate::session::{Operation, Session, SmsReply, SmsStatus};

impl Verifier {
    /// Text a batch number to the verification short code and wait for the
    /// reply. Progress is visible through [`Session::sms_status`]. Screen
    /// and selection are not touched.
    pub async fn verify_by_sms(&self, session: &Mutex<Session>, input: &str) -> VerifyResult<SmsReply> {
        let query = CodeQuery::parse(input)?;
        let _pending = begin(session, Operation::Sms)?;

        session.lock()?.set_sms_status(SmsStatus::Sending);
        sleep(self.simulation.sms_send_delay()).await;

        session.lock()?.set_sms_status(SmsStatus::AwaitingReply);
        sleep(self.simulation.sms_reply_delay()).await;

        let mut s = session.lock()?;
        let reply = s.sms_reply_for(&query);
        tracing::info!(
            batch = %query,
            authentic = reply.is_authentic,
            "sms reply received"
        );
        s.set_sms_status(SmsStatus::Replied(reply.clone()));
        Ok(reply)
    }

    /// `sms:` link that opens the native messaging app addressed to the
    /// short code. Offline the body is left out and typed by hand.
    pub fn sms_link(&self, input: &str, offline: bool) -> VerifyResult<String> {
        let query = CodeQuery::parse(input)?;
        let body = format!("{} {}", self.sms.keyword, query);
        let body = if offline { None } else { Some(body.as_str()) };
        Ok(medcheck_content::sms_uri(&self.sms.shortcode, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SimulationConfig, SmsConfig};
    use crate::lookup::LookupError;
    use crate::registry::Registry;
    use crate::session::{Screen, UNKNOWN_MEDICINE_NAME};
    use crate::verify::VerifyError;
    use std::sync::Arc;
    use std::time::Duration;

    fn shared_session() -> Arc<Mutex<Session>> {
        let mut session = Session::new(Arc::new(Registry::builtin().unwrap()));
        session.handle_home_action("sms-verify");
        Arc::new(Mutex::new(session))
    }

    #[tokio::test(start_paused = true)]
    async fn test_sms_status_progression() {
        let session = shared_session();
        let verifier = Arc::new(Verifier::new(SimulationConfig::default()));

        let task = {
            let session = Arc::clone(&session);
            let verifier = Arc::clone(&verifier);
            tokio::spawn(async move { verifier.verify_by_sms(&session, "ibu2024009").await })
        };

        tokio::task::yield_now().await;
        assert_eq!(session.lock().unwrap().sms_status(), &SmsStatus::Sending);

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(session.lock().unwrap().sms_status(), &SmsStatus::AwaitingReply);

        let reply = task.await.unwrap().unwrap();
        assert!(reply.is_authentic);
        assert_eq!(reply.medicine_name, "Ibuprofen 400mg");

        let s = session.lock().unwrap();
        assert_eq!(s.sms_status(), &SmsStatus::Replied(reply));
        assert_eq!(s.current_screen(), Screen::SmsVerify);
        assert!(s.selected_medicine().is_none());
        assert!(!s.is_pending(Operation::Sms));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_sms_rejected_while_pending() {
        let session = shared_session();
        let verifier = Arc::new(Verifier::new(SimulationConfig::default()));

        let first = {
            let session = Arc::clone(&session);
            let verifier = Arc::clone(&verifier);
            tokio::spawn(async move { verifier.verify_by_sms(&session, "AMX2024002").await })
        };
        tokio::task::yield_now().await;
        assert!(session.lock().unwrap().is_pending(Operation::Sms));

        let second = verifier.verify_by_sms(&session, "FAKE001").await;
        assert!(matches!(second, Err(VerifyError::Busy(Operation::Sms))));

        let reply = first.await.unwrap().unwrap();
        assert_eq!(reply.medicine_name, "Amoxicillin 250mg");
        assert!(!session.lock().unwrap().is_pending(Operation::Sms));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sms_unknown_batch_reply() {
        let session = shared_session();
        let verifier = Verifier::new(SimulationConfig::instant());

        let reply = verifier.verify_by_sms(&session, "NOTREAL999").await.unwrap();
        assert!(!reply.is_authentic);
        assert_eq!(reply.medicine_name, UNKNOWN_MEDICINE_NAME);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sms_blank_input() {
        let session = shared_session();
        let verifier = Verifier::new(SimulationConfig::instant());

        let result = verifier.verify_by_sms(&session, "").await;
        assert!(matches!(result, Err(VerifyError::Lookup(LookupError::EmptyQuery))));
        assert_eq!(session.lock().unwrap().sms_status(), &SmsStatus::Idle);
    }

    #[test]
    fn test_sms_link() {
        let verifier = Verifier::new(SimulationConfig::instant());
        assert_eq!(
            verifier.sms_link("pct2024001", false).unwrap(),
            "sms:8198?body=MED%20PCT2024001"
        );
        assert_eq!(verifier.sms_link("pct2024001", true).unwrap(), "sms:8198");

        let custom = Verifier::new(SimulationConfig::instant()).with_sms(SmsConfig {
            shortcode: "6600".into(),
            keyword: "CHECK".into(),
        });
        assert_eq!(
            custom.sms_link("FAKE001", false).unwrap(),
            "sms:6600?body=CHECK%20FAKE001"
        );
    }
}
