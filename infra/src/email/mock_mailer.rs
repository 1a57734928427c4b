//! Capturing mailer for development and tests.

use async_trait::async_trait;
use std::sync::Mutex;

use bs_core::services::otp::Mailer;
use bs_shared::utils::validation::is_valid_email;

/// Mailer that records deliveries instead of sending them
///
/// Integration tests read the captured codes back; `set_failing` turns
/// every send into a relay failure.
#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<(String, String)>>,
    failing: Mutex<bool>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch all subsequent sends into failures
    pub fn set_failing(&self, failing: bool) {
        *self.failing.lock().expect("mock mailer poisoned") = failing;
    }

    /// Every (recipient, code) pair captured so far
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().expect("mock mailer poisoned").clone()
    }

    /// The most recent code captured for a recipient
    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .expect("mock mailer poisoned")
            .iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code.clone())
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_verification_code(&self, to: &str, code: &str) -> Result<(), String> {
        if *self.failing.lock().expect("mock mailer poisoned") {
            return Err("mock relay failure".to_string());
        }
        self.sent
            .lock()
            .expect("mock mailer poisoned")
            .push((to.to_string(), code.to_string()));
        Ok(())
    }

    fn is_valid_recipient(&self, email: &str) -> bool {
        is_valid_email(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn captures_deliveries_in_order() {
        let mailer = MockMailer::new();
        mailer.send_verification_code("a@x.com", "111111").await.unwrap();
        mailer.send_verification_code("a@x.com", "222222").await.unwrap();
        assert_eq!(mailer.sent().len(), 2);
        assert_eq!(mailer.last_code_for("a@x.com").unwrap(), "222222");
        assert!(mailer.last_code_for("b@x.com").is_none());
    }

    #[tokio::test]
    async fn failing_mode_rejects_sends() {
        let mailer = MockMailer::new();
        mailer.set_failing(true);
        assert!(mailer
            .send_verification_code("a@x.com", "111111")
            .await
            .is_err());
        assert!(mailer.sent().is_empty());
    }
}
