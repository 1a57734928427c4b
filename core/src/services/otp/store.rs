//! In-memory store for pending OTP challenges and registrations.
//!
//! Owns the two tables of the verification flow behind a single mutex.
//! Handlers on a multi-threaded runtime may race on the same email, so
//! every read-then-write decision runs inside one lock acquisition with
//! no await points; collaborator calls (mail, database) happen outside
//! the lock. The store is process-local: a restart discards all pending
//! entries and affected users must restart signup.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::otp_challenge::{OtpChallenge, PendingRegistration};

/// Atomic verdict of a code check
///
/// Terminal verdicts (`Expired`, `Exhausted`, `Match`) remove both the
/// challenge and any registration before they are returned; `Mismatch`
/// leaves the incremented challenge in place for a retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeCheck {
    /// No challenge for this email (never issued, already consumed, or
    /// swept)
    Missing,
    /// The challenge outlived its lifetime
    Expired,
    /// The attempt budget is spent
    Exhausted,
    /// Wrong code; `attempts` is the updated failure count
    Mismatch { attempts: u32 },
    /// Correct code, with the registration if one was attached
    Match {
        registration: Option<PendingRegistration>,
    },
}

#[derive(Default)]
struct Tables {
    challenges: HashMap<String, OtpChallenge>,
    registrations: HashMap<String, PendingRegistration>,
}

/// The two time-indexed tables of the OTP flow
///
/// Constructed once at process start and injected into the services that
/// need it; no other component reads or writes the tables.
#[derive(Default)]
pub struct OtpStore {
    inner: Mutex<Tables>,
}

impl OtpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a challenge (and optional registration) for an email,
    /// silently replacing whatever was there
    ///
    /// Replacement is wholesale: a prior entry's attempt count never
    /// carries over, and a registration-less issue clears any stale
    /// registration so the two tables stay paired.
    pub fn put(
        &self,
        email: &str,
        challenge: OtpChallenge,
        registration: Option<PendingRegistration>,
    ) {
        let mut tables = self.inner.lock().expect("otp store poisoned");
        tables.challenges.insert(email.to_string(), challenge);
        match registration {
            Some(registration) => {
                tables.registrations.insert(email.to_string(), registration);
            }
            None => {
                tables.registrations.remove(email);
            }
        }
    }

    /// Check a submitted code against the stored challenge
    ///
    /// The whole decision (lookup, expiry, attempt budget, comparison,
    /// mutation) happens under one lock, so concurrent requests for the
    /// same email serialize cleanly.
    pub fn check_code(
        &self,
        email: &str,
        submitted: &str,
        now: DateTime<Utc>,
        ttl: Duration,
        max_attempts: u32,
    ) -> CodeCheck {
        let mut tables = self.inner.lock().expect("otp store poisoned");

        let challenge = match tables.challenges.get_mut(email) {
            Some(challenge) => challenge,
            None => return CodeCheck::Missing,
        };

        if challenge.is_expired_at(now, ttl) {
            tables.challenges.remove(email);
            tables.registrations.remove(email);
            return CodeCheck::Expired;
        }

        if challenge.attempts_exhausted(max_attempts) {
            tables.challenges.remove(email);
            tables.registrations.remove(email);
            return CodeCheck::Exhausted;
        }

        if challenge.matches(submitted) {
            tables.challenges.remove(email);
            let registration = tables.registrations.remove(email);
            return CodeCheck::Match { registration };
        }

        challenge.attempts += 1;
        let attempts = challenge.attempts;
        if attempts >= max_attempts {
            // the failure that spends the budget is the terminal one
            tables.challenges.remove(email);
            tables.registrations.remove(email);
            return CodeCheck::Exhausted;
        }
        CodeCheck::Mismatch { attempts }
    }

    /// Drop both entries for an email
    pub fn remove(&self, email: &str) {
        let mut tables = self.inner.lock().expect("otp store poisoned");
        tables.challenges.remove(email);
        tables.registrations.remove(email);
    }

    /// Delete every entry older than `ttl`; returns the reclaim count
    ///
    /// Memory reclamation only; `check_code` performs its own age check
    /// and remains the authority on expiry.
    pub fn sweep(&self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let mut tables = self.inner.lock().expect("otp store poisoned");
        let before = tables.challenges.len() + tables.registrations.len();
        tables
            .challenges
            .retain(|_, challenge| !challenge.is_expired_at(now, ttl));
        tables
            .registrations
            .retain(|_, registration| now - registration.created_at <= ttl);
        before - (tables.challenges.len() + tables.registrations.len())
    }

    /// Snapshot of the stored challenge for an email
    pub fn challenge(&self, email: &str) -> Option<OtpChallenge> {
        let tables = self.inner.lock().expect("otp store poisoned");
        tables.challenges.get(email).cloned()
    }

    /// Whether any entry exists for an email
    pub fn contains(&self, email: &str) -> bool {
        let tables = self.inner.lock().expect("otp store poisoned");
        tables.challenges.contains_key(email) || tables.registrations.contains_key(email)
    }

    /// Number of live challenges
    pub fn challenge_count(&self) -> usize {
        self.inner.lock().expect("otp store poisoned").challenges.len()
    }

    /// Number of live registrations
    pub fn registration_count(&self) -> usize {
        self.inner
            .lock()
            .expect("otp store poisoned")
            .registrations
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::otp_challenge::{DEFAULT_EXPIRY_MINUTES, MAX_ATTEMPTS};

    fn ttl() -> Duration {
        Duration::minutes(DEFAULT_EXPIRY_MINUTES)
    }

    fn registration(email: &str) -> PendingRegistration {
        PendingRegistration::new("Ada".to_string(), email.to_string(), "pw".to_string())
    }

    fn put_challenge(store: &OtpStore, email: &str, code: &str) -> OtpChallenge {
        let mut challenge = OtpChallenge::new();
        challenge.code = code.to_string();
        store.put(email, challenge.clone(), Some(registration(email)));
        challenge
    }

    #[test]
    fn put_replaces_wholesale_and_resets_attempts() {
        let store = OtpStore::new();
        let mut first = OtpChallenge::new();
        first.code = "111111".to_string();
        first.attempts = 2;
        store.put("a@x.com", first, Some(registration("a@x.com")));

        put_challenge(&store, "a@x.com", "222222");

        assert_eq!(store.challenge_count(), 1);
        assert_eq!(store.registration_count(), 1);
        let stored = store.challenge("a@x.com").unwrap();
        assert_eq!(stored.code, "222222");
        assert_eq!(stored.attempts, 0);
    }

    #[test]
    fn registrationless_put_clears_stale_registration() {
        let store = OtpStore::new();
        put_challenge(&store, "a@x.com", "111111");
        store.put("a@x.com", OtpChallenge::new(), None);
        assert_eq!(store.registration_count(), 0);
        assert_eq!(store.challenge_count(), 1);
    }

    #[test]
    fn remove_drops_both_entries() {
        let store = OtpStore::new();
        put_challenge(&store, "a@x.com", "111111");
        store.remove("a@x.com");
        assert!(!store.contains("a@x.com"));
        assert_eq!(store.registration_count(), 0);
    }

    #[test]
    fn match_consumes_both_entries() {
        let store = OtpStore::new();
        put_challenge(&store, "a@x.com", "123456");

        let verdict = store.check_code("a@x.com", "123456", Utc::now(), ttl(), MAX_ATTEMPTS);
        match verdict {
            CodeCheck::Match { registration } => {
                assert_eq!(registration.unwrap().email, "a@x.com");
            }
            other => panic!("expected match, got {:?}", other),
        }
        assert!(!store.contains("a@x.com"));

        // replay finds nothing
        let replay = store.check_code("a@x.com", "123456", Utc::now(), ttl(), MAX_ATTEMPTS);
        assert_eq!(replay, CodeCheck::Missing);
    }

    #[test]
    fn mismatch_increments_and_retains_entry() {
        let store = OtpStore::new();
        put_challenge(&store, "a@x.com", "123456");

        let verdict = store.check_code("a@x.com", "000000", Utc::now(), ttl(), MAX_ATTEMPTS);
        assert_eq!(verdict, CodeCheck::Mismatch { attempts: 1 });
        assert!(store.contains("a@x.com"));
        assert_eq!(store.challenge("a@x.com").unwrap().attempts, 1);
    }

    #[test]
    fn third_wrong_submission_exhausts_and_clears() {
        let store = OtpStore::new();
        put_challenge(&store, "a@x.com", "123456");
        let now = Utc::now();

        assert_eq!(
            store.check_code("a@x.com", "000000", now, ttl(), MAX_ATTEMPTS),
            CodeCheck::Mismatch { attempts: 1 }
        );
        assert_eq!(
            store.check_code("a@x.com", "000000", now, ttl(), MAX_ATTEMPTS),
            CodeCheck::Mismatch { attempts: 2 }
        );
        assert_eq!(
            store.check_code("a@x.com", "000000", now, ttl(), MAX_ATTEMPTS),
            CodeCheck::Exhausted
        );
        assert!(!store.contains("a@x.com"));

        // a 4th submission, even with the right code, finds nothing
        assert_eq!(
            store.check_code("a@x.com", "123456", now, ttl(), MAX_ATTEMPTS),
            CodeCheck::Missing
        );
    }

    #[test]
    fn expired_challenge_is_removed_even_with_correct_code() {
        let store = OtpStore::new();
        let mut challenge = OtpChallenge::new();
        challenge.code = "123456".to_string();
        challenge.issued_at = Utc::now() - Duration::milliseconds(300_001);
        store.put("a@x.com", challenge, Some(registration("a@x.com")));

        let verdict = store.check_code("a@x.com", "123456", Utc::now(), ttl(), MAX_ATTEMPTS);
        assert_eq!(verdict, CodeCheck::Expired);
        assert!(!store.contains("a@x.com"));
    }

    #[test]
    fn preexisting_exhausted_entry_reports_exhausted_before_compare() {
        let store = OtpStore::new();
        let mut challenge = OtpChallenge::new();
        challenge.code = "123456".to_string();
        challenge.attempts = MAX_ATTEMPTS;
        store.put("a@x.com", challenge, Some(registration("a@x.com")));

        let verdict = store.check_code("a@x.com", "123456", Utc::now(), ttl(), MAX_ATTEMPTS);
        assert_eq!(verdict, CodeCheck::Exhausted);
        assert!(!store.contains("a@x.com"));
    }

    #[test]
    fn sweep_reclaims_only_stale_entries() {
        let store = OtpStore::new();
        put_challenge(&store, "fresh@x.com", "111111");

        let mut stale = OtpChallenge::new();
        stale.issued_at = Utc::now() - Duration::minutes(6);
        let mut stale_registration = registration("stale@x.com");
        stale_registration.created_at = stale.issued_at;
        store.put("stale@x.com", stale, Some(stale_registration));

        let removed = store.sweep(Utc::now(), ttl());
        assert_eq!(removed, 2);
        assert!(store.contains("fresh@x.com"));
        assert!(!store.contains("stale@x.com"));
    }
}
