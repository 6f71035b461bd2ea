// tests/support/mocks.rs
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use conduit_core::application::ApplicationResult;
use conduit_core::application::error::ApplicationError;
use conduit_core::application::ports::{security::PasswordHasher, time::Clock};

pub const TEST_SECRET: &str = "test-secret-that-is-long-enough-32b";

pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 literal")
        .with_timezone(&Utc)
}

/// Advances one second per reading so creation order is observable.
pub struct TickingClock {
    next: Mutex<DateTime<Utc>>,
}

impl Default for TickingClock {
    fn default() -> Self {
        Self {
            next: Mutex::new(fixed_now()),
        }
    }
}

impl Clock for TickingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + Duration::seconds(1);
        now
    }
}

/// Reversible stand-in for argon2; keeps the suites fast.
#[derive(Clone, Debug, Default)]
pub struct PlainPasswordHasher;

const PLAIN_PREFIX: &str = "plain$";

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{PLAIN_PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        match expected_hash.strip_prefix(PLAIN_PREFIX) {
            Some(stored) => Ok(stored == password),
            None => Err(ApplicationError::infrastructure("unrecognised hash format")),
        }
    }
}
