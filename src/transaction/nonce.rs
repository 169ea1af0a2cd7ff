//! Millisecond-timestamp nonces.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Issues strictly increasing millisecond timestamps.
///
/// The router rejects a nonce that is not greater than the account's last
/// one, so two transactions sent within the same millisecond would collide.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicI64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next nonce; waits for the clock to pass the previous one.
    pub fn next(&self) -> i64 {
        loop {
            let now = now_millis();
            let last = self.last.load(Ordering::SeqCst);
            if now > last
                && self
                    .last
                    .compare_exchange(last, now, Ordering::SeqCst, Ordering::SeqCst)
                    .is_ok()
            {
                return now;
            }
            std::hint::spin_loop();
        }
    }

    /// Last nonce handed out (0 if none).
    pub fn last(&self) -> i64 {
        self.last.load(Ordering::SeqCst)
    }
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonces_strictly_increase() {
        let nonces = NonceGenerator::new();
        let mut previous = 0;
        for _ in 0..20 {
            let n = nonces.next();
            assert!(n > previous);
            previous = n;
        }
        assert_eq!(nonces.last(), previous);
    }

    #[test]
    fn test_nonce_is_current_time() {
        let nonces = NonceGenerator::new();
        let before = now_millis();
        let n = nonces.next();
        assert!(n >= before);
        assert!(n - before < 1_000);
    }
}
