use bevy::prelude::*;
use constants::access::UNLOCK_SECRET;

/// Text gate in front of the showcase.
///
/// The typed text is compared as-is against a secret compiled into the
/// client: no trimming, no case folding, no retry limit. Anyone with the
/// binary can read the secret, so treat this as a curtain, not a lock.
#[derive(Resource, Debug, Clone)]
pub struct AccessGate {
    secret: &'static str,
    input: String,
    unlocked: bool,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::with_secret(UNLOCK_SECRET)
    }
}

impl AccessGate {
    pub fn with_secret(secret: &'static str) -> Self {
        Self {
            secret,
            input: String::new(),
            unlocked: false,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    /// Record the current input text. Returns `true` only for the change
    /// that unlocks; once unlocked the gate stays open for the session.
    pub fn on_input(&mut self, text: &str) -> bool {
        self.input.clear();
        self.input.push_str(text);

        if self.unlocked || text != self.secret {
            return false;
        }
        self.unlocked = true;
        true
    }
}

/// Run condition: the gate has been opened.
pub fn access_granted(gate: Res<AccessGate>) -> bool {
    gate.is_unlocked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_secret_unlocks_once_and_stays_unlocked() {
        let mut gate = AccessGate::with_secret("open sesame");
        assert!(!gate.is_unlocked());

        assert!(!gate.on_input("open"));
        assert!(gate.on_input("open sesame"));
        assert!(gate.is_unlocked());

        // later edits never report a second unlock or relock
        assert!(!gate.on_input("open sesame"));
        assert!(!gate.on_input(""));
        assert!(!gate.on_input("something else"));
        assert!(gate.is_unlocked());
    }

    #[test]
    fn near_misses_stay_locked() {
        let mut gate = AccessGate::with_secret("cabal");
        for attempt in ["c", "caba", "cabal!", "xcabal", "Cabal", "CABAL", " cabal", "cabal "] {
            assert!(!gate.on_input(attempt), "{attempt:?} unlocked");
            assert!(!gate.is_unlocked());
        }
    }

    #[test]
    fn input_text_is_recorded() {
        let mut gate = AccessGate::default();
        gate.on_input("abc");
        assert_eq!(gate.input(), "abc");
    }

    #[test]
    fn default_uses_compiled_secret() {
        let mut gate = AccessGate::default();
        assert!(gate.on_input(UNLOCK_SECRET));
    }
}
