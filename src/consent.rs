//! Cookie consent flag and the delayed banner.

use std::time::Duration;

use crate::storage::{KeyValueStore, StorageError};

/// Key the consent decision is persisted under
pub const CONSENT_KEY: &str = "saturway-cookie-consent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    Unset,
    Accepted,
    Declined,
}

impl ConsentState {
    fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => ConsentState::Accepted,
            Some("declined") => ConsentState::Declined,
            None => ConsentState::Unset,
            Some(other) => {
                tracing::warn!("Ignoring unknown cookie consent value {:?}", other);
                ConsentState::Unset
            }
        }
    }

    fn as_stored(self) -> Option<&'static str> {
        match self {
            ConsentState::Unset => None,
            ConsentState::Accepted => Some("accepted"),
            ConsentState::Declined => Some("declined"),
        }
    }
}

/// Banner visibility driven by the stored flag and elapsed time since first render
#[derive(Debug, Clone)]
pub struct CookieBanner {
    state: ConsentState,
    delay: Duration,
    elapsed: Duration,
    visible: bool,
}

impl CookieBanner {
    /// Read the flag once; an unset flag arms the reveal timer
    pub fn load(store: &dyn KeyValueStore, delay: Duration) -> Result<Self, StorageError> {
        let stored = store.get(CONSENT_KEY)?;
        Ok(Self {
            state: ConsentState::from_stored(stored.as_deref()),
            delay,
            elapsed: Duration::ZERO,
            visible: false,
        })
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance the reveal timer
    pub fn tick(&mut self, dt: Duration) {
        if self.state != ConsentState::Unset || self.visible {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= self.delay {
            self.visible = true;
        }
    }

    pub fn accept(&mut self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        self.decide(store, ConsentState::Accepted)
    }

    pub fn decline(&mut self, store: &dyn KeyValueStore) -> Result<(), StorageError> {
        self.decide(store, ConsentState::Declined)
    }

    fn decide(&mut self, store: &dyn KeyValueStore, state: ConsentState) -> Result<(), StorageError> {
        if let Some(value) = state.as_stored() {
            store.set(CONSENT_KEY, value)?;
        }
        tracing::info!("Cookie consent recorded: {:?}", state);
        self.state = state;
        self.visible = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Store;

    const DELAY: Duration = Duration::from_millis(2000);

    #[test]
    fn hidden_until_delay_elapses() {
        let store = Store::in_memory().unwrap();
        let mut banner = CookieBanner::load(&store, DELAY).unwrap();
        assert!(!banner.is_visible());

        banner.tick(Duration::from_millis(1999));
        assert!(!banner.is_visible());

        banner.tick(Duration::from_millis(1));
        assert!(banner.is_visible());
    }

    #[test]
    fn decisions_persist_across_reload() {
        for decline in [false, true] {
            let store = Store::in_memory().unwrap();
            let mut banner = CookieBanner::load(&store, DELAY).unwrap();
            banner.tick(DELAY);
            if decline {
                banner.decline(&store).unwrap();
            } else {
                banner.accept(&store).unwrap();
            }
            assert!(!banner.is_visible());

            let mut reloaded = CookieBanner::load(&store, DELAY).unwrap();
            reloaded.tick(DELAY * 10);
            assert!(!reloaded.is_visible());
            let expected = if decline {
                ConsentState::Declined
            } else {
                ConsentState::Accepted
            };
            assert_eq!(reloaded.state(), expected);
        }
    }

    #[test]
    fn unknown_stored_value_counts_as_unset() {
        let store = Store::in_memory().unwrap();
        store.set(CONSENT_KEY, "maybe").unwrap();
        let mut banner = CookieBanner::load(&store, DELAY).unwrap();
        assert_eq!(banner.state(), ConsentState::Unset);
        banner.tick(DELAY);
        assert!(banner.is_visible());
    }
}
