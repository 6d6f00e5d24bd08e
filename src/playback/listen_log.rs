use crate::playback::{Channel, VerseKey};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

pub const LISTEN_DEBOUNCE_SECS: i64 = 5;

/// Recently logged `(verse, channel)` pairs.
///
/// A pair is logged at most once per window; entries older than the window
/// are pruned on every check.
#[derive(Debug, Clone)]
pub struct ListenLog {
    window: Duration,
    recent: HashMap<(VerseKey, Channel), DateTime<Utc>>,
}

impl Default for ListenLog {
    fn default() -> Self {
        Self::new(Duration::seconds(LISTEN_DEBOUNCE_SECS))
    }
}

impl ListenLog {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            recent: HashMap::new(),
        }
    }

    /// Record an attempt and report whether it should reach the backend.
    pub fn should_log(&mut self, key: VerseKey, channel: Channel, now: DateTime<Utc>) -> bool {
        let window = self.window;
        self.recent.retain(|_, logged_at| now - *logged_at < window);
        if self.recent.contains_key(&(key, channel)) {
            return false;
        }
        self.recent.insert((key, channel), now);
        true
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn repeats_inside_the_window_are_suppressed() {
        let mut log = ListenLog::default();
        let key = VerseKey::new(18, 66);
        assert!(log.should_log(key, Channel::Vibe, at(0)));
        assert!(!log.should_log(key, Channel::Vibe, at(1)));
        assert!(!log.should_log(key, Channel::Vibe, at(4)));
        assert!(log.should_log(key, Channel::Vibe, at(5)));
    }

    #[test]
    fn channels_and_verses_are_independent() {
        let mut log = ListenLog::default();
        let key = VerseKey::new(2, 47);
        assert!(log.should_log(key, Channel::Vibe, at(0)));
        assert!(log.should_log(key, Channel::Traditional, at(0)));
        assert!(log.should_log(VerseKey::new(2, 48), Channel::Vibe, at(0)));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn expired_entries_are_pruned() {
        let mut log = ListenLog::default();
        log.should_log(VerseKey::new(1, 1), Channel::Vibe, at(0));
        log.should_log(VerseKey::new(1, 2), Channel::Vibe, at(1));
        log.should_log(VerseKey::new(1, 3), Channel::Vibe, at(30));
        assert_eq!(log.len(), 1);
    }
}
