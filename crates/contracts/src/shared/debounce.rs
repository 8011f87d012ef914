/// Trailing-edge debounce state.
///
/// The browser side owns the timer; this type only decides whether a value
/// is due. Each `push` replaces the pending value and restarts the window.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn push(&mut self, value: T, now: u64) {
        self.pending = Some((value, now + self.delay_ms));
    }

    /// Take the pending value if its window has elapsed.
    pub fn poll(&mut self, now: u64) -> Option<T> {
        match &self.pending {
            Some((_, due)) if now >= *due => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, due)| *due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_quiet_period() {
        let mut d = Debouncer::new(500);
        d.push("a", 0);
        d.push("ab", 200);
        d.push("abc", 400);

        assert_eq!(d.poll(500), None);
        assert_eq!(d.poll(899), None);
        assert_eq!(d.poll(900), Some("abc"));
        assert_eq!(d.poll(2_000), None);
    }

    #[test]
    fn cancel_drops_pending_value() {
        let mut d = Debouncer::new(500);
        d.push(1, 0);
        d.cancel();
        assert!(!d.is_pending());
        assert_eq!(d.poll(10_000), None);
    }
}
