/// Hands out increasing request numbers and remembers the latest one, so
/// replies to superseded requests can be recognised and dropped.
#[derive(Debug, Default)]
pub struct RequestTracker {
    next: u64,
    latest: Option<u64>,
}

impl RequestTracker {
    pub fn issue(&mut self) -> u64 {
        self.next = self.next.saturating_add(1);
        self.latest = Some(self.next);
        self.next
    }

    /// Forget the latest request; every reply still in flight becomes stale.
    pub fn invalidate(&mut self) {
        self.latest = None;
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        self.latest == Some(seq)
    }

    pub fn latest(&self) -> Option<u64> {
        self.latest
    }
}
