/// Monotonic token for fetch cycles.
///
/// Every cycle calls [`RequestGeneration::begin`] and keeps the returned
/// ticket. When its response arrives it is applied only if the ticket is
/// still current; responses from superseded cycles are dropped. In-flight
/// requests are not cancelled. Unmount needs no ticket: tasks spawned from a
/// component scope stop with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    current: u64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new cycle, invalidating every earlier ticket
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}
