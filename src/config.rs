use std::time::Duration;

/// How long to wait for the server, and how many extra datagrams to wait for
/// on commands that answer with more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Bounds the wait for the first reply datagram.
    pub primary: Duration,
    /// Bounds each wait for a follow-up datagram.
    pub secondary: Duration,
    /// Caps the number of follow-up reads.
    pub max_secondary_attempts: u32,
}

impl Timeouts {
    pub const DEFAULT_PRIMARY: Duration = Duration::from_millis(5000);
    pub const DEFAULT_SECONDARY: Duration = Duration::from_millis(1000);
    pub const DEFAULT_MAX_SECONDARY_ATTEMPTS: u32 = 2;

    pub fn with_primary(mut self, primary: Duration) -> Self {
        self.primary = primary;
        self
    }

    pub fn with_secondary(mut self, secondary: Duration) -> Self {
        self.secondary = secondary;
        self
    }

    pub fn with_max_secondary_attempts(mut self, attempts: u32) -> Self {
        self.max_secondary_attempts = attempts;
        self
    }
}

impl Default for Timeouts {
    fn default() -> Self {
        Timeouts {
            primary: Self::DEFAULT_PRIMARY,
            secondary: Self::DEFAULT_SECONDARY,
            max_secondary_attempts: Self::DEFAULT_MAX_SECONDARY_ATTEMPTS,
        }
    }
}
