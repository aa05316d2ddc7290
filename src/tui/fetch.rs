//! Stale-response guards for in-flight fetches
//!
//! Every catalog or detail request carries a token minted from a
//! monotonically increasing generation counter. A response is applied
//! only if its token is still the newest one issued, so a slow earlier
//! request can never clobber the results of a later one.

/// Token identifying a single fetch request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Generation counter for issuing and checking request tokens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a token for a new request, superseding all earlier ones
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Whether a response carrying this token may still be applied
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// Supersession guard for the debounced search path.
///
/// Each typed keystroke arms the gate and receives an epoch; when the
/// quiet-window timer wakes, the pending fetch proceeds only if its epoch
/// is still current. Any fetch issued outside the debounced path cancels
/// the gate, so a sleeping task can never fire with filters older than
/// the ones already sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceGate {
    epoch: u64,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the gate for a newly typed change, superseding any pending one
    pub fn arm(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Invalidate any pending debounce without arming a new one
    pub fn cancel(&mut self) {
        self.epoch += 1;
    }

    /// Whether the debounce armed with this epoch may still fire
    pub fn may_fire(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }
}

/// Why a fetch failed, as much as presentation needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The requested record does not exist
    NotFound,
    /// Transport failure, timeout, or an unexpected status
    Unavailable(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "not found"),
            FetchError::Unavailable(message) => write!(f, "{}", message),
        }
    }
}

/// Lifecycle of an async fetch, driving loading and error presentation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// No request has been made yet
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The latest request completed successfully
    Loaded,
    /// The latest request failed
    Failed(FetchError),
}

impl FetchPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchPhase::Loading)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchPhase::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_token_is_current() {
        let mut tracker = RequestTracker::new();
        let token = tracker.issue();
        assert!(tracker.is_current(token));
    }

    #[test]
    fn test_newer_token_supersedes_older() {
        let mut tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_out_of_order_completion_discards_stale() {
        // Request A issued, then request B. B completes first and is
        // applied; A completing afterwards must be discarded.
        let mut tracker = RequestTracker::new();
        let a = tracker.issue();
        let b = tracker.issue();

        assert!(tracker.is_current(b));
        assert!(!tracker.is_current(a));
    }

    #[test]
    fn test_rapid_arms_let_only_last_fire() {
        // A burst of keystrokes arms the gate repeatedly; only the last
        // one survives the quiet window, so at most one fetch is issued.
        let mut gate = DebounceGate::new();
        let first = gate.arm();
        let second = gate.arm();
        let third = gate.arm();
        assert!(!gate.may_fire(first));
        assert!(!gate.may_fire(second));
        assert!(gate.may_fire(third));
    }

    #[test]
    fn test_immediate_fetch_cancels_pending_debounce() {
        // Typing arms the gate; a genre change within the quiet window
        // issues its own fetch and must keep the sleeping task from
        // firing with the older filters.
        let mut gate = DebounceGate::new();
        let typed = gate.arm();
        gate.cancel();
        assert!(!gate.may_fire(typed));
    }

    #[test]
    fn test_gate_usable_after_cancel() {
        let mut gate = DebounceGate::new();
        gate.arm();
        gate.cancel();
        let rearmed = gate.arm();
        assert!(gate.may_fire(rearmed));
    }

    #[test]
    fn test_fetch_phase_helpers() {
        assert!(FetchPhase::Loading.is_loading());
        assert!(!FetchPhase::Idle.is_loading());

        let failed = FetchPhase::Failed(FetchError::Unavailable("boom".to_string()));
        assert_eq!(failed.error().map(|e| e.to_string()), Some("boom".to_string()));
        assert_eq!(FetchPhase::Loaded.error(), None);
    }

    #[test]
    fn test_not_found_is_distinguishable() {
        let phase = FetchPhase::Failed(FetchError::NotFound);
        assert!(phase.error().is_some_and(FetchError::is_not_found));

        let phase = FetchPhase::Failed(FetchError::Unavailable("503".to_string()));
        assert!(!phase.error().is_some_and(FetchError::is_not_found));
    }
}
