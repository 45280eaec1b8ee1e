//! Dashboard state container and the transaction phase guard.

use std::cell::Cell;

use alloy::primitives::U256;

/// Lifecycle of a mutating action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TxPhase {
    #[default]
    Idle,
    Submitting,
    AwaitingConfirmation,
}

/// Derived on-chain figures driving the dashboard.
///
/// Recomputed after every successful transaction; nothing here persists
/// across runs.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// Total token supply minted so far.
    pub tokens_minted: U256,
    /// Token balance of the connected account.
    pub token_balance: U256,
    /// Tokens the connected account can still claim.
    pub tokens_to_be_claimed: U256,
    /// Mint amount entered by the operator.
    pub token_amount_input: U256,
    phase: Cell<TxPhase>,
}

impl DashboardState {
    /// Current transaction phase.
    pub fn phase(&self) -> TxPhase {
        self.phase.get()
    }

    /// True while a mutating action is in flight.
    pub fn loading(&self) -> bool {
        self.phase.get() != TxPhase::Idle
    }

    /// Enter `Submitting` and hand out the guard holding the phase.
    pub fn begin_tx(&self) -> TxGuard<'_> {
        self.phase.set(TxPhase::Submitting);
        TxGuard { phase: &self.phase }
    }
}

/// Scoped hold on the transaction phase.
///
/// Dropping the guard returns the phase to `Idle` on every exit path,
/// including early returns on error.
pub struct TxGuard<'a> {
    phase: &'a Cell<TxPhase>,
}

impl TxGuard<'_> {
    /// Move the in-flight action to its next phase.
    pub fn advance(&self, phase: TxPhase) {
        self.phase.set(phase);
    }
}

impl Drop for TxGuard<'_> {
    fn drop(&mut self) {
        self.phase.set(TxPhase::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_releases_on_drop() {
        let state = DashboardState::default();
        {
            let guard = state.begin_tx();
            assert!(state.loading());
            guard.advance(TxPhase::AwaitingConfirmation);
            assert_eq!(state.phase(), TxPhase::AwaitingConfirmation);
        }
        assert!(!state.loading());
    }

    #[test]
    fn guard_releases_on_early_exit() {
        let state = DashboardState::default();
        let attempt = || -> Result<(), ()> {
            let _busy = state.begin_tx();
            Err(())
        };
        assert!(attempt().is_err());
        assert_eq!(state.phase(), TxPhase::Idle);
    }
}
