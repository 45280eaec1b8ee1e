//! Error type for wallet-session and contract operations.

use alloy::contract::Error as ContractError;
use alloy::primitives::U256;
use alloy::providers::PendingTransactionError;
use alloy::transports::TransportError;

/// Errors surfaced by the session client.
///
/// Every failure is terminal for the action that produced it; there are no
/// retries at this layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The wallet is on the wrong network. User-facing.
    #[error("please connect to the Rinkeby testnet (chain id {expected}, wallet reports {actual})")]
    WrongNetwork { expected: u64, actual: u64 },

    /// Transport-level RPC failure: connection refused, node error, bad payload.
    #[error("rpc transport error: {0}")]
    Transport(#[from] TransportError),

    /// A contract call failed: revert, ABI decode failure, or transport below it.
    #[error("contract call failed: {0}")]
    Contract(#[from] ContractError),

    /// A submitted transaction failed to confirm within the bounded wait.
    #[error("transaction did not confirm: {0}")]
    Confirmation(#[from] PendingTransactionError),

    /// The mint payment computation overflowed.
    #[error("token amount {0} overflows the payment computation")]
    PaymentOverflow(U256),

    /// Missing or malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
