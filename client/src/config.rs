//! Static configuration: contract addresses, network constants, pricing.

use std::time::Duration;

use alloy::primitives::{address, uint, Address, U256};
use alloy::signers::local::PrivateKeySigner;

use crate::error::Error;

/// Chain id the client requires before touching any contract (Rinkeby).
pub const REQUIRED_CHAIN_ID: u64 = 4;

/// RPC endpoint used when `RPC_URL` is not set.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// Deployed token sale contract.
pub const TOKEN_CONTRACT_ADDRESS: Address =
    address!("0x0f76bd7b0b31d6ecf2bc6d487d49bbc40b283c34");

/// NFT collection that gates claims.
pub const NFT_CONTRACT_ADDRESS: Address =
    address!("0x3cc6cdd3125e2eb25896a79d76e91586fb6f16ce");

/// Wei charged per token minted: 0.001 ether.
pub const TOKEN_PRICE: U256 = uint!(1_000_000_000_000_000_U256);

/// Hard cap on the token supply, in whole tokens. Display only.
pub const MAX_TOKEN_SUPPLY: u64 = 10_000;

/// Whole tokens granted per unclaimed NFT. Display only.
pub const TOKENS_PER_NFT: u64 = 10;

/// Upper bound on the confirmation wait for a submitted transaction.
pub const CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Connection settings for a wallet session.
#[derive(Clone)]
pub struct SessionConfig {
    pub rpc_url: String,
    pub signer: PrivateKeySigner,
}

impl SessionConfig {
    /// Read the session settings from the environment.
    ///
    /// `PRIVATE_KEY` is required; `RPC_URL` falls back to [`DEFAULT_RPC_URL`].
    pub fn from_env() -> Result<Self, Error> {
        let rpc_url =
            std::env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let key = std::env::var("PRIVATE_KEY")
            .map_err(|_| Error::Config("PRIVATE_KEY is not set".into()))?;
        let signer = key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|err| Error::Config(format!("invalid PRIVATE_KEY: {err}")))?;
        Ok(Self { rpc_url, signer })
    }
}
