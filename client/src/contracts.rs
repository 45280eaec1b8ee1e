//! Contract boundary: the ABI surface the workflow depends on.
//!
//! The traits mirror the two external contracts so the workflow logic can be
//! exercised against in-memory fakes; the live implementations wrap the
//! `sol!`-generated instances over an erased provider.

use alloy::network::Ethereum;
use alloy::primitives::{Address, B256, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder};

use bindings::{DragonDevNFT, DragonDevToken};

use crate::config::CONFIRMATION_TIMEOUT;
use crate::error::Error;

/// Read surface of the NFT collection.
pub trait NftContract {
    /// Number of NFTs owned by `owner`.
    async fn balance_of(&self, owner: Address) -> Result<U256, Error>;

    /// Token id at `index` within `owner`'s holdings.
    async fn token_of_owner_by_index(&self, owner: Address, index: U256) -> Result<U256, Error>;
}

/// Full surface of the token sale contract.
pub trait TokenContract {
    /// In-flight transaction returned by the mutating operations.
    type Pending: PendingTx;

    /// Token balance of `owner`.
    async fn balance_of(&self, owner: Address) -> Result<U256, Error>;

    /// Total supply minted so far.
    async fn total_supply(&self) -> Result<U256, Error>;

    /// Whether the tokens gated by `token_id` have already been collected.
    async fn token_ids_claimed(&self, token_id: U256) -> Result<bool, Error>;

    /// Submit a payable mint of `amount` tokens carrying `payment` wei.
    async fn submit_mint(&self, amount: U256, payment: U256) -> Result<Self::Pending, Error>;

    /// Submit the zero-argument claim.
    async fn submit_claim(&self) -> Result<Self::Pending, Error>;
}

/// A submitted transaction awaiting inclusion.
pub trait PendingTx {
    /// Wait for confirmation. Implementations bound the wait.
    async fn confirmed(self) -> Result<B256, Error>;
}

/// Live NFT handle over an erased provider.
pub struct NftHandle(DragonDevNFT::DragonDevNFTInstance<DynProvider>);

impl NftHandle {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self(DragonDevNFT::new(address, provider))
    }
}

impl NftContract for NftHandle {
    async fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        Ok(self.0.balanceOf(owner).call().await?)
    }

    async fn token_of_owner_by_index(&self, owner: Address, index: U256) -> Result<U256, Error> {
        Ok(self.0.tokenOfOwnerByIndex(owner, index).call().await?)
    }
}

/// Live token handle over an erased provider.
pub struct TokenHandle(DragonDevToken::DragonDevTokenInstance<DynProvider>);

impl TokenHandle {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self(DragonDevToken::new(address, provider))
    }
}

impl TokenContract for TokenHandle {
    type Pending = PendingTransaction;

    async fn balance_of(&self, owner: Address) -> Result<U256, Error> {
        Ok(self.0.balanceOf(owner).call().await?)
    }

    async fn total_supply(&self) -> Result<U256, Error> {
        Ok(self.0.totalSupply().call().await?)
    }

    async fn token_ids_claimed(&self, token_id: U256) -> Result<bool, Error> {
        Ok(self.0.tokenIdsClaimed(token_id).call().await?)
    }

    async fn submit_mint(&self, amount: U256, payment: U256) -> Result<PendingTransaction, Error> {
        let pending = self.0.mint(amount).value(payment).send().await?;
        Ok(PendingTransaction(pending))
    }

    async fn submit_claim(&self) -> Result<PendingTransaction, Error> {
        let pending = self.0.claim().send().await?;
        Ok(PendingTransaction(pending))
    }
}

/// A transaction submitted through the live provider.
pub struct PendingTransaction(PendingTransactionBuilder<Ethereum>);

impl PendingTx for PendingTransaction {
    async fn confirmed(self) -> Result<B256, Error> {
        Ok(self
            .0
            .with_timeout(Some(CONFIRMATION_TIMEOUT))
            .watch()
            .await?)
    }
}
