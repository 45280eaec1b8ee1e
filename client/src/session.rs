//! Wallet session: connection, network validation, per-call handle derivation.

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use tracing::debug;

use crate::config::{
    SessionConfig, NFT_CONTRACT_ADDRESS, REQUIRED_CHAIN_ID, TOKEN_CONTRACT_ADDRESS,
};
use crate::contracts::{NftContract, NftHandle, TokenContract, TokenHandle};
use crate::error::Error;

/// Contract handles derived from a session for one operation.
pub struct Contracts<N, T> {
    pub nft: N,
    pub token: T,
}

/// Wallet session boundary.
///
/// Handles are derived per call and never cached; implementations re-validate
/// the wallet's network id on every derivation, failing before any contract
/// call is issued.
pub trait Session {
    type Nft: NftContract;
    type Token: TokenContract;

    /// Whether `connect` has succeeded for this session.
    fn connected(&self) -> bool;

    /// Address of the signing account.
    fn account(&self) -> Address;

    /// Establish the connection, validating the network id.
    async fn connect(&mut self) -> Result<(), Error>;

    /// Derive read-only contract handles.
    async fn provider(&self) -> Result<Contracts<Self::Nft, Self::Token>, Error>;

    /// Derive signing contract handles.
    async fn signer(&self) -> Result<Contracts<Self::Nft, Self::Token>, Error>;
}

/// Session backed by a JSON-RPC endpoint and a local signing key.
pub struct RpcSession {
    config: SessionConfig,
    connected: bool,
}

impl RpcSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            connected: false,
        }
    }

    /// Build a provider and check it is on the required network.
    ///
    /// The chain id is queried on every call; the check is never cached.
    async fn checked_provider(&self, with_signer: bool) -> Result<DynProvider, Error> {
        let provider = if with_signer {
            let wallet = EthereumWallet::from(self.config.signer.clone());
            ProviderBuilder::new()
                .wallet(wallet)
                .connect(&self.config.rpc_url)
                .await?
                .erased()
        } else {
            ProviderBuilder::new()
                .connect(&self.config.rpc_url)
                .await?
                .erased()
        };

        let chain_id = provider.get_chain_id().await?;
        if chain_id != REQUIRED_CHAIN_ID {
            return Err(Error::WrongNetwork {
                expected: REQUIRED_CHAIN_ID,
                actual: chain_id,
            });
        }
        debug!(chain_id, "network validated");
        Ok(provider)
    }

    fn contracts(provider: DynProvider) -> Contracts<NftHandle, TokenHandle> {
        Contracts {
            nft: NftHandle::new(NFT_CONTRACT_ADDRESS, provider.clone()),
            token: TokenHandle::new(TOKEN_CONTRACT_ADDRESS, provider),
        }
    }
}

impl Session for RpcSession {
    type Nft = NftHandle;
    type Token = TokenHandle;

    fn connected(&self) -> bool {
        self.connected
    }

    fn account(&self) -> Address {
        self.config.signer.address()
    }

    async fn connect(&mut self) -> Result<(), Error> {
        self.checked_provider(false).await?;
        self.connected = true;
        Ok(())
    }

    async fn provider(&self) -> Result<Contracts<NftHandle, TokenHandle>, Error> {
        Ok(Self::contracts(self.checked_provider(false).await?))
    }

    async fn signer(&self) -> Result<Contracts<NftHandle, TokenHandle>, Error> {
        Ok(Self::contracts(self.checked_provider(true).await?))
    }
}
