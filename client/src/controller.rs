//! The wallet/session workflow: balance refresh, claim scan, mint and claim.

use alloy::primitives::U256;
use tracing::{error, info};

use crate::config::TOKEN_PRICE;
use crate::contracts::{NftContract, PendingTx, TokenContract};
use crate::error::Error;
use crate::session::Session;
use crate::state::{DashboardState, TxPhase};

/// Wei owed for minting `amount` tokens.
pub fn mint_payment(amount: U256) -> Result<U256, Error> {
    TOKEN_PRICE
        .checked_mul(amount)
        .ok_or(Error::PaymentOverflow(amount))
}

/// Drives the ICO workflow over a wallet session.
pub struct IcoController<S> {
    session: S,
    /// Derived figures shown to the operator.
    pub state: DashboardState,
}

impl<S: Session> IcoController<S> {
    pub fn new(session: S) -> Self {
        Self {
            session,
            state: DashboardState::default(),
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Establish the wallet connection.
    ///
    /// A failure is logged and leaves the session disconnected.
    pub async fn connect_wallet(&mut self) -> Result<(), Error> {
        match self.session.connect().await {
            Ok(()) => Ok(()),
            Err(err) => {
                error!(%err, "wallet connection failed");
                Err(err)
            }
        }
    }

    /// Recompute the three derived balances.
    ///
    /// The reads are dispatched concurrently and are independent: a failure
    /// in one resets that field to zero and is logged without disturbing the
    /// others. Nothing propagates to the caller.
    pub async fn refresh_balances(&mut self) {
        let (minted, balance, claimable) = tokio::join!(
            self.total_minted(),
            self.token_balance(),
            self.tokens_to_be_claimed(),
        );

        self.state.tokens_minted = minted.unwrap_or_else(|err| {
            error!(%err, "failed to read total supply");
            U256::ZERO
        });
        self.state.token_balance = balance.unwrap_or_else(|err| {
            error!(%err, "failed to read token balance");
            U256::ZERO
        });
        self.state.tokens_to_be_claimed = claimable.unwrap_or_else(|err| {
            error!(%err, "failed to count claimable tokens");
            U256::ZERO
        });
    }

    /// Total token supply minted so far.
    async fn total_minted(&self) -> Result<U256, Error> {
        let contracts = self.session.provider().await?;
        contracts.token.total_supply().await
    }

    /// Token balance of the connected account.
    async fn token_balance(&self) -> Result<U256, Error> {
        let contracts = self.session.provider().await?;
        contracts.token.balance_of(self.session.account()).await
    }

    /// Count the connected account's unclaimed tokens.
    ///
    /// Walks every owned NFT index and checks the claimed flag per token id.
    /// One sequential read per NFT; holdings are expected to be small.
    pub async fn tokens_to_be_claimed(&self) -> Result<U256, Error> {
        let contracts = self.session.provider().await?;
        let owner = self.session.account();

        let balance = contracts.nft.balance_of(owner).await?;
        if balance.is_zero() {
            return Ok(U256::ZERO);
        }

        let mut amount = U256::ZERO;
        let mut index = U256::ZERO;
        while index < balance {
            let token_id = contracts.nft.token_of_owner_by_index(owner, index).await?;
            if !contracts.token.token_ids_claimed(token_id).await? {
                amount += U256::from(1);
            }
            index += U256::from(1);
        }
        Ok(amount)
    }

    /// Mint `amount` tokens, paying the fixed per-token price.
    ///
    /// Amount validation is the caller's concern. The phase guard returns the
    /// state to `Idle` on every exit path; balances refresh only on success.
    pub async fn mint(&mut self, amount: U256) -> Result<(), Error> {
        let payment = mint_payment(amount)?;
        let contracts = self.session.signer().await?;

        let result = async {
            let tx = self.state.begin_tx();
            let pending = contracts.token.submit_mint(amount, payment).await?;
            tx.advance(TxPhase::AwaitingConfirmation);
            pending.confirmed().await
        }
        .await;

        match result {
            Ok(tx_hash) => {
                info!(%tx_hash, %amount, "mint confirmed");
                self.refresh_balances().await;
                Ok(())
            }
            Err(err) => {
                error!(%err, "mint failed");
                Err(err)
            }
        }
    }

    /// Claim the tokens owed for the account's unclaimed NFTs.
    ///
    /// Same phase and refresh contract as [`IcoController::mint`].
    pub async fn claim(&mut self) -> Result<(), Error> {
        let contracts = self.session.signer().await?;

        let result = async {
            let tx = self.state.begin_tx();
            let pending = contracts.token.submit_claim().await?;
            tx.advance(TxPhase::AwaitingConfirmation);
            pending.confirmed().await
        }
        .await;

        match result {
            Ok(tx_hash) => {
                info!(%tx_hash, "claim confirmed");
                self.refresh_balances().await;
                Ok(())
            }
            Err(err) => {
                error!(%err, "claim failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::uint;

    #[test]
    fn payment_is_price_times_amount() {
        // 5 tokens at 0.001 ether each
        let payment = mint_payment(U256::from(5)).unwrap();
        assert_eq!(payment, uint!(5_000_000_000_000_000_U256));
    }

    #[test]
    fn payment_overflow_is_rejected() {
        assert!(matches!(
            mint_payment(U256::MAX),
            Err(Error::PaymentOverflow(_))
        ));
    }
}
