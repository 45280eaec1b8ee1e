//! End-to-end session flow: connect, refresh balances, then claim or mint.
//!
//! Claims whenever unclaimed tokens are available, mirroring the sale rules;
//! otherwise mints `TOKEN_AMOUNT` tokens when set.

use alloy::primitives::{utils::format_ether, U256};

use client::config::{MAX_TOKEN_SUPPLY, TOKENS_PER_NFT};
use client::{IcoController, RpcSession, Session, SessionConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = SessionConfig::from_env()?;
    let mut controller = IcoController::new(RpcSession::new(config));

    controller.connect_wallet().await?;
    println!("Wallet connected: {}", controller.session().account());

    controller.refresh_balances().await;
    print_balances(&controller);

    let claimable = controller.state.tokens_to_be_claimed;
    if !claimable.is_zero() {
        println!(
            "{} tokens can be claimed",
            claimable * U256::from(TOKENS_PER_NFT)
        );
        controller.claim().await?;
        println!("Successfully claimed Dragon Dev tokens");
    } else {
        let amount = std::env::var("TOKEN_AMOUNT")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(U256::from)
            .unwrap_or(U256::ZERO);
        if amount.is_zero() {
            println!("Nothing to claim and no TOKEN_AMOUNT set");
            return Ok(());
        }
        controller.state.token_amount_input = amount;
        controller.mint(amount).await?;
        println!("Successfully minted {amount} Dragon Dev tokens");
    }

    print_balances(&controller);
    Ok(())
}

fn print_balances<S: Session>(controller: &IcoController<S>) {
    println!(
        "You own {} Dragon Dev tokens; overall {} / {} have been minted",
        format_ether(controller.state.token_balance),
        format_ether(controller.state.tokens_minted),
        MAX_TOKEN_SUPPLY,
    );
}
