//! One-shot deployment of the token contract.
//!
//! Reads the gating NFT contract address and the signing key from the
//! environment, submits the creation transaction, and prints the deployed
//! address. Exits non-zero on any failure; there are no retries.

use std::fs;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolConstructor;
use serde::Deserialize;

use bindings::DragonDevToken;
use client::config::DEFAULT_RPC_URL;

/// The slice of a Hardhat build artifact the deployer needs.
#[derive(Deserialize)]
struct TokenArtifact {
    bytecode: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let rpc_url = std::env::var("RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
    let signer: PrivateKeySigner = std::env::var("PRIVATE_KEY")?.trim().parse()?;
    let nft_contract: Address = std::env::var("NFT_CONTRACT_ADDRESS")?.trim().parse()?;
    let artifact_path = std::env::var("TOKEN_ARTIFACT")?;

    let artifact: TokenArtifact = serde_json::from_str(&fs::read_to_string(&artifact_path)?)?;
    let bytecode: Bytes = artifact.bytecode.parse()?;

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect(&rpc_url)
        .await?;

    // creation bytecode followed by the ABI-encoded constructor argument
    let constructor = DragonDevToken::constructorCall {
        nftContract: nft_contract,
    };
    let code = [bytecode.to_vec(), constructor.abi_encode()].concat();

    let tx = TransactionRequest::default().with_deploy_code(Bytes::from(code));
    let receipt = provider.send_transaction(tx).await?.get_receipt().await?;

    let address = receipt
        .contract_address
        .ok_or("deployment receipt carries no contract address")?;

    println!("Token contract address: {address}");
    Ok(())
}
