//! Wallet/session client for the Dragon Dev token ICO.
//!
//! Connects a wallet (RPC endpoint plus local signing key) to the Rinkeby
//! test network, reads token and NFT contract state, and submits mint and
//! claim transactions. The contracts themselves live on chain; the
//! `bindings` crate carries their ABI surface.

#![allow(async_fn_in_trait)]

pub mod config;
pub mod contracts;
pub mod controller;
pub mod error;
pub mod session;
pub mod state;

pub use config::SessionConfig;
pub use controller::IcoController;
pub use error::Error;
pub use session::{RpcSession, Session};
pub use state::{DashboardState, TxPhase};
