//! suikit Rust SDK
//!
//! High-level SDK for Sui wallets, transaction signing, and JSON-RPC.
//!
//! # Example
//! ```rust,ignore
//! use suikit_sdk::{Client, Wallet};
//! use suikit_sdk::types::{ExecuteTransactionRequestType, TransactionBlockResponseOptions};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::new("https://fullnode.testnet.sui.io/");
//!     let wallet = Wallet::from_hex("..").unwrap();
//!
//!     let built = client
//!         .transfer_sui(&wallet.address(), "0x..coin", 10_000_000, &recipient, Some(1_000_000))
//!         .await
//!         .unwrap();
//!     let signature = wallet.sign_transaction_base64(&built.tx_bytes).unwrap();
//!     let result = client
//!         .execute_transaction_block(
//!             &built.tx_bytes,
//!             &[signature],
//!             &TransactionBlockResponseOptions::default(),
//!             ExecuteTransactionRequestType::WaitForLocalExecution,
//!         )
//!         .await
//!         .unwrap();
//!     println!("digest: {}", result.digest);
//! }
//! ```

pub mod client;
pub mod errors;
pub mod types;
pub mod wallet;

pub use client::{Client, SUI_COIN_TYPE};
pub use errors::{Result, SdkError};
pub use wallet::Wallet;

/// Re-export the core crates for convenience
pub use suikit_crypto as crypto;
pub use suikit_types::{Address, Ed25519PublicKey, Ed25519Signature, Hash, SignatureScheme};
