//! HTTP client for the Sui JSON-RPC API.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::time::Duration;
use suikit_types::Address;
use tracing::debug;

use crate::errors::{Result, SdkError};
use crate::types::*;

/// The native SUI coin type tag.
pub const SUI_COIN_TYPE: &str = "0x2::sui::SUI";

/// Sui JSON-RPC client.
///
/// The HTTP transport is owned by the client instance and injected at
/// construction; there is no process-wide shared client. A `Client` is
/// cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    url: String,
}

impl Client {
    /// Create a new client for the given fullnode URL.
    pub fn new(url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            http,
            url: url.into(),
        }
    }

    /// Create a client with a caller-configured HTTP transport.
    pub fn with_http(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fullnode URL this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the chain identifier (e.g. testnet/mainnet genesis digest).
    pub async fn get_chain_identifier(&self) -> Result<String> {
        self.request("sui_getChainIdentifier", json!([])).await
    }

    /// Get the total number of transaction blocks on the chain.
    pub async fn get_total_transaction_blocks(&self) -> Result<u64> {
        let value: String = self
            .request("sui_getTotalTransactionBlocks", json!([]))
            .await?;
        parse_decimal_u64(&value)
    }

    /// Get the latest checkpoint sequence number.
    pub async fn get_latest_checkpoint_sequence_number(&self) -> Result<u64> {
        let value: String = self
            .request("sui_getLatestCheckpointSequenceNumber", json!([]))
            .await?;
        parse_decimal_u64(&value)
    }

    /// Get the aggregate balance of one coin type for an address.
    /// `coin_type` defaults to SUI when `None`.
    pub async fn get_balance(&self, address: &Address, coin_type: Option<&str>) -> Result<Balance> {
        let coin_type = coin_type.unwrap_or(SUI_COIN_TYPE);
        self.request("suix_getBalance", json!([address.to_string(), coin_type]))
            .await
    }

    /// Get balances for every coin type an address owns.
    pub async fn get_all_balances(&self, address: &Address) -> Result<Vec<Balance>> {
        self.request("suix_getAllBalances", json!([address.to_string()]))
            .await
    }

    /// Get the first page of coin objects of one type owned by an address.
    pub async fn get_coins(&self, address: &Address, coin_type: Option<&str>) -> Result<Page<Coin>> {
        let coin_type = coin_type.unwrap_or(SUI_COIN_TYPE);
        self.request("suix_getCoins", json!([address.to_string(), coin_type]))
            .await
    }

    /// Get display metadata for a coin type.
    pub async fn get_coin_metadata(&self, coin_type: &str) -> Result<CoinMetadata> {
        self.request("suix_getCoinMetadata", json!([coin_type])).await
    }

    /// Get the total supply of a coin type.
    pub async fn get_total_supply(&self, coin_type: &str) -> Result<Supply> {
        self.request("suix_getTotalSupply", json!([coin_type])).await
    }

    /// Build an unsigned SUI transfer transaction.
    /// `amount: None` transfers the whole coin object.
    pub async fn transfer_sui(
        &self,
        signer: &Address,
        sui_object_id: &str,
        gas_budget: u64,
        recipient: &Address,
        amount: Option<u64>,
    ) -> Result<TransactionBytes> {
        self.request(
            "unsafe_transferSui",
            json!([
                signer.to_string(),
                sui_object_id,
                gas_budget.to_string(),
                recipient.to_string(),
                amount.map(|a| a.to_string()),
            ]),
        )
        .await
    }

    /// Build an unsigned transaction splitting a coin into the given
    /// amounts. Note the chain may keep a zero-balance source coin object
    /// around as a placeholder; that is node behavior, not checked here.
    pub async fn split_coin(
        &self,
        signer: &Address,
        coin_object_id: &str,
        split_amounts: &[u64],
        gas: Option<&str>,
        gas_budget: u64,
    ) -> Result<TransactionBytes> {
        let amounts: Vec<String> = split_amounts.iter().map(|a| a.to_string()).collect();
        self.request(
            "unsafe_splitCoin",
            json!([
                signer.to_string(),
                coin_object_id,
                amounts,
                gas,
                gas_budget.to_string(),
            ]),
        )
        .await
    }

    /// Build an unsigned transaction merging `coin_to_merge` into
    /// `primary_coin`.
    pub async fn merge_coins(
        &self,
        signer: &Address,
        primary_coin: &str,
        coin_to_merge: &str,
        gas: Option<&str>,
        gas_budget: u64,
    ) -> Result<TransactionBytes> {
        self.request(
            "unsafe_mergeCoins",
            json!([
                signer.to_string(),
                primary_coin,
                coin_to_merge,
                gas,
                gas_budget.to_string(),
            ]),
        )
        .await
    }

    /// Build an unsigned Move call transaction.
    #[allow(clippy::too_many_arguments)]
    pub async fn move_call(
        &self,
        signer: &Address,
        package_object_id: &str,
        module: &str,
        function: &str,
        type_arguments: &[String],
        arguments: &[Value],
        gas: Option<&str>,
        gas_budget: u64,
    ) -> Result<TransactionBytes> {
        self.request(
            "unsafe_moveCall",
            json!([
                signer.to_string(),
                package_object_id,
                module,
                function,
                type_arguments,
                arguments,
                gas,
                gas_budget.to_string(),
            ]),
        )
        .await
    }

    /// Simulate a transaction without committing it.
    pub async fn dry_run_transaction_block(&self, tx_bytes: &str) -> Result<DryRunResponse> {
        self.request("sui_dryRunTransactionBlock", json!([tx_bytes]))
            .await
    }

    /// Execute a signed transaction. `signatures` are the Base64 envelopes
    /// produced by transaction signing, one per required signer.
    pub async fn execute_transaction_block(
        &self,
        tx_bytes: &str,
        signatures: &[String],
        options: &TransactionBlockResponseOptions,
        request_type: ExecuteTransactionRequestType,
    ) -> Result<TransactionBlockResponse> {
        self.request(
            "sui_executeTransactionBlock",
            json!([tx_bytes, signatures, options, request_type]),
        )
        .await
    }

    /// Fetch a transaction block by digest.
    pub async fn get_transaction_block(
        &self,
        digest: &str,
        options: &TransactionBlockResponseOptions,
    ) -> Result<TransactionBlockResponse> {
        self.request("sui_getTransactionBlock", json!([digest, options]))
            .await
    }

    /// Poll for a transaction block until the node has it or `timeout`
    /// elapses. A structured RPC error means "not found yet" and keeps
    /// the poll going; transport errors abort immediately.
    pub async fn wait_for_transaction_block(
        &self,
        digest: &str,
        options: &TransactionBlockResponseOptions,
        timeout: Duration,
    ) -> Result<TransactionBlockResponse> {
        let start = std::time::Instant::now();

        loop {
            match self.get_transaction_block(digest, options).await {
                Ok(response) => return Ok(response),
                Err(SdkError::Rpc(_)) => {}
                Err(e) => return Err(e),
            }

            if start.elapsed() > timeout {
                return Err(SdkError::Timeout(format!(
                    "transaction block {} not available",
                    digest
                )));
            }

            tokio::time::sleep(Duration::from_secs(1)).await;
        }
    }

    /// Send one JSON-RPC request and unwrap the typed result.
    async fn request<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let request = RpcRequest::new(method, params);
        debug!(method, url = %self.url, "sending rpc request");

        let response = self.http.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SdkError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(method, body = %body, "rpc response");

        let response: RpcResponse<T> = serde_json::from_str(&body)
            .map_err(|e| SdkError::Serialization(format!("failed to parse response: {}", e)))?;

        if let Some(error) = response.error {
            return Err(SdkError::Rpc(error));
        }

        response
            .result
            .ok_or_else(|| SdkError::InvalidResponse("missing result".to_string()))
    }
}

/// Parse the decimal string counters the node returns for totals.
fn parse_decimal_u64(value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|e| SdkError::InvalidResponse(format!("expected decimal u64: {}", e)))
}
