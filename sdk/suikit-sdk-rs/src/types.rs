//! JSON-RPC envelope and Sui result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: serde_json::Value,
    pub id: u64,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.into(),
            params,
            id: 1,
        }
    }
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RpcResponse<T> {
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<RpcError>,
}

/// JSON-RPC 2.0 error record: a plain data value, converted into
/// `SdkError::Rpc` at the client boundary.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code={} message={}", self.code, self.message)?;
        if let Some(data) = &self.data {
            write!(f, " data={}", data)?;
        }
        Ok(())
    }
}

/// Unsigned transaction bytes from the `unsafe_` build methods,
/// Base64-encoded and ready to sign.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBytes {
    pub tx_bytes: String,
}

/// Result of `sui_executeTransactionBlock` / `sui_getTransactionBlock`.
/// Only the fields this SDK consumes are modeled; the node returns more.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponse {
    pub digest: String,
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
    #[serde(default)]
    pub confirmed_local_execution: Option<bool>,
}

/// Result of `sui_dryRunTransactionBlock`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DryRunResponse {
    #[serde(default)]
    pub effects: Option<TransactionEffects>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEffects {
    pub status: ExecutionStatus,
}

/// Execution status inside transaction effects.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStatus {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// A coin object owned by an address.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coin {
    pub coin_type: String,
    pub coin_object_id: String,
    pub version: String,
    pub digest: String,
    pub balance: String,
    pub previous_transaction: String,
}

/// One page of a paginated query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

/// Aggregate balance for one coin type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub coin_type: String,
    pub coin_object_count: u64,
    pub total_balance: String,
}

/// Display metadata for a coin type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinMetadata {
    pub decimals: u8,
    pub name: String,
    pub symbol: String,
    pub description: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Total supply of a coin type.
#[derive(Debug, Clone, Deserialize)]
pub struct Supply {
    pub value: String,
}

/// Which parts of a transaction block the node should include in its
/// response. Defaults request everything, mirroring the execute flow where
/// callers check effects status and balance changes after submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponseOptions {
    pub show_input: bool,
    pub show_raw_input: bool,
    pub show_effects: bool,
    pub show_events: bool,
    pub show_object_changes: bool,
    pub show_balance_changes: bool,
    pub show_raw_effects: bool,
}

impl Default for TransactionBlockResponseOptions {
    fn default() -> Self {
        Self {
            show_input: true,
            show_raw_input: true,
            show_effects: true,
            show_events: true,
            show_object_changes: true,
            show_balance_changes: true,
            show_raw_effects: true,
        }
    }
}

/// Execution mode for `sui_executeTransactionBlock`.
///
/// Set explicitly rather than relying on the server default
/// (WaitForEffectsCert), since enabling show_effects/show_events already
/// switches the node to local execution and an inconsistent combination
/// fails the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExecuteTransactionRequestType {
    WaitForEffectsCert,
    WaitForLocalExecution,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_request_serializes_positional_params() {
        let req = RpcRequest::new("suix_getBalance", serde_json::json!(["0xabc"]));
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["jsonrpc"], "2.0");
        assert_eq!(json["method"], "suix_getBalance");
        assert_eq!(json["params"], serde_json::json!(["0xabc"]));
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_rpc_response_error_parsing() {
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"Invalid params"}}"#;
        let resp: RpcResponse<TransactionBytes> = serde_json::from_str(body).unwrap();
        assert!(resp.result.is_none());
        let err = resp.error.unwrap();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Invalid params");
        assert!(err.data.is_none());
    }

    #[test]
    fn test_transaction_bytes_parsing() {
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"txBytes":"AAAA","gas":[]}}"#;
        let resp: RpcResponse<TransactionBytes> = serde_json::from_str(body).unwrap();
        assert_eq!(resp.result.unwrap().tx_bytes, "AAAA");
    }

    #[test]
    fn test_effects_status_parsing() {
        let body = r#"{"effects":{"status":{"status":"success"}}}"#;
        let resp: DryRunResponse = serde_json::from_str(body).unwrap();
        assert!(resp.effects.unwrap().status.is_success());

        let body = r#"{"effects":{"status":{"status":"failure","error":"InsufficientGas"}}}"#;
        let resp: DryRunResponse = serde_json::from_str(body).unwrap();
        let status = resp.effects.unwrap().status;
        assert!(!status.is_success());
        assert_eq!(status.error.as_deref(), Some("InsufficientGas"));
    }

    #[test]
    fn test_response_options_camel_case() {
        let json = serde_json::to_value(TransactionBlockResponseOptions::default()).unwrap();
        assert_eq!(json["showEffects"], true);
        assert_eq!(json["showBalanceChanges"], true);
        assert!(json.get("show_effects").is_none());
    }

    #[test]
    fn test_request_type_serialization() {
        let json = serde_json::to_value(ExecuteTransactionRequestType::WaitForLocalExecution).unwrap();
        assert_eq!(json, "WaitForLocalExecution");
    }

    #[test]
    fn test_coin_page_parsing() {
        let body = r#"{"data":[{"coinType":"0x2::sui::SUI","coinObjectId":"0x1","version":"5","digest":"abc","balance":"1000000","previousTransaction":"def"}],"nextCursor":"0x1","hasNextPage":false}"#;
        let page: Page<Coin> = serde_json::from_str(body).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].coin_type, "0x2::sui::SUI");
        assert_eq!(page.data[0].balance, "1000000");
        assert!(!page.has_next_page);
    }
}
