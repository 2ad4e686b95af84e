use epic_game_api::abi::{parse_quantity, to_quantity, Bytes, B256};
use epic_game_api::contract::RpcReceipt;
use epic_game_api::event::LogEntry;
use epic_game_api::sdk::CallRequest;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: Vec<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Posts one JSON-RPC request. `Ok(None)` when the node answers `null`.
async fn send<T: DeserializeOwned>(
    rpc_url: &str,
    method: &'static str,
    params: Vec<serde_json::Value>,
) -> Result<Option<T>, String> {
    let client = reqwest::Client::new();

    let request = RpcRequest {
        jsonrpc: "2.0",
        id: 1,
        method,
        params,
    };

    let response = client
        .post(rpc_url)
        .json(&request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let rpc_response: RpcResponse<T> = response
        .json()
        .await
        .map_err(|e| e.to_string())?;

    if let Some(error) = rpc_response.error {
        return Err(format!("{} (code {})", error.message, error.code));
    }

    Ok(rpc_response.result)
}

/// `eth_call` against the latest block.
pub async fn eth_call(rpc_url: &str, call: &CallRequest) -> Result<Bytes, String> {
    send(
        rpc_url,
        "eth_call",
        vec![serde_json::json!(call), serde_json::json!("latest")],
    )
    .await?
    .ok_or_else(|| "No call result returned".to_string())
}

/// Fetch current block height from RPC
pub async fn fetch_block_number(rpc_url: &str) -> Result<u64, String> {
    let quantity: String = send(rpc_url, "eth_blockNumber", vec![])
        .await?
        .ok_or_else(|| "No block number returned".to_string())?;

    parse_quantity(&quantity).map_err(|e| e.to_string())
}

pub async fn fetch_logs(
    rpc_url: &str,
    address: &str,
    topic: B256,
    from_block: u64,
    to_block: u64,
) -> Result<Vec<LogEntry>, String> {
    let filter = serde_json::json!({
        "address": address,
        "topics": [topic],
        "fromBlock": to_quantity(from_block),
        "toBlock": to_quantity(to_block),
    });

    Ok(send(rpc_url, "eth_getLogs", vec![filter])
        .await?
        .unwrap_or_default())
}

/// `Ok(None)` while the transaction is still pending.
pub async fn fetch_receipt(rpc_url: &str, tx_hash: &str) -> Result<Option<RpcReceipt>, String> {
    send(
        rpc_url,
        "eth_getTransactionReceipt",
        vec![serde_json::json!(tx_hash)],
    )
    .await
}
