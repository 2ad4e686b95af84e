use epic_game_api::abi::parse_quantity;
use epic_game_api::consts::USER_REJECTED_CODE;
use epic_game_api::error::WalletError;
use epic_game_api::sdk::CallRequest;
use epic_game_api::wallet::WalletProvider;
use wasm_bindgen::JsValue;

/// Handle on the injected EIP-1193 provider (`window.ethereum`).
#[derive(Clone)]
pub struct InjectedWallet {
    provider: JsValue,
}

impl InjectedWallet {
    #[cfg(feature = "web")]
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let provider = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if provider.is_undefined() || provider.is_null() {
            tracing::info!("window.ethereum not found");
            return None;
        }
        Some(InjectedWallet { provider })
    }

    #[cfg(not(feature = "web"))]
    pub fn detect() -> Option<Self> {
        None
    }

    /// `ethereum.request({ method, params })`, with the result moved across
    /// the JS boundary as JSON.
    #[cfg(feature = "web")]
    pub async fn request(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, WalletError> {
        use js_sys::{Function, Object, Promise, Reflect, JSON};
        use wasm_bindgen::JsCast;

        let args = Object::new();
        Reflect::set(&args, &"method".into(), &method.into())
            .map_err(|_| invalid("failed to set method"))?;
        if !params.is_null() {
            let params = JSON::parse(&params.to_string())
                .map_err(|_| invalid("params are not valid JSON"))?;
            Reflect::set(&args, &"params".into(), &params)
                .map_err(|_| invalid("failed to set params"))?;
        }

        let request: Function = Reflect::get(&self.provider, &"request".into())
            .map_err(|_| invalid("no request method"))?
            .dyn_into()
            .map_err(|_| invalid("request is not a function"))?;

        let promise: Promise = request
            .call1(&self.provider, &args.into())
            .map_err(provider_error)?
            .dyn_into()
            .map_err(|_| invalid("request did not return a promise"))?;

        let result = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(provider_error)?;

        if result.is_undefined() || result.is_null() {
            return Ok(serde_json::Value::Null);
        }

        let text = JSON::stringify(&result)
            .map_err(|_| invalid("result is not serializable"))?
            .as_string()
            .ok_or_else(|| invalid("result is not a string"))?;

        serde_json::from_str(&text).map_err(|e| WalletError::InvalidResponse(e.to_string()))
    }

    #[cfg(not(feature = "web"))]
    pub async fn request(
        &self,
        _method: &str,
        _params: serde_json::Value,
    ) -> Result<serde_json::Value, WalletError> {
        Err(WalletError::ProviderMissing)
    }

    /// `eth_sendTransaction`, returning the transaction hash.
    pub async fn send_transaction(&self, tx: &CallRequest) -> Result<String, WalletError> {
        let hash = self
            .request("eth_sendTransaction", serde_json::json!([tx]))
            .await?;
        hash.as_str()
            .map(str::to_owned)
            .ok_or_else(|| invalid("transaction hash is not a string"))
    }
}

impl WalletProvider for InjectedWallet {
    async fn accounts(&self) -> Result<Vec<String>, WalletError> {
        let accounts = self.request("eth_accounts", serde_json::Value::Null).await?;
        serde_json::from_value(accounts).map_err(|e| WalletError::InvalidResponse(e.to_string()))
    }

    async fn request_accounts(&self) -> Result<Vec<String>, WalletError> {
        let accounts = self
            .request("eth_requestAccounts", serde_json::Value::Null)
            .await?;
        serde_json::from_value(accounts).map_err(|e| WalletError::InvalidResponse(e.to_string()))
    }

    async fn chain_id(&self) -> Result<u64, WalletError> {
        let chain_id = self.request("eth_chainId", serde_json::Value::Null).await?;
        let chain_id = chain_id
            .as_str()
            .ok_or_else(|| invalid("chain id is not a string"))?;
        parse_quantity(chain_id).map_err(|e| WalletError::InvalidResponse(e.to_string()))
    }
}

fn invalid(message: &str) -> WalletError {
    WalletError::InvalidResponse(message.to_string())
}

/// Maps a rejected provider promise onto [`WalletError`].
#[cfg(feature = "web")]
fn provider_error(err: JsValue) -> WalletError {
    use js_sys::Reflect;

    let code = Reflect::get(&err, &"code".into())
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = Reflect::get(&err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"));

    match code {
        Some(USER_REJECTED_CODE) => WalletError::Rejected,
        Some(code) => WalletError::Provider { code, message },
        None => WalletError::InvalidResponse(message),
    }
}
