use std::fmt;
use std::future::Future;

use tracing::{info, warn};

use crate::consts::{REQUIRED_CHAIN_ID, REQUIRED_NETWORK_NAME};
use crate::error::WalletError;

/// The EIP-1193 requests the client needs from an injected wallet.
pub trait WalletProvider {
    /// `eth_accounts`: accounts already authorized for this site.
    fn accounts(&self) -> impl Future<Output = Result<Vec<String>, WalletError>>;

    /// `eth_requestAccounts`: prompts the user for access.
    fn request_accounts(&self) -> impl Future<Output = Result<Vec<String>, WalletError>>;

    /// `eth_chainId`
    fn chain_id(&self) -> impl Future<Output = Result<u64, WalletError>>;
}

/// Messages surfaced to the user as banners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Alert {
    WalletMissing,
    WrongNetwork { expected: u64, actual: u64 },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alert::WalletMissing => write!(f, "Install MetaMask!"),
            Alert::WrongNetwork { actual, .. } => write!(
                f,
                "Please connect to {REQUIRED_NETWORK_NAME}! Your wallet is on chain {actual}."
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetworkStatus {
    Matches,
    Mismatch { expected: u64, actual: u64 },
    /// No wallet, or the wallet could not tell.
    Unknown,
}

impl NetworkStatus {
    pub fn alert(&self) -> Option<Alert> {
        match *self {
            NetworkStatus::Mismatch { expected, actual } => {
                Some(Alert::WrongNetwork { expected, actual })
            }
            _ => None,
        }
    }
}

/// First already-authorized account, if any. Never fails: a missing wallet or
/// a failed request is logged and treated as "not connected".
pub async fn check_existing_connection<W: WalletProvider>(wallet: Option<&W>) -> Option<String> {
    let Some(wallet) = wallet else {
        info!("no injected wallet found");
        return None;
    };
    match wallet.accounts().await {
        Ok(accounts) => match accounts.into_iter().next() {
            Some(account) => {
                info!(%account, "found authorized account");
                Some(account)
            }
            None => {
                info!("no authorized account found");
                None
            }
        },
        Err(e) => {
            warn!("eth_accounts failed: {e}");
            None
        }
    }
}

/// Prompts the wallet for access and returns the first account.
pub async fn request_connection<W: WalletProvider>(
    wallet: Option<&W>,
) -> Result<String, WalletError> {
    let wallet = wallet.ok_or(WalletError::ProviderMissing)?;
    let accounts = wallet.request_accounts().await?;
    let account = accounts
        .into_iter()
        .next()
        .ok_or_else(|| WalletError::InvalidResponse("no accounts returned".into()))?;
    info!(%account, "connected");
    Ok(account)
}

/// Compares the wallet's chain with [`REQUIRED_CHAIN_ID`]. Advisory only.
pub async fn verify_network<W: WalletProvider>(wallet: Option<&W>) -> NetworkStatus {
    let Some(wallet) = wallet else {
        return NetworkStatus::Unknown;
    };
    match wallet.chain_id().await {
        Ok(actual) if actual == REQUIRED_CHAIN_ID => NetworkStatus::Matches,
        Ok(actual) => {
            warn!(actual, expected = REQUIRED_CHAIN_ID, "wallet on wrong network");
            NetworkStatus::Mismatch {
                expected: REQUIRED_CHAIN_ID,
                actual,
            }
        }
        Err(e) => {
            warn!("eth_chainId failed: {e}");
            NetworkStatus::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::testing::FakeWallet;

    const ALICE: &str = "0x00000000000000000000000000000000000a11ce";

    #[tokio::test]
    async fn check_existing_connection__takes_first_account() {
        let wallet = FakeWallet::with_accounts(&[ALICE, "0xb0b"]);

        let account = check_existing_connection(Some(&wallet)).await;

        assert_eq!(account.as_deref(), Some(ALICE));
    }

    #[tokio::test]
    async fn check_existing_connection__swallows_failures() {
        let mut wallet = FakeWallet::with_accounts(&[ALICE]);
        wallet.accounts_error = Some(WalletError::InvalidResponse("boom".into()));

        assert_eq!(check_existing_connection(Some(&wallet)).await, None);
        assert_eq!(check_existing_connection::<FakeWallet>(None).await, None);
    }

    #[tokio::test]
    async fn request_connection__reports_missing_provider() {
        let result = request_connection::<FakeWallet>(None).await;

        assert_eq!(result, Err(WalletError::ProviderMissing));
    }

    #[tokio::test]
    async fn request_connection__propagates_rejection() {
        let mut wallet = FakeWallet::default();
        wallet.request_error = Some(WalletError::Rejected);

        assert_eq!(
            request_connection(Some(&wallet)).await,
            Err(WalletError::Rejected)
        );
    }

    #[tokio::test]
    async fn verify_network__flags_other_chains() {
        let mut wallet = FakeWallet::default();
        wallet.chain_id = 1;

        let status = verify_network(Some(&wallet)).await;

        assert_eq!(
            status,
            NetworkStatus::Mismatch {
                expected: REQUIRED_CHAIN_ID,
                actual: 1
            }
        );
        assert!(status.alert().is_some());
    }

    #[tokio::test]
    async fn verify_network__accepts_required_chain() {
        let wallet = FakeWallet::default();

        assert_eq!(verify_network(Some(&wallet)).await, NetworkStatus::Matches);
        assert_eq!(
            verify_network::<FakeWallet>(None).await,
            NetworkStatus::Unknown
        );
    }
}
