mod contract;
mod ethereum;
mod rpc;
mod timer;
mod use_attack_feed;

pub use contract::EvmGameContract;
pub use ethereum::InjectedWallet;
pub use timer::AppTimer;
pub use use_attack_feed::use_attack_feed;
