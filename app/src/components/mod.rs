mod alert_banner;
mod arena;
mod connect_wallet;
mod layout;
mod loading_indicator;
mod select_character;

pub use alert_banner::AlertBanners;
pub use arena::Arena;
pub use connect_wallet::ConnectWallet;
pub use layout::Layout;
pub use loading_indicator::LoadingIndicator;
pub use select_character::SelectCharacter;
