pub mod use_chat;
pub mod use_config;
pub mod use_gig_board;
pub mod use_route;
pub mod use_wallet;

pub use use_chat::use_chat;
pub use use_config::{use_config, ConfigHandle};
pub use use_gig_board::use_gig_board;
pub use use_route::use_route;
pub use use_wallet::{use_wallet, WalletAction, WalletHandle, WalletStore};
