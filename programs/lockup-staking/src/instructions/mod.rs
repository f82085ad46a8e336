pub mod initialize;
pub mod admin;
pub mod open_stake_account;
pub mod deposit;
pub mod withdraw;
pub mod claim;
pub mod fund_rewards;
pub mod views;

pub use initialize::*;
pub use admin::*;
pub use open_stake_account::*;
pub use deposit::*;
pub use withdraw::*;
pub use claim::*;
pub use fund_rewards::*;
pub use views::*;
