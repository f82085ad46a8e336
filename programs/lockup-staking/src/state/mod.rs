pub mod global_config;
pub mod lock_queue;
pub mod stake_account;

pub use global_config::*;
pub use lock_queue::*;
pub use stake_account::*;
