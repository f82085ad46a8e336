use anchor_lang::prelude::*;

/// Emitted once when the ledger is created
#[event]
pub struct LedgerInitialized {
    pub config: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub fee_recipient: Pubkey,
    pub max_balance_per_user: u64,
    pub lockup_duration: i64,
    pub annual_reward_rate_bps: u16,
    pub withdrawal_fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct StakingStarted {
    pub config: Pubkey,
    pub timestamp: i64,
}

/// Emitted on pause and unpause
#[event]
pub struct PauseChanged {
    pub config: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalFeeUpdated {
    pub config: Pubkey,
    pub old_fee_bps: u16,
    pub new_fee_bps: u16,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferred {
    pub config: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a user deposits into the ledger
#[event]
pub struct Deposited {
    pub user: Pubkey,
    pub amount: u64,
    pub principal: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

/// Emitted when a user withdraws principal
#[event]
pub struct Withdrawn {
    pub user: Pubkey,
    pub amount: u64,
    pub fee: u64,
    pub fee_liable: u64,
    pub remaining_principal: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsClaimed {
    pub user: Pubkey,
    pub amount: u64,
    pub reward_reserve: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub reward_reserve: u64,
    pub timestamp: i64,
}
