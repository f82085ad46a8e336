use anchor_lang::prelude::*;

#[error_code]
pub enum StakingError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("New owner cannot be the default pubkey")]
    InvalidOwner,

    #[msg("Staking has not started")]
    StakingNotStarted,

    #[msg("Staking has already started")]
    StakingAlreadyStarted,

    #[msg("Staking is paused")]
    Paused,

    #[msg("Staking is already paused")]
    AlreadyPaused,

    #[msg("Staking is not paused")]
    NotPaused,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Balance cap exceeded")]
    BalanceCapExceeded,

    #[msg("Insufficient staked balance")]
    InsufficientStakedBalance,

    #[msg("No rewards to claim")]
    NoRewardsToClaim,

    #[msg("Insufficient reward reserve")]
    InsufficientRewardReserve,

    #[msg("Withdrawal fee exceeds 10000 basis points")]
    FeeTooHigh,

    #[msg("Lockup duration cannot be negative")]
    InvalidLockupDuration,

    #[msg("Token account does not hold the staked mint")]
    InvalidMint,

    #[msg("Fee recipient does not match configuration")]
    InvalidFeeRecipient,

    #[msg("Vault does not match configuration")]
    InvalidVault,

    #[msg("Arithmetic overflow")]
    MathOverflow,

    #[msg("Lock queue does not cover the withdrawn amount")]
    LockQueueInvariant,
}
