use anchor_lang::prelude::*;

#[constant]
pub const GLOBAL_CONFIG_SEED: &[u8] = b"global-config";

#[constant]
pub const STAKE_ACCOUNT_SEED: &[u8] = b"stake-account";

#[constant]
pub const VAULT_SEED: &[u8] = b"vault";

/// Denominator for `withdrawal_fee_bps`.
pub const BPS_DENOM: u64 = 10_000;

/// Denominator for `annual_reward_rate_bps`.
pub const RATE_DENOM: u64 = 10_000;

pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

pub const ANCHOR_DISCRIMINATOR: usize = 8;
