use anchor_lang::prelude::*;

use crate::constants::{ANCHOR_DISCRIMINATOR, BPS_DENOM};
use crate::errors::StakingError;

/// Ledger-wide configuration and totals
/// PDA: ["global-config", mint]
#[account]
#[derive(Default)]
pub struct GlobalConfig {
    /// Holder of the admin rights
    pub owner: Pubkey,

    /// Staked token mint, fixed at creation
    pub mint: Pubkey,

    /// Token account holding principal and the reward reserve.
    /// Its authority is this config PDA.
    pub vault: Pubkey,

    /// Wallet credited with exit fees
    pub fee_recipient: Pubkey,

    /// Cap on a single account's principal, in base units
    pub max_balance_per_user: u64,

    /// Seconds a deposit stays fee-liable
    pub lockup_duration: i64,

    /// Annual reward rate in basis points
    pub annual_reward_rate_bps: u16,

    /// Exit fee in basis points, owner-mutable
    pub withdrawal_fee_bps: u16,

    /// Deposits are rejected until the owner starts staking
    pub staking_started: bool,

    /// Deposits are rejected while paused
    pub paused: bool,

    /// Sum of all principals
    pub total_staked: u64,

    /// Vault tokens set aside for reward payouts
    pub reward_reserve: u64,

    /// Exit fees collected lifetime
    pub total_fees_collected: u64,

    /// Rewards paid out lifetime
    pub total_rewards_paid: u64,

    /// Accounts with non-zero principal
    pub staker_count: u32,

    /// Creation timestamp
    pub created_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Bump seed for the vault PDA
    pub vault_bump: u8,
}

impl GlobalConfig {
    pub const SIZE: usize = ANCHOR_DISCRIMINATOR +
        32 + // owner
        32 + // mint
        32 + // vault
        32 + // fee_recipient
        8 +  // max_balance_per_user
        8 +  // lockup_duration
        2 +  // annual_reward_rate_bps
        2 +  // withdrawal_fee_bps
        1 +  // staking_started
        1 +  // paused
        8 +  // total_staked
        8 +  // reward_reserve
        8 +  // total_fees_collected
        8 +  // total_rewards_paid
        4 +  // staker_count
        8 +  // created_at
        1 +  // bump
        1;   // vault_bump

    /// Convert a cap given in whole tokens to base units of the mint
    pub fn scaled_cap(whole_tokens: u64, decimals: u8) -> Result<u64> {
        10u64
            .checked_pow(decimals as u32)
            .and_then(|unit| whole_tokens.checked_mul(unit))
            .ok_or_else(|| error!(StakingError::MathOverflow))
    }

    pub fn validate_fee(fee_bps: u16) -> Result<()> {
        require!(fee_bps as u64 <= BPS_DENOM, StakingError::FeeTooHigh);
        Ok(())
    }

    pub fn ensure_owner(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *signer, StakingError::Unauthorized);
        Ok(())
    }

    pub fn ensure_deposits_open(&self) -> Result<()> {
        require!(self.staking_started, StakingError::StakingNotStarted);
        require!(!self.paused, StakingError::Paused);
        Ok(())
    }

    /// One-way switch; a second call is rejected
    pub fn start_staking(&mut self) -> Result<()> {
        require!(!self.staking_started, StakingError::StakingAlreadyStarted);
        self.staking_started = true;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        require!(!self.paused, StakingError::AlreadyPaused);
        self.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self) -> Result<()> {
        require!(self.paused, StakingError::NotPaused);
        self.paused = false;
        Ok(())
    }

    /// Returns the previous rate
    pub fn set_withdrawal_fee(&mut self, fee_bps: u16) -> Result<u16> {
        Self::validate_fee(fee_bps)?;
        let old = self.withdrawal_fee_bps;
        self.withdrawal_fee_bps = fee_bps;
        Ok(old)
    }

    /// Returns the previous owner
    pub fn transfer_ownership(&mut self, new_owner: Pubkey) -> Result<Pubkey> {
        require_keys_neq!(new_owner, Pubkey::default(), StakingError::InvalidOwner);
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    pub fn record_deposit(&mut self, amount: u64, new_staker: bool) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        if new_staker {
            self.staker_count = self.staker_count.saturating_add(1);
        }
        Ok(())
    }

    pub fn record_withdrawal(&mut self, amount: u64, fee: u64, exited: bool) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(StakingError::MathOverflow)?;
        self.total_fees_collected = self.total_fees_collected.saturating_add(fee);
        if exited {
            self.staker_count = self.staker_count.saturating_sub(1);
        }
        Ok(())
    }

    pub fn fund_rewards(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, StakingError::InvalidAmount);
        self.reward_reserve = self
            .reward_reserve
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Draw a payout from the reward reserve; principal is never touched
    pub fn release_reward(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.reward_reserve,
            StakingError::InsufficientRewardReserve
        );
        self.reward_reserve -= amount;
        self.total_rewards_paid = self
            .total_rewards_paid
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }
}
