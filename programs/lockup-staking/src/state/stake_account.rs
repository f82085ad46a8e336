use anchor_lang::prelude::*;

use crate::constants::{ANCHOR_DISCRIMINATOR, RATE_DENOM, SECONDS_PER_YEAR};
use crate::errors::StakingError;
use crate::state::{FeeQuote, GlobalConfig, LockQueue};

/// Individual user's position in the ledger
/// PDA: ["stake-account", config, owner]
#[account]
#[derive(Default)]
pub struct StakeAccount {
    /// Owner of this stake account
    pub owner: Pubkey,

    /// Ledger this stake belongs to
    pub config: Pubkey,

    /// Currently staked amount
    pub principal: u64,

    /// Settled reward not yet claimed
    pub accrued_reward: u64,

    /// Timestamp of the last reward settlement
    pub last_settlement: i64,

    /// Open deposit chunks, oldest first
    pub lock_queue: LockQueue,

    /// Rewards paid out over the account's lifetime
    pub total_claimed: u64,

    /// Exit fees paid over the account's lifetime
    pub total_fees_paid: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl StakeAccount {
    /// Account size with `entries` open deposit chunks.
    /// The account is created empty and grown by `deposit`.
    pub const fn space(entries: usize) -> usize {
        ANCHOR_DISCRIMINATOR +
            32 + // owner
            32 + // config
            8 +  // principal
            8 +  // accrued_reward
            8 +  // last_settlement
            LockQueue::space(entries) +
            8 +  // total_claimed
            8 +  // total_fees_paid
            1 // bump
    }

    /// Reward earned since the last settlement:
    /// principal * rate_bps * elapsed / (RATE_DENOM * SECONDS_PER_YEAR)
    ///
    /// Saturates at `u64::MAX` instead of failing, so reward math can never
    /// block a principal change.
    pub fn pending_reward(&self, now: i64, rate_bps: u16) -> u64 {
        if self.principal == 0 || now <= self.last_settlement {
            return 0;
        }
        let elapsed = now.saturating_sub(self.last_settlement) as u128;

        let reward = (self.principal as u128)
            .saturating_mul(rate_bps as u128)
            .saturating_mul(elapsed)
            / (RATE_DENOM as u128 * SECONDS_PER_YEAR as u128);

        u64::try_from(reward).unwrap_or(u64::MAX)
    }

    /// Banked reward plus what has accrued since, without settling
    pub fn claimable(&self, now: i64, rate_bps: u16) -> u64 {
        self.accrued_reward
            .saturating_add(self.pending_reward(now, rate_bps))
    }

    /// Bank the reward accrued on the current principal up to `now`.
    /// Must run before every principal change.
    pub fn settle(&mut self, now: i64, rate_bps: u16) -> u64 {
        let delta = self.pending_reward(now, rate_bps);
        self.accrued_reward = self.accrued_reward.saturating_add(delta);

        if now > self.last_settlement {
            self.last_settlement = now;
        }

        delta
    }

    /// Credit a deposit. Every check runs before any field changes.
    pub fn apply_deposit(&mut self, config: &GlobalConfig, amount: u64, now: i64) -> Result<()> {
        config.ensure_deposits_open()?;
        require!(amount > 0, StakingError::InvalidAmount);

        let principal = self
            .principal
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        require!(
            principal <= config.max_balance_per_user,
            StakingError::BalanceCapExceeded
        );

        let mut lock_queue = self.lock_queue.clone();
        lock_queue.push(amount, now, config.lockup_duration)?;

        self.settle(now, config.annual_reward_rate_bps);
        self.principal = principal;
        self.lock_queue = lock_queue;

        Ok(())
    }

    /// Debit a withdrawal and return the exit fee it incurs
    pub fn apply_withdraw(
        &mut self,
        config: &GlobalConfig,
        amount: u64,
        now: i64,
    ) -> Result<FeeQuote> {
        require!(amount > 0, StakingError::InvalidAmount);
        require!(
            amount <= self.principal,
            StakingError::InsufficientStakedBalance
        );

        let mut lock_queue = self.lock_queue.clone();
        let quote = lock_queue.consume(
            amount,
            now,
            config.lockup_duration,
            config.withdrawal_fee_bps,
        )?;

        self.settle(now, config.annual_reward_rate_bps);
        self.principal -= amount;
        self.lock_queue = lock_queue;
        self.total_fees_paid = self.total_fees_paid.saturating_add(quote.fee);

        Ok(quote)
    }

    /// Settle, then zero the banked reward and return it
    pub fn take_reward(&mut self, now: i64, rate_bps: u16) -> Result<u64> {
        self.settle(now, rate_bps);

        let reward = self.accrued_reward;
        require!(reward > 0, StakingError::NoRewardsToClaim);

        self.accrued_reward = 0;
        self.total_claimed = self.total_claimed.saturating_add(reward);

        Ok(reward)
    }
}
