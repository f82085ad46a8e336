use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("8JHYYJPRXbBcCzPdsnyKcvxUFwmWXE553xbmHznghWHD");

/// Lockup Staking Program
///
/// Single-token staking ledger. Deposits earn a fixed annual reward rate,
/// pro rata to the seconds they stay staked. Withdrawing principal that is
/// still inside its lockup window costs an exit fee paid to the fee
/// recipient; older deposits are withdrawn first.
#[program]
pub mod lockup_staking {
    use super::*;

    /// Create the ledger for a mint (one-time setup, signer becomes owner)
    ///
    /// # Arguments
    /// * `lockup_duration` - Seconds a deposit stays fee-liable
    /// * `max_balance_whole_tokens` - Per-account cap in whole tokens,
    ///   scaled by the mint's decimals
    /// * `annual_reward_rate_bps` - Annual reward rate (500 = 5%)
    /// * `withdrawal_fee_bps` - Initial exit fee (100 = 1%, max 10000)
    pub fn initialize(
        ctx: Context<Initialize>,
        lockup_duration: i64,
        max_balance_whole_tokens: u64,
        annual_reward_rate_bps: u16,
        withdrawal_fee_bps: u16,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            lockup_duration,
            max_balance_whole_tokens,
            annual_reward_rate_bps,
            withdrawal_fee_bps,
        )
    }

    /// Open the ledger for deposits (owner only, once)
    pub fn start_staking(ctx: Context<AdminControl>) -> Result<()> {
        instructions::admin::start_staking_handler(ctx)
    }

    /// Block new deposits (owner only). Withdrawals and claims stay open.
    pub fn pause(ctx: Context<AdminControl>) -> Result<()> {
        instructions::admin::set_paused_handler(ctx, true)
    }

    /// Re-open deposits (owner only)
    pub fn unpause(ctx: Context<AdminControl>) -> Result<()> {
        instructions::admin::set_paused_handler(ctx, false)
    }

    /// Update the exit fee (owner only)
    pub fn set_withdrawal_fee(ctx: Context<AdminControl>, fee_bps: u16) -> Result<()> {
        instructions::admin::set_withdrawal_fee_handler(ctx, fee_bps)
    }

    /// Hand admin rights to another key (owner only)
    pub fn transfer_ownership(ctx: Context<AdminControl>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership_handler(ctx, new_owner)
    }

    /// Create the caller's stake account; required once before the first deposit
    pub fn open_stake_account(ctx: Context<OpenStakeAccount>) -> Result<()> {
        instructions::open_stake_account::handler(ctx)
    }

    /// Stake tokens
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        instructions::deposit::handler(ctx, amount)
    }

    /// Withdraw principal, minus the exit fee on still-locked deposits
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Withdraw the whole principal; banked rewards stay claimable
    pub fn withdraw_all(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::withdraw_all_handler(ctx)
    }

    /// Pay out accrued rewards from the reward reserve
    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Add tokens to the reward reserve (permissionless)
    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards::handler(ctx, amount)
    }

    /// Reward `target` could claim right now
    pub fn claimable(ctx: Context<StakeView>, target: Pubkey) -> Result<u64> {
        instructions::views::claimable_handler(ctx, target)
    }

    /// Principal currently staked by `target`
    pub fn balance_of(ctx: Context<StakeView>, target: Pubkey) -> Result<u64> {
        instructions::views::balance_of_handler(ctx, target)
    }

    /// Exit fee `target` would pay to withdraw `amount` right now
    pub fn withdrawal_quote(ctx: Context<StakeView>, target: Pubkey, amount: u64) -> Result<u64> {
        instructions::views::withdrawal_quote_handler(ctx, target, amount)
    }

    /// Current exit fee in basis points
    pub fn withdrawal_fee(ctx: Context<ConfigView>) -> Result<u16> {
        instructions::views::withdrawal_fee_handler(ctx)
    }

    /// Current owner
    pub fn owner(ctx: Context<ConfigView>) -> Result<Pubkey> {
        instructions::views::owner_handler(ctx)
    }
}
