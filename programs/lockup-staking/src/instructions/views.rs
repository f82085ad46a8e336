use anchor_lang::prelude::*;
use crate::constants::{GLOBAL_CONFIG_SEED, STAKE_ACCOUNT_SEED};
use crate::errors::StakingError;
use crate::state::{GlobalConfig, StakeAccount};

/// Read-only access to one address's position.
/// The stake account is optional so unknown addresses read as zero.
#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct StakeView<'info> {
    #[account(
        seeds = [GLOBAL_CONFIG_SEED, global_config.mint.as_ref()],
        bump = global_config.bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        seeds = [STAKE_ACCOUNT_SEED, global_config.key().as_ref(), target.as_ref()],
        bump
    )]
    pub stake_account: Option<Account<'info, StakeAccount>>,
}

#[derive(Accounts)]
pub struct ConfigView<'info> {
    #[account(
        seeds = [GLOBAL_CONFIG_SEED, global_config.mint.as_ref()],
        bump = global_config.bump
    )]
    pub global_config: Account<'info, GlobalConfig>,
}

pub fn claimable_handler(ctx: Context<StakeView>, _target: Pubkey) -> Result<u64> {
    let Some(stake_account) = &ctx.accounts.stake_account else {
        return Ok(0);
    };
    let now = Clock::get()?.unix_timestamp;

    Ok(stake_account.claimable(now, ctx.accounts.global_config.annual_reward_rate_bps))
}

pub fn balance_of_handler(ctx: Context<StakeView>, _target: Pubkey) -> Result<u64> {
    Ok(ctx
        .accounts
        .stake_account
        .as_ref()
        .map_or(0, |stake_account| stake_account.principal))
}

/// Exit fee `target` would pay for withdrawing `amount` right now
pub fn withdrawal_quote_handler(
    ctx: Context<StakeView>,
    _target: Pubkey,
    amount: u64,
) -> Result<u64> {
    let config = &ctx.accounts.global_config;
    require!(amount > 0, StakingError::InvalidAmount);

    let Some(stake_account) = &ctx.accounts.stake_account else {
        return err!(StakingError::InsufficientStakedBalance);
    };
    require!(
        amount <= stake_account.principal,
        StakingError::InsufficientStakedBalance
    );

    let now = Clock::get()?.unix_timestamp;
    let quote = stake_account.lock_queue.quote(
        amount,
        now,
        config.lockup_duration,
        config.withdrawal_fee_bps,
    )?;

    Ok(quote.fee)
}

pub fn withdrawal_fee_handler(ctx: Context<ConfigView>) -> Result<u16> {
    Ok(ctx.accounts.global_config.withdrawal_fee_bps)
}

pub fn owner_handler(ctx: Context<ConfigView>) -> Result<Pubkey> {
    Ok(ctx.accounts.global_config.owner)
}
