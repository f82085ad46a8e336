use anchor_lang::prelude::*;
use crate::constants::GLOBAL_CONFIG_SEED;
use crate::events::{OwnershipTransferred, PauseChanged, StakingStarted, WithdrawalFeeUpdated};
use crate::state::GlobalConfig;

/// Accounts shared by every owner-only instruction
#[derive(Accounts)]
pub struct AdminControl<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED, global_config.mint.as_ref()],
        bump = global_config.bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    pub owner: Signer<'info>,
}

pub fn start_staking_handler(ctx: Context<AdminControl>) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    config.ensure_owner(&ctx.accounts.owner.key())?;
    config.start_staking()?;

    emit!(StakingStarted {
        config: config.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Staking started");

    Ok(())
}

pub fn set_paused_handler(ctx: Context<AdminControl>, paused: bool) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    config.ensure_owner(&ctx.accounts.owner.key())?;
    if paused {
        config.pause()?;
    } else {
        config.unpause()?;
    }

    emit!(PauseChanged {
        config: config.key(),
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Paused: {}", paused);

    Ok(())
}

pub fn set_withdrawal_fee_handler(ctx: Context<AdminControl>, fee_bps: u16) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    config.ensure_owner(&ctx.accounts.owner.key())?;
    let old_fee_bps = config.set_withdrawal_fee(fee_bps)?;

    emit!(WithdrawalFeeUpdated {
        config: config.key(),
        old_fee_bps,
        new_fee_bps: fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Withdrawal fee: {} -> {} bps", old_fee_bps, fee_bps);

    Ok(())
}

pub fn transfer_ownership_handler(ctx: Context<AdminControl>, new_owner: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    config.ensure_owner(&ctx.accounts.owner.key())?;
    let previous_owner = config.transfer_ownership(new_owner)?;

    emit!(OwnershipTransferred {
        config: config.key(),
        previous_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });
    msg!("Ownership transferred to {}", new_owner);

    Ok(())
}
