use anchor_lang::prelude::*;
use crate::constants::{GLOBAL_CONFIG_SEED, STAKE_ACCOUNT_SEED};
use crate::state::{GlobalConfig, StakeAccount};

/// Creates the caller's stake account with an empty lock queue.
/// `deposit` grows it as deposit chunks are added.
#[derive(Accounts)]
pub struct OpenStakeAccount<'info> {
    #[account(
        seeds = [GLOBAL_CONFIG_SEED, global_config.mint.as_ref()],
        bump = global_config.bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        init,
        payer = user,
        space = StakeAccount::space(0),
        seeds = [STAKE_ACCOUNT_SEED, global_config.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<OpenStakeAccount>) -> Result<()> {
    let stake_account = &mut ctx.accounts.stake_account;

    stake_account.owner = ctx.accounts.user.key();
    stake_account.config = ctx.accounts.global_config.key();
    stake_account.last_settlement = Clock::get()?.unix_timestamp;
    stake_account.bump = ctx.bumps.stake_account;

    msg!("Opened stake account for {}", stake_account.owner);

    Ok(())
}
