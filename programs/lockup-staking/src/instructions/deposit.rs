use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{GLOBAL_CONFIG_SEED, STAKE_ACCOUNT_SEED};
use crate::errors::StakingError;
use crate::events::Deposited;
use crate::state::{GlobalConfig, StakeAccount};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED, global_config.mint.as_ref()],
        bump = global_config.bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Room for one more lock entry; a deposit adds at most one
    #[account(
        mut,
        seeds = [STAKE_ACCOUNT_SEED, global_config.key().as_ref(), user.key().as_ref()],
        bump = stake_account.bump,
        constraint = stake_account.owner == user.key() @ StakingError::Unauthorized,
        realloc = StakeAccount::space(stake_account.lock_queue.len() + 1),
        realloc::payer = user,
        realloc::zero = false
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        constraint = user_token_account.mint == global_config.mint @ StakingError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = global_config.vault @ StakingError::InvalidVault
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    let stake_account = &mut ctx.accounts.stake_account;
    let clock = Clock::get()?;

    let is_new_staker = stake_account.principal == 0;
    stake_account.apply_deposit(config, amount, clock.unix_timestamp)?;
    config.record_deposit(amount, is_new_staker)?;

    // Pull tokens from user into the vault
    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.user.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    emit!(Deposited {
        user: stake_account.owner,
        amount,
        principal: stake_account.principal,
        total_staked: config.total_staked,
        timestamp: clock.unix_timestamp,
    });

    msg!("Deposited {} tokens", amount);
    msg!("Principal: {}", stake_account.principal);

    Ok(())
}
