use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{GLOBAL_CONFIG_SEED, STAKE_ACCOUNT_SEED};
use crate::errors::StakingError;
use crate::events::Withdrawn;
use crate::state::{GlobalConfig, StakeAccount};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED, global_config.mint.as_ref()],
        bump = global_config.bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [STAKE_ACCOUNT_SEED, global_config.key().as_ref(), user.key().as_ref()],
        bump = stake_account.bump,
        constraint = stake_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub stake_account: Account<'info, StakeAccount>,

    #[account(
        mut,
        constraint = user_token_account.mint == global_config.mint @ StakingError::InvalidMint,
        constraint = user_token_account.owner == user.key() @ StakingError::Unauthorized
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Exit fees land here
    #[account(
        mut,
        constraint = fee_recipient_token_account.mint == global_config.mint @ StakingError::InvalidMint,
        constraint = fee_recipient_token_account.owner == global_config.fee_recipient
            @ StakingError::InvalidFeeRecipient
    )]
    pub fee_recipient_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = global_config.vault @ StakingError::InvalidVault
    )]
    pub vault: Account<'info, TokenAccount>,

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    let stake_account = &mut ctx.accounts.stake_account;
    let clock = Clock::get()?;

    let quote = stake_account.apply_withdraw(config, amount, clock.unix_timestamp)?;
    config.record_withdrawal(amount, quote.fee, stake_account.principal == 0)?;

    let payout = amount
        .checked_sub(quote.fee)
        .ok_or(StakingError::MathOverflow)?;

    // Vault transfers are signed by the config PDA
    let mint = config.mint;
    let seeds = &[GLOBAL_CONFIG_SEED, mint.as_ref(), &[config.bump]];
    let signer_seeds = &[&seeds[..]];

    if payout > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.user_token_account.to_account_info(),
            authority: config.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );
        token::transfer(cpi_ctx, payout)?;
    }

    if quote.fee > 0 {
        let cpi_accounts = Transfer {
            from: ctx.accounts.vault.to_account_info(),
            to: ctx.accounts.fee_recipient_token_account.to_account_info(),
            authority: config.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );
        token::transfer(cpi_ctx, quote.fee)?;
    }

    emit!(Withdrawn {
        user: stake_account.owner,
        amount,
        fee: quote.fee,
        fee_liable: quote.fee_liable,
        remaining_principal: stake_account.principal,
        timestamp: clock.unix_timestamp,
    });

    msg!("Withdrew {} tokens, fee {}", amount, quote.fee);
    msg!("Remaining: {}", stake_account.principal);

    Ok(())
}

/// Withdraw the caller's entire principal
pub fn withdraw_all_handler(ctx: Context<Withdraw>) -> Result<()> {
    let principal = ctx.accounts.stake_account.principal;
    require!(principal > 0, StakingError::InsufficientStakedBalance);

    handler(ctx, principal)
}
