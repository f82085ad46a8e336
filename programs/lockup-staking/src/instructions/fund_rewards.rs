use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::GLOBAL_CONFIG_SEED;
use crate::errors::StakingError;
use crate::events::RewardsFunded;
use crate::state::GlobalConfig;

/// Permissionless top-up of the reward reserve
#[derive(Accounts)]
pub struct FundRewards<'info> {
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED, global_config.mint.as_ref()],
        bump = global_config.bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        constraint = funder_token_account.mint == global_config.mint @ StakingError::InvalidMint,
        constraint = funder_token_account.owner == funder.key() @ StakingError::Unauthorized
    )]
    pub funder_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        address = global_config.vault @ StakingError::InvalidVault
    )]
    pub vault: Account<'info, TokenAccount>,

    pub funder: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    config.fund_rewards(amount)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.funder.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    emit!(RewardsFunded {
        funder: ctx.accounts.funder.key(),
        amount,
        reward_reserve: config.reward_reserve,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Funded {} tokens as rewards", amount);
    msg!("Reward reserve: {}", config.reward_reserve);

    Ok(())
}
