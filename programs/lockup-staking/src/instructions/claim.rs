use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{GLOBAL_CONFIG_SEED, STAKE_ACCOUNT_SEED};
use crate::errors::StakingError;
use crate::events::RewardsClaimed;
use crate::state::{GlobalConfig, StakeAccount};

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
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

    #[account(
        mut,
        address = global_config.vault @ StakingError::InvalidVault
    )]
    pub vault: Account<'info, TokenAccount>,

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    let config = &mut ctx.accounts.global_config;
    let stake_account = &mut ctx.accounts.stake_account;
    let clock = Clock::get()?;
    let rate_bps = config.annual_reward_rate_bps;

    let quoted = stake_account.claimable(clock.unix_timestamp, rate_bps);
    require!(quoted > 0, StakingError::NoRewardsToClaim);

    let rewards_to_claim = stake_account.take_reward(clock.unix_timestamp, rate_bps)?;
    debug_assert_eq!(rewards_to_claim, quoted);
    config.release_reward(rewards_to_claim)?;

    let mint = config.mint;
    let seeds = &[GLOBAL_CONFIG_SEED, mint.as_ref(), &[config.bump]];
    let signer_seeds = &[&seeds[..]];

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
    token::transfer(cpi_ctx, rewards_to_claim)?;

    emit!(RewardsClaimed {
        user: stake_account.owner,
        amount: rewards_to_claim,
        reward_reserve: config.reward_reserve,
        timestamp: clock.unix_timestamp,
    });

    msg!("Claimed {} tokens in rewards", rewards_to_claim);

    Ok(())
}
