use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::{GLOBAL_CONFIG_SEED, VAULT_SEED};
use crate::errors::StakingError;
use crate::events::LedgerInitialized;
use crate::state::GlobalConfig;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = GlobalConfig::SIZE,
        seeds = [GLOBAL_CONFIG_SEED, mint.key().as_ref()],
        bump
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// The token being staked
    pub mint: Account<'info, Mint>,

    /// Program-owned custody for principal and the reward reserve
    #[account(
        init,
        payer = owner,
        seeds = [VAULT_SEED, global_config.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = global_config
    )]
    pub vault: Account<'info, TokenAccount>,

    /// CHECK: Wallet that receives exit fees; only its key is stored
    pub fee_recipient: UncheckedAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    lockup_duration: i64,
    max_balance_whole_tokens: u64,
    annual_reward_rate_bps: u16,
    withdrawal_fee_bps: u16,
) -> Result<()> {
    require!(lockup_duration >= 0, StakingError::InvalidLockupDuration);
    require_keys_neq!(
        ctx.accounts.fee_recipient.key(),
        Pubkey::default(),
        StakingError::InvalidFeeRecipient
    );
    GlobalConfig::validate_fee(withdrawal_fee_bps)?;
    let max_balance_per_user =
        GlobalConfig::scaled_cap(max_balance_whole_tokens, ctx.accounts.mint.decimals)?;

    let config = &mut ctx.accounts.global_config;
    let clock = Clock::get()?;

    config.owner = ctx.accounts.owner.key();
    config.mint = ctx.accounts.mint.key();
    config.vault = ctx.accounts.vault.key();
    config.fee_recipient = ctx.accounts.fee_recipient.key();
    config.max_balance_per_user = max_balance_per_user;
    config.lockup_duration = lockup_duration;
    config.annual_reward_rate_bps = annual_reward_rate_bps;
    config.withdrawal_fee_bps = withdrawal_fee_bps;
    config.staking_started = false;
    config.paused = false;
    config.total_staked = 0;
    config.reward_reserve = 0;
    config.total_fees_collected = 0;
    config.total_rewards_paid = 0;
    config.staker_count = 0;
    config.created_at = clock.unix_timestamp;
    config.bump = ctx.bumps.global_config;
    config.vault_bump = ctx.bumps.vault;

    emit!(LedgerInitialized {
        config: config.key(),
        owner: config.owner,
        mint: config.mint,
        fee_recipient: config.fee_recipient,
        max_balance_per_user,
        lockup_duration,
        annual_reward_rate_bps,
        withdrawal_fee_bps,
        timestamp: clock.unix_timestamp,
    });

    msg!("Initialized staking ledger for mint: {}", config.mint);
    msg!("Owner: {}", config.owner);
    msg!(
        "Lockup: {}s, Cap: {}, Reward rate: {} bps, Exit fee: {} bps",
        lockup_duration,
        max_balance_per_user,
        annual_reward_rate_bps,
        withdrawal_fee_bps
    );

    Ok(())
}
