// Test utilities for the lockup staking program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::types::{TransactionMetadata, TransactionResult};
use litesvm::LiteSVM;
use litesvm_token::{CreateAssociatedTokenAccount, CreateMint, MintTo};
use lockup_staking::errors::StakingError;
use lockup_staking::state::{GlobalConfig, StakeAccount};
use sha2::{Digest, Sha256};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(lockup_staking::ID.to_bytes());

pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;

// Built by `anchor build` at the workspace root
pub const PROGRAM_SO: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../target/deploy/lockup_staking.so"
);

// PDA Seeds
pub const GLOBAL_CONFIG: &[u8] = b"global-config";
pub const STAKE_ACCOUNT: &[u8] = b"stake-account";
pub const VAULT: &[u8] = b"vault";

// Ledger parameters
pub const DECIMALS: u8 = 6;
pub const DAY: i64 = 24 * 60 * 60;
pub const YEAR: i64 = 365 * DAY;
pub const LOCKUP_DURATION: i64 = 7 * DAY;
pub const MAX_BALANCE_WHOLE_TOKENS: u64 = 1_000;
pub const ANNUAL_REWARD_RATE_BPS: u16 = 500;
pub const WITHDRAWAL_FEE_BPS: u16 = 100;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = Sha256::digest(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

// Setup LiteSVM with the staking program, or None when it has not been built
pub fn setup_svm() -> Option<LiteSVM> {
    let Ok(program_bytes) = std::fs::read(PROGRAM_SO) else {
        println!("[SKIP] {} not found, run `anchor build` first", PROGRAM_SO);
        return None;
    };
    let mut svm = LiteSVM::new();
    svm.add_program(PROGRAM_ID, &program_bytes);
    Some(svm)
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn derive_config_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GLOBAL_CONFIG, mint.as_ref()], &PROGRAM_ID)
}

pub fn derive_vault_pda(config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT, config.as_ref()], &PROGRAM_ID)
}

pub fn derive_stake_account_pda(config: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[STAKE_ACCOUNT, config.as_ref(), user.as_ref()],
        &PROGRAM_ID,
    )
}

// Sign with the payer only and send; a fresh blockhash keeps repeated
// identical instructions from being rejected as duplicates
pub fn send(svm: &mut LiteSVM, ixs: &[Instruction], payer: &Keypair) -> TransactionResult {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        ixs,
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
}

/// Assert the transaction failed with the given program error
pub fn assert_staking_error(result: TransactionResult, error: StakingError) {
    let code = u32::from(error);
    let failed = result.expect_err("Transaction should fail");
    assert!(
        format!("{:?}", failed.err).contains(&format!("Custom({})", code)),
        "expected custom error {}, got {:?}\n{:#?}",
        code,
        failed.err,
        failed.meta.logs
    );
}

/// Decode a u64 view result; the runtime may drop trailing zero bytes
pub fn return_u64(meta: &TransactionMetadata) -> u64 {
    let data = &meta.return_data.data;
    let mut bytes = [0u8; 8];
    bytes[..data.len()].copy_from_slice(data);
    u64::from_le_bytes(bytes)
}

// SPL token account layout: mint (32) | owner (32) | amount (8) | ...
pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account = svm
        .get_account(token_account)
        .expect("Token account should exist");
    let mut amount = [0u8; 8];
    amount.copy_from_slice(&account.data[64..72]);
    u64::from_le_bytes(amount)
}

pub fn fetch_config(svm: &LiteSVM, config: &Pubkey) -> GlobalConfig {
    let account = svm.get_account(config).expect("Config should exist");
    GlobalConfig::try_deserialize(&mut account.data.as_slice())
        .expect("Config should deserialize")
}

pub fn fetch_stake_account(svm: &LiteSVM, stake_account: &Pubkey) -> StakeAccount {
    let account = svm
        .get_account(stake_account)
        .expect("Stake account should exist");
    StakeAccount::try_deserialize(&mut account.data.as_slice())
        .expect("Stake account should deserialize")
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

// ======================== INSTRUCTIONS ========================

pub fn build_initialize_ix(
    owner: &Pubkey,
    mint: &Pubkey,
    fee_recipient: &Pubkey,
    lockup_duration: i64,
    max_balance_whole_tokens: u64,
    annual_reward_rate_bps: u16,
    withdrawal_fee_bps: u16,
) -> Instruction {
    let (config, _) = derive_config_pda(mint);
    let (vault, _) = derive_vault_pda(&config);

    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(&lockup_duration.to_le_bytes());
    data.extend_from_slice(&max_balance_whole_tokens.to_le_bytes());
    data.extend_from_slice(&annual_reward_rate_bps.to_le_bytes());
    data.extend_from_slice(&withdrawal_fee_bps.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(*fee_recipient, false),
            AccountMeta::new(*owner, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// start_staking, pause, unpause, set_withdrawal_fee, transfer_ownership
pub fn build_admin_ix(method: &str, signer: &Pubkey, mint: &Pubkey, args: &[u8]) -> Instruction {
    let (config, _) = derive_config_pda(mint);

    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(args);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(*signer, true),
        ],
        data,
    }
}

pub fn build_open_stake_account_ix(user: &Pubkey, mint: &Pubkey) -> Instruction {
    let (config, _) = derive_config_pda(mint);
    let (stake_account, _) = derive_stake_account_pda(&config, user);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(stake_account, false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("open_stake_account").to_vec(),
    }
}

pub fn build_deposit_ix(
    user: &Pubkey,
    mint: &Pubkey,
    user_token_account: &Pubkey,
    amount: u64,
) -> Instruction {
    let (config, _) = derive_config_pda(mint);
    let (vault, _) = derive_vault_pda(&config);
    let (stake_account, _) = derive_stake_account_pda(&config, user);

    let mut data = anchor_discriminator("deposit").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new(stake_account, false),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new(vault, false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_withdraw_ix(
    user: &Pubkey,
    mint: &Pubkey,
    user_token_account: &Pubkey,
    fee_recipient_token_account: &Pubkey,
    amount: u64,
) -> Instruction {
    let (config, _) = derive_config_pda(mint);
    let (vault, _) = derive_vault_pda(&config);
    let (stake_account, _) = derive_stake_account_pda(&config, user);

    let mut data = anchor_discriminator("withdraw").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new(stake_account, false),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new(*fee_recipient_token_account, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

pub fn build_claim_rewards_ix(user: &Pubkey, mint: &Pubkey, user_token_account: &Pubkey) -> Instruction {
    let (config, _) = derive_config_pda(mint);
    let (vault, _) = derive_vault_pda(&config);
    let (stake_account, _) = derive_stake_account_pda(&config, user);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new(stake_account, false),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: anchor_discriminator("claim_rewards").to_vec(),
    }
}

pub fn build_fund_rewards_ix(
    funder: &Pubkey,
    mint: &Pubkey,
    funder_token_account: &Pubkey,
    amount: u64,
) -> Instruction {
    let (config, _) = derive_config_pda(mint);
    let (vault, _) = derive_vault_pda(&config);

    let mut data = anchor_discriminator("fund_rewards").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(config, false),
            AccountMeta::new(*funder_token_account, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(*funder, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// claimable / balance_of; an address that never opened a stake account
// passes the program id in the optional slot
pub fn build_stake_view_ix(method: &str, mint: &Pubkey, target: &Pubkey, opened: bool) -> Instruction {
    let (config, _) = derive_config_pda(mint);
    let stake_account = if opened {
        derive_stake_account_pda(&config, target).0
    } else {
        PROGRAM_ID
    };

    let mut data = anchor_discriminator(method).to_vec();
    data.extend_from_slice(target.as_ref());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(config, false),
            AccountMeta::new_readonly(stake_account, false),
        ],
        data,
    }
}

// ======================== FIXTURES ========================

pub struct Ledger {
    pub owner: Keypair,
    pub mint: Pubkey,
    pub config: Pubkey,
    pub vault: Pubkey,
    pub fee_recipient: Pubkey,
    pub fee_recipient_token_account: Pubkey,
}

/// Mint, initialized ledger, fee recipient token account; staking started
pub fn setup_ledger(svm: &mut LiteSVM) -> Ledger {
    let owner = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);
    let fee_recipient = Keypair::new().pubkey();

    let mint = CreateMint::new(svm, &owner)
        .authority(&owner.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Mint creation should succeed");

    let fee_recipient_token_account = CreateAssociatedTokenAccount::new(svm, &owner, &mint)
        .owner(&fee_recipient)
        .send()
        .expect("Failed to create fee recipient ATA");

    let ix = build_initialize_ix(
        &owner.pubkey(),
        &mint,
        &fee_recipient,
        LOCKUP_DURATION,
        MAX_BALANCE_WHOLE_TOKENS,
        ANNUAL_REWARD_RATE_BPS,
        WITHDRAWAL_FEE_BPS,
    );
    send(svm, &[ix], &owner).expect("Ledger initialization should succeed");

    let ix = build_admin_ix("start_staking", &owner.pubkey(), &mint, &[]);
    send(svm, &[ix], &owner).expect("start_staking should succeed");

    let (config, _) = derive_config_pda(&mint);
    let (vault, _) = derive_vault_pda(&config);

    Ledger {
        owner,
        mint,
        config,
        vault,
        fee_recipient,
        fee_recipient_token_account,
    }
}

/// Funded user with `tokens` in their ATA and an opened stake account
pub fn setup_staker(svm: &mut LiteSVM, ledger: &Ledger, tokens: u64) -> (Keypair, Pubkey) {
    let user = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);

    let user_token_account = CreateAssociatedTokenAccount::new(svm, &ledger.owner, &ledger.mint)
        .owner(&user.pubkey())
        .send()
        .expect("Failed to create user ATA");

    MintTo::new(svm, &ledger.owner, &ledger.mint, &user_token_account, tokens)
        .owner(&ledger.owner)
        .send()
        .expect("Minting should succeed");

    let ix = build_open_stake_account_ix(&user.pubkey(), &ledger.mint);
    send(svm, &[ix], &user).expect("Opening the stake account should succeed");

    (user, user_token_account)
}
