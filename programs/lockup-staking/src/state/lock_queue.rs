use anchor_lang::prelude::*;

use crate::constants::BPS_DENOM;
use crate::errors::StakingError;

/// One deposit chunk still tracked for exit-fee purposes
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockEntry {
    /// Un-withdrawn part of the deposit
    pub amount: u64,

    /// Ledger timestamp of the deposit
    pub deposited_at: i64,
}

impl LockEntry {
    pub const SIZE: usize = 8 + // amount
        8; // deposited_at

    /// A matured entry can be withdrawn without an exit fee
    pub fn is_matured(&self, now: i64, lockup_duration: i64) -> bool {
        now.saturating_sub(self.deposited_at) >= lockup_duration
    }
}

/// Outcome of running a withdrawal through the lock queue
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeQuote {
    /// Exit fee charged on the withdrawal
    pub fee: u64,

    /// Portion drawn from entries still inside their lockup window
    pub fee_liable: u64,

    /// Portion drawn from matured entries
    pub fee_exempt: u64,
}

/// Deposit chunks of one account, oldest first.
///
/// Amounts always sum to the account's principal. Deposit timestamps are
/// non-decreasing, so every matured entry sits in front of every locked one.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LockQueue {
    pub entries: Vec<LockEntry>,
}

impl LockQueue {
    /// Serialized size of a queue holding `entries` chunks
    pub const fn space(entries: usize) -> usize {
        4 + // vec length prefix
            entries * LockEntry::SIZE
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all tracked amounts
    pub fn total(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |acc, entry| {
            acc.checked_add(entry.amount)
                .ok_or_else(|| error!(StakingError::MathOverflow))
        })
    }

    /// Append a deposit made at `now`.
    ///
    /// Matured entries at the front are coalesced first, and a deposit
    /// sharing the tail's timestamp is folded into it, so the queue grows
    /// by at most one entry per call.
    pub fn push(&mut self, amount: u64, now: i64, lockup_duration: i64) -> Result<()> {
        self.compact(now, lockup_duration)?;

        if let Some(tail) = self.entries.last_mut() {
            if tail.deposited_at == now {
                tail.amount = tail
                    .amount
                    .checked_add(amount)
                    .ok_or(StakingError::MathOverflow)?;
                return Ok(());
            }
        }

        self.entries.push(LockEntry {
            amount,
            deposited_at: now,
        });

        Ok(())
    }

    /// Merge the leading run of matured entries into the oldest of them.
    /// All of them are fee-exempt, so the merge never changes a fee.
    pub fn compact(&mut self, now: i64, lockup_duration: i64) -> Result<()> {
        let matured = self
            .entries
            .iter()
            .take_while(|entry| entry.is_matured(now, lockup_duration))
            .count();

        if matured < 2 {
            return Ok(());
        }

        let merged = self.entries[..matured]
            .iter()
            .try_fold(0u64, |acc, entry| acc.checked_add(entry.amount))
            .ok_or(StakingError::MathOverflow)?;

        self.entries[0].amount = merged;
        self.entries.drain(1..matured);

        Ok(())
    }

    /// Fee that withdrawing `amount` at `now` would incur, without touching
    /// the queue.
    pub fn quote(
        &self,
        amount: u64,
        now: i64,
        lockup_duration: i64,
        fee_bps: u16,
    ) -> Result<FeeQuote> {
        let mut remaining = amount;
        let mut fee_liable = 0u64;
        let mut fee_exempt = 0u64;

        for entry in &self.entries {
            if remaining == 0 {
                break;
            }

            let taken = remaining.min(entry.amount);
            if entry.is_matured(now, lockup_duration) {
                fee_exempt = fee_exempt
                    .checked_add(taken)
                    .ok_or(StakingError::MathOverflow)?;
            } else {
                fee_liable = fee_liable
                    .checked_add(taken)
                    .ok_or(StakingError::MathOverflow)?;
            }
            remaining -= taken;
        }

        // Withdrawals are bounded by principal upstream.
        require!(remaining == 0, StakingError::LockQueueInvariant);

        Ok(FeeQuote {
            fee: fee_on(fee_liable, fee_bps)?,
            fee_liable,
            fee_exempt,
        })
    }

    /// Consume `amount` oldest-first and return the fee it incurs.
    ///
    /// Fully consumed entries are dropped; a partially consumed entry keeps
    /// its deposit timestamp. On error the queue is left untouched.
    pub fn consume(
        &mut self,
        amount: u64,
        now: i64,
        lockup_duration: i64,
        fee_bps: u16,
    ) -> Result<FeeQuote> {
        let quote = self.quote(amount, now, lockup_duration, fee_bps)?;

        let mut remaining = amount;
        for entry in self.entries.iter_mut() {
            if remaining == 0 {
                break;
            }
            let taken = remaining.min(entry.amount);
            entry.amount -= taken;
            remaining -= taken;
        }
        self.entries.retain(|entry| entry.amount > 0);

        Ok(quote)
    }
}

/// floor(amount * fee_bps / BPS_DENOM)
pub fn fee_on(amount: u64, fee_bps: u16) -> Result<u64> {
    let fee = (amount as u128)
        .checked_mul(fee_bps as u128)
        .ok_or(StakingError::MathOverflow)?
        / BPS_DENOM as u128;

    u64::try_from(fee).map_err(|_| error!(StakingError::MathOverflow))
}
