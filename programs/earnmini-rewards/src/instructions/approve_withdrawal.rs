use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::events::WithdrawalApproved;
use crate::state::{RewardsConfig, WithdrawalRequest, WithdrawalStatus};

/// Marks a pending withdrawal as paid out
///
/// No balance moves here; the debit happened at submission. Only a
/// request still pending can settle.
pub fn approve_withdrawal(ctx: Context<ApproveWithdrawal>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let withdrawal = &mut ctx.accounts.withdrawal;
    withdrawal.settle(WithdrawalStatus::Completed, now)?;

    emit!(WithdrawalApproved {
        withdrawal: withdrawal.key(),
        user: withdrawal.user,
        amount: withdrawal.amount,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ApproveWithdrawal<'info> {
    /// The admin settling the request
    pub admin: Signer<'info>,

    /// Global configuration carrying the admin authority
    #[account(
        seeds = [RewardsConfig::SEED_PREFIX],
        bump = config.bump,
        has_one = admin @ RewardsError::Unauthorized,
    )]
    pub config: Account<'info, RewardsConfig>,

    /// The request being settled
    #[account(mut)]
    pub withdrawal: Account<'info, WithdrawalRequest>,
}
