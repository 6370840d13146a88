use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::events::{ActivityKind, WithdrawalRejected};
use crate::ledger;
use crate::state::{RewardsConfig, UserAccount, WithdrawalRequest, WithdrawalStatus};

/// Rejects a pending withdrawal and refunds the debited amount
///
/// The refund goes through the ledger so the credit lands with its
/// activity entry in the same transaction as the status change. A reject
/// after a submit is balance-neutral for the user.
pub fn reject_withdrawal(ctx: Context<RejectWithdrawal>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let withdrawal = &mut ctx.accounts.withdrawal;
    withdrawal.settle(WithdrawalStatus::Rejected, now)?;
    let amount = withdrawal.amount;

    let user_key = ctx.accounts.user.key();
    let user = &mut ctx.accounts.user;

    // Refund raises the balance only, the amount was never an earn
    ledger::credit(
        user,
        user_key,
        amount,
        ActivityKind::Withdraw,
        format!("Withdrawal rejected, {} points refunded", amount),
        now,
    )?;

    emit!(WithdrawalRejected {
        withdrawal: ctx.accounts.withdrawal.key(),
        user: user_key,
        amount,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RejectWithdrawal<'info> {
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
    #[account(mut, has_one = user)]
    pub withdrawal: Account<'info, WithdrawalRequest>,

    /// The rewards account receiving the refund
    #[account(mut)]
    pub user: Account<'info, UserAccount>,
}
