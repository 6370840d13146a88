use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::events::WithdrawalRequested;
use crate::ledger;
use crate::state::{RewardsConfig, UserAccount, WithdrawalRequest, WithdrawalStatus};

/// Submits a withdrawal request and debits the amount up front
///
/// Preconditions run before any mutation: the amount must clear the
/// configured minimum and fit the balance. Approval later changes only
/// the request status; the points already left the balance here.
pub fn request_withdrawal(
    ctx: Context<RequestWithdrawal>,
    method: String,
    account_info: String,
    amount: u64,
) -> Result<()> {
    let method = method.trim().to_string();
    let account_info = account_info.trim().to_string();
    require!(
        !method.is_empty() && method.len() <= WithdrawalRequest::MAX_METHOD_LEN,
        RewardsError::InvalidWithdrawalDetails
    );
    require!(
        !account_info.is_empty() && account_info.len() <= WithdrawalRequest::MAX_ACCOUNT_INFO_LEN,
        RewardsError::InvalidWithdrawalDetails
    );

    let now = Clock::get()?.unix_timestamp;
    require!(
        amount >= ctx.accounts.config.min_withdrawal,
        RewardsError::BelowMinimumWithdrawal
    );

    let user_key = ctx.accounts.user.key();
    let user = &mut ctx.accounts.user;

    ledger::debit(
        user,
        user_key,
        amount,
        format!("Withdrawal request: {} points via {}", amount, method),
        now,
    )?;

    let index = user.withdrawal_count;
    user.withdrawal_count = index
        .checked_add(1)
        .ok_or(RewardsError::ArithmeticOverflow)?;

    let withdrawal = &mut ctx.accounts.withdrawal;
    withdrawal.user = user_key;
    withdrawal.method = method.clone();
    withdrawal.account_info = account_info;
    withdrawal.amount = amount;
    withdrawal.status = WithdrawalStatus::Pending;
    withdrawal.requested_at = now;
    withdrawal.processed_at = None;
    withdrawal.index = index;
    withdrawal.bump = ctx.bumps.withdrawal;

    emit!(WithdrawalRequested {
        user: user_key,
        withdrawal: withdrawal.key(),
        amount,
        method,
        index,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RequestWithdrawal<'info> {
    /// The user requesting the withdrawal
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The user's rewards account
    #[account(
        mut,
        seeds = [UserAccount::SEED_PREFIX, authority.key().as_ref()],
        bump = user.bump,
    )]
    pub user: Account<'info, UserAccount>,

    /// Global configuration
    #[account(
        seeds = [RewardsConfig::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, RewardsConfig>,

    /// The new request, sequenced by the user's withdrawal count
    #[account(
        init,
        payer = authority,
        space = 8 + WithdrawalRequest::INIT_SPACE,
        seeds = [
            WithdrawalRequest::SEED_PREFIX,
            user.key().as_ref(),
            &user.withdrawal_count.to_le_bytes(),
        ],
        bump,
    )]
    pub withdrawal: Account<'info, WithdrawalRequest>,

    pub system_program: Program<'info, System>,
}
