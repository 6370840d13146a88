use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::events::{ActivityKind, ActivityLogged};
use crate::state::{UserAccount, BPS_DENOMINATOR};

/// Credits `amount` points to a user and appends the matching activity
/// entry. `total_earned` moves only for `Earn` credits; referral bonuses,
/// commissions and refunds raise the spendable balance alone.
pub fn credit(
    user: &mut UserAccount,
    user_key: Pubkey,
    amount: u64,
    kind: ActivityKind,
    note: String,
    now: i64,
) -> Result<()> {
    user.balance = user
        .balance
        .checked_add(amount)
        .ok_or(RewardsError::ArithmeticOverflow)?;

    if kind == ActivityKind::Earn {
        user.total_earned = user
            .total_earned
            .checked_add(amount)
            .ok_or(RewardsError::ArithmeticOverflow)?;
    }

    emit!(ActivityLogged {
        user: user_key,
        kind,
        amount,
        note,
        timestamp: now,
    });

    Ok(())
}

/// Debits `amount` points from a user and appends the matching activity
/// entry. Fails with `InsufficientBalance` before touching anything when
/// the balance does not cover the amount.
pub fn debit(
    user: &mut UserAccount,
    user_key: Pubkey,
    amount: u64,
    note: String,
    now: i64,
) -> Result<()> {
    require!(amount <= user.balance, RewardsError::InsufficientBalance);

    user.balance = user
        .balance
        .checked_sub(amount)
        .ok_or(RewardsError::ArithmeticOverflow)?;

    emit!(ActivityLogged {
        user: user_key,
        kind: ActivityKind::Withdraw,
        amount,
        note,
        timestamp: now,
    });

    Ok(())
}

/// Referral commission on a base earn amount: floor(base * rate), with the
/// rate in basis points. Floor semantics match the rest of the platform's
/// integer math; a 1-point earn at 10% yields nothing.
pub fn commission_for(base: u64, rate_bps: u16) -> Result<u64> {
    let commission = (base as u128)
        .checked_mul(u128::from(rate_bps))
        .ok_or(RewardsError::ArithmeticOverflow)?
        .checked_div(u128::from(BPS_DENOMINATOR))
        .ok_or(RewardsError::ArithmeticOverflow)?;

    // Quotient fits: rate_bps never exceeds BPS_DENOMINATOR
    Ok(commission as u64)
}

/// Credits the referrer their commission on a referred user's earn.
///
/// Pays only the account the user linked at registration: any other
/// `referrer_key` fails with `ReferrerMismatch` before anything is
/// credited. A zero commission credits nothing and logs nothing. Returns
/// the amount credited.
pub fn apply_commission(
    referrer: &mut UserAccount,
    referrer_key: Pubkey,
    linked_referrer: Pubkey,
    base: u64,
    rate_bps: u16,
    now: i64,
) -> Result<u64> {
    require!(referrer_key == linked_referrer, RewardsError::ReferrerMismatch);

    let commission = commission_for(base, rate_bps)?;
    if commission == 0 {
        return Ok(0);
    }

    credit(
        referrer,
        referrer_key,
        commission,
        ActivityKind::Referral,
        format!("Earned {} points from referral commission", commission),
        now,
    )?;

    referrer.commission_earned = referrer
        .commission_earned
        .checked_add(commission)
        .ok_or(RewardsError::ArithmeticOverflow)?;

    Ok(commission)
}
