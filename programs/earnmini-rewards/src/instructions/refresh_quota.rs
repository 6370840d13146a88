use anchor_lang::prelude::*;

use crate::events::QuotaWindowRolled;
use crate::state::{utc_day_index, UserAccount};

/// Rolls the user's daily quota window at session start
///
/// Idempotent: repeated calls within one UTC day leave the account
/// unchanged.
pub fn refresh_quota(ctx: Context<RefreshQuota>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let today = utc_day_index(now);
    let user_key = ctx.accounts.user.key();

    let user = &mut ctx.accounts.user;
    if user.roll_daily_window(today) {
        emit!(QuotaWindowRolled {
            user: user_key,
            day: today,
            timestamp: now,
        });
    } else {
        msg!("quota window already current");
    }

    Ok(())
}

#[derive(Accounts)]
pub struct RefreshQuota<'info> {
    /// The user refreshing their daily window
    pub authority: Signer<'info>,

    /// The user's rewards account
    #[account(
        mut,
        seeds = [UserAccount::SEED_PREFIX, authority.key().as_ref()],
        bump = user.bump,
    )]
    pub user: Account<'info, UserAccount>,
}
