use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::events::{ActivityKind, AdWatched, QuotaWindowRolled};
use crate::ledger;
use crate::state::{utc_day_index, RewardsConfig, UserAccount};

/// Credits a watched ad and routes referral commission
///
/// The daily window rolls first if the UTC day changed and the quota gate
/// runs before any mutation. Commission follows the earn credit and is
/// skipped when the user has no linked referrer account supplied.
pub fn watch_ad(ctx: Context<WatchAd>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let today = utc_day_index(now);

    let config = &ctx.accounts.config;
    let points = config.points_per_ad;
    let rate_bps = config.referral_commission_bps;
    let daily_limit = config.daily_ad_limit;

    let user_key = ctx.accounts.user.key();
    let user = &mut ctx.accounts.user;

    if user.roll_daily_window(today) {
        emit!(QuotaWindowRolled {
            user: user_key,
            day: today,
            timestamp: now,
        });
    }

    require!(user.can_watch(daily_limit), RewardsError::QuotaExceeded);
    user.record_watch()?;

    ledger::credit(
        user,
        user_key,
        points,
        ActivityKind::Earn,
        format!("Watched ad and earned {} points", points),
        now,
    )?;

    let commission = match user.referred_by {
        Some(linked_referrer) => match ctx.accounts.referrer.as_mut() {
            Some(referrer) => {
                let referrer_key = referrer.key();
                ledger::apply_commission(
                    referrer,
                    referrer_key,
                    linked_referrer,
                    points,
                    rate_bps,
                    now,
                )?
            }
            None => {
                msg!("referrer account not supplied, skipping commission");
                0
            }
        },
        None => 0,
    };

    emit!(AdWatched {
        user: user_key,
        points,
        commission,
        watched_today: user.ads_watched_today,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WatchAd<'info> {
    /// The user who watched the ad
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

    /// The linked referrer's rewards account; commission is skipped when
    /// it is not supplied
    #[account(mut)]
    pub referrer: Option<Account<'info, UserAccount>>,
}
