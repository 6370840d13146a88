use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::events::{ActivityKind, ActivityLogged, UserCreated};
use crate::state::{utc_day_index, UserAccount};

/// Opens the per-user rewards account at first session start
///
/// Derives the user's referral code from their wallet and starts the
/// first daily quota window. The welcome entry seeds the activity feed
/// shown in the app.
pub fn create_user(ctx: Context<CreateUser>, display_name: String) -> Result<()> {
    let display_name = display_name.trim().to_string();
    require!(
        !display_name.is_empty() && display_name.len() <= UserAccount::MAX_NAME_LEN,
        RewardsError::InvalidDisplayName
    );

    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();

    let user = &mut ctx.accounts.user;
    user.authority = authority;
    user.display_name = display_name;
    user.referral_code = UserAccount::derive_referral_code(&authority);
    user.balance = 0;
    user.total_earned = 0;
    user.ads_watched_today = 0;
    user.ads_watched_total = 0;
    user.last_ad_reset_day = utc_day_index(now);
    user.referred_by = None;
    user.total_referrals = 0;
    user.commission_earned = 0;
    user.withdrawal_count = 0;
    user.joined_at = now;
    user.bump = ctx.bumps.user;

    emit!(UserCreated {
        user: user.key(),
        authority,
        referral_code: user.referral_code.clone(),
        timestamp: now,
    });

    emit!(ActivityLogged {
        user: user.key(),
        kind: ActivityKind::Info,
        amount: 0,
        note: "Welcome to EarnMini Bot! Start watching ads to earn points.".to_string(),
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateUser<'info> {
    /// The wallet opening its rewards account
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The user's rewards account
    #[account(
        init,
        payer = authority,
        space = 8 + UserAccount::INIT_SPACE,
        seeds = [UserAccount::SEED_PREFIX, authority.key().as_ref()],
        bump,
    )]
    pub user: Account<'info, UserAccount>,

    pub system_program: Program<'info, System>,
}
