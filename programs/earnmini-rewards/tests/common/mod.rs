// Common builders shared by the scenario tests
use anchor_lang::prelude::*;
use earnmini_rewards::error::RewardsError;
use earnmini_rewards::events::ActivityKind;
use earnmini_rewards::ledger;
use earnmini_rewards::state::{utc_day_index, RewardsConfig, UserAccount};

/// Configuration with the defaults the app launched with
pub fn default_config(admin: Pubkey) -> RewardsConfig {
    RewardsConfig {
        admin,
        daily_ad_limit: 15,
        points_per_ad: 1,
        referral_bonus: 5,
        min_withdrawal: 1_000,
        referral_commission_bps: 1_000,
        bump: 255,
    }
}

/// Fresh user account as `create_user` initializes it
pub fn new_user(authority: Pubkey, now: i64) -> UserAccount {
    UserAccount {
        authority,
        display_name: "Ad Watcher".to_string(),
        referral_code: UserAccount::derive_referral_code(&authority),
        balance: 0,
        total_earned: 0,
        ads_watched_today: 0,
        ads_watched_total: 0,
        last_ad_reset_day: utc_day_index(now),
        referred_by: None,
        total_referrals: 0,
        commission_earned: 0,
        withdrawal_count: 0,
        joined_at: now,
        bump: 255,
    }
}

/// One ad watch as `watch_ad` sequences it, without the commission leg.
/// The window rolls before the quota gate and the earn credit lands last.
pub fn watch_once(
    user: &mut UserAccount,
    user_key: Pubkey,
    config: &RewardsConfig,
    now: i64,
) -> Result<()> {
    user.roll_daily_window(utc_day_index(now));
    if !user.can_watch(config.daily_ad_limit) {
        return Err(RewardsError::QuotaExceeded.into());
    }
    user.record_watch()?;
    ledger::credit(
        user,
        user_key,
        config.points_per_ad,
        ActivityKind::Earn,
        format!("Watched ad and earned {} points", config.points_per_ad),
        now,
    )
}
