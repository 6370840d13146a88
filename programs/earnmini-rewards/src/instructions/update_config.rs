use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::events::ConfigUpdated;
use crate::state::RewardsConfig;

/// Updates the global settings
///
/// New limits and rates apply from the next instruction that reads the
/// configuration; counters users already accrued are not rewritten.
pub fn update_config(
    ctx: Context<UpdateConfig>,
    daily_ad_limit: u16,
    points_per_ad: u64,
    referral_bonus: u64,
    min_withdrawal: u64,
    referral_commission_bps: u16,
) -> Result<()> {
    RewardsConfig::validate(
        daily_ad_limit,
        points_per_ad,
        min_withdrawal,
        referral_commission_bps,
    )?;

    let config = &mut ctx.accounts.config;
    config.daily_ad_limit = daily_ad_limit;
    config.points_per_ad = points_per_ad;
    config.referral_bonus = referral_bonus;
    config.min_withdrawal = min_withdrawal;
    config.referral_commission_bps = referral_commission_bps;

    emit!(ConfigUpdated {
        admin: config.admin,
        daily_ad_limit,
        points_per_ad,
        referral_bonus,
        min_withdrawal,
        referral_commission_bps,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// The admin recorded in the configuration
    pub admin: Signer<'info>,

    /// Global configuration singleton
    #[account(
        mut,
        seeds = [RewardsConfig::SEED_PREFIX],
        bump = config.bump,
        has_one = admin @ RewardsError::Unauthorized,
    )]
    pub config: Account<'info, RewardsConfig>,
}
