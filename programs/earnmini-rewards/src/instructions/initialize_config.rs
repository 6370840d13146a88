use anchor_lang::prelude::*;

use crate::events::ConfigInitialized;
use crate::state::RewardsConfig;

/// Creates the global configuration and records the admin authority
///
/// The signer becomes the admin; settings updates and withdrawal
/// settlements must carry this signature from here on.
pub fn initialize_config(
    ctx: Context<InitializeConfig>,
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
    config.admin = ctx.accounts.admin.key();
    config.daily_ad_limit = daily_ad_limit;
    config.points_per_ad = points_per_ad;
    config.referral_bonus = referral_bonus;
    config.min_withdrawal = min_withdrawal;
    config.referral_commission_bps = referral_commission_bps;
    config.bump = ctx.bumps.config;

    emit!(ConfigInitialized {
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
pub struct InitializeConfig<'info> {
    /// The admin creating the configuration
    #[account(mut)]
    pub admin: Signer<'info>,

    /// Global configuration singleton
    #[account(
        init,
        payer = admin,
        space = 8 + RewardsConfig::INIT_SPACE,
        seeds = [RewardsConfig::SEED_PREFIX],
        bump,
    )]
    pub config: Account<'info, RewardsConfig>,

    pub system_program: Program<'info, System>,
}
