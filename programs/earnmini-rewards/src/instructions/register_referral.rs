use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::events::{ActivityKind, ReferralRegistered};
use crate::ledger;
use crate::state::{ReferralRecord, RewardsConfig, UserAccount};

/// Links a new user to their referrer and pays the signup bonus
///
/// Invoked by the signup flow when the launch parameter carried a
/// referral code; the client resolves the code to the referrer's rewards
/// account and passes it here. A code that resolves to no account is
/// simply never submitted. Registration happens at most once per user:
/// the record PDA is seeded by the referred user and the account rejects
/// a second referrer.
pub fn register_referral(ctx: Context<RegisterReferral>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let user_key = ctx.accounts.user.key();
    let referrer_key = ctx.accounts.referrer.key();
    let bonus = ctx.accounts.config.referral_bonus;

    let user = &mut ctx.accounts.user;
    user.link_referrer(user_key, referrer_key)?;

    let referrer = &mut ctx.accounts.referrer;
    referrer.total_referrals = referrer
        .total_referrals
        .checked_add(1)
        .ok_or(RewardsError::ArithmeticOverflow)?;

    // Signup bonus raises the referrer's balance but not their lifetime
    // ad earnings
    ledger::credit(
        referrer,
        referrer_key,
        bonus,
        ActivityKind::Referral,
        format!("New referral! Earned {} points", bonus),
        now,
    )?;

    let referral = &mut ctx.accounts.referral;
    referral.referrer = referrer_key;
    referral.referred_user = user_key;
    referral.bonus_awarded = bonus;
    referral.timestamp = now;
    referral.bump = ctx.bumps.referral;

    emit!(ReferralRegistered {
        referrer: referrer_key,
        referred_user: user_key,
        bonus_awarded: bonus,
        timestamp: now,
    });

    msg!("Referral registered: {} referred by {}", user_key, referrer_key);

    Ok(())
}

#[derive(Accounts)]
pub struct RegisterReferral<'info> {
    /// The referred user registering their referrer
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The referred user's rewards account
    #[account(
        mut,
        seeds = [UserAccount::SEED_PREFIX, authority.key().as_ref()],
        bump = user.bump,
        constraint = user.referred_by.is_none() @ RewardsError::AlreadyReferred,
    )]
    pub user: Account<'info, UserAccount>,

    /// The referrer's rewards account, resolved from the referral code
    #[account(mut)]
    pub referrer: Account<'info, UserAccount>,

    /// Global configuration
    #[account(
        seeds = [RewardsConfig::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, RewardsConfig>,

    /// Referral record, one per referred user
    #[account(
        init,
        payer = authority,
        space = 8 + ReferralRecord::INIT_SPACE,
        seeds = [ReferralRecord::SEED_PREFIX, user.key().as_ref()],
        bump,
    )]
    pub referral: Account<'info, ReferralRecord>,

    pub system_program: Program<'info, System>,
}
