use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod ledger;
pub mod state;

use instructions::*;

declare_id!("57JYoWVdwfq98bpLDabcqXKGcRyz9pxEPeMUxuPvb74x");

/// EarnMini Rewards Program
///
/// On-chain core of the EarnMini "watch ads, earn points" app:
/// - Per-user point accounts with a daily ad quota on a UTC window
/// - Balance credits/debits, each paired with an activity entry
/// - One-level referrals: signup bonus plus per-ad commission
/// - Withdrawal requests settled by the admin as completed or rejected
///
/// # Security Considerations
///
/// Commission is only ever credited to the referrer stored in the earning
/// user's account: `ledger::apply_commission` checks the supplied account
/// against `user.referred_by` and fails with `ReferrerMismatch`, so a
/// caller cannot route commission to an arbitrary account. Instructions
/// that change settings or settle withdrawals validate the signer against
/// `config.admin`.
///
/// See `ledger.rs` for the referrer match and `approve_withdrawal.rs` /
/// `reject_withdrawal.rs` for the admin gate.
#[program]
pub mod earnmini_rewards {
    use super::*;

    /// Create the global configuration
    ///
    /// The signer becomes the admin authority. Called once per deployment.
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        daily_ad_limit: u16,
        points_per_ad: u64,
        referral_bonus: u64,
        min_withdrawal: u64,
        referral_commission_bps: u16,
    ) -> Result<()> {
        instructions::initialize_config::initialize_config(
            ctx,
            daily_ad_limit,
            points_per_ad,
            referral_bonus,
            min_withdrawal,
            referral_commission_bps,
        )
    }

    /// Update the global settings
    ///
    /// Only the admin recorded in the configuration can call this.
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        daily_ad_limit: u16,
        points_per_ad: u64,
        referral_bonus: u64,
        min_withdrawal: u64,
        referral_commission_bps: u16,
    ) -> Result<()> {
        instructions::update_config::update_config(
            ctx,
            daily_ad_limit,
            points_per_ad,
            referral_bonus,
            min_withdrawal,
            referral_commission_bps,
        )
    }

    /// Open a rewards account for the signing wallet
    ///
    /// Each wallet can only have one rewards account.
    pub fn create_user(ctx: Context<CreateUser>, display_name: String) -> Result<()> {
        instructions::create_user::create_user(ctx, display_name)
    }

    /// Link the signing user to their referrer and pay the signup bonus
    ///
    /// At most once per user; self-referral is rejected.
    pub fn register_referral(ctx: Context<RegisterReferral>) -> Result<()> {
        instructions::register_referral::register_referral(ctx)
    }

    /// Credit a watched ad
    ///
    /// Enforces the daily quota, credits the points and pays referral
    /// commission when the user is linked to a referrer.
    pub fn watch_ad(ctx: Context<WatchAd>) -> Result<()> {
        instructions::watch_ad::watch_ad(ctx)
    }

    /// Roll the daily quota window if the UTC day changed
    ///
    /// Idempotent within a day; typically called at session start.
    pub fn refresh_quota(ctx: Context<RefreshQuota>) -> Result<()> {
        instructions::refresh_quota::refresh_quota(ctx)
    }

    /// Submit a withdrawal request
    ///
    /// Debits the amount immediately and creates a pending request.
    pub fn request_withdrawal(
        ctx: Context<RequestWithdrawal>,
        method: String,
        account_info: String,
        amount: u64,
    ) -> Result<()> {
        instructions::request_withdrawal::request_withdrawal(ctx, method, account_info, amount)
    }

    /// Approve a pending withdrawal
    ///
    /// Admin only. The debit happened at submission, so no balance moves.
    pub fn approve_withdrawal(ctx: Context<ApproveWithdrawal>) -> Result<()> {
        instructions::approve_withdrawal::approve_withdrawal(ctx)
    }

    /// Reject a pending withdrawal and refund the amount
    ///
    /// Admin only. The refund credit is paired with an activity entry.
    pub fn reject_withdrawal(ctx: Context<RejectWithdrawal>) -> Result<()> {
        instructions::reject_withdrawal::reject_withdrawal(ctx)
    }
}
