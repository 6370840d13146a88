use anchor_lang::prelude::*;

use crate::error::RewardsError;

/// Seconds in one UTC calendar day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Denominator for basis-point rates (10_000 = 100%)
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Day index of a unix timestamp, counted from the epoch in UTC.
///
/// Every daily-window comparison in the program goes through this one
/// definition, so client clocks and display time zones can never shift
/// the reset boundary.
pub fn utc_day_index(unix_ts: i64) -> i64 {
    unix_ts.div_euclid(SECONDS_PER_DAY)
}

/// Per-user rewards account: point balance, daily ad quota and referral
/// standing, all owned by the user's wallet
#[account]
#[derive(InitSpace)]
pub struct UserAccount {
    /// Wallet that owns this account
    pub authority: Pubkey,
    /// Display name captured at signup
    #[max_len(64)]
    pub display_name: String,
    /// Code other users can sign up with to become this user's referrals
    #[max_len(12)]
    pub referral_code: String,
    /// Spendable point balance
    pub balance: u64,
    /// Lifetime points earned from watching ads, never decreases
    pub total_earned: u64,
    /// Ads watched in the current UTC day
    pub ads_watched_today: u16,
    /// Lifetime ads watched, never decreases
    pub ads_watched_total: u64,
    /// UTC day index the daily counters were last reset on
    pub last_ad_reset_day: i64,
    /// User account of the referrer, set at most once at registration
    pub referred_by: Option<Pubkey>,
    /// Number of users referred by this account
    pub total_referrals: u32,
    /// Lifetime commission points earned from referred users
    pub commission_earned: u64,
    /// Withdrawal requests ever submitted; seeds the next request PDA
    pub withdrawal_count: u64,
    /// Timestamp of account creation
    pub joined_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

/// Global configuration for limits, rates and the admin authority
#[account]
#[derive(InitSpace)]
pub struct RewardsConfig {
    /// Admin authority allowed to update settings and settle withdrawals
    pub admin: Pubkey,
    /// Maximum ads a user may watch per UTC day
    pub daily_ad_limit: u16,
    /// Points credited per watched ad
    pub points_per_ad: u64,
    /// Points credited to the referrer when a referred user registers
    pub referral_bonus: u64,
    /// Minimum amount of points per withdrawal request
    pub min_withdrawal: u64,
    /// Referral commission in basis points (e.g. 1000 = 10%)
    pub referral_commission_bps: u16,
    /// PDA bump seed
    pub bump: u8,
}

/// A withdrawal request moving through admin settlement
#[account]
#[derive(InitSpace)]
pub struct WithdrawalRequest {
    /// User account this request belongs to
    pub user: Pubkey,
    /// Payout method chosen by the user
    #[max_len(16)]
    pub method: String,
    /// Payout destination details for the chosen method
    #[max_len(64)]
    pub account_info: String,
    /// Amount debited from the user at submission
    pub amount: u64,
    /// Lifecycle status
    pub status: WithdrawalStatus,
    /// Timestamp of submission
    pub requested_at: i64,
    /// Timestamp of admin settlement
    pub processed_at: Option<i64>,
    /// Position in the user's withdrawal history, part of the PDA seeds
    pub index: u64,
    /// PDA bump seed
    pub bump: u8,
}

/// Record of a successful referral, created at most once per referred user
#[account]
#[derive(InitSpace)]
pub struct ReferralRecord {
    /// Referrer's user account
    pub referrer: Pubkey,
    /// Referred user's account
    pub referred_user: Pubkey,
    /// Signup bonus credited to the referrer at registration
    pub bonus_awarded: u64,
    /// Timestamp of registration
    pub timestamp: i64,
    /// PDA bump seed
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum WithdrawalStatus {
    Pending,
    Completed,
    Rejected,
}

impl UserAccount {
    pub const SEED_PREFIX: &'static [u8] = b"user";
    pub const MAX_NAME_LEN: usize = 64;
    /// Base58 characters of the authority key used in the referral code
    pub const REFERRAL_SUFFIX_LEN: usize = 6;

    /// Referral code for a wallet: "EM" plus the last characters of the
    /// base58-encoded key. Deterministic, so the code never needs its own
    /// uniqueness bookkeeping.
    pub fn derive_referral_code(authority: &Pubkey) -> String {
        let encoded = authority.to_string();
        let suffix = &encoded[encoded.len() - Self::REFERRAL_SUFFIX_LEN..];
        format!("EM{}", suffix)
    }

    /// Rolls the daily quota window when the UTC day has changed.
    ///
    /// Idempotent within a calendar day: calling again with the same day
    /// index leaves the account untouched. Returns whether the window
    /// rolled.
    pub fn roll_daily_window(&mut self, today: i64) -> bool {
        if self.last_ad_reset_day == today {
            return false;
        }
        self.ads_watched_today = 0;
        self.last_ad_reset_day = today;
        true
    }

    /// True iff the user may watch another ad in the current window
    pub fn can_watch(&self, daily_limit: u16) -> bool {
        self.ads_watched_today < daily_limit
    }

    /// Counts one watched ad against the daily window and lifetime total.
    /// Callers must have checked `can_watch` first.
    pub fn record_watch(&mut self) -> Result<()> {
        self.ads_watched_today = self
            .ads_watched_today
            .checked_add(1)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        self.ads_watched_total = self
            .ads_watched_total
            .checked_add(1)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Links this account to its referrer. Both keys are rewards-account
    /// PDAs, so equal keys mean the wallet referred itself.
    ///
    /// The link is write-once: a second referrer fails with
    /// `AlreadyReferred` and the first link stays in place.
    pub fn link_referrer(&mut self, user_key: Pubkey, referrer_key: Pubkey) -> Result<()> {
        require!(user_key != referrer_key, RewardsError::SelfReferral);
        require!(self.referred_by.is_none(), RewardsError::AlreadyReferred);
        self.referred_by = Some(referrer_key);
        Ok(())
    }
}

impl RewardsConfig {
    pub const SEED_PREFIX: &'static [u8] = b"config";

    /// Bounds shared by `initialize_config` and `update_config`
    pub fn validate(
        daily_ad_limit: u16,
        points_per_ad: u64,
        min_withdrawal: u64,
        referral_commission_bps: u16,
    ) -> Result<()> {
        require!(daily_ad_limit > 0, RewardsError::InvalidConfig);
        require!(points_per_ad > 0, RewardsError::InvalidConfig);
        require!(min_withdrawal > 0, RewardsError::InvalidConfig);
        require!(
            u64::from(referral_commission_bps) <= BPS_DENOMINATOR,
            RewardsError::InvalidCommissionRate
        );
        Ok(())
    }
}

impl WithdrawalRequest {
    pub const SEED_PREFIX: &'static [u8] = b"withdrawal";
    pub const MAX_METHOD_LEN: usize = 16;
    pub const MAX_ACCOUNT_INFO_LEN: usize = 64;

    /// Settles a pending request with the admin's verdict.
    ///
    /// A request settles exactly once; any further transition attempt
    /// fails with `InvalidStateTransition` and changes nothing.
    pub fn settle(&mut self, verdict: WithdrawalStatus, now: i64) -> Result<()> {
        require!(
            self.status == WithdrawalStatus::Pending,
            RewardsError::InvalidStateTransition
        );
        require!(
            verdict != WithdrawalStatus::Pending,
            RewardsError::InvalidStateTransition
        );
        self.status = verdict;
        self.processed_at = Some(now);
        Ok(())
    }
}

impl ReferralRecord {
    pub const SEED_PREFIX: &'static [u8] = b"referral";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(authority: Pubkey) -> UserAccount {
        UserAccount {
            authority,
            display_name: "Test User".to_string(),
            referral_code: UserAccount::derive_referral_code(&authority),
            balance: 0,
            total_earned: 0,
            ads_watched_today: 0,
            ads_watched_total: 0,
            last_ad_reset_day: 0,
            referred_by: None,
            total_referrals: 0,
            commission_earned: 0,
            withdrawal_count: 0,
            joined_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn referral_code_is_prefixed_key_suffix() {
        let authority = Pubkey::new_unique();
        let code = UserAccount::derive_referral_code(&authority);

        let encoded = authority.to_string();
        assert!(code.starts_with("EM"));
        assert_eq!(code.len(), 2 + UserAccount::REFERRAL_SUFFIX_LEN);
        assert!(encoded.ends_with(&code[2..]));

        // Same wallet always derives the same code
        assert_eq!(code, UserAccount::derive_referral_code(&authority));
    }

    #[test]
    fn day_index_is_utc_midnight_aligned() {
        // 2024-01-01T00:00:00Z
        let midnight = 1_704_067_200i64;
        let day = utc_day_index(midnight);

        assert_eq!(utc_day_index(midnight - 1), day - 1);
        assert_eq!(utc_day_index(midnight + SECONDS_PER_DAY - 1), day);
        assert_eq!(utc_day_index(midnight + SECONDS_PER_DAY), day + 1);
    }

    #[test]
    fn window_roll_is_idempotent_within_a_day() {
        let mut user = test_user(Pubkey::new_unique());
        user.ads_watched_today = 7;
        user.last_ad_reset_day = 100;

        assert!(user.roll_daily_window(101));
        assert_eq!(user.ads_watched_today, 0);
        assert_eq!(user.last_ad_reset_day, 101);

        // Second call on the same day changes nothing
        user.ads_watched_today = 3;
        assert!(!user.roll_daily_window(101));
        assert_eq!(user.ads_watched_today, 3);
        assert_eq!(user.last_ad_reset_day, 101);
    }

    #[test]
    fn watch_gate_closes_at_the_limit() {
        let mut user = test_user(Pubkey::new_unique());
        let limit = 15u16;

        for _ in 0..limit {
            assert!(user.can_watch(limit));
            user.record_watch().unwrap();
        }

        assert_eq!(user.ads_watched_today, limit);
        assert_eq!(user.ads_watched_total, u64::from(limit));
        assert!(!user.can_watch(limit));
    }

    #[test]
    fn lifetime_watch_counter_survives_window_roll() {
        let mut user = test_user(Pubkey::new_unique());
        user.record_watch().unwrap();
        user.record_watch().unwrap();

        user.roll_daily_window(user.last_ad_reset_day + 1);
        assert_eq!(user.ads_watched_today, 0);
        assert_eq!(user.ads_watched_total, 2);
    }

    #[test]
    fn referral_link_rejects_self_referral() {
        let mut user = test_user(Pubkey::new_unique());
        let user_key = Pubkey::new_unique();

        let err = user.link_referrer(user_key, user_key).unwrap_err();
        assert_eq!(err, RewardsError::SelfReferral.into());
        assert_eq!(user.referred_by, None);
    }

    #[test]
    fn referral_link_is_write_once() {
        let mut user = test_user(Pubkey::new_unique());
        let user_key = Pubkey::new_unique();
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();

        user.link_referrer(user_key, first).unwrap();
        assert_eq!(user.referred_by, Some(first));

        // A second referrer fails and the first link survives
        let err = user.link_referrer(user_key, second).unwrap_err();
        assert_eq!(err, RewardsError::AlreadyReferred.into());
        assert_eq!(user.referred_by, Some(first));
    }

    #[test]
    fn settle_accepts_only_pending_requests() {
        let mut withdrawal = WithdrawalRequest {
            user: Pubkey::new_unique(),
            method: "UPI".to_string(),
            account_info: "user@bank".to_string(),
            amount: 1_000,
            status: WithdrawalStatus::Pending,
            requested_at: 10,
            processed_at: None,
            index: 0,
            bump: 255,
        };

        withdrawal.settle(WithdrawalStatus::Completed, 20).unwrap();
        assert!(withdrawal.status == WithdrawalStatus::Completed);
        assert_eq!(withdrawal.processed_at, Some(20));

        // Settling twice fails and leaves the verdict in place
        let err = withdrawal
            .settle(WithdrawalStatus::Rejected, 30)
            .unwrap_err();
        assert_eq!(err, RewardsError::InvalidStateTransition.into());
        assert!(withdrawal.status == WithdrawalStatus::Completed);
        assert_eq!(withdrawal.processed_at, Some(20));
    }

    #[test]
    fn settle_rejects_pending_verdict() {
        let mut withdrawal = WithdrawalRequest {
            user: Pubkey::new_unique(),
            method: "UPI".to_string(),
            account_info: "user@bank".to_string(),
            amount: 1_000,
            status: WithdrawalStatus::Pending,
            requested_at: 10,
            processed_at: None,
            index: 0,
            bump: 255,
        };

        assert!(withdrawal.settle(WithdrawalStatus::Pending, 20).is_err());
        assert!(withdrawal.status == WithdrawalStatus::Pending);
        assert_eq!(withdrawal.processed_at, None);
    }

    #[test]
    fn config_bounds_are_enforced() {
        assert!(RewardsConfig::validate(15, 1, 1_000, 1_000).is_ok());
        assert!(RewardsConfig::validate(0, 1, 1_000, 1_000).is_err());
        assert!(RewardsConfig::validate(15, 0, 1_000, 1_000).is_err());
        assert!(RewardsConfig::validate(15, 1, 0, 1_000).is_err());
        assert!(RewardsConfig::validate(15, 1, 1_000, 10_001).is_err());
        // 100% commission is the inclusive upper bound
        assert!(RewardsConfig::validate(15, 1, 1_000, 10_000).is_ok());
    }
}
