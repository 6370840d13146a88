use anchor_lang::prelude::*;

/// Category of an activity entry, mirrored by indexers into the per-user
/// activity feed
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Earn,
    Referral,
    Withdraw,
    Info,
}

/// Append-only audit entry emitted alongside every balance mutation
#[event]
pub struct ActivityLogged {
    pub user: Pubkey,
    pub kind: ActivityKind,
    pub amount: u64,
    pub note: String,
    pub timestamp: i64,
}

#[event]
pub struct UserCreated {
    pub user: Pubkey,
    pub authority: Pubkey,
    pub referral_code: String,
    pub timestamp: i64,
}

#[event]
pub struct ReferralRegistered {
    pub referrer: Pubkey,
    pub referred_user: Pubkey,
    pub bonus_awarded: u64,
    pub timestamp: i64,
}

#[event]
pub struct AdWatched {
    pub user: Pubkey,
    pub points: u64,
    pub commission: u64,
    pub watched_today: u16,
    pub timestamp: i64,
}

#[event]
pub struct QuotaWindowRolled {
    pub user: Pubkey,
    pub day: i64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalRequested {
    pub user: Pubkey,
    pub withdrawal: Pubkey,
    pub amount: u64,
    pub method: String,
    pub index: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalApproved {
    pub withdrawal: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalRejected {
    pub withdrawal: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub daily_ad_limit: u16,
    pub points_per_ad: u64,
    pub referral_bonus: u64,
    pub min_withdrawal: u64,
    pub referral_commission_bps: u16,
}

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub daily_ad_limit: u16,
    pub points_per_ad: u64,
    pub referral_bonus: u64,
    pub min_withdrawal: u64,
    pub referral_commission_bps: u16,
}
