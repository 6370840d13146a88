use anchor_lang::prelude::*;

#[error_code]
pub enum RewardsError {
    #[msg("Daily ad limit reached")]
    QuotaExceeded,

    #[msg("Amount exceeds available balance")]
    InsufficientBalance,

    #[msg("Amount is below the minimum withdrawal")]
    BelowMinimumWithdrawal,

    #[msg("Withdrawal request is not pending")]
    InvalidStateTransition,

    #[msg("Cannot refer yourself")]
    SelfReferral,

    #[msg("User already has a referrer")]
    AlreadyReferred,

    #[msg("Referrer account does not match the stored referrer")]
    ReferrerMismatch,

    #[msg("Unauthorized - admin authority required")]
    Unauthorized,

    #[msg("Configuration value out of range")]
    InvalidConfig,

    #[msg("Commission rate exceeds 100%")]
    InvalidCommissionRate,

    #[msg("Display name is empty or too long")]
    InvalidDisplayName,

    #[msg("Withdrawal method or account details are empty or too long")]
    InvalidWithdrawalDetails,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
