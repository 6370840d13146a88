pub mod approve_withdrawal;
pub mod create_user;
pub mod initialize_config;
pub mod refresh_quota;
pub mod register_referral;
pub mod reject_withdrawal;
pub mod request_withdrawal;
pub mod update_config;
pub mod watch_ad;

pub use approve_withdrawal::*;
pub use create_user::*;
pub use initialize_config::*;
pub use refresh_quota::*;
pub use register_referral::*;
pub use reject_withdrawal::*;
pub use request_withdrawal::*;
pub use update_config::*;
pub use watch_ad::*;
