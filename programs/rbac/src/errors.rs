use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Request is not signed by the acting identity")]
    InvalidSigner,

    #[msg("You do not have the role required for this operation")]
    Unauthorized,

    #[msg("Only the Super Admin can assign roles")]
    NotSuperAdmin,

    #[msg("User already has a role record")]
    AlreadyInitialized,

    #[msg("User has no role record")]
    NotFound,

    #[msg("Genesis authority can only grant itself the Super Admin role")]
    InvalidGenesisGrant,

    #[msg("Refund must go to the account that paid for the record")]
    InvalidRefundRecipient,

    #[msg("Role record account is malformed")]
    InvalidProfileAccount,

    #[msg("Signer is not the program upgrade authority")]
    NotUpgradeAuthority,
}
