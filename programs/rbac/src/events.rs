use anchor_lang::prelude::*;

use crate::state::Role;

#[event]
pub struct ConfigInitializedEvent {
    pub genesis_authority: Pubkey,
}

#[event]
pub struct UserInitializedEvent {
    pub user: Pubkey,
    pub role: Role,
    pub created_by: Pubkey,
    pub payer: Pubkey,
    pub genesis: bool,
}

#[event]
pub struct UserRevokedEvent {
    pub user: Pubkey,
    pub role: Role,
    pub revoked_by: Pubkey,
    pub refund_recipient: Pubkey,
    pub refund: u64,
}

#[event]
pub struct SensitiveOperationEvent {
    pub actor: Pubkey,
    pub role: Role,
}
