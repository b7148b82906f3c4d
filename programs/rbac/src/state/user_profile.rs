use anchor_lang::prelude::*;
use anchor_lang::{AnchorDeserialize, AnchorSerialize};

use crate::constants::{DISCRIMINATOR_LEN, USER_ROLE_SEED};

/// Role record of a single identity, stored at `["user-role", owner]`.
#[account]
#[derive(Debug, InitSpace, PartialEq, Eq)]
pub struct UserProfile {
    pub owner: Pubkey,
    pub role: Role,
    pub created_by: Pubkey,
    // funded the storage deposit, gets it back on revoke
    pub payer: Pubkey,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, InitSpace, PartialEq, Eq)]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    Developer,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }
}

impl UserProfile {
    pub const LEN: usize = DISCRIMINATOR_LEN + UserProfile::INIT_SPACE;

    pub fn address(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[USER_ROLE_SEED.as_bytes(), owner.as_ref()], &crate::ID)
    }

    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
