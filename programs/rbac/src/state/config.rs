use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, DISCRIMINATOR_LEN};
use crate::errors::ErrorCode;
use crate::state::Role;

#[account]
#[derive(Default, Debug, InitSpace, PartialEq, Eq)]
pub struct Config {
    /// Identity allowed to create the first Super Admin record.
    pub genesis_authority: Pubkey,
    /// Set once the genesis grant was used, it can't be used twice.
    pub genesis_consumed: bool,
    pub bump: u8,
}

impl Config {
    pub const LEN: usize = DISCRIMINATOR_LEN + Config::INIT_SPACE;

    pub fn address() -> (Pubkey, u8) {
        Pubkey::find_program_address(&[CONFIG_SEED.as_bytes()], &crate::ID)
    }

    pub fn check_genesis(&self, signer: &Pubkey, target: &Pubkey, role: Role) -> Result<()> {
        if self.genesis_consumed || *signer != self.genesis_authority {
            return Err(ErrorCode::NotSuperAdmin.into());
        }

        if *target != self.genesis_authority || role != Role::SuperAdmin {
            return Err(ErrorCode::InvalidGenesisGrant.into());
        }

        Ok(())
    }

    pub fn consume_genesis(&mut self) {
        self.genesis_consumed = true;
    }
}
