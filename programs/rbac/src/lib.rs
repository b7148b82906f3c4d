use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod gate;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

pub use instructions::*;
use crate::state::Role;

declare_id!("9ubrJbz2XKeesFMX3kygwyfytFWa849jUJonPEEE1YAv");

#[program]
pub mod rbac {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, genesis_authority: Pubkey) -> Result<()> {
        handle_initialize(ctx, genesis_authority)
    }

    pub fn initialize_user(ctx: Context<InitializeUser>, user: Pubkey, role: Role) -> Result<()> {
        handle_initialize_user(ctx, user, role)
    }

    pub fn revoke_user(ctx: Context<RevokeUser>, user: Pubkey) -> Result<()> {
        handle_revoke_user(ctx, user)
    }

    pub fn sensitive_operation(ctx: Context<SensitiveOperation>) -> Result<()> {
        handle_sensitive_operation(ctx)
    }

    pub fn get_role(ctx: Context<GetRole>, user: Pubkey) -> Result<Option<Role>> {
        handle_get_role(ctx, user)
    }
}
