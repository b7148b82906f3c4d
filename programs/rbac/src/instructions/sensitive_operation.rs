use anchor_lang::prelude::*;

use crate::constants::USER_ROLE_SEED;
use crate::events::SensitiveOperationEvent;
use crate::gate::{self, Actor};
use crate::utils::UserProfileAccInfo;

#[derive(Accounts)]
pub struct SensitiveOperation<'info> {
    /// CHECK: may not exist, absence means no access
    #[account(seeds = [USER_ROLE_SEED.as_bytes(), authority.key().as_ref()], bump)]
    pub authority_profile: UncheckedAccount<'info>,

    /// CHECK: signature checked by the gate
    pub authority: UncheckedAccount<'info>,
}

pub fn handle_sensitive_operation(ctx: Context<SensitiveOperation>) -> Result<()> {
    let authority = &ctx.accounts.authority;
    let actor = Actor::new(
        authority.key(),
        authority.is_signer,
        ctx.accounts.authority_profile.load_profile()?,
    );

    let role = gate::authorize_admin(&actor)?;

    msg!("Access granted: admin operation successful");

    emit!(SensitiveOperationEvent {
        actor: actor.key,
        role,
    });

    Ok(())
}
