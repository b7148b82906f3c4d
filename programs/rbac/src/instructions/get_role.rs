use anchor_lang::prelude::*;

use crate::constants::USER_ROLE_SEED;
use crate::state::Role;
use crate::utils::UserProfileAccInfo;

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetRole<'info> {
    /// CHECK: may not exist
    #[account(seeds = [USER_ROLE_SEED.as_bytes(), user.as_ref()], bump)]
    pub user_profile: UncheckedAccount<'info>,
}

// `None` is "no record", clients show that as uninitialized
pub fn handle_get_role(ctx: Context<GetRole>, _user: Pubkey) -> Result<Option<Role>> {
    Ok(ctx
        .accounts
        .user_profile
        .load_profile()?
        .map(|profile| profile.role))
}
