use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, USER_ROLE_SEED};
use crate::errors::ErrorCode;
use crate::events::UserInitializedEvent;
use crate::gate::{self, Actor, Grant};
use crate::state::{Config, Role, UserProfile};
use crate::utils::{create_profile_account, UserProfileAccInfo};

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct InitializeUser<'info> {
    /// CHECK: created by the handler once the gate lets the request through
    #[account(
        mut,
        seeds = [USER_ROLE_SEED.as_bytes(), user.as_ref()],
        bump,
    )]
    pub user_profile: UncheckedAccount<'info>,

    /// CHECK: authority's own record, absent for the genesis grant
    #[account(seeds = [USER_ROLE_SEED.as_bytes(), authority.key().as_ref()], bump)]
    pub authority_profile: UncheckedAccount<'info>,

    #[account(mut, seeds = [CONFIG_SEED.as_bytes()], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// CHECK: signature checked by the gate
    pub authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_user(ctx: Context<InitializeUser>, user: Pubkey, role: Role) -> Result<()> {
    let authority = &ctx.accounts.authority;
    let actor = Actor::new(
        authority.key(),
        authority.is_signer,
        ctx.accounts.authority_profile.load_profile()?,
    );

    let grant = gate::authorize_initialize(&actor, &ctx.accounts.config, &user, role)?;

    let user_profile = ctx.accounts.user_profile.to_account_info();
    if !user_profile.data_is_empty() {
        return Err(ErrorCode::AlreadyInitialized.into());
    }

    let bump = ctx.bumps.user_profile;
    let bump_seed = [bump];
    let seeds: &[&[u8]] = &[USER_ROLE_SEED.as_bytes(), user.as_ref(), &bump_seed];

    create_profile_account(
        &user_profile,
        &ctx.accounts.payer.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        &[seeds],
    )?;

    let profile = UserProfile {
        owner: user,
        role,
        created_by: actor.key,
        payer: ctx.accounts.payer.key(),
        bump,
    };
    user_profile.store_profile(&profile)?;

    if grant == Grant::Genesis {
        ctx.accounts.config.consume_genesis();
        msg!("Genesis grant consumed");
    }

    msg!("User {} initialized as {:?}", user, role);

    emit!(UserInitializedEvent {
        user,
        role,
        created_by: profile.created_by,
        payer: profile.payer,
        genesis: grant == Grant::Genesis,
    });

    Ok(())
}
