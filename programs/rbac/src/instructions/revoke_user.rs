use anchor_lang::prelude::*;

use crate::constants::USER_ROLE_SEED;
use crate::errors::ErrorCode;
use crate::events::UserRevokedEvent;
use crate::gate::{self, Actor};
use crate::state::UserProfile;
use crate::utils::UserProfileAccInfo;

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct RevokeUser<'info> {
    /// `None` when `user` has no record.
    #[account(
        mut,
        seeds = [USER_ROLE_SEED.as_bytes(), user.as_ref()],
        bump = user_profile.bump,
        close = refund_recipient,
    )]
    pub user_profile: Option<Account<'info, UserProfile>>,

    /// CHECK: authority's own record, may not exist
    #[account(seeds = [USER_ROLE_SEED.as_bytes(), authority.key().as_ref()], bump)]
    pub authority_profile: UncheckedAccount<'info>,

    /// CHECK: signature checked by the gate
    pub authority: UncheckedAccount<'info>,

    /// CHECK: must be the payer stored in the record
    #[account(mut)]
    pub refund_recipient: UncheckedAccount<'info>,
}

pub fn handle_revoke_user(ctx: Context<RevokeUser>, user: Pubkey) -> Result<()> {
    let authority = &ctx.accounts.authority;
    let actor = Actor::new(
        authority.key(),
        authority.is_signer,
        ctx.accounts.authority_profile.load_profile()?,
    );

    let grant = gate::authorize_revoke(&actor, &user, ctx.accounts.user_profile.as_deref())?;
    let user_profile = ctx
        .accounts
        .user_profile
        .as_ref()
        .ok_or(ErrorCode::NotFound)?;

    require_keys_eq!(
        ctx.accounts.refund_recipient.key(),
        user_profile.payer,
        ErrorCode::InvalidRefundRecipient
    );

    // the record is closed into `refund_recipient` on exit
    let refund = user_profile.get_lamports();

    msg!("User {} revoked ({:?})", user, grant);

    emit!(UserRevokedEvent {
        user,
        role: user_profile.role,
        revoked_by: actor.key,
        refund_recipient: user_profile.payer,
        refund,
    });

    Ok(())
}
