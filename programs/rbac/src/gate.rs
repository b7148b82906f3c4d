//! Authorization decisions for every privileged instruction.
//!
//! The functions here only look at already loaded data and never touch accounts,
//! so a denied request can't leave anything half written.

use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::state::{Config, Role, UserProfile};

/// The identity a request claims to act as, plus its own role record if it has one.
#[derive(Debug, Clone)]
pub struct Actor {
    pub key: Pubkey,
    pub is_signer: bool,
    pub profile: Option<UserProfile>,
}

/// Which allow path admitted the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    Genesis,
    SuperAdmin,
    SelfRevocation,
}

impl Actor {
    pub fn new(key: Pubkey, is_signer: bool, profile: Option<UserProfile>) -> Self {
        Self { key, is_signer, profile }
    }

    fn check_signer(&self) -> Result<()> {
        require!(self.is_signer, ErrorCode::InvalidSigner);
        Ok(())
    }

    fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(|profile| profile.role)
    }
}

pub fn authorize_initialize(
    actor: &Actor,
    config: &Config,
    target: &Pubkey,
    role: Role,
) -> Result<Grant> {
    actor.check_signer()?;

    if actor.role() == Some(Role::SuperAdmin) {
        return Ok(Grant::SuperAdmin);
    }

    // no super admin record: only the configured genesis authority may get through
    config.check_genesis(&actor.key, target, role)?;
    Ok(Grant::Genesis)
}

pub fn authorize_revoke(
    actor: &Actor,
    target: &Pubkey,
    target_profile: Option<&UserProfile>,
) -> Result<Grant> {
    actor.check_signer()?;

    if target_profile.is_none() {
        return Err(ErrorCode::NotFound.into());
    }

    // separate allow path, not a privilege level
    if actor.key == *target {
        return Ok(Grant::SelfRevocation);
    }

    match actor.role() {
        Some(Role::SuperAdmin) => Ok(Grant::SuperAdmin),
        _ => Err(ErrorCode::Unauthorized.into()),
    }
}

pub fn authorize_admin(actor: &Actor) -> Result<Role> {
    actor.check_signer()?;

    match actor.role() {
        Some(role) if role.is_admin() => Ok(role),
        _ => Err(ErrorCode::Unauthorized.into()),
    }
}
