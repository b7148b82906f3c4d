use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::errors::ErrorCode;
use crate::state::UserProfile;

/// Access to a role record slot that may not exist yet.
pub trait UserProfileAccInfo {
    fn load_profile(&self) -> Result<Option<UserProfile>>;
    fn store_profile(&self, profile: &UserProfile) -> Result<()>;
}

impl UserProfileAccInfo for AccountInfo<'_> {
    // same checks as `Account::try_from`, but an empty slot is `None` instead of an error
    fn load_profile(&self) -> Result<Option<UserProfile>> {
        if self.data_is_empty() {
            return Ok(None);
        }
        require_keys_eq!(*self.owner, UserProfile::owner(), ErrorCode::InvalidProfileAccount);

        let data = self.try_borrow_data()?;
        let profile = UserProfile::try_deserialize(&mut &data[..])
            .map_err(|_| ErrorCode::InvalidProfileAccount)?;
        Ok(Some(profile))
    }

    fn store_profile(&self, profile: &UserProfile) -> Result<()> {
        let mut data = self.try_borrow_mut_data()?;
        profile.try_serialize(&mut &mut data[..])
    }
}

/// Allocates a role record slot owned by this program.
///
/// A slot that already holds lamports is topped up to rent exemption and allocated
/// in place, `create_account` rejects funded addresses.
pub fn create_profile_account<'info>(
    profile: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let space = UserProfile::LEN;
    let rent = Rent::get()?.minimum_balance(space);
    let current = profile.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: profile.clone(),
                },
                signer_seeds,
            ),
            rent,
            space as u64,
            &crate::ID,
        );
    }

    let top_up = rent.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: profile.clone(),
                },
            ),
            top_up,
        )?;
    }

    system_program::allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: profile.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;

    system_program::assign(
        CpiContext::new_with_signer(
            system_program.clone(),
            Assign {
                account_to_assign: profile.clone(),
            },
            signer_seeds,
        ),
        &crate::ID,
    )
}
