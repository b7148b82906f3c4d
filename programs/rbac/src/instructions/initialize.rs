use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::events::ConfigInitializedEvent;
use crate::program::Rbac;
use crate::state::Config;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        seeds = [CONFIG_SEED.as_bytes()],
        bump,
        payer = deployer,
        space = Config::LEN,
    )]
    pub config: Account<'info, Config>,

    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, Rbac>,

    // only whoever deployed the program picks the genesis authority
    #[account(
        constraint = program_data.upgrade_authority_address == Some(deployer.key())
            @ ErrorCode::NotUpgradeAuthority
    )]
    pub program_data: Account<'info, ProgramData>,

    #[account(mut)]
    pub deployer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>, genesis_authority: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.genesis_authority = genesis_authority;
    config.genesis_consumed = false;
    config.bump = ctx.bumps.config;

    msg!("Genesis authority: {}", genesis_authority);

    emit!(ConfigInitializedEvent { genesis_authority });

    Ok(())
}
