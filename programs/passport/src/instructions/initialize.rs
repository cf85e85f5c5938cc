use anchor_lang::prelude::*;

use crate::constants::PROTOCOL_SEED;
use crate::errors::PassportError;
use crate::state::ProtocolState;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = ProtocolState::LEN,
        seeds = [PROTOCOL_SEED],
        bump
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    pub system_program: Program<'info, System>,
}

/// Constructor analog: the initializing signer becomes the owner authority.
/// The singleton PDA makes a second initialization fail at account creation.
pub fn initialize(
    ctx: Context<Initialize>,
    treasury: Pubkey,
    claim_signer: [u8; 20],
) -> Result<()> {
    require!(treasury != Pubkey::default(), PassportError::InvalidAddress);
    require!(claim_signer != [0u8; 20], PassportError::InvalidAddress);

    let state = &mut ctx.accounts.protocol_state;
    state.version = 1;
    state.admin = ctx.accounts.admin.key();
    state.claim_signer = claim_signer;
    state.treasury = treasury;
    state.bump = ctx.bumps.protocol_state;

    Ok(())
}
