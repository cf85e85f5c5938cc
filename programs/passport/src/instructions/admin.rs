use anchor_lang::prelude::*;

use crate::constants::PROTOCOL_SEED;
use crate::errors::PassportError;
use crate::events::{AdminUpdated, ClaimSignerUpdated, TreasuryUpdated};
use crate::state::ProtocolState;

/// Transfer admin authority
#[derive(Accounts)]
pub struct UpdateAdmin<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_SEED],
        bump = protocol_state.bump,
        constraint = admin.key() == protocol_state.admin @ PassportError::Unauthorized,
    )]
    pub protocol_state: Account<'info, ProtocolState>,
}

pub fn update_admin(ctx: Context<UpdateAdmin>, new_admin: Pubkey) -> Result<()> {
    require!(new_admin != Pubkey::default(), PassportError::InvalidAddress);

    let state = &mut ctx.accounts.protocol_state;
    let previous = state.admin;
    state.admin = new_admin;

    emit!(AdminUpdated {
        previous,
        current: new_admin,
    });
    Ok(())
}

/// Update the value-receiving treasury wallet
#[derive(Accounts)]
pub struct SetTreasury<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_SEED],
        bump = protocol_state.bump,
        constraint = admin.key() == protocol_state.admin @ PassportError::Unauthorized,
    )]
    pub protocol_state: Account<'info, ProtocolState>,
}

pub fn set_treasury(ctx: Context<SetTreasury>, new_treasury: Pubkey) -> Result<()> {
    require!(
        new_treasury != Pubkey::default(),
        PassportError::InvalidAddress
    );

    let state = &mut ctx.accounts.protocol_state;
    let previous = state.treasury;
    state.treasury = new_treasury;

    emit!(TreasuryUpdated {
        previous,
        current: new_treasury,
    });
    Ok(())
}

/// Rotate the off-chain claim signing key
#[derive(Accounts)]
pub struct SetClaimSigner<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PROTOCOL_SEED],
        bump = protocol_state.bump,
        constraint = admin.key() == protocol_state.admin @ PassportError::Unauthorized,
    )]
    pub protocol_state: Account<'info, ProtocolState>,
}

pub fn set_claim_signer(ctx: Context<SetClaimSigner>, new_signer: [u8; 20]) -> Result<()> {
    require!(new_signer != [0u8; 20], PassportError::InvalidAddress);

    let state = &mut ctx.accounts.protocol_state;
    let previous = state.claim_signer;
    state.claim_signer = new_signer;

    emit!(ClaimSignerUpdated {
        previous,
        current: new_signer,
    });
    Ok(())
}
