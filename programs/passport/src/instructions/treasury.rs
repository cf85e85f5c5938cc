use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked};

use crate::constants::PROTOCOL_SEED;
use crate::errors::PassportError;
use crate::events::FundsWithdrawn;
use crate::state::ProtocolState;

#[derive(Accounts)]
pub struct SweepForeignToken<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [PROTOCOL_SEED],
        bump = protocol_state.bump,
        constraint = admin.key() == protocol_state.admin @ PassportError::Unauthorized,
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    pub mint: InterfaceAccount<'info, Mint>,

    /// Vault holding tokens incidentally sent to the program (owned by the
    /// protocol PDA). Never holds lamports collected for tier pricing.
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = protocol_state,
        associated_token::token_program = token_program
    )]
    pub vault_ata: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_ata.mint == mint.key() @ PassportError::InvalidTokenAddress,
    )]
    pub recipient_ata: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Owner-only escape hatch for foreign tokens stranded in the vault.
pub fn sweep_foreign_token(ctx: Context<SweepForeignToken>, amount: u64) -> Result<()> {
    require!(
        ctx.accounts.mint.key() != Pubkey::default(),
        PassportError::InvalidTokenAddress
    );
    require!(
        ctx.accounts.recipient_ata.owner != Pubkey::default(),
        PassportError::InvalidRecipientAddress
    );
    require!(amount > 0, PassportError::InvalidAmount);
    require!(
        amount <= ctx.accounts.vault_ata.amount,
        PassportError::InsufficientBalance
    );

    let seeds: &[&[u8]] = &[PROTOCOL_SEED, &[ctx.accounts.protocol_state.bump]];
    let signer = &[seeds];

    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.vault_ata.to_account_info(),
                to: ctx.accounts.recipient_ata.to_account_info(),
                authority: ctx.accounts.protocol_state.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
            },
            signer,
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(FundsWithdrawn {
        mint: ctx.accounts.mint.key(),
        recipient: ctx.accounts.recipient_ata.key(),
        amount,
    });

    Ok(())
}
