use anchor_lang::prelude::*;

use crate::constants::{hash_rate_of, price_of, PASSPORT_SEED, PROTOCOL_SEED};
use crate::errors::PassportError;
use crate::events::PassportMinted;
use crate::state::{Passport, ProtocolState};

#[derive(Accounts)]
pub struct MintPassport<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: passport holder; anyone may pay to mint or upgrade for any
    /// address, so no signature is required from the holder itself.
    pub holder: UncheckedAccount<'info>,

    #[account(
        seeds = [PROTOCOL_SEED],
        bump = protocol_state.bump,
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    #[account(
        init_if_needed,
        payer = payer,
        space = Passport::LEN,
        seeds = [PASSPORT_SEED, holder.key().as_ref()],
        bump
    )]
    pub passport: Account<'info, Passport>,

    /// Payment sink; must be the configured treasury wallet.
    #[account(
        mut,
        address = protocol_state.treasury @ PassportError::InvalidAddress,
    )]
    pub treasury: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Mint a level-1 passport or advance an existing one by exactly one level.
/// `extra_data` is opaque client data carried for interface compatibility.
///
/// The full attached payment is forwarded to the treasury, anything above
/// the activation price included. Overpayment is kept, not refunded.
pub fn mint_passport(
    ctx: Context<MintPassport>,
    payment_lamports: u64,
    _extra_data: Vec<u8>,
) -> Result<()> {
    let passport = &mut ctx.accounts.passport;

    require!(
        passport.level < crate::constants::MAX_LEVEL,
        PassportError::MaxLevelReached
    );
    let next_level = passport.level + 1;

    let price = price_of(next_level).ok_or(PassportError::InvalidLevel)?;
    require!(
        payment_lamports >= price,
        PassportError::InsufficientPayment
    );

    if payment_lamports > 0 {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            payment_lamports,
        )?;
    }

    passport.holder = ctx.accounts.holder.key();
    passport.level = next_level;
    passport.hash_rate = hash_rate_of(next_level).ok_or(PassportError::InvalidLevel)?;
    passport.bump = ctx.bumps.passport;

    emit!(PassportMinted {
        holder: ctx.accounts.holder.key(),
        level: next_level,
    });

    Ok(())
}
