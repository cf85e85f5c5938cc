use anchor_lang::prelude::*;

use crate::constants::{HOST_BONUS_MULTIPLIER, NONCE_SEED, PASSPORT_SEED, PROTOCOL_SEED, RATE_SCALE};
use crate::errors::PassportError;
use crate::events::PointsClaimed;
use crate::sig;
use crate::state::{Passport, ProtocolState, UsedNonce};

#[derive(Accounts)]
#[instruction(nonce: [u8; 32])]
pub struct ClaimPoints<'info> {
    /// Transaction fee + nonce rent payer; may be the claimant or a relayer.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: points recipient; authenticated by the admin signature binding
    /// this exact key into the digest, not by a signature from the claimant.
    pub claimant: UncheckedAccount<'info>,

    #[account(
        seeds = [PROTOCOL_SEED],
        bump = protocol_state.bump,
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    #[account(
        mut,
        seeds = [PASSPORT_SEED, claimant.key().as_ref()],
        bump = passport.bump,
    )]
    pub passport: Account<'info, Passport>,

    /// Nonce marker, keyed by the nonce alone (global scope). Created on
    /// first use; a failed claim reverts the creation with the rest of the
    /// transaction, so the nonce stays spendable.
    #[account(
        init_if_needed,
        payer = payer,
        space = UsedNonce::LEN,
        seeds = [NONCE_SEED, nonce.as_ref()],
        bump
    )]
    pub used_nonce: Account<'info, UsedNonce>,

    pub system_program: Program<'info, System>,
}

/// Credit points whose amount is carried directly in the signed payload.
///
/// Check order is part of the interface: a replayed nonce reports
/// NonceAlreadyUsed even when the signature is also bad.
pub fn claim_points(
    ctx: Context<ClaimPoints>,
    nonce: [u8; 32],
    amount: u64,
    signature: [u8; 65],
) -> Result<()> {
    let used_nonce = &mut ctx.accounts.used_nonce;
    require!(!used_nonce.consumed, PassportError::NonceAlreadyUsed);

    let digest = sig::claim_points_digest(&ctx.accounts.claimant.key(), &nonce, amount);
    let signer = sig::recover_eth_signer(&digest, &signature)?;
    require!(
        signer == ctx.accounts.protocol_state.claim_signer,
        PassportError::InvalidAdminSignature
    );

    used_nonce.consumed = true;
    used_nonce.bump = ctx.bumps.used_nonce;

    let passport = &mut ctx.accounts.passport;
    passport.points = passport
        .points
        .checked_add(amount)
        .ok_or(PassportError::InvalidAmount)?;

    emit!(PointsClaimed {
        claimant: ctx.accounts.claimant.key(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(nonce: [u8; 32])]
pub struct ClaimSession<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: points recipient, bound into the signed digest.
    pub claimant: UncheckedAccount<'info>,

    #[account(
        seeds = [PROTOCOL_SEED],
        bump = protocol_state.bump,
    )]
    pub protocol_state: Account<'info, ProtocolState>,

    #[account(
        mut,
        seeds = [PASSPORT_SEED, claimant.key().as_ref()],
        bump = passport.bump,
    )]
    pub passport: Account<'info, Passport>,

    #[account(
        init_if_needed,
        payer = payer,
        space = UsedNonce::LEN,
        seeds = [NONCE_SEED, nonce.as_ref()],
        bump
    )]
    pub used_nonce: Account<'info, UsedNonce>,

    pub system_program: Program<'info, System>,
}

/// Credit points computed from session activity. The delta scales with the
/// passport's capability weight, the session duration and the decimal
/// magnitude of the participant count, doubled for hosts:
///
///   delta = duration_secs * hash_rate * (ilog10(participants) + 1)
///           * host_bonus / RATE_SCALE
pub fn claim_session(
    ctx: Context<ClaimSession>,
    nonce: [u8; 32],
    duration_secs: u64,
    participants: u32,
    is_host: bool,
    signature: [u8; 65],
) -> Result<()> {
    require!(participants >= 1, PassportError::InvalidAmount);

    let used_nonce = &mut ctx.accounts.used_nonce;
    require!(!used_nonce.consumed, PassportError::NonceAlreadyUsed);

    let digest = sig::claim_session_digest(
        &ctx.accounts.claimant.key(),
        &nonce,
        duration_secs,
        participants,
        is_host,
    );
    let signer = sig::recover_eth_signer(&digest, &signature)?;
    require!(
        signer == ctx.accounts.protocol_state.claim_signer,
        PassportError::InvalidAdminSignature
    );

    used_nonce.consumed = true;
    used_nonce.bump = ctx.bumps.used_nonce;

    let passport = &mut ctx.accounts.passport;
    let amount = session_points(duration_secs, passport.hash_rate, participants, is_host)
        .ok_or(PassportError::InvalidAmount)?;
    passport.points = passport
        .points
        .checked_add(amount)
        .ok_or(PassportError::InvalidAmount)?;

    emit!(PointsClaimed {
        claimant: ctx.accounts.claimant.key(),
        amount,
    });

    Ok(())
}

/// Pure session-delta computation; None on overflow or zero participants.
pub fn session_points(
    duration_secs: u64,
    hash_rate: u64,
    participants: u32,
    is_host: bool,
) -> Option<u64> {
    if participants == 0 {
        return None;
    }
    let magnitude = participants.ilog10() as u64 + 1;
    let bonus = if is_host { HOST_BONUS_MULTIPLIER } else { 1 };

    duration_secs
        .checked_mul(hash_rate)?
        .checked_mul(magnitude)?
        .checked_mul(bonus)?
        .checked_div(RATE_SCALE)
}
