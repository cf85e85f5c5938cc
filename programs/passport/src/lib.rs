use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod sig;
pub mod state;

#[allow(unused_imports)]
pub(crate) use instructions::admin::__client_accounts_set_claim_signer;
#[allow(unused_imports)]
pub(crate) use instructions::admin::__client_accounts_set_treasury;
#[allow(unused_imports)]
pub(crate) use instructions::admin::__client_accounts_update_admin;
#[allow(unused_imports)]
pub(crate) use instructions::claim::__client_accounts_claim_points;
#[allow(unused_imports)]
pub(crate) use instructions::claim::__client_accounts_claim_session;
#[allow(unused_imports)]
pub(crate) use instructions::initialize::__client_accounts_initialize;
#[allow(unused_imports)]
pub(crate) use instructions::mint::__client_accounts_mint_passport;
#[allow(unused_imports)]
pub(crate) use instructions::treasury::__client_accounts_sweep_foreign_token;

// Narrow imports for function signatures (no crate-wide re-exports)
use crate::instructions::admin::{SetClaimSigner, SetTreasury, UpdateAdmin};
use crate::instructions::claim::{ClaimPoints, ClaimSession};
use crate::instructions::initialize::Initialize;
use crate::instructions::mint::MintPassport;
use crate::instructions::treasury::SweepForeignToken;

declare_id!("Pass111111111111111111111111111111111111111");

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;
#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Tier Passport - Membership Tiers with Signed Point Claims",
    project_url: "https://github.com/tier-passport/tier-passport-program",
    contacts: "email:security@tier-passport.xyz",
    policy: "https://github.com/tier-passport/tier-passport-program/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/tier-passport/tier-passport-program"
}

#[program]
pub mod tier_passport {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        treasury: Pubkey,
        claim_signer: [u8; 20],
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, treasury, claim_signer)
    }

    pub fn mint(
        ctx: Context<MintPassport>,
        payment_lamports: u64,
        extra_data: Vec<u8>,
    ) -> Result<()> {
        instructions::mint::mint_passport(ctx, payment_lamports, extra_data)
    }

    pub fn claim_points(
        ctx: Context<ClaimPoints>,
        nonce: [u8; 32],
        amount: u64,
        signature: [u8; 65],
    ) -> Result<()> {
        instructions::claim::claim_points(ctx, nonce, amount, signature)
    }

    pub fn claim_session(
        ctx: Context<ClaimSession>,
        nonce: [u8; 32],
        duration_secs: u64,
        participants: u32,
        is_host: bool,
        signature: [u8; 65],
    ) -> Result<()> {
        instructions::claim::claim_session(
            ctx,
            nonce,
            duration_secs,
            participants,
            is_host,
            signature,
        )
    }

    pub fn sweep_foreign_token(ctx: Context<SweepForeignToken>, amount: u64) -> Result<()> {
        instructions::treasury::sweep_foreign_token(ctx, amount)
    }

    pub fn update_admin(ctx: Context<UpdateAdmin>, new_admin: Pubkey) -> Result<()> {
        instructions::admin::update_admin(ctx, new_admin)
    }

    pub fn set_treasury(ctx: Context<SetTreasury>, new_treasury: Pubkey) -> Result<()> {
        instructions::admin::set_treasury(ctx, new_treasury)
    }

    pub fn set_claim_signer(ctx: Context<SetClaimSigner>, new_signer: [u8; 20]) -> Result<()> {
        instructions::admin::set_claim_signer(ctx, new_signer)
    }
}
