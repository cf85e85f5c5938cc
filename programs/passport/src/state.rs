use anchor_lang::prelude::*;

/// Global protocol state (singleton)
#[account]
pub struct ProtocolState {
    /// Current version for migrations
    pub version: u8,

    /// Admin authority (owner: sweep + setters)
    pub admin: Pubkey,

    /// Ethereum-style address of the off-chain key that signs point claims.
    /// Distinct from `admin`; rotatable via set_claim_signer.
    pub claim_signer: [u8; 20],

    /// Wallet receiving mint payments. Receiver of value, not an authority.
    pub treasury: Pubkey,

    /// Bump seed for PDA
    pub bump: u8,
}

impl ProtocolState {
    pub const LEN: usize = 8 + // discriminator
        1 +  // version
        32 + // admin
        20 + // claim_signer
        32 + // treasury
        1; // bump
}

/// Per-holder membership record. Created lazily on first mint, never closed.
#[account]
pub struct Passport {
    pub holder: Pubkey,

    /// 0 = none (pre-mint), 1..=MAX_LEVEL. Only ever increases.
    pub level: u8,

    /// Always equals hash_rate_of(level); RATE_SCALE-fixed-point.
    pub hash_rate: u64,

    /// Monotonically non-decreasing.
    pub points: u64,

    pub bump: u8,
}

impl Passport {
    pub const LEN: usize = 8 + // discriminator
        32 + // holder
        1 +  // level
        8 +  // hash_rate
        8 +  // points
        1; // bump
}

/// Replay-protection marker, one per claim nonce. Nonces are scoped globally
/// (keyed by nonce alone, not per claimant) and are never reusable.
#[account]
pub struct UsedNonce {
    pub consumed: bool,
    pub bump: u8,
}

impl UsedNonce {
    pub const LEN: usize = 8 + // discriminator
        1 + // consumed
        1; // bump
}
