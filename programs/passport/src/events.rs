use anchor_lang::prelude::*;

/// Emitted when a passport is minted or upgraded.
#[event]
pub struct PassportMinted {
    pub holder: Pubkey,
    pub level: u8,
}

/// Emitted when a signed claim credits points to a passport.
#[event]
pub struct PointsClaimed {
    pub claimant: Pubkey,
    pub amount: u64,
}

/// Emitted when the owner sweeps foreign tokens out of the vault.
#[event]
pub struct FundsWithdrawn {
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

/// Emitted when admin authority is transferred.
#[event]
pub struct AdminUpdated {
    pub previous: Pubkey,
    pub current: Pubkey,
}

/// Emitted when the treasury wallet changes.
#[event]
pub struct TreasuryUpdated {
    pub previous: Pubkey,
    pub current: Pubkey,
}

/// Emitted when the off-chain claim signer rotates.
#[event]
pub struct ClaimSignerUpdated {
    pub previous: [u8; 20],
    pub current: [u8; 20],
}
