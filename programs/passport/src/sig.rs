//! Claim digests and administrator signature recovery.
//!
//! Claims are authorized off-chain by an Ethereum-style secp256k1 key: the
//! signer hashes the claim payload with keccak-256, applies the
//! `personal_sign` prefix, and signs the result. On-chain we re-derive the
//! digest, recover the signer through the secp256k1 recovery primitive and
//! compare its keccak-derived 20-byte address against the configured
//! `claim_signer`. Kept free of account context so tests can drive it with
//! locally generated keys.

use anchor_lang::prelude::*;
use solana_program::keccak;
use solana_program::secp256k1_recover::secp256k1_recover;

use crate::errors::PassportError;

const ETH_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Upper bound for the signature's `s` value (curve order / 2). Signatures
/// above it have a valid mirrored twin, so they are rejected outright to keep
/// one canonical encoding per (digest, key) pair.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
    0x20, 0xa0,
];

/// Digest for a direct-amount point claim:
/// keccak256(claimant || nonce || amount_le). This is the exact byte
/// sequence the administrator prefixes and signs off-chain.
pub fn claim_points_digest(claimant: &Pubkey, nonce: &[u8; 32], amount: u64) -> [u8; 32] {
    keccak::hashv(&[claimant.as_ref(), nonce, &amount.to_le_bytes()]).to_bytes()
}

/// Digest for a session claim:
/// keccak256(claimant || nonce || duration_le || participants_le || is_host).
pub fn claim_session_digest(
    claimant: &Pubkey,
    nonce: &[u8; 32],
    duration_secs: u64,
    participants: u32,
    is_host: bool,
) -> [u8; 32] {
    keccak::hashv(&[
        claimant.as_ref(),
        nonce,
        &duration_secs.to_le_bytes(),
        &participants.to_le_bytes(),
        &[is_host as u8],
    ])
    .to_bytes()
}

/// Recover the Ethereum-style address that produced `signature` (65 bytes,
/// r || s || v with v in {27, 28}) over the prefixed `digest`.
///
/// Every structural defect (bad v, high s, point recovery failure) maps to
/// `InvalidAdminSignature`; the caller only has to compare addresses.
pub fn recover_eth_signer(digest: &[u8; 32], signature: &[u8; 65]) -> Result<[u8; 20]> {
    let recovery_id = match signature[64] {
        27 => 0,
        28 => 1,
        _ => return err!(PassportError::InvalidAdminSignature),
    };

    let s: &[u8] = &signature[32..64];
    require!(
        s <= &SECP256K1_HALF_ORDER[..],
        PassportError::InvalidAdminSignature
    );

    let prefixed = keccak::hashv(&[ETH_MESSAGE_PREFIX, digest]).to_bytes();
    let pubkey = secp256k1_recover(&prefixed, recovery_id, &signature[..64])
        .map_err(|_| error!(PassportError::InvalidAdminSignature))?;

    Ok(eth_address(&pubkey.to_bytes()))
}

/// Last 20 bytes of keccak256 over the uncompressed public key (no 0x04 tag).
pub fn eth_address(pubkey: &[u8; 64]) -> [u8; 20] {
    let hash = keccak::hash(pubkey).to_bytes();
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&hash[12..]);
    addr
}
