// Seeds
pub const PROTOCOL_SEED: &[u8] = b"protocol";
pub const PASSPORT_SEED: &[u8] = b"passport";
pub const NONCE_SEED: &[u8] = b"nonce";

/// Highest purchasable tier.
pub const MAX_LEVEL: u8 = 5;

/// Fixed-point scale shared by prices (lamports) and hash rates.
pub const RATE_SCALE: u64 = 1_000_000_000;

/// Activation price per level (lamports), level 1 is free.
pub const LEVEL_PRICES: [u64; MAX_LEVEL as usize] = [
    0,         // 1
    1_000_000, // 2 (0.001 SOL)
    2_000_000, // 3
    4_000_000, // 4
    5_000_000, // 5
];

/// Capability weight ("hash rate") per level, RATE_SCALE-fixed-point.
pub const LEVEL_HASH_RATES: [u64; MAX_LEVEL as usize] = [
    1_000_000_000, // 1.0
    1_000_000_000, // 1.0
    2_000_000_000, // 2.0
    2_500_000_000, // 2.5
    3_000_000_000, // 3.0
];

/// Activation price for a level, None outside 1..=MAX_LEVEL.
pub fn price_of(level: u8) -> Option<u64> {
    if level == 0 || level > MAX_LEVEL {
        return None;
    }
    Some(LEVEL_PRICES[level as usize - 1])
}

/// Capability weight for a level, None outside 1..=MAX_LEVEL.
pub fn hash_rate_of(level: u8) -> Option<u64> {
    if level == 0 || level > MAX_LEVEL {
        return None;
    }
    Some(LEVEL_HASH_RATES[level as usize - 1])
}

/// Session claims double the credited delta for call hosts.
pub const HOST_BONUS_MULTIPLIER: u64 = 2;
