use anchor_lang::prelude::*;

#[error_code]
pub enum PassportError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("You have reached the maximum level")]
    MaxLevelReached,

    #[msg("Insufficient funds sent")]
    InsufficientPayment,

    #[msg("Invalid nonce")]
    NonceAlreadyUsed,

    #[msg("Invalid admin signature")]
    InvalidAdminSignature,

    #[msg("Invalid token address")]
    InvalidTokenAddress,

    #[msg("Invalid recipient address")]
    InvalidRecipientAddress,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Insufficient token balance")]
    InsufficientBalance,

    #[msg("Invalid address")]
    InvalidAddress,

    #[msg("Invalid level")]
    InvalidLevel,
}
