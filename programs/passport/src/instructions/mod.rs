pub mod admin;
pub mod claim;
pub mod initialize;
pub mod mint;
pub mod treasury;
