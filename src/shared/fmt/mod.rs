//! Display formatting for amounts shown to the seller.

pub mod money;
