use crate::{
    error::InterfaceError,
    pack::{
        split_discriminator,
        DISCRIMINATOR_LEN,
    },
};

pub mod create_market;
pub mod free_market;
pub mod lock_market;
pub mod permissioned_swap;
pub mod set_market_prices;

pub use create_market::*;
pub use free_market::*;
pub use lock_market::*;
pub use permissioned_swap::*;
pub use set_market_prices::*;

/// The Token Mill instructions this client knows how to build.
///
/// The `snake_case` name of each variant is the Anchor instruction name its discriminator is
/// derived from.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum TokenMillInstruction {
    CreateMarket,
    LockMarket,
    SetMarketPrices,
    FreeMarket,
    PermissionedSwap,
}

#[rustfmt::skip]
impl TokenMillInstruction {
    pub const fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            Self::CreateMarket     => [103, 226, 97, 235, 200, 188, 251, 254],
            Self::LockMarket       => [107, 8, 184, 91, 223, 13, 180, 38],
            Self::SetMarketPrices  => [39, 123, 107, 117, 49, 29, 21, 159],
            Self::FreeMarket       => [34, 200, 207, 18, 230, 44, 219, 138],
            Self::PermissionedSwap => [61, 253, 14, 229, 240, 137, 225, 39],
        }
    }
}

impl TryFrom<&[u8; DISCRIMINATOR_LEN]> for TokenMillInstruction {
    type Error = InterfaceError;

    fn try_from(value: &[u8; DISCRIMINATOR_LEN]) -> Result<Self, Self::Error> {
        use strum::IntoEnumIterator;

        Self::iter()
            .find(|ix| &ix.discriminator() == value)
            .ok_or(InterfaceError::InvalidInstructionTag)
    }
}

impl TryFrom<&[u8]> for TokenMillInstruction {
    type Error = InterfaceError;

    /// Identifies the instruction from the leading discriminator of its instruction data.
    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let (discriminator, _) = split_discriminator(data)?;
        Self::try_from(discriminator)
    }
}
