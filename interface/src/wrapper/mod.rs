//! Instructions of the wrapper example program, which owns a PDA that acts as the swap authority
//! of locked Token Mill markets and forwards swaps to Token Mill through CPI.

use crate::{
    error::InterfaceError,
    pack::{
        split_discriminator,
        DISCRIMINATOR_LEN,
    },
};

pub mod graduate;
pub mod initialize_wrapper_authority;
pub mod simple_wrapped_swap;

pub use graduate::*;
pub use initialize_wrapper_authority::*;
pub use simple_wrapped_swap::*;

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
pub enum WrapperInstruction {
    InitializeWrapperAuthority,
    SimpleWrappedSwap,
    Graduate,
}

#[rustfmt::skip]
impl WrapperInstruction {
    pub const fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            Self::InitializeWrapperAuthority => [66, 84, 3, 197, 161, 63, 73, 27],
            Self::SimpleWrappedSwap          => [123, 221, 244, 182, 81, 132, 61, 207],
            Self::Graduate                   => [45, 235, 225, 181, 17, 218, 64, 130],
        }
    }
}

impl TryFrom<&[u8]> for WrapperInstruction {
    type Error = InterfaceError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        use strum::IntoEnumIterator;

        let (discriminator, _) = split_discriminator(data)?;
        Self::iter()
            .find(|ix| &ix.discriminator() == discriminator)
            .ok_or(InterfaceError::InvalidInstructionTag)
    }
}
