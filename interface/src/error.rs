#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum InterfaceError {
    InvalidInstructionTag,
    InsufficientByteLength,
    InvalidInstructionArgs,
}

impl From<InterfaceError> for &'static str {
    fn from(value: InterfaceError) -> Self {
        match value {
            InterfaceError::InvalidInstructionTag => "Invalid instruction discriminator",
            InterfaceError::InsufficientByteLength => "Not enough bytes passed",
            InterfaceError::InvalidInstructionArgs => "Instruction arguments failed to decode",
        }
    }
}

impl core::fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg: &'static str = self.clone().into();
        f.write_str(msg)
    }
}

impl std::error::Error for InterfaceError {}

pub type InterfaceResult<T> = Result<T, InterfaceError>;
