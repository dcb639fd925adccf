use borsh::{
    BorshDeserialize,
    BorshSerialize,
};

use crate::error::{
    InterfaceError,
    InterfaceResult,
};

/// Length of an Anchor instruction discriminator.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Packs Anchor instruction data.
///
/// Instruction data layout:
///   - [0..8]: the instruction discriminator, `sha256("global:<instruction_name>")[..8]`
///   - [8..]: the borsh-encoded arguments, in declaration order
pub fn pack_instruction_data<T: BorshSerialize>(
    discriminator: &[u8; DISCRIMINATOR_LEN],
    args: &T,
) -> Vec<u8> {
    let mut data = discriminator.to_vec();
    // Writing into a `Vec` can't fail; only the writer can return an I/O error.
    args.serialize(&mut data)
        .expect("Serializing into a Vec is infallible");
    data
}

/// Splits instruction data into its discriminator and argument bytes.
pub fn split_discriminator(data: &[u8]) -> InterfaceResult<(&[u8; DISCRIMINATOR_LEN], &[u8])> {
    let (discriminator, rest) = data
        .split_first_chunk::<DISCRIMINATOR_LEN>()
        .ok_or(InterfaceError::InsufficientByteLength)?;
    Ok((discriminator, rest))
}

/// Decodes the borsh arguments that follow a discriminator. Trailing bytes are rejected.
pub fn unpack_args<T: BorshDeserialize>(args: &[u8]) -> InterfaceResult<T> {
    T::try_from_slice(args).map_err(|_| InterfaceError::InvalidInstructionArgs)
}
