//! Renders a [`SubmitError`] readably, naming the Token Mill or wrapper instruction that failed.

use std::fmt::Display;

use colored::Colorize;
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError;
use solana_sdk::pubkey::Pubkey;
use solana_transaction_error::TransactionError;
use token_mill_interface::{
    instructions::TokenMillInstruction,
    program::WRAPPER_ID,
    wrapper::WrapperInstruction,
};

use crate::{
    error::SubmitError,
    fmt_kv,
    LogColor,
};

/// Anchor numbers program-defined errors from this offset.
const ANCHOR_ERROR_CODE_OFFSET: u32 = 6000;

enum FailedInstruction {
    TokenMill(TokenMillInstruction),
    Wrapper(WrapperInstruction),
    Unknown { index: u8, program_id: Pubkey },
}

impl Display for FailedInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenMill(instruction) => write!(f, "{instruction}"),
            Self::Wrapper(instruction) => write!(f, "wrapper::{instruction}"),
            Self::Unknown { index, program_id } => write!(f, "#{index} ({program_id})"),
        }
    }
}

impl FailedInstruction {
    fn identify(index: u8, instructions: &[Instruction], token_mill_id: &Pubkey) -> Self {
        let unknown = |program_id| Self::Unknown { index, program_id };
        let Some(instruction) = instructions.get(index as usize) else {
            return unknown(Pubkey::default());
        };

        if &instruction.program_id == token_mill_id {
            TokenMillInstruction::try_from(instruction.data.as_slice())
                .map(Self::TokenMill)
                .unwrap_or(unknown(instruction.program_id))
        } else if instruction.program_id == WRAPPER_ID {
            WrapperInstruction::try_from(instruction.data.as_slice())
                .map(Self::Wrapper)
                .unwrap_or(unknown(instruction.program_id))
        } else {
            unknown(instruction.program_id)
        }
    }
}

pub struct PrettySubmitError<'a> {
    pub error: &'a SubmitError,
    /// The instructions of the submitted message, compute budget instructions included, so that
    /// instruction indices in the error line up.
    pub instructions: &'a [Instruction],
    pub program_id: Pubkey,
}

impl Display for PrettySubmitError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (error_type, message) = match self.error {
            SubmitError::Config(error) => ("ConfigError", error.to_string()),
            SubmitError::Malformed { reason } => ("Malformed", reason.clone()),
            SubmitError::Transport { message } => ("TransportError", message.clone()),
            SubmitError::Ambiguous { signature, reason } => {
                ("Ambiguous", format!("{signature}: {reason}"))
            }
            SubmitError::Rejected { error, .. } => ("Rejected", self.describe_rejection(error)),
        };
        writeln!(f, "{}", fmt_kv!(error_type, message, LogColor::Error))?;

        if let SubmitError::Rejected { signature, logs, .. } = self.error {
            if let Some(signature) = signature {
                writeln!(f, "  {}", fmt_kv!("signature", signature))?;
            }
            for line in logs {
                writeln!(f, "  {}", line.as_str().color(LogColor::FadedGray))?;
            }
        }
        Ok(())
    }
}

impl PrettySubmitError<'_> {
    fn describe_rejection(&self, error: &TransactionError) -> String {
        let TransactionError::InstructionError(index, instruction_error) = error else {
            return error.to_string();
        };
        let instruction = FailedInstruction::identify(*index, self.instructions, &self.program_id);
        match instruction_error {
            InstructionError::Custom(code) if *code >= ANCHOR_ERROR_CODE_OFFSET => format!(
                "{instruction}, program error {} (custom {code})",
                code - ANCHOR_ERROR_CODE_OFFSET
            ),
            InstructionError::Custom(code) => format!("{instruction}, anchor error {code}"),
            instruction_error => format!("{instruction}, {instruction_error}"),
        }
    }
}
