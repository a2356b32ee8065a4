// src/exit.rs
//! Process exit codes for the `senserank` binary.

use std::process::Termination;

use crate::error::SenseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SenseRankExit {
    /// A sense (ranked or most frequent) was printed.
    Success = 0,
    /// IO or lexicon failure.
    Error = 1,
    /// Bad arguments, config, or parse tree.
    InvalidInput = 2,
}

impl SenseRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Classifies a failed run by its root cause.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        let root = err.chain().find_map(|c| c.downcast_ref::<SenseError>());
        match root {
            Some(
                SenseError::InvalidConfig(_)
                | SenseError::UnknownMetric(_)
                | SenseError::MalformedSenseKey(_)
                | SenseError::Tree { .. },
            ) => Self::InvalidInput,
            Some(_) => Self::Error,
            // Plain anyhow messages come from argument checks in the CLI.
            None => Self::InvalidInput,
        }
    }
}

impl Termination for SenseRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
