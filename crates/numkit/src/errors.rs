//! Error handling and exit codes.

use numkit_core::constants::exit_codes;
use numkit_core::CalcError;

/// Map a computation error to its exit code.
pub fn handle_error(err: &CalcError) -> i32 {
    match err {
        CalcError::Domain(_) => exit_codes::ERROR_DOMAIN,
        CalcError::TooLarge { .. } | CalcError::Overflow(_) | CalcError::ArithmeticOverflow(_) => {
            exit_codes::ERROR_TOO_LARGE
        }
        CalcError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

/// Exit code for an application error, looking through to a [`CalcError`].
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<CalcError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error);
    u8::try_from(code).unwrap_or(1)
}
