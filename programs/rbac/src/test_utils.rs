use anchor_lang::error::Error;
use anchor_lang::Result;

use crate::errors::ErrorCode;

pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    match result {
        Err(Error::AnchorError(err)) => {
            assert_eq!(err.error_code_number, u32::from(expected), "{}", err.error_msg)
        }
        other => panic!("expected {:?}, got {:?}", expected, other),
    }
}
