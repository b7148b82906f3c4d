pub mod unchecked_account;

pub use unchecked_account::*;
