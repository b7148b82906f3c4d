
pub mod get_role;
pub mod initialize;
pub mod initialize_user;
pub mod revoke_user;
pub mod sensitive_operation;

pub use get_role::*;
pub use initialize::*;
pub use initialize_user::*;
pub use revoke_user::*;
pub use sensitive_operation::*;
