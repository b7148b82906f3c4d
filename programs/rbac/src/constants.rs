pub const USER_ROLE_SEED: &str = "user-role";
pub const CONFIG_SEED: &str = "config";

pub const DISCRIMINATOR_LEN: usize = 8;
