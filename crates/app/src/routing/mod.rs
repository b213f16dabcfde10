pub mod hash;
pub mod resolver;
pub mod role;
pub mod table;

/// Hash key of the login screen. The session gate forces the location here
/// whenever an unauthenticated session holds any other hash.
pub const LOGIN_HASH: &str = "#login";
