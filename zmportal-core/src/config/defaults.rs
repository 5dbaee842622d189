pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_ACCEPT_INVALID_CERTS: bool = false;
pub const DEFAULT_USER_AGENT: &str = concat!("zmportal/", env!("CARGO_PKG_VERSION"));
