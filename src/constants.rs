/// Default number of items requested per page on listing endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 200;
/// Default number of re-authentications allowed per logical operation
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default per-call timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// Default base address template; `{pod}` and `{region}` are substituted
pub const DEFAULT_BASE_URL_TEMPLATE: &str = "https://{pod}.{region}.informaticacloud.com/saas";
/// User agent string sent with every request
pub const USER_AGENT: &str = "tenant-admin/0.3.0";
/// Session header understood by the legacy (v2) endpoint family
pub const LEGACY_SESSION_HEADER: &str = "icSessionId";
/// Session header understood by the current (v3) endpoint family
pub const CURRENT_SESSION_HEADER: &str = "INFA-SESSION-ID";
/// Path prefix of the legacy endpoint family
pub const LEGACY_PATH_PREFIX: &str = "/api/v2";
/// Path prefix of the current endpoint family
pub const CURRENT_PATH_PREFIX: &str = "/public/core/v3";
/// Configuration store key under which the session token is persisted
pub const SESSION_TOKEN_KEY: &str = "session_token";
/// Acknowledgement message used when a bodiless success has no operation-specific message
pub const DEFAULT_ACK_MESSAGE: &str = "Success";
