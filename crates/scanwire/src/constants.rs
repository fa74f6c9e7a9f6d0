//! Wire names used by the scanner control API.
//!
//! Every key, wrapper tag, section name and discriminator the codecs read or
//! write lives here.

// ── Parameter record discriminator keys ───────────────────────────────────

pub const METHOD_NAME_KEY: &str = "methodName";
pub const CREDENTIALS_TYPE_KEY: &str = "type";

// ── Authentication method discriminators ──────────────────────────────────

pub const FORM_BASED_AUTHENTICATION: &str = "formBasedAuthentication";
pub const JSON_BASED_AUTHENTICATION: &str = "jsonBasedAuthentication";
pub const HTTP_AUTHENTICATION: &str = "httpAuthentication";
pub const MANUAL_AUTHENTICATION: &str = "manualAuthentication";
pub const SCRIPT_BASED_AUTHENTICATION: &str = "scriptBasedAuthentication";

// ── Credentials discriminators ────────────────────────────────────────────

pub const USERNAME_PASSWORD_CREDENTIALS: &str = "UsernamePasswordAuthenticationCredentials";
pub const GENERIC_CREDENTIALS: &str = "GenericAuthenticationCredentials";
pub const MANUAL_CREDENTIALS: &str = "ManualAuthenticationCredentials";

// ── Session management discriminators ─────────────────────────────────────

pub const COOKIE_BASED_SESSION_MANAGEMENT: &str = "cookieBasedSessionManagement";
pub const HTTP_AUTH_SESSION_MANAGEMENT: &str = "httpAuthSessionManagement";
pub const SCRIPT_BASED_SESSION_MANAGEMENT: &str = "scriptBasedSessionManagement";

// ── Well-known view parameters ────────────────────────────────────────────

pub const LOGIN_URL: &str = "loginUrl";
pub const LOGIN_REQUEST_DATA: &str = "loginRequestData";
pub const LOGIN_PAGE_URL: &str = "loginPageUrl";
pub const HOSTNAME: &str = "hostname";
pub const REALM: &str = "realm";
pub const PORT: &str = "port";
pub const SCRIPT_NAME: &str = "scriptName";
pub const USERNAME: &str = "username";
pub const PASSWORD: &str = "password";
pub const SESSION_NAME: &str = "sessionName";

// ── Positional array tags ─────────────────────────────────────────────────

pub const HOST_PROCESS_TAG: &str = "HostProcess";
pub const PLUGIN_TAG: &str = "Plugin";
pub const FLAGS_TAG: &str = "Flags";
pub const VALUES_TAG: &str = "Values";

// ── Multi-valued HTTP parameter head ──────────────────────────────────────

pub const PARAM_SITE: &str = "site";
pub const PARAM_NAME: &str = "name";
pub const PARAM_TIMES_USED: &str = "timesUsed";
pub const PARAM_TYPE: &str = "type";

// ── Cookie fields ─────────────────────────────────────────────────────────

pub const COOKIE_NAME: &str = "name";
pub const COOKIE_VALUE: &str = "value";
pub const COOKIE_DOMAIN: &str = "domain";
pub const COOKIE_PATH: &str = "path";
pub const COOKIE_SECURE: &str = "secure";
pub const COOKIE_HTTP_ONLY: &str = "httpOnly";

// ── Scope split sections and URL record fields ────────────────────────────

pub const URLS_IN_SCOPE: &str = "urlsInScope";
pub const URLS_OUT_OF_SCOPE: &str = "urlsOutOfScope";

pub const URL_URL: &str = "url";
pub const URL_METHOD: &str = "method";
pub const URL_MESSAGE_ID: &str = "messageId";
pub const URL_STATUS_CODE: &str = "statusCode";
pub const URL_STATUS_REASON: &str = "statusReason";
pub const URL_PROCESSED: &str = "processed";
pub const URL_REASON_NOT_PROCESSED: &str = "reasonNotProcessed";

// ── Special enum tokens ───────────────────────────────────────────────────

pub const TOKEN_NOT_STARTED: &str = "NOT_STARTED";
pub const TOKEN_IGNORE_COMPLETELY: &str = "IGNORE_COMPLETELY";
pub const TOKEN_IGNORE_VALUE: &str = "IGNORE_VALUE";
pub const TOKEN_USE_ALL: &str = "USE_ALL";
