/// Session of the signed-in user, written by the login page.
pub const SESSION_KEY: &str = "gm_session";

/// Roster of known accounts, written by the login page.
pub const USERS_KEY: &str = "gm_users";

/// Where deleted library items are remembered unless configured otherwise.
pub const DEFAULT_DELETED_KEY: &str = "gm_deleted_items";
