use serde_json::Value;
use shared::{
    keys::{SESSION_KEY, USERS_KEY},
    session::{Session, UserRecord},
};
use tracing::{debug, warn};

use crate::{
    error::Result,
    traits::{CapabilityProvider, KeyValueStore},
};

/// Whether the current user is an admin or moderator.
///
/// Host capabilities are asked first, then the stored session is looked up in
/// the user directory. Missing or corrupted data at any step means `false`.
pub fn is_staff<S, C>(store: &S, capabilities: Option<&C>) -> bool
where
    S: KeyValueStore + ?Sized,
    C: CapabilityProvider + ?Sized,
{
    if let Some(caps) = capabilities {
        if caps.is_admin() || caps.is_mod() {
            return true;
        }
    }

    match stored_role_is_staff(store) {
        Ok(staff) => staff,
        Err(e) => {
            warn!("Ignoring unreadable account data: {}", e);
            false
        }
    }
}

fn stored_role_is_staff<S: KeyValueStore + ?Sized>(store: &S) -> Result<bool> {
    let Some(session) = read_session(store)? else {
        debug!("No session stored");
        return Ok(false);
    };
    if session.email.is_empty() {
        debug!("Session has no email");
        return Ok(false);
    }

    let users = read_users(store)?;
    let staff = users
        .iter()
        .find(|user| user.has_email(&session.email))
        .is_some_and(UserRecord::is_staff);
    debug!("Session {} staff: {}", session.email, staff);
    Ok(staff)
}

/// The stored session; `null` or a missing key means nobody is signed in.
pub fn read_session<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Session>> {
    match store.get(SESSION_KEY) {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(None),
    }
}

/// The stored user directory, one record per entry and in stored order.
/// Damaged entries keep their place with the unreadable fields left empty.
pub fn read_users<S: KeyValueStore + ?Sized>(store: &S) -> Result<Vec<UserRecord>> {
    let Some(json) = store.get(USERS_KEY) else {
        return Ok(vec![]);
    };
    let entries: Option<Vec<Value>> = serde_json::from_str(&json)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| UserRecord::from_value_lossy(&entry))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{store::MemoryStore, traits::StaticCapabilities};

    const NO_CAPS: Option<&StaticCapabilities> = None;

    fn store(session: &str, users: &str) -> MemoryStore {
        MemoryStore::new()
            .with(SESSION_KEY, session)
            .with(USERS_KEY, users)
    }

    #[test]
    fn admin_capability_wins_over_storage() {
        let caps = StaticCapabilities {
            admin: true,
            moderator: false,
        };
        assert!(is_staff(&store("garbage", "garbage"), Some(&caps)));
        assert!(is_staff(&MemoryStore::new(), Some(&caps)));
    }

    #[test]
    fn mod_capability_is_enough() {
        let caps = StaticCapabilities {
            admin: false,
            moderator: true,
        };
        assert!(is_staff(&MemoryStore::new(), Some(&caps)));
    }

    #[test]
    fn false_capabilities_fall_back_to_directory() {
        let caps = StaticCapabilities::default();
        let store = store(
            r#"{"email":"a@x.com"}"#,
            r#"[{"email":"a@x.com","role":"admin"}]"#,
        );
        assert!(is_staff(&store, Some(&caps)));
    }

    #[test]
    fn moderator_found_in_directory() {
        let store = store(
            r#"{"email":"a@x.com"}"#,
            r#"[{"email":"b@x.com","role":"admin"},{"email":"a@x.com","role":"mod"}]"#,
        );
        assert!(is_staff(&store, NO_CAPS));
    }

    #[test]
    fn regular_user_is_not_staff() {
        let store = store(
            r#"{"email":"a@x.com"}"#,
            r#"[{"email":"a@x.com","role":"user"}]"#,
        );
        assert!(!is_staff(&store, NO_CAPS));
    }

    #[test]
    fn email_match_is_exact() {
        let store = store(
            r#"{"email":"A@x.com"}"#,
            r#"[{"email":"a@x.com","role":"admin"}]"#,
        );
        assert!(!is_staff(&store, NO_CAPS));
    }

    #[test]
    fn first_matching_user_decides() {
        let store = store(
            r#"{"email":"a@x.com"}"#,
            r#"[{"email":"a@x.com","role":"user"},{"email":"a@x.com","role":"admin"}]"#,
        );
        assert!(!is_staff(&store, NO_CAPS));
    }

    #[test]
    fn no_session_is_not_staff() {
        assert!(!is_staff(&MemoryStore::new(), NO_CAPS));
        let store = store("null", r#"[{"email":"a@x.com","role":"admin"}]"#);
        assert!(!is_staff(&store, NO_CAPS));
    }

    #[test]
    fn corrupted_storage_is_not_staff() {
        assert!(!is_staff(&store("{not json", "[]"), NO_CAPS));
        assert!(!is_staff(&store(r#"{"email":"a@x.com"}"#, "not json"), NO_CAPS));
        assert!(!is_staff(&store(r#"{"email":"a@x.com"}"#, r#"{"a":1}"#), NO_CAPS));
    }

    #[test]
    fn first_match_without_staff_role_denies() {
        for first in [
            r#"{"email":"a@x.com","role":null}"#,
            r#"{"email":"a@x.com","role":1}"#,
            r#"{"email":"a@x.com"}"#,
        ] {
            let users = format!(r#"[{first},{{"email":"a@x.com","role":"admin"}}]"#);
            let accounts = store(r#"{"email":"a@x.com"}"#, &users);
            assert!(!is_staff(&accounts, NO_CAPS), "staff granted after {first}");
        }
    }

    #[test]
    fn record_without_email_never_matches() {
        let missing = store(r#"{"email":""}"#, r#"[{"role":"admin"}]"#);
        assert!(!is_staff(&missing, NO_CAPS));

        let blank = store(r#"{"email":""}"#, r#"[{"email":"","role":"admin"}]"#);
        assert!(!is_staff(&blank, NO_CAPS));
    }

    #[test]
    fn non_object_directory_entries_match_nothing() {
        let store = store(
            r#"{"email":"a@x.com"}"#,
            r#"[42, "x", {"email":"a@x.com","role":"mod"}]"#,
        );
        assert!(is_staff(&store, NO_CAPS));
    }
}
