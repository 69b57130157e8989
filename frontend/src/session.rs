use std::rc::Rc;

use crate::config::TOKEN_KEY;
use crate::error::{ApiError, ApiResult};
use crate::storage::KeyValueStore;

/// The signed-in user's credential. Holds the store, not the token, so every
/// read sees the current value.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn KeyValueStore>,
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Session {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Headers for an authenticated JSON request.
    pub fn auth_headers(&self) -> ApiResult<Vec<(&'static str, String)>> {
        let token = self.token().ok_or(ApiError::MissingToken)?;
        Ok(vec![
            ("Content-Type", "application/json".to_string()),
            ("Authorization", format!("Bearer {}", token)),
        ])
    }

    /// Forgets the token locally. There is no server-side session to end.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
    }
}

/// Clears the session and sends the browser to the sign-in page.
pub fn logout(session: &Session, sign_in_page: &str) {
    session.clear();
    log::info!("signed out");
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(sign_in_page);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn session_with(store: MemoryStorage) -> (Session, Rc<MemoryStorage>) {
        let store = Rc::new(store);
        (Session::new(store.clone()), store)
    }

    #[test]
    fn auth_headers_carry_bearer_token() {
        let (session, _) = session_with(MemoryStorage::new().with_item("token", "t0k3n"));
        let headers = session.auth_headers().unwrap();
        assert_eq!(
            headers,
            vec![
                ("Content-Type", "application/json".to_string()),
                ("Authorization", "Bearer t0k3n".to_string()),
            ]
        );
    }

    #[test]
    fn auth_headers_read_token_at_call_time() {
        let (session, store) = session_with(MemoryStorage::new().with_item("token", "first"));
        assert_eq!(session.auth_headers().unwrap()[1].1, "Bearer first");

        store.set("token", "second");
        assert_eq!(session.auth_headers().unwrap()[1].1, "Bearer second");
    }

    #[test]
    fn missing_token_is_an_error_not_bearer_null() {
        let (session, _) = session_with(MemoryStorage::new());
        assert_eq!(session.auth_headers(), Err(ApiError::MissingToken));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn blank_token_counts_as_signed_out() {
        let (session, _) = session_with(MemoryStorage::new().with_item("token", "  "));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clear_removes_the_token() {
        let (session, store) = session_with(MemoryStorage::new());
        store.set("token", "abc");
        assert!(session.is_authenticated());

        session.clear();
        assert_eq!(store.get("token"), None);
        assert!(!session.is_authenticated());
    }
}
