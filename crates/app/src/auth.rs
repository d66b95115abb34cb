use dioxus::prelude::*;
use shared_types::AuthUser;

/// Global session state, filled from the session provider on startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Greeting for the signed-in user, recomputed when the session changes.
pub fn use_greeting() -> Memo<String> {
    let auth = use_auth();
    use_memo(move || AuthUser::greeting(auth.current_user.read().as_ref()))
}
