/// Submission state for forms that call out to the auth layer
///
/// One enum instead of separate `loading` and `error` flags, so a form can
/// never be submitting and failed at the same time.
///
/// ```ignore
/// let mut state = use_signal(|| FormState::Idle);
/// state.set(FormState::Submitting);
/// match ctx.sign_in(email, password).await {
///     Ok(()) => state.set(FormState::Done),
///     Err(e) => state.set(FormState::Failed(e)),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    Done,
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Pick the submit button label for the current state
    pub fn label<'a>(&self, idle: &'a str, busy: &'a str) -> &'a str {
        if self.is_submitting() {
            busy
        } else {
            idle
        }
    }
}

impl<E: std::fmt::Display> From<Result<(), E>> for FormState {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => FormState::Done,
            Err(err) => FormState::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_queries() {
        assert!(!FormState::Idle.is_submitting());
        assert!(FormState::Submitting.is_submitting());
        assert_eq!(FormState::Failed("nope".to_string()).error(), Some("nope"));
        assert_eq!(FormState::Done.error(), None);
    }

    #[test]
    fn test_label() {
        assert_eq!(FormState::Idle.label("Sign In", "Signing in..."), "Sign In");
        assert_eq!(FormState::Submitting.label("Sign In", "Signing in..."), "Signing in...");
    }

    #[test]
    fn test_from_result() {
        let ok: Result<(), String> = Ok(());
        assert_eq!(FormState::from(ok), FormState::Done);
        let err: Result<(), String> = Err("Invalid email or password".to_string());
        assert_eq!(
            FormState::from(err).error(),
            Some("Invalid email or password")
        );
    }
}
