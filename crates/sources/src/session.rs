//! Session and authentication status.
//!
//! The record source is only reachable for an authenticated session. The
//! status is supplied by an external authentication collaborator; this
//! module only models the three states the UI distinguishes and the
//! minimal user profile the page keeps after stripping the session.

/// The fields of the signed-in user the application retains.
///
/// Everything else from the auth provider is dropped before the session
/// reaches the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl UserProfile {
    /// Profile for a local, non-web session (demo harness, CLI).
    pub fn local() -> Self {
        Self {
            name: Some("Local User".to_string()),
            email: None,
            image: None,
        }
    }

    /// Best display name: name, then email, then a placeholder.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("unknown user")
    }
}

/// Tri-state authentication status supplied by the session layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Session is still being established; show a loading indicator
    Loading,
    /// Signed in with the given profile
    Authenticated(UserProfile),
    /// Signed out; protected data is unreachable
    #[default]
    Unauthenticated,
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionStatus::Authenticated(_))
    }

    /// The signed-in profile, if any
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionStatus::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }
}
