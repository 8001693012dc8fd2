use serde::{Deserialize, Serialize};

/// Coarse caller discriminator supplied by the trusted identity layer.
///
/// The tag takes precedence over the role catalog: `Admin` bypasses it and
/// `Viewer` has a fixed navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleTag {
    /// Privileged operator, never subject to the catalog.
    Admin,
    /// Read-only observer of every module except security administration.
    Viewer,
    /// Any other caller; evaluated against the catalog.
    Standard,
}

impl RoleTag {
    /// Returns the transport literal for this tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Viewer => "VIEWER",
            Self::Standard => "STANDARD",
        }
    }

    /// Maps a transport literal onto a tag.
    ///
    /// Only the exact `ADMIN` and `VIEWER` literals are privileged; anything
    /// else, including a missing value, is `Standard`.
    #[must_use]
    pub fn from_transport(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("ADMIN") => Self::Admin,
            Some("VIEWER") => Self::Viewer,
            _ => Self::Standard,
        }
    }
}

/// Trusted caller identity threaded into every decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    user_id: String,
    role_tag: RoleTag,
}

impl CallerIdentity {
    /// Creates a caller identity from an external user id and role tag.
    #[must_use]
    pub fn new(user_id: impl Into<String>, role_tag: RoleTag) -> Self {
        Self {
            user_id: user_id.into(),
            role_tag,
        }
    }

    /// Returns the opaque external user id.
    #[must_use]
    pub fn user_id(&self) -> &str {
        self.user_id.as_str()
    }

    /// Returns the coarse role tag.
    #[must_use]
    pub fn role_tag(&self) -> RoleTag {
        self.role_tag
    }
}
