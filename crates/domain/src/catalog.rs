use std::str::FromStr;

use modgate_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Module name whose grant applies to every real module.
pub const ALL_MODULES_SENTINEL: &str = "All";

/// Module that hosts catalog administration.
pub const SECURITY_MODULE: &str = "Security";

/// Standard module catalog of the trading front-end, in declaration order.
pub const DEFAULT_MODULES: &[&str] = &[
    "OrderEntry",
    "Enrichment",
    "Trade",
    "Confirmations",
    "Settlements",
    "Accounting",
    "StaticData",
    "MarketData",
    SECURITY_MODULE,
];

/// Identifier of any catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogId(Uuid);

impl CatalogId {
    /// Creates a random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an identifier from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }

    /// Returns the underlying UUID value.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    /// Parses a transport identifier, reporting missing and malformed values
    /// as validation errors against `field`.
    pub fn parse_required(field: &str, value: Option<&str>) -> AppResult<Self> {
        let value = value
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Validation(format!("{field} is required")))?;

        Uuid::parse_str(value)
            .map(Self)
            .map_err(|error| AppError::Validation(format!("{field} '{value}' is invalid: {error}")))
    }
}

impl Default for CatalogId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CatalogId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Access level a role may hold on a module.
///
/// `ReadWrite` strictly implies `Read`; no other levels exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionLevel {
    /// View-only access.
    Read,
    /// View and modify access.
    ReadWrite,
}

impl PermissionLevel {
    /// Returns the canonical catalog name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "READ",
            Self::ReadWrite => "READ_WRITE",
        }
    }

    /// Returns all known levels.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Read, Self::ReadWrite]
    }

    /// Returns whether holding this level satisfies `required`.
    #[must_use]
    pub fn satisfies(self, required: Self) -> bool {
        match self {
            Self::ReadWrite => true,
            Self::Read => required == Self::Read,
        }
    }
}

impl FromStr for PermissionLevel {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "READ" => Ok(Self::Read),
            "READ_WRITE" => Ok(Self::ReadWrite),
            _ => Err(AppError::Validation(format!(
                "unknown permission '{value}', expected READ or READ_WRITE"
            ))),
        }
    }
}

/// Lifecycle status carried by every catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CatalogStatus {
    /// Row participates in access decisions.
    Active,
    /// Row is soft-deleted and ignored by access decisions.
    Inactive,
}

impl CatalogStatus {
    /// Returns a stable storage value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }

    /// Returns whether the row participates in access decisions.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl FromStr for CatalogStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(AppError::Validation(format!(
                "unknown status '{value}', expected ACTIVE or INACTIVE"
            ))),
        }
    }
}

/// Catalog tables whose rows carry an administrable status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogEntryKind {
    /// Role rows.
    Role,
    /// Permission rows.
    Permission,
    /// Module rows.
    Module,
    /// Role to module permission mappings.
    RolePermission,
    /// User to role assignments.
    UserRole,
}

impl CatalogEntryKind {
    /// Returns a stable resource type label.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "catalog_role",
            Self::Permission => "catalog_permission",
            Self::Module => "catalog_module",
            Self::RolePermission => "catalog_role_permission",
            Self::UserRole => "catalog_user_role",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{CatalogId, CatalogStatus, PermissionLevel};

    #[test]
    fn catalog_id_requires_a_value() {
        assert!(CatalogId::parse_required("module_id", None).is_err());
        assert!(CatalogId::parse_required("module_id", Some("  ")).is_err());
        assert!(CatalogId::parse_required("module_id", Some("not-a-uuid")).is_err());

        let id = CatalogId::new();
        let parsed = CatalogId::parse_required("module_id", Some(id.to_string().as_str()));
        assert_eq!(parsed.ok(), Some(id));
    }

    #[test]
    fn permission_level_parses_canonical_names_only() {
        assert_eq!(
            PermissionLevel::from_str("READ_WRITE").ok(),
            Some(PermissionLevel::ReadWrite)
        );
        assert!(PermissionLevel::from_str("read").is_err());
        assert!(PermissionLevel::from_str("WRITE").is_err());
    }

    #[test]
    fn read_write_satisfies_read_but_not_the_reverse() {
        assert!(PermissionLevel::ReadWrite.satisfies(PermissionLevel::Read));
        assert!(PermissionLevel::ReadWrite.satisfies(PermissionLevel::ReadWrite));
        assert!(PermissionLevel::Read.satisfies(PermissionLevel::Read));
        assert!(!PermissionLevel::Read.satisfies(PermissionLevel::ReadWrite));
    }

    #[test]
    fn status_storage_value_roundtrips() {
        let restored = CatalogStatus::from_str(CatalogStatus::Inactive.as_str());
        assert_eq!(restored.ok(), Some(CatalogStatus::Inactive));
    }
}
