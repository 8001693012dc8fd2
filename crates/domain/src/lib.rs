//! Domain vocabulary and access policy for the module catalog.

#![forbid(unsafe_code)]

mod catalog;
mod policy;
mod security;

pub use catalog::{
    ALL_MODULES_SENTINEL, CatalogEntryKind, CatalogId, CatalogStatus, DEFAULT_MODULES,
    PermissionLevel, SECURITY_MODULE,
};
pub use policy::{ModuleGrant, evaluate_access, is_module_visible, resolve_active_selection};
pub use security::AuditAction;
