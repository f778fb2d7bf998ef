//! Authorization primitives.
//!
//! Controllers never decide permissions themselves. They name the permission
//! they need and hand it to a [`PermissionChecker`], whose denial aborts the
//! request with [`Error::PermissionDenied`].

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::{Error, Result};

/// A required permission: one name, or a list where any single match suffices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
    One(String),
    AnyOf(Vec<String>),
}

impl Permission {
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::One(name) => vec![name.as_str()],
            Self::AnyOf(names) => names.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Permission {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<String> for Permission {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl From<Vec<String>> for Permission {
    fn from(names: Vec<String>) -> Self {
        Self::AnyOf(names)
    }
}

impl From<Vec<&str>> for Permission {
    fn from(names: Vec<&str>) -> Self {
        Self::AnyOf(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Permission {
    fn from(names: [&str; N]) -> Self {
        Self::AnyOf(names.into_iter().map(str::to_string).collect())
    }
}

/// Checks the acting principal's permissions.
///
/// `id` scopes the check to a single resource (a category, for example).
pub trait PermissionChecker {
    fn check_permission(&self, permission: &Permission, id: Option<i64>) -> Result<()>;
}

/// Permissions granted to the acting user for the current request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionPermissions {
    pub user_id: Option<i64>,
    #[serde(default)]
    global: BTreeSet<String>,
    #[serde(default)]
    resources: HashMap<i64, BTreeSet<String>>,
}

impl SessionPermissions {
    pub fn new(user_id: Option<i64>) -> Self {
        Self {
            user_id,
            ..Self::default()
        }
    }

    /// Grant a permission everywhere.
    pub fn grant(mut self, name: impl Into<String>) -> Self {
        self.global.insert(name.into());
        self
    }

    /// Grant a permission for one resource only.
    pub fn grant_for(mut self, name: impl Into<String>, id: i64) -> Self {
        self.resources.entry(id).or_default().insert(name.into());
        self
    }

    /// Whether any of `names` is granted globally or, when `id` is set, on that resource.
    ///
    /// An empty list is never satisfied.
    pub fn has_any(&self, names: &[&str], id: Option<i64>) -> bool {
        let scoped = id.and_then(|id| self.resources.get(&id));
        names.iter().any(|name| {
            self.global.contains(*name) || scoped.is_some_and(|granted| granted.contains(*name))
        })
    }
}

impl PermissionChecker for SessionPermissions {
    fn check_permission(&self, permission: &Permission, id: Option<i64>) -> Result<()> {
        let names = permission.names();
        if self.has_any(&names, id) {
            return Ok(());
        }

        tracing::debug!(
            user_id = ?self.user_id,
            permission = ?names,
            resource_id = ?id,
            "Permission denied"
        );

        Err(Error::PermissionDenied {
            permissions: names.into_iter().map(str::to_string).collect(),
            resource_id: id,
        })
    }
}
