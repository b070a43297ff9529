//! # Resources
//!
//! The seam between the access engine and whatever stores content. Anything
//! that can name its owner and expose its access configuration can be
//! evaluated and filtered.

use serde::{Deserialize, Serialize};
use share_org::OwnerRef;

use crate::config::AccessConfig;

/// A resource guarded by a per-resource access configuration.
pub trait Resource {
    /// Snapshot of the owning account.
    fn owner(&self) -> OwnerRef;

    /// The resource's current access configuration.
    fn access(&self) -> &AccessConfig;
}

impl<R: Resource + ?Sized> Resource for &R {
    fn owner(&self) -> OwnerRef {
        (**self).owner()
    }

    fn access(&self) -> &AccessConfig {
        (**self).access()
    }
}

/// Minimal resource snapshot: owner plus access configuration.
///
/// # Example
///
/// ```
/// use share_access::{AccessConfig, Resource, ResourceView};
/// use share_org::OwnerRef;
/// use uuid::Uuid;
///
/// let owner = OwnerRef::new(Uuid::now_v7(), None);
/// let view = ResourceView::new(owner, AccessConfig::default());
/// assert_eq!(view.owner(), owner);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ResourceView {
    /// Owning account.
    pub owner: OwnerRef,
    /// Access configuration.
    pub access: AccessConfig,
}

impl ResourceView {
    /// Create a view from its parts.
    pub fn new(owner: OwnerRef, access: AccessConfig) -> Self {
        Self { owner, access }
    }

    /// Snapshot any resource.
    pub fn of<R: Resource>(resource: &R) -> Self {
        Self::new(resource.owner(), *resource.access())
    }
}

impl Resource for ResourceView {
    fn owner(&self) -> OwnerRef {
        self.owner
    }

    fn access(&self) -> &AccessConfig {
        &self.access
    }
}
