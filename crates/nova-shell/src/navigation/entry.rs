//! Navigation entry type.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Opaque glyph reference.
///
/// The shell only carries the identifier; the presentation layer decides
/// what it looks like.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(String);

impl IconId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One entry of the navigation drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Stable identifier (e.g., "dashboard").
    pub id: String,
    /// Display title.
    pub title: String,
    /// Route path; unique within a catalog.
    pub path: String,
    pub icon: IconId,
    /// Optional count shown next to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,
    /// When set, only users with exactly this role see the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_role: Option<Role>,
    /// Draw a divider below this entry.
    #[serde(default)]
    pub divider_after: bool,
}

impl NavigationEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        path: impl Into<String>,
        icon: impl Into<IconId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            path: path.into(),
            icon: icon.into(),
            badge: None,
            required_role: None,
            divider_after: false,
        }
    }

    pub fn with_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn requires(mut self, role: Role) -> Self {
        self.required_role = Some(role);
        self
    }

    pub fn divider_after(mut self) -> Self {
        self.divider_after = true;
        self
    }

    /// Unrestricted entries are visible to everyone; restricted ones only
    /// to the exact role.
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.required_role.is_none_or(|required| required == role)
    }

    /// A zero badge is not shown.
    pub fn visible_badge(&self) -> Option<u32> {
        self.badge.filter(|count| *count > 0)
    }
}
