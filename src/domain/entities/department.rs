//! Department entity.

use chrono::{DateTime, Utc};

/// A hospital department (e.g., Cardiology).
///
/// Department names are unique. Departments are soft-deleted via the
/// `is_active` flag because doctors and appointments reference them.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new department.
#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Partial update for an existing department.
///
/// `None` fields are left unchanged. `description: Some(None)` clears the
/// description; same for `image_url`.
#[derive(Debug, Clone, Default)]
pub struct DepartmentPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patch_changes_nothing() {
        let patch = DepartmentPatch::default();

        assert!(patch.name.is_none());
        assert!(patch.description.is_none());
        assert!(patch.image_url.is_none());
        assert!(patch.is_active.is_none());
    }

    #[test]
    fn test_patch_can_clear_description() {
        let patch = DepartmentPatch {
            description: Some(None),
            ..Default::default()
        };

        assert_eq!(patch.description, Some(None));
    }
}
