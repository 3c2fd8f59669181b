use std::collections::{HashMap, HashSet};

use parking_lot::RwLock;

/// Permission string meaning "no permission required"
pub const NO_PERMISSION: &str = "none";

/// Granted permissions per user id
#[derive(Debug, Default)]
pub struct PermissionStore {
    permissions: RwLock<HashMap<String, HashSet<String>>>,
}

impl PermissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, user_id: &str, permission: &str) {
        let mut permissions = self.permissions.write();

        permissions
            .entry(user_id.to_string())
            .or_insert_with(HashSet::new)
            .insert(permission.to_string());
    }

    /// Granted permissions of a user, sorted
    pub fn permissions_of(&self, user_id: &str) -> Vec<String> {
        let permissions = self.permissions.read();
        let mut granted: Vec<String> = permissions
            .get(user_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();

        granted.sort();
        granted
    }

    pub fn has_permission(&self, user_id: &str, permission: &str) -> bool {
        if permission.is_empty() || permission.eq_ignore_ascii_case(NO_PERMISSION) {
            return true;
        }

        let permissions = self.permissions.read();

        match permissions.get(user_id) {
            Some(granted) => granted.iter().any(|has| covers(has, permission)),
            None => false,
        }
    }
}

/// Whether the granted permission `has` covers `required`.
/// Segments are dot separated and compared case-insensitively, `*` matches the rest.
fn covers(has: &str, required: &str) -> bool {
    let has: Vec<&str> = has.split('.').collect();
    let required: Vec<&str> = required.split('.').collect();

    for (has_segment, required_segment) in has.iter().zip(required.iter()) {
        if !has_segment.eq_ignore_ascii_case(required_segment) {
            return *has_segment == "*";
        }
    }

    has.len() == required.len()
}
