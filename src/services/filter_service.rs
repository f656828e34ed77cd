use crate::models::user::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn matches(&self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(wanted) => *wanted == role,
        }
    }
}

/// Derives the visible subset for the current search term and role filter.
/// Search matches name or email case-insensitively; an empty term matches
/// everything. Holds no state, so callers re-run it whenever an input
/// changes. Input order is preserved.
pub fn visible<'a>(users: &'a [User], search: &str, role_filter: RoleFilter) -> Vec<&'a User> {
    let needle = search.to_lowercase();
    users
        .iter()
        .filter(|user| {
            let matches_search = needle.is_empty()
                || user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle);
            matches_search && role_filter.matches(user.role)
        })
        .collect()
}
