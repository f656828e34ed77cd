use std::path::Path;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::user::{NewUser, Role, User};
use crate::utils::time::parse_last_login;

/// In-memory account collection. Single source of truth for the page;
/// performs no field validation (the form controller owns that).
#[derive(Debug, Clone, Default)]
pub struct DirectoryService {
    users: Vec<User>,
}

impl DirectoryService {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    pub fn with_records(records: Vec<NewUser>) -> Self {
        let mut directory = Self::new();
        for record in records {
            directory.add(record);
        }
        directory
    }

    /// Seeds from the configured SEED_PATH, falling back to the built-in
    /// CargoPilot accounts.
    pub fn from_config() -> Result<Self> {
        let config = crate::config::get_config();
        let records = match &config.seed_path {
            Some(path) => load_seed(path)?,
            None => default_seed(),
        };
        Ok(Self::with_records(records))
    }

    pub fn add(&mut self, record: NewUser) -> User {
        let user = User {
            id: self.fresh_id(),
            name: record.name,
            email: record.email,
            role: record.role,
            active: record.active,
            last_login: record.last_login,
        };
        self.users.push(user.clone());
        user
    }

    pub fn update(&mut self, user: User) -> Result<User> {
        match self.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(user)
            }
            None => Err(Error::NotFound(format!("no account with id {}", user.id))),
        }
    }

    pub fn remove(&mut self, id: Uuid) -> Result<User> {
        match self.users.iter().position(|u| u.id == id) {
            Some(index) => Ok(self.users.remove(index)),
            None => Err(Error::NotFound(format!("no account with id {}", id))),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Insertion order.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    // v4 collisions are not a practical concern, but the uniqueness
    // invariant holds unconditionally.
    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

pub fn load_seed(path: &Path) -> Result<Vec<NewUser>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn default_seed() -> Vec<NewUser> {
    vec![
        NewUser {
            name: "Administrator".to_string(),
            email: "admin@cargopilot.com".to_string(),
            role: Role::SuperAdmin,
            active: true,
            last_login: parse_last_login("2025-05-05 08:45"),
        },
        NewUser {
            name: "Wati Susanti".to_string(),
            email: "wati@cargopilot.com".to_string(),
            role: Role::Admin,
            active: true,
            last_login: parse_last_login("2025-05-04 14:30"),
        },
        NewUser {
            name: "Hadi Gunawan".to_string(),
            email: "hadi@cargopilot.com".to_string(),
            role: Role::Viewer,
            active: true,
            last_login: parse_last_login("2025-05-05 10:15"),
        },
    ]
}
