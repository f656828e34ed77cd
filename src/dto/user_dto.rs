use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{Role, User};

/// Working fields of the add/edit dialog. Validated as a whole on submit;
/// the password rule is conditional and lives in the form controller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserDraft {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "email is required"),
        email(message = "email must be a valid address")
    )]
    pub email: String,
    pub role: Role,
    pub active: bool,
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::Viewer,
            active: true,
            password: String::new(),
        }
    }
}

impl UserDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            active: user.active,
            password: String::new(),
        }
    }
}
