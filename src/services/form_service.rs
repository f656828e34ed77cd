use validator::{ValidationError, ValidationErrors};

use crate::dto::user_dto::UserDraft;
use crate::error::{Error, Result};
use crate::models::user::{NewUser, User};
use crate::utils::validation::validate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Closed,
    Creating,
    /// Holds the record being edited; its id and last_login are carried
    /// into the submitted record untouched.
    Editing(User),
}

/// What a successful submit hands to the save collaborator. The directory
/// assigns ids, so a create carries no id of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRequest {
    Create(NewUser),
    Update(User),
}

/// State machine behind the add/edit dialog.
#[derive(Debug, Clone)]
pub struct UserForm {
    state: FormState,
    pub fields: UserDraft,
}

impl Default for UserForm {
    fn default() -> Self {
        Self::new()
    }
}

impl UserForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            fields: UserDraft::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn open_create(&mut self) {
        self.state = FormState::Creating;
        self.fields = UserDraft::default();
    }

    pub fn open_edit(&mut self, user: &User) {
        self.state = FormState::Editing(user.clone());
        self.fields = UserDraft::from_user(user);
    }

    /// Discards the draft without saving anything.
    pub fn cancel(&mut self) {
        self.state = FormState::Closed;
        self.fields = UserDraft::default();
    }

    /// Validates the draft and hands the assembled record to `on_save`.
    /// The dialog closes only once `on_save` succeeds; a validation or
    /// save failure leaves it open with the draft intact.
    pub fn submit<F>(&mut self, on_save: F) -> Result<()>
    where
        F: FnOnce(SaveRequest) -> Result<()>,
    {
        let request = match &self.state {
            FormState::Closed => {
                return Err(Error::BadRequest("form is not open".to_string()));
            }
            FormState::Creating => {
                self.validate_draft(true)?;
                SaveRequest::Create(NewUser {
                    name: self.fields.name.clone(),
                    email: self.fields.email.clone(),
                    role: self.fields.role,
                    active: self.fields.active,
                    last_login: None,
                })
            }
            FormState::Editing(target) => {
                self.validate_draft(false)?;
                SaveRequest::Update(User {
                    id: target.id,
                    name: self.fields.name.clone(),
                    email: self.fields.email.clone(),
                    role: self.fields.role,
                    active: self.fields.active,
                    last_login: target.last_login,
                })
            }
        };

        on_save(request)?;
        self.cancel();
        Ok(())
    }

    fn validate_draft(&self, require_password: bool) -> Result<()> {
        let mut errors = match validate(&self.fields) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        if require_password && self.fields.password.is_empty() {
            let mut error = ValidationError::new("required");
            error.message = Some("password is required for new accounts".into());
            errors.add("password", error);
        }
        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }
}
