pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::activity_log::{activity_feed, ActivityEntry};
use crate::models::user::User;
use crate::services::directory_service::DirectoryService;
use crate::services::filter_service::{self, RoleFilter};
use crate::services::form_service::{SaveRequest, UserForm};
use crate::services::notification_service::{Notifier, NotifyKind};

/// Everything the user-management page works against: the account
/// directory, the add/edit dialog and the active search/role filter.
/// All mutations run synchronously on the caller's thread.
pub struct DirectoryPage<N: Notifier> {
    pub directory: DirectoryService,
    pub form: UserForm,
    pub notifier: N,
    search: String,
    role_filter: RoleFilter,
}

impl<N: Notifier> DirectoryPage<N> {
    /// Builds the page with the configured seed (SEED_PATH, or the
    /// built-in CargoPilot accounts).
    pub fn new(notifier: N) -> Result<Self> {
        Ok(Self::with_directory(DirectoryService::from_config()?, notifier))
    }

    pub fn with_directory(directory: DirectoryService, notifier: N) -> Self {
        Self {
            directory,
            form: UserForm::new(),
            notifier,
            search: String::new(),
            role_filter: RoleFilter::All,
        }
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    pub fn open_edit(&mut self, id: Uuid) -> Result<()> {
        let user = self
            .directory
            .get(id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("no account with id {id}")))?;
        self.form.open_edit(&user);
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Submits the dialog, dispatching to add or update depending on
    /// whether an edit target was present when the form opened.
    pub fn save(&mut self) -> Result<()> {
        let directory = &mut self.directory;
        let notifier = &self.notifier;
        self.form.submit(|request| {
            match request {
                SaveRequest::Create(record) => {
                    directory.add(record);
                    notifier.notify(NotifyKind::Success, "new account added");
                }
                SaveRequest::Update(user) => {
                    directory.update(user)?;
                    notifier.notify(NotifyKind::Success, "account updated");
                }
            }
            Ok(())
        })
    }

    pub fn delete(&mut self, id: Uuid) -> Result<User> {
        let removed = self.directory.remove(id)?;
        self.notifier.notify(NotifyKind::Success, "account removed");
        Ok(removed)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_role_filter(&mut self, filter: RoleFilter) {
        self.role_filter = filter;
    }

    pub fn role_filter(&self) -> RoleFilter {
        self.role_filter
    }

    pub fn visible(&self) -> Vec<&User> {
        filter_service::visible(self.directory.list(), &self.search, self.role_filter)
    }

    pub fn activity_log(&self) -> &'static [ActivityEntry] {
        activity_feed()
    }
}
