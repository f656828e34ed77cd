use cargopilot_directory::config::init_config;
use cargopilot_directory::models::user::Role;
use cargopilot_directory::services::filter_service::RoleFilter;
use cargopilot_directory::services::notification_service::{Notifier, NotifyKind, TracingNotifier};
use cargopilot_directory::utils::time::format_last_login;
use cargopilot_directory::DirectoryPage;
use tracing::info;

/// Walks the user-management page through a seeded session and logs the
/// results. The real shell drives the same handlers from its widgets.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;

    let mut page = DirectoryPage::new(TracingNotifier)?;
    info!("directory loaded with {} accounts", page.directory.len());

    page.open_create();
    page.form.fields.name = "Siti Rahma".to_string();
    page.form.fields.email = "siti@cargopilot.com".to_string();
    page.form.fields.role = Role::Admin;
    page.form.fields.password = "changeme".to_string();
    page.save()?;

    // An empty draft is rejected with field-level errors.
    page.open_create();
    if let Err(err) = page.save() {
        page.notifier.notify(NotifyKind::Error, &err.to_string());
        page.cancel();
    }

    page.set_search("cargopilot");
    page.set_role_filter(RoleFilter::Only(Role::Admin));
    for user in page.visible() {
        info!(
            name = %user.name,
            email = %user.email,
            role = %user.role,
            active = user.active,
            last_login = %format_last_login(user.last_login),
            "visible account"
        );
    }

    for entry in page.activity_log() {
        info!(
            timestamp = entry.timestamp,
            actor = entry.actor,
            action = entry.action,
            detail = entry.detail,
            "activity"
        );
    }

    Ok(())
}
