use std::cell::RefCell;
use std::rc::Rc;

use cargopilot_directory::models::user::Role;
use cargopilot_directory::services::directory_service::{default_seed, DirectoryService};
use cargopilot_directory::services::filter_service::RoleFilter;
use cargopilot_directory::services::notification_service::{Notifier, NotifyKind};
use cargopilot_directory::DirectoryPage;
use uuid::Uuid;

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<(NotifyKind, String)>>>);

impl Recorder {
    fn messages(&self) -> Vec<(NotifyKind, String)> {
        self.0.borrow().clone()
    }
}

impl Notifier for Recorder {
    fn notify(&self, kind: NotifyKind, message: &str) {
        self.0.borrow_mut().push((kind, message.to_string()));
    }
}

fn seeded_page() -> (DirectoryPage<Recorder>, Recorder) {
    let recorder = Recorder::default();
    let page = DirectoryPage::with_directory(
        DirectoryService::with_records(default_seed()),
        recorder.clone(),
    );
    (page, recorder)
}

#[test]
fn create_edit_delete_session() {
    let (mut page, recorder) = seeded_page();
    assert_eq!(page.directory.len(), 3);

    page.open_create();
    page.form.fields.name = "Siti Rahma".to_string();
    page.form.fields.email = "siti@cargopilot.com".to_string();
    page.form.fields.role = Role::Admin;
    page.form.fields.password = "changeme".to_string();
    page.save().expect("create");
    assert_eq!(page.directory.len(), 4);

    let siti = page
        .directory
        .list()
        .iter()
        .find(|u| u.email == "siti@cargopilot.com")
        .cloned()
        .expect("created account");
    assert_eq!(siti.last_login, None);

    page.open_edit(siti.id).expect("open edit");
    page.form.fields.active = false;
    page.save().expect("update");
    let stored = page.directory.get(siti.id).expect("still present");
    assert!(!stored.active);
    assert_eq!(stored.id, siti.id);

    page.delete(siti.id).expect("delete");
    assert_eq!(page.directory.len(), 3);

    let messages: Vec<String> = recorder.messages().into_iter().map(|(_, m)| m).collect();
    assert_eq!(
        messages,
        ["new account added", "account updated", "account removed"]
    );
    assert!(recorder
        .messages()
        .iter()
        .all(|(kind, _)| *kind == NotifyKind::Success));
}

#[test]
fn open_edit_of_a_missing_id_is_not_found() {
    let (mut page, _) = seeded_page();
    let err = page.open_edit(Uuid::new_v4()).expect_err("unknown id");
    assert!(err.is_not_found());
    assert!(!page.form.is_open());
}

#[test]
fn delete_of_a_missing_id_is_not_found_and_silent() {
    let (mut page, recorder) = seeded_page();
    let err = page.delete(Uuid::new_v4()).expect_err("unknown id");
    assert!(err.is_not_found());
    assert_eq!(page.directory.len(), 3);
    assert!(recorder.messages().is_empty());
}

#[test]
fn visible_reflects_search_and_role_filter() {
    let (mut page, _) = seeded_page();

    page.set_search("wati");
    assert_eq!(page.search(), "wati");
    let names: Vec<&str> = page.visible().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Wati Susanti"]);

    page.set_search("");
    page.set_role_filter(RoleFilter::Only(Role::Viewer));
    assert_eq!(page.role_filter(), RoleFilter::Only(Role::Viewer));
    let names: Vec<&str> = page.visible().iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["Hadi Gunawan"]);

    // The filter is a pure derivation, so a mutation shows up on the
    // next call without any cache to refresh.
    page.set_role_filter(RoleFilter::All);
    let admin_id = page.directory.list()[0].id;
    page.delete(admin_id).expect("delete");
    assert_eq!(page.visible().len(), 2);
}

#[test]
fn cancelled_dialog_saves_nothing() {
    let (mut page, recorder) = seeded_page();
    page.open_create();
    page.form.fields.name = "Ghost".to_string();
    page.cancel();

    assert_eq!(page.directory.len(), 3);
    assert!(recorder.messages().is_empty());
    assert!(!page.form.is_open());
}

#[test]
fn activity_log_is_a_fixed_feed() {
    let (page, _) = seeded_page();
    let feed = page.activity_log();
    assert_eq!(feed.len(), 3);
    assert_eq!(feed[0].action, "Shipment created");
    assert_eq!(feed[2].actor, "Hadi Gunawan");
}
