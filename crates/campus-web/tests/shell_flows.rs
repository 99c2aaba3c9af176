//! End-to-end flows through the shell's public API with fake collaborators.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use campus_web::auth::SessionProvider;
use campus_web::config::{AUTH_PATH, DEFAULT_ROLE_LABEL};
use campus_web::shell::{
    active_destination, derive_display_identity, destination_entries, panel_presented,
    select_destination, sign_out, Navigator, PanelEvent, PanelState, SignOutOutcome, Viewport,
    DESTINATIONS,
};
use campus_web::types::Session;
use campus_web::{CampusError, Result};

#[derive(Default)]
struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

struct FakeSession {
    session: Option<Session>,
    reject_sign_out: bool,
    sign_out_calls: Cell<usize>,
}

impl FakeSession {
    fn signed_in(identity: &str, role: Option<&str>) -> Self {
        Self {
            session: Some(Session::new(identity, role.map(str::to_string))),
            reject_sign_out: false,
            sign_out_calls: Cell::new(0),
        }
    }

    fn rejecting(mut self) -> Self {
        self.reject_sign_out = true;
        self
    }
}

#[async_trait(?Send)]
impl SessionProvider for FakeSession {
    fn session(&self) -> Option<Session> {
        self.session.clone()
    }

    async fn sign_out(&self) -> Result<()> {
        self.sign_out_calls.set(self.sign_out_calls.get() + 1);
        if self.reject_sign_out {
            Err(CampusError::auth("session already revoked"))
        } else {
            Ok(())
        }
    }
}

#[test]
fn courses_location_highlights_only_courses() {
    let entries = destination_entries(DESTINATIONS, "/courses");

    let active: Vec<_> = entries.iter().filter(|e| e.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].destination.label, "Courses");
    assert!(entries
        .iter()
        .filter(|e| e.destination.label != "Courses")
        .all(|e| !e.active));
}

#[test]
fn selecting_students_from_open_drawer() {
    let navigator = RecordingNavigator::default();
    let panel = PanelState::default().apply(PanelEvent::OpenRequested);
    assert!(panel_presented(panel, Viewport::Narrow));

    let students = DESTINATIONS.iter().find(|d| d.path == "/students").unwrap();
    let panel = select_destination(&navigator, panel, students);

    assert_eq!(*navigator.visited.borrow(), ["/students"]);
    assert_eq!(panel, PanelState::Closed);
    assert!(!panel_presented(panel, Viewport::Narrow));
    assert!(panel_presented(panel, Viewport::Wide));
}

#[test]
fn overlay_and_close_control_close_the_drawer() {
    let open = PanelState::Closed.apply(PanelEvent::OpenRequested);
    assert_eq!(open, PanelState::Open);
    assert_eq!(open.apply(PanelEvent::CloseRequested), PanelState::Closed);
}

#[test]
fn admin_without_role_shows_fallback() {
    let provider = FakeSession::signed_in("admin@example.edu", None);
    let display = derive_display_identity(&provider.session().unwrap_or_default());

    assert_eq!(display.identity, "admin@example.edu");
    assert_eq!(display.role, DEFAULT_ROLE_LABEL);
}

#[test]
fn teacher_role_is_displayed() {
    let provider = FakeSession::signed_in("t@example.edu", Some("teacher"));
    let display = derive_display_identity(&provider.session().unwrap_or_default());
    assert_eq!(display.role, "teacher");

    let provider = FakeSession::signed_in("t@example.edu", Some(""));
    let display = derive_display_identity(&provider.session().unwrap_or_default());
    assert_eq!(display.role, DEFAULT_ROLE_LABEL);
}

#[test]
fn unknown_location_marks_nothing_active() {
    assert!(active_destination(DESTINATIONS, "/settings").is_none());
    assert!(destination_entries(DESTINATIONS, "/settings")
        .iter()
        .all(|e| !e.active));
}

#[tokio::test]
async fn sign_out_redirects_once() {
    let provider = FakeSession::signed_in("admin@example.edu", None);
    let navigator = RecordingNavigator::default();

    let outcome = sign_out(&provider, &navigator).await;

    assert!(outcome.is_completed());
    assert_eq!(provider.sign_out_calls.get(), 1);
    assert_eq!(*navigator.visited.borrow(), [AUTH_PATH]);
}

#[tokio::test]
async fn rejected_sign_out_still_redirects_once() {
    let provider = FakeSession::signed_in("admin@example.edu", None).rejecting();
    let navigator = RecordingNavigator::default();

    let outcome = sign_out(&provider, &navigator).await;

    assert!(matches!(
        outcome,
        SignOutOutcome::ProviderFailed(CampusError::Auth(_))
    ));
    assert_eq!(provider.sign_out_calls.get(), 1);
    assert_eq!(*navigator.visited.borrow(), [AUTH_PATH]);
}

#[tokio::test]
async fn default_sign_in_is_unsupported() {
    let provider = FakeSession::signed_in("admin@example.edu", None);
    let credentials = campus_web::types::Credentials {
        email: "admin@example.edu".to_string(),
        password: "hunter2".to_string(),
    };

    let result = provider.sign_in(credentials).await;
    assert!(matches!(result, Err(CampusError::Auth(_))));
}
