use super::*;
use crate::flows::fakes::{FakeSessions, FakeTeachers, RecordingNotifier, identity, session, teacher};
use crate::state::SessionState;
use chrono::NaiveDate;

struct Harness {
    sessions: Arc<FakeSessions>,
    notifier: Arc<RecordingNotifier>,
    state: SessionState,
    flow: SessionFormFlow,
}

fn harness() -> Harness {
    let sessions = Arc::new(FakeSessions::with(vec![session(1, 1, vec![2])]));
    let teachers = Arc::new(FakeTeachers { teachers: vec![teacher(1), teacher(2)] });
    let notifier = Arc::new(RecordingNotifier::default());
    let state = SessionState::new();
    let flow = SessionFormFlow::new(sessions.clone(), teachers, state.view(), notifier.clone());
    Harness { sessions, notifier, state, flow }
}

fn filled() -> SessionForm {
    SessionForm {
        name: "Yoga".to_owned(),
        date: "2025-03-20".to_owned(),
        teacher_id: Some(1),
        description: "Test".to_owned(),
    }
}

#[tokio::test]
async fn open_redirects_non_admin() {
    let h = harness();
    h.state.log_in(identity(3, false));
    assert_eq!(h.flow.open(FormMode::Create).await.unwrap(), Opened::Redirect(Route::Sessions));
}

#[tokio::test]
async fn open_create_starts_empty_with_teachers() {
    let h = harness();
    h.state.log_in(identity(1, true));

    let Opened::Ready(state) = h.flow.open(FormMode::Create).await.unwrap() else {
        panic!("admin should get the form");
    };
    assert_eq!(state.form, SessionForm::default());
    assert_eq!(state.teachers.len(), 2);
}

#[tokio::test]
async fn open_update_prefills_from_session() {
    let h = harness();
    h.state.log_in(identity(1, true));

    let Opened::Ready(state) = h.flow.open(FormMode::Update(1)).await.unwrap() else {
        panic!("admin should get the form");
    };
    assert_eq!(state.form.name, "Yoga 1");
    assert_eq!(state.form.date, "2025-03-20");
    assert_eq!(state.form.teacher_id, Some(1));
}

#[tokio::test]
async fn submit_create_notifies_and_routes() {
    let h = harness();
    h.state.log_in(identity(1, true));

    let route = h.flow.submit(FormMode::Create, &filled()).await.unwrap();

    assert_eq!(route, Route::Sessions);
    assert_eq!(h.notifier.messages(), vec!["Session created !"]);
    let saved = h.sessions.saved.lock().unwrap()[0].clone();
    assert_eq!(saved.date, NaiveDate::from_ymd_opt(2025, 3, 20).unwrap());
    assert_eq!(saved.teacher_id, 1);
}

#[tokio::test]
async fn submit_update_notifies_and_routes() {
    let h = harness();
    h.state.log_in(identity(1, true));

    let route = h.flow.submit(FormMode::Update(1), &filled()).await.unwrap();

    assert_eq!(route, Route::Sessions);
    assert_eq!(h.notifier.messages(), vec!["Session updated !"]);
    assert_eq!(h.sessions.calls(), vec!["update 1", "detail 1"]);
}

#[tokio::test]
async fn submit_invalid_form_skips_api() {
    let h = harness();
    h.state.log_in(identity(1, true));
    let form = SessionForm { name: String::new(), ..filled() };

    let err = h.flow.submit(FormMode::Create, &form).await.unwrap_err();

    assert!(matches!(err, FlowError::Invalid(_)));
    assert!(h.sessions.calls().is_empty());
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn submit_refused_for_non_admin() {
    let h = harness();
    h.state.log_in(identity(2, false));
    let err = h.flow.submit(FormMode::Create, &filled()).await.unwrap_err();
    assert!(matches!(err, FlowError::Forbidden(_)));
}
