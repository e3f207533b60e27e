use std::time::Duration;

use egui::{Event, Modifiers, PointerButton, Pos2};
use egui_kittest::Harness;
use kittest::Queryable;
use roster_business::test_utils::sample_users_json;
use roster_ui::RosterApp;
use roster_ui::state::State;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub async fn new_app() -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(sample_users_json())).await
    }

    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::with_response(ResponseTemplate::new(status_code)).await
    }

    async fn with_response(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(1200.0, 800.0))
            .build_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, RosterApp> {
        &self.harness
    }

    /// Steps frames until `done` holds, sleeping between them so fetches can land.
    pub async fn step_until(&mut self, done: impl Fn(&Harness<'a, RosterApp>) -> bool) -> bool {
        for _ in 0..40 {
            self.harness.step();
            if done(&self.harness) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        false
    }

    /// Waits for the initial load to finish.
    pub async fn loaded(&mut self) -> bool {
        self.step_until(|harness| !harness.state().state.roster.is_loading())
            .await
    }

    /// Displayed user ids, top to bottom.
    #[allow(unused)]
    pub fn displayed_ids(&self) -> Vec<u64> {
        self.harness
            .state()
            .state
            .roster
            .rows()
            .displayed()
            .iter()
            .map(|user| user.id)
            .collect()
    }
}

/// Center of the single node labelled exactly `label`.
#[allow(unused)]
pub fn center_of(harness: &Harness<'_, RosterApp>, label: &str) -> Pos2 {
    harness
        .query_by_label(label)
        .unwrap_or_else(|| panic!("no node labelled {label:?}"))
        .rect()
        .center()
}

/// Center of the single node whose label contains `text`.
#[allow(unused)]
pub fn center_of_contains(harness: &Harness<'_, RosterApp>, text: &str) -> Pos2 {
    harness
        .query_by_label_contains(text)
        .unwrap_or_else(|| panic!("no node containing {text:?}"))
        .rect()
        .center()
}

#[allow(unused)]
pub fn pointer_moved(harness: &mut Harness<'_, RosterApp>, pos: Pos2) {
    harness.input_mut().events.push(Event::PointerMoved(pos));
    harness.step();
}

#[allow(unused)]
pub fn pointer_button(harness: &mut Harness<'_, RosterApp>, pos: Pos2, pressed: bool) {
    harness.input_mut().events.push(Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    });
    harness.step();
}

/// Frames for newly opened windows to finish sizing and anchoring.
const SETTLE_FRAMES: usize = 10;

/// Steps enough frames for layout to stop moving.
#[allow(unused)]
pub fn settle(harness: &mut Harness<'_, RosterApp>) {
    for _ in 0..SETTLE_FRAMES {
        harness.step();
    }
}

/// Center of the node labelled `label` once it stops moving between frames.
#[allow(unused)]
pub fn settled_center_of(harness: &mut Harness<'_, RosterApp>, label: &str) -> Pos2 {
    let mut last = center_of(harness, label);
    for _ in 0..60 {
        harness.step();
        let current = center_of(harness, label);
        if current == last {
            return current;
        }
        last = current;
    }
    last
}

/// Hover, press and release at `pos`, one frame each, then settles so whatever the
/// click opened is in its final place.
#[allow(unused)]
pub fn click_at(harness: &mut Harness<'_, RosterApp>, pos: Pos2) {
    pointer_moved(harness, pos);
    pointer_button(harness, pos, true);
    pointer_button(harness, pos, false);
    settle(harness);
}
