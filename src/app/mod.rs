// SPDX-License-Identifier: MPL-2.0
//! Page orchestration.
//!
//! The `App` owns the [`Page`] and every component's state. It runs the
//! integrity checks, wires listeners once per node, routes host input to
//! components and runs due timers. Initialization moves it through
//! [`Lifecycle`]; the transient components (toasts, modals, loading,
//! progress, drawers, goal toggling) stay callable in every state, even
//! when initialization failed.

mod dispatch;
mod integrity;
mod listeners;
mod wiring;

pub use dispatch::{DispatchOutcome, Key};
pub use integrity::IntegrityReport;
pub use listeners::{Behavior, DocumentBehavior, ListenerRegistry, Trigger};

use crate::config::Config;
use crate::dom::{Document, NodeId};
use crate::error::{Error, Result};
use crate::events::{EventBus, SprintEvent};
use crate::page::Page;
use crate::scheduler::Task;
use crate::ui::actions::ActionRunner;
use crate::ui::autosave::AutoSave;
use crate::ui::loading::{self, LoadingHandle};
use crate::ui::modal::{Modal, Modals};
use crate::ui::notifications::{Manager, ToastId, ToastOptions};
use crate::ui::progress::Animator;
use crate::ui::sticky::StickyObserver;
use crate::ui::toggles::goal;
use crate::ui::{drawer, nav};

/// Initialization state of an [`App`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    /// Integrity checks passed and listeners are wired.
    Ready,
    TornDown,
}

/// Options for a manual [`App::init`].
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Replaces the app's configuration before the checks run.
    pub config: Option<Config>,
}

impl InitOptions {
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            config: Some(config),
        }
    }
}

#[derive(Debug)]
pub struct App {
    page: Page,
    registry: ListenerRegistry,
    lifecycle: Lifecycle,
    manual_init: bool,
    auto_init_done: bool,
    toasts: Manager,
    modals: Modals,
    progress: Animator,
    sticky: Vec<StickyObserver>,
    autosave: AutoSave,
    actions: ActionRunner,
}

impl App {
    #[must_use]
    pub fn new(document: Document, config: Config) -> Self {
        Self::with_toasts(document, config, Manager::new())
    }

    /// Like [`App::new`] with deterministic toast ids.
    #[must_use]
    pub fn with_seed(document: Document, config: Config, seed: u64) -> Self {
        Self::with_toasts(document, config, Manager::with_seed(seed))
    }

    fn with_toasts(document: Document, config: Config, toasts: Manager) -> Self {
        Self {
            page: Page::new(document, config),
            registry: ListenerRegistry::new(),
            lifecycle: Lifecycle::Uninitialized,
            manual_init: false,
            auto_init_done: false,
            toasts,
            modals: Modals::new(),
            progress: Animator::new(),
            sticky: Vec::new(),
            autosave: AutoSave::new(),
            actions: ActionRunner::new(),
        }
    }

    // --- Lifecycle ---

    /// Manual initialization. Marks the app as manually initialized, which
    /// suppresses a later [`App::document_ready`] run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Integrity`] with every error found when the markup
    /// contract is broken. Nothing is wired in that case.
    pub fn init(&mut self, options: InitOptions) -> Result<IntegrityReport> {
        self.manual_init = true;
        if let Some(config) = options.config {
            self.page.set_config(config);
        }
        self.run_init()
    }

    /// Document-ready hook. Runs initialization once, unless a manual init
    /// already happened; returns `None` when skipped.
    pub fn document_ready(&mut self) -> Option<Result<IntegrityReport>> {
        if self.manual_init || self.auto_init_done {
            return None;
        }
        self.auto_init_done = true;
        Some(self.run_init())
    }

    /// Moves a ready app to [`Lifecycle::TornDown`] and publishes
    /// `teardown`. Wired listeners stay attached. Returns `false` when the
    /// app was not ready.
    pub fn teardown(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Ready {
            return false;
        }
        self.lifecycle = Lifecycle::TornDown;
        tracing::debug!("page torn down");
        self.page.publish(SprintEvent::Teardown);
        true
    }

    fn run_init(&mut self) -> Result<IntegrityReport> {
        let report = integrity::check(&mut self.page);

        if !report.is_ok() {
            for error in &report.errors {
                tracing::error!(%error, "integrity check failed");
            }
            self.page.publish(SprintEvent::IntegrityFail {
                errors: report.errors.clone(),
            });
            return Err(Error::Integrity(report.errors));
        }

        if !report.warnings.is_empty() {
            for warning in &report.warnings {
                tracing::warn!(%warning, "integrity warning");
            }
            self.page.publish(SprintEvent::IntegrityWarn {
                warnings: report.warnings.clone(),
            });
        }

        self.wire_all();
        self.lifecycle = Lifecycle::Ready;
        let pathname = self.page.pathname().to_string();
        tracing::debug!(%pathname, listeners = self.registry.len(), "page ready");
        self.page.publish(SprintEvent::PageReady { pathname });
        Ok(report)
    }

    // --- Public component API ---

    /// Shows a toast. Accepts a bare message or [`ToastOptions`].
    pub fn notify(&mut self, options: impl Into<ToastOptions>) -> ToastId {
        self.toasts.notify(&mut self.page, options.into())
    }

    /// Sets or, with `None`, inverts the goal card with stable id `id`.
    /// Returns the new state, or `None` when no card has that id.
    pub fn toggle_goal(&mut self, id: &str, state: Option<bool>) -> Option<bool> {
        let Some(card) = goal::find(&self.page.document, id) else {
            tracing::warn!(%id, "no goal card with this id");
            return None;
        };
        Some(goal::toggle(&mut self.page, card, state))
    }

    pub fn open_drawer(&mut self, id: Option<&str>) -> Option<String> {
        drawer::open(&mut self.page, id)
    }

    pub fn close_drawer(&mut self) -> Vec<String> {
        drawer::close_all(&mut self.page)
    }

    /// Appends a modal and wires its close button, backdrop and Escape key.
    /// Returns the overlay node.
    pub fn show_modal(&mut self, title: &str, content: &str) -> NodeId {
        let overlay = self.modals.show(&mut self.page, title, content);
        if let Some(modal) = self.modals.get(overlay) {
            self.registry
                .attach(modal.close_button(), Behavior::ModalClose(overlay));
        }
        self.registry.attach(overlay, Behavior::ModalBackdrop(overlay));
        self.registry
            .attach_document(DocumentBehavior::ModalEscape(overlay));
        overlay
    }

    /// Starts closing the modal and removes its Escape listener. Returns
    /// `false` if it was already closing or is unknown.
    pub fn close_modal(&mut self, overlay: NodeId) -> bool {
        self.registry
            .detach_document(DocumentBehavior::ModalEscape(overlay));
        self.modals.close(&mut self.page, overlay)
    }

    /// Puts `node` into its loading state; see [`loading::show`].
    pub fn show_loading(&mut self, node: NodeId, text: Option<&str>) -> LoadingHandle {
        loading::show(&mut self.page.document, node, text)
    }

    pub fn restore_loading(&mut self, handle: LoadingHandle) {
        handle.restore(&mut self.page.document);
    }

    pub fn animate_progress_bar(&mut self, bar: NodeId, target_percent: f64, duration_ms: Option<u64>) {
        self.progress
            .start(&mut self.page, bar, target_percent, duration_ms);
    }

    /// Re-runs navigation highlighting. Returns the active link.
    pub fn highlight_nav(&mut self) -> Option<NodeId> {
        nav::highlight(&mut self.page)
    }

    // --- Clock ---

    /// Advances the virtual clock by `ms`, running every task that falls
    /// due. Returns the number of tasks run.
    pub fn advance(&mut self, ms: u64) -> usize {
        let until = self.page.scheduler.now().saturating_add(ms);
        let mut ran = 0;
        while let Some((_, task)) = self.page.scheduler.pop_due(until) {
            self.run_task(task);
            ran += 1;
        }
        self.page.scheduler.settle(until);
        ran
    }

    /// Advances until no task is pending.
    pub fn run_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while let Some(deadline) = self.page.scheduler.next_deadline() {
            let wait = deadline.saturating_sub(self.page.scheduler.now());
            ran += self.advance(wait);
        }
        ran
    }

    fn run_task(&mut self, task: Task) {
        tracing::trace!(?task, now = self.page.scheduler.now(), "running task");
        let page = &mut self.page;
        match task {
            Task::HighlightNav => {
                nav::highlight(page);
            }
            Task::ToastShow(id) => self.toasts.show(page, &id),
            Task::ToastHide(id) => self.toasts.hide(page, &id),
            Task::ToastRemove(id) => self.toasts.remove(page, &id),
            Task::ModalOpen(overlay) => self.modals.open(page, overlay),
            Task::ModalRemove(overlay) => {
                if let Some(close_button) = self.modals.get(overlay).map(Modal::close_button) {
                    self.registry
                        .detach(close_button, Behavior::ModalClose(overlay));
                }
                self.registry
                    .detach(overlay, Behavior::ModalBackdrop(overlay));
                self.modals.remove(page, overlay);
            }
            Task::AutoSave => self.autosave.fire(page, &mut self.toasts),
            Task::ProgressFrame { bar, generation } => self.progress.frame(page, bar, generation),
            Task::ActionComplete(button) => self.actions.complete(page, &mut self.toasts, button),
        }
    }

    // --- Accessors ---

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn is_manual_init(&self) -> bool {
        self.manual_init
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.page.document
    }

    /// Mutable document access for hosts that change markup between inits.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.page.document
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.page.bus
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.page.config
    }

    #[must_use]
    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }

    #[must_use]
    pub fn toasts(&self) -> &Manager {
        &self.toasts
    }

    #[must_use]
    pub fn modals(&self) -> &Modals {
        &self.modals
    }

    #[must_use]
    pub fn autosave(&self) -> &AutoSave {
        &self.autosave
    }

    #[must_use]
    pub fn sticky_observers(&self) -> &[StickyObserver] {
        &self.sticky
    }

    /// Virtual milliseconds elapsed.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.page.scheduler.now()
    }

    /// Due time of the next pending task.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.page.scheduler.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::query;
    use crate::events::{EventName, PillGroup};
    use crate::test_utils::{init_tracing, sample_document, EventRecorder};
    use crate::ui::toggles::{self, character, menu, pills};

    fn ready_app() -> (App, EventRecorder) {
        init_tracing();
        let mut app = App::with_seed(sample_document(), Config::default(), 7);
        let recorder = EventRecorder::attach(app.bus_mut());
        app.document_ready()
            .expect("first document-ready runs")
            .expect("sample page passes integrity");
        (app, recorder)
    }

    #[test]
    fn document_ready_wires_and_publishes_ready() {
        let (app, recorder) = ready_app();
        assert_eq!(app.lifecycle(), Lifecycle::Ready);
        assert!(!app.registry().is_empty());
        assert_eq!(recorder.count(EventName::PageReady), 1);
        assert_eq!(recorder.count(EventName::IntegrityFail), 0);
    }

    #[test]
    fn document_ready_runs_once() {
        let (mut app, _) = ready_app();
        assert!(app.document_ready().is_none());
    }

    #[test]
    fn manual_init_suppresses_document_ready() {
        let mut app = App::with_seed(sample_document(), Config::default(), 7);
        app.init(InitOptions::default()).expect("init");
        assert!(app.is_manual_init());
        assert!(app.document_ready().is_none());
    }

    #[test]
    fn init_options_replace_config() {
        let mut app = App::with_seed(sample_document(), Config::default(), 7);
        let mut config = Config::default();
        config.toast.timeout_ms = Some(500);
        app.init(InitOptions::with_config(config)).expect("init");
        assert_eq!(app.config().toast.timeout_ms(), 500);
    }

    #[test]
    fn missing_page_marker_aborts_wiring() {
        let mut doc = sample_document();
        let body = doc.body();
        doc.remove_attr(body, "data-page");
        let mut app = App::with_seed(doc, Config::default(), 7);
        let recorder = EventRecorder::attach(app.bus_mut());

        let err = app.init(InitOptions::default()).expect_err("must fail");
        assert!(matches!(err, Error::Integrity(ref errors) if !errors.is_empty()));
        assert!(app.registry().is_empty());
        assert_eq!(app.lifecycle(), Lifecycle::Uninitialized);
        assert_eq!(recorder.count(EventName::IntegrityFail), 1);
        assert_eq!(recorder.count(EventName::PageReady), 0);
    }

    #[test]
    fn failed_init_leaves_transient_components_callable() {
        let mut doc = sample_document();
        let body = doc.body();
        doc.remove_attr(body, "data-page");
        let mut app = App::with_seed(doc, Config::default(), 7);
        assert!(app.init(InitOptions::default()).is_err());

        let id = app.notify("still works");
        assert!(app.toasts().get(&id).is_some());
        let overlay = app.show_modal("Title", "Body");
        assert!(app.document().is_connected(overlay));
        assert_eq!(app.toggle_goal("goal-launch", Some(true)), Some(true));
    }

    #[test]
    fn second_init_does_not_double_fire() {
        let (mut app, recorder) = ready_app();
        let wired = app.registry().len();
        app.init(InitOptions::default()).expect("re-init");
        assert_eq!(app.registry().len(), wired);
        assert_eq!(app.sticky_observers().len(), 1);

        let card = goal::find(app.document(), "goal-launch").expect("card");
        app.click(card);
        assert_eq!(recorder.count(EventName::GoalToggle), 1);
    }

    #[test]
    fn teardown_only_from_ready() {
        let mut app = App::with_seed(sample_document(), Config::default(), 7);
        assert!(!app.teardown());
        app.init(InitOptions::default()).expect("init");
        assert!(app.teardown());
        assert!(!app.teardown());
        assert_eq!(app.lifecycle(), Lifecycle::TornDown);

        app.init(InitOptions::default()).expect("re-init after teardown");
        assert_eq!(app.lifecycle(), Lifecycle::Ready);
    }

    #[test]
    fn listeners_survive_teardown() {
        let (mut app, recorder) = ready_app();
        app.teardown();
        let card = goal::find(app.document(), "goal-launch").expect("card");
        app.click(card);
        assert_eq!(recorder.count(EventName::GoalToggle), 1);
    }

    #[test]
    fn toggle_goal_unknown_id_is_none() {
        let (mut app, recorder) = ready_app();
        assert_eq!(app.toggle_goal("nope", None), None);
        assert_eq!(recorder.count(EventName::GoalToggle), 0);
    }

    #[test]
    fn keyboard_activation_prevents_default() {
        let (mut app, recorder) = ready_app();
        let card = goal::find(app.document(), "goal-launch").expect("card");
        let outcome = app.key_down(card, " ");
        assert!(outcome.default_prevented);
        assert!(toggles::is_selected(app.document(), card));

        let outcome = app.key_down(card, "a");
        assert!(!outcome.default_prevented);
        assert_eq!(recorder.count(EventName::GoalToggle), 1);
    }

    #[test]
    fn disabled_toggle_ignores_keyboard_activation() {
        let (mut app, recorder) = ready_app();
        let card = goal::find(app.document(), "goal-launch").expect("card");
        app.document_mut().set_disabled(card, true);

        assert_eq!(app.click(card).handled, 0);
        let outcome = app.key_down(card, "Enter");
        assert_eq!(outcome.handled, 0);
        assert!(!outcome.default_prevented);
        assert_eq!(app.key_down(card, " ").handled, 0);
        assert!(!toggles::is_selected(app.document(), card));
        assert_eq!(recorder.count(EventName::GoalToggle), 0);
    }

    #[test]
    fn style_pill_click_toggles_independently() {
        let (mut app, recorder) = ready_app();
        let group = pills::style_pills(app.document());

        assert_eq!(app.click(group[0]).handled, 1);
        assert_eq!(app.click(group[1]).handled, 1);
        assert!(group.iter().all(|pill| toggles::is_selected(app.document(), *pill)));
        let first_change = recorder
            .events()
            .into_iter()
            .find(|e| e.name() == EventName::PillChange);
        assert_eq!(
            first_change,
            Some(SprintEvent::PillChange {
                pill: "bold".into(),
                group: PillGroup::Style,
                selected: true,
            })
        );

        app.click(group[0]);
        assert!(!toggles::is_selected(app.document(), group[0]));
        assert_eq!(recorder.count(EventName::PillChange), 3);
    }

    #[test]
    fn character_card_selects_from_keyboard() {
        let (mut app, recorder) = ready_app();
        let cards = character::cards(app.document());
        app.click(cards[0]);

        let outcome = app.key_down(cards[1], "Enter");
        assert_eq!(outcome.handled, 1);
        assert!(outcome.default_prevented);
        assert!(toggles::is_selected(app.document(), cards[1]));
        assert!(!toggles::is_selected(app.document(), cards[0]));

        let preview = query::find_component(app.document(), character::PREVIEW_COMPONENT, None)
            .expect("preview");
        assert_eq!(app.document().text_content(preview), "Grace");
        assert_eq!(
            recorder.events().last(),
            Some(&SprintEvent::CharacterSelect { id: "grace".into() })
        );
        assert_eq!(recorder.count(EventName::CharacterSelect), 2);
    }

    #[test]
    fn mobile_menu_toggle_opens_by_click_and_closes_by_space() {
        let (mut app, recorder) = ready_app();
        let toggle = menu::toggles(app.document())[0];
        let panel = menu::controlled_menu(app.document(), toggle).expect("menu");

        assert_eq!(app.click(toggle).handled, 1);
        assert!(menu::is_expanded(app.document(), toggle));
        assert!(app.document().has_class(panel, menu::OPEN_CLASS));

        assert!(app.key_down(toggle, " ").default_prevented);
        assert!(!menu::is_expanded(app.document(), toggle));
        assert!(!app.document().has_class(panel, menu::OPEN_CLASS));
        assert_eq!(
            recorder
                .events()
                .into_iter()
                .filter(|e| e.name() == EventName::MenuToggle)
                .collect::<Vec<_>>(),
            vec![
                SprintEvent::MenuToggle { expanded: true },
                SprintEvent::MenuToggle { expanded: false },
            ]
        );
    }

    #[test]
    fn modal_escape_listener_is_removed_on_close() {
        let (mut app, _) = ready_app();
        let overlay = app.show_modal("Confirm", "Sure?");
        app.advance(10);
        let close_button = app.modals().get(overlay).expect("modal").close_button();

        app.click(close_button);
        assert!(app.registry().document_behaviors().is_empty());
        let body = app.document().body();
        assert_eq!(app.key_down(body, "Escape").handled, 0);

        app.advance(300);
        assert!(!app.document().is_connected(overlay));
    }

    #[test]
    fn backdrop_click_closes_only_on_overlay_itself() {
        let (mut app, _) = ready_app();
        let overlay = app.show_modal("Confirm", "Sure?");
        app.advance(10);
        let dialog = app.modals().get(overlay).expect("modal").dialog();

        app.click(dialog);
        assert!(app.document().has_class(overlay, crate::ui::modal::OPEN_CLASS));
        app.click(overlay);
        assert!(!app.document().has_class(overlay, crate::ui::modal::OPEN_CLASS));
    }

    #[test]
    fn drawer_opener_and_closer_are_wired() {
        let (mut app, recorder) = ready_app();
        let doc = app.document();
        let opener = doc
            .select_first(|d, n| d.has_attr(n, drawer::OPENER_ATTR))
            .expect("opener");
        let closer = doc
            .select_first(|d, n| d.has_attr(n, drawer::CLOSER_ATTR))
            .expect("closer");

        app.click(opener);
        app.click(closer);

        assert!(recorder
            .names()
            .ends_with(&[EventName::DrawerOpen, EventName::DrawerClose]));
        assert!(recorder.events().contains(&SprintEvent::DrawerClose {
            id: "filters".into()
        }));
    }

    #[test]
    fn run_until_idle_drains_toasts() {
        let (mut app, recorder) = ready_app();
        app.notify("hello");
        app.run_until_idle();
        assert_eq!(app.toasts().live_count(), 0);
        assert_eq!(recorder.count(EventName::ToastHide), 1);
        assert_eq!(app.now(), 3300);
    }
}
