use tracing::debug;

use crate::config::Config;
use crate::event::{Action, Field, UiEvent};
use crate::graphic::Graphic;
use crate::manager::TaskManager;
use crate::view::ViewMode;

// Composition root: one manager, one graphic reading it. All host events
// funnel through `handle`; the rendered fragments come back out through the
// read accessors.
#[derive(Debug, Clone)]
pub struct App {
    manager: TaskManager,
    graphic: Graphic,
}

impl App {
    pub fn new(cfg: &Config) -> Self {
        Self {
            manager: TaskManager::new(cfg),
            graphic: Graphic::new(),
        }
    }

    pub fn handle(&mut self, event: UiEvent) {
        debug!(?event, "ui event");
        match event {
            UiEvent::Input { field, value } => self.manager.set_field(field, value),
            UiEvent::Click { action } => match action {
                Action::Add => self.manager.add_task(),
                Action::Remove => self.manager.remove_task(),
                Action::Complete => self.manager.complete_task(),
                Action::ListView => self.manager.set_view_mode(ViewMode::List),
                Action::DayView => self.manager.set_view_mode(ViewMode::Day),
                Action::MonthView => self.manager.set_view_mode(ViewMode::Month),
                Action::ToggleGraphic => self.graphic.toggle(&self.manager),
            },
        }
    }

    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    pub fn graphic(&self) -> &Graphic {
        &self.graphic
    }

    pub fn active_view(&self) -> &str {
        self.manager.active_view()
    }

    pub fn completed_view(&self) -> &str {
        self.manager.completed_view()
    }

    pub fn summary_view(&self) -> &str {
        self.graphic.summary_view()
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.handle(UiEvent::input(field, value));
    }

    pub fn click(&mut self, action: Action) {
        self.handle(UiEvent::click(action));
    }
}
