use tracing::{debug, warn};

use crate::config::Config;
use crate::event::Field;
use crate::render;
use crate::task::Task;
use crate::view::{ViewMode, month_prefix};

// Owns the three task lists, the pending input buffers, and the two rendered
// view fragments. Every mutation runs to completion and re-renders before the
// next event is handled; a task lives in exactly one list at a time.
#[derive(Debug, Clone)]
pub struct TaskManager {
    active: Vec<Task>,
    removed: Vec<Task>,
    completed: Vec<Task>,

    name_input: String,
    date_input: String,
    filter_date: String,
    description_input: String,
    topic_input: String,
    remove_input: String,
    complete_input: String,

    view: ViewMode,

    active_view: String,
    completed_view: String,
}

impl TaskManager {
    pub fn new(cfg: &Config) -> Self {
        let view = cfg
            .get("default.view")
            .and_then(|name| ViewMode::from_name(&name))
            .unwrap_or_default();

        Self {
            active: vec![],
            removed: vec![],
            completed: vec![],
            name_input: String::new(),
            date_input: cfg.get("default.due").unwrap_or_default(),
            filter_date: String::new(),
            description_input: String::new(),
            topic_input: String::new(),
            remove_input: "0".to_string(),
            complete_input: "0".to_string(),
            view,
            active_view: " ".to_string(),
            completed_view: " ".to_string(),
        }
    }

    // Input events only overwrite a buffer; buffers are consumed by the next
    // click action and deliberately never cleared afterwards.
    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::TaskName => &mut self.name_input,
            Field::DueDate => &mut self.date_input,
            Field::FilterDate => &mut self.filter_date,
            Field::Description => &mut self.description_input,
            Field::Topic => &mut self.topic_input,
            Field::RemoveIndex => &mut self.remove_input,
            Field::CompleteIndex => &mut self.complete_input,
        };
        *slot = value;
    }

    pub fn add_task(&mut self) {
        let task = Task::new(
            self.name_input.clone(),
            self.date_input.clone(),
            self.description_input.trim().to_string(),
            self.topic_input.trim().to_string(),
        );
        debug!(name = %task.name, due = %task.date, "task added");
        self.active.push(task);
        self.render();
    }

    pub fn remove_task(&mut self) {
        match self.resolve_index(&self.remove_input) {
            Some(index) => {
                let task = self.active.remove(index);
                debug!(index = index + 1, name = %task.name, "task removed");
                self.removed.push(task);
                self.render();
            }
            None => warn!(input = %self.remove_input, "invalid task index for removal"),
        }
    }

    pub fn complete_task(&mut self) {
        match self.resolve_index(&self.complete_input) {
            Some(index) => {
                let task = self.active.remove(index);
                debug!(index = index + 1, name = %task.name, "task completed");
                self.completed.push(task);
                self.render();
            }
            None => warn!(input = %self.complete_input, "invalid task index for completion"),
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        debug!(?mode, "view mode switched");
        self.view = mode;
        self.render();
    }

    // Rebuilds both fragments from scratch; idempotent for unchanged state.
    pub fn render(&mut self) {
        self.active_view.clear();
        self.completed_view.clear();

        match self.view {
            ViewMode::List => {
                for (i, task) in self.active.iter().enumerate() {
                    render::push_entry(&mut self.active_view, i + 1, task);
                }
                for (i, task) in self.completed.iter().enumerate() {
                    render::push_entry(&mut self.completed_view, i + 1, task);
                }
            }
            mode @ (ViewMode::Day | ViewMode::Month) => {
                let header = match mode {
                    ViewMode::Month => month_prefix(&self.filter_date),
                    _ => self.filter_date.as_str(),
                };
                render::push_header(&mut self.active_view, header);

                // Indices stay the task's position in the full active list,
                // not its position among the matches.
                for (i, task) in self.active.iter().enumerate() {
                    if mode.includes(task, &self.filter_date) {
                        render::push_entry(&mut self.active_view, i + 1, task);
                    }
                }
            }
        }
    }

    fn resolve_index(&self, raw: &str) -> Option<usize> {
        let parsed: i64 = raw.trim().parse().ok()?;
        let index = parsed.checked_sub(1)?;
        if index >= 0 && (index as usize) < self.active.len() {
            Some(index as usize)
        } else {
            None
        }
    }

    pub fn active(&self) -> &[Task] {
        &self.active
    }

    pub fn removed(&self) -> &[Task] {
        &self.removed
    }

    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn active_view(&self) -> &str {
        &self.active_view
    }

    pub fn completed_view(&self) -> &str {
        &self.completed_view
    }
}

#[cfg(test)]
mod tests {
    use super::TaskManager;
    use crate::config::Config;
    use crate::event::Field;
    use crate::view::ViewMode;

    fn manager() -> TaskManager {
        TaskManager::new(&Config::default())
    }

    fn add(mgr: &mut TaskManager, name: &str, date: &str) {
        mgr.set_field(Field::TaskName, name.to_string());
        mgr.set_field(Field::DueDate, date.to_string());
        mgr.add_task();
    }

    #[test]
    fn add_preserves_call_order() {
        let mut mgr = manager();
        add(&mut mgr, "first", "2024 05 01");
        add(&mut mgr, "second", "2024 05 02");
        add(&mut mgr, "third", "2024 05 03");

        let names: Vec<&str> = mgr.active().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn due_date_buffer_starts_at_the_unset_sentinel() {
        let mut mgr = manager();
        mgr.set_field(Field::TaskName, "untouched".to_string());
        mgr.add_task();

        assert_eq!(mgr.active()[0].date, "1900 01 01");
        assert!(mgr.active_view().contains("1. untouched - Due: 1900 01 01"));
    }

    #[test]
    fn description_and_topic_are_trimmed_on_add() {
        let mut mgr = manager();
        mgr.set_field(Field::TaskName, "Essay".to_string());
        mgr.set_field(Field::Description, "  5 pages  ".to_string());
        mgr.set_field(Field::Topic, "   ".to_string());
        mgr.add_task();

        assert_eq!(mgr.active()[0].description, "5 pages");
        assert_eq!(mgr.active()[0].topic, "");
    }

    #[test]
    fn empty_name_is_legal() {
        let mut mgr = manager();
        mgr.set_field(Field::DueDate, "2024 05 10".to_string());
        mgr.add_task();

        assert_eq!(mgr.active().len(), 1);
        assert!(mgr.active_view().contains("1.  - Due: 2024 05 10"));
    }

    #[test]
    fn remove_moves_the_exact_task() {
        let mut mgr = manager();
        add(&mut mgr, "keep", "2024 05 01");
        add(&mut mgr, "drop", "2024 05 02");

        let doomed = mgr.active()[1].clone();
        mgr.set_field(Field::RemoveIndex, "2".to_string());
        mgr.remove_task();

        assert_eq!(mgr.active().len(), 1);
        assert_eq!(mgr.removed().len(), 1);
        assert_eq!(mgr.removed()[0], doomed);
        assert_eq!(mgr.active()[0].name, "keep");
    }

    #[test]
    fn invalid_indices_leave_everything_untouched() {
        let mut mgr = manager();
        add(&mut mgr, "only", "2024 05 01");
        let before_active = mgr.active_view().to_string();
        let before_completed = mgr.completed_view().to_string();

        for bad in ["0", "-1", "2", "5", "abc", "", "2.5"] {
            mgr.set_field(Field::RemoveIndex, bad.to_string());
            mgr.remove_task();
            mgr.set_field(Field::CompleteIndex, bad.to_string());
            mgr.complete_task();
        }

        assert_eq!(mgr.active().len(), 1);
        assert!(mgr.removed().is_empty());
        assert!(mgr.completed().is_empty());
        assert_eq!(mgr.active_view(), before_active);
        assert_eq!(mgr.completed_view(), before_completed);
    }

    #[test]
    fn complete_renumbers_the_remaining_tasks() {
        let mut mgr = manager();
        add(&mut mgr, "first", "2024 05 01");
        add(&mut mgr, "second", "2024 05 02");

        mgr.set_field(Field::CompleteIndex, "1".to_string());
        mgr.complete_task();

        assert!(mgr.active_view().contains("1. second"));
        assert!(!mgr.active_view().contains("first"));
        assert!(mgr.completed_view().contains("1. first"));
    }

    #[test]
    fn mode_round_trip_reproduces_the_list_render() {
        let mut mgr = manager();
        add(&mut mgr, "first", "2024 05 01");
        add(&mut mgr, "second", "2024 05 02");
        let list_active = mgr.active_view().to_string();
        let list_completed = mgr.completed_view().to_string();

        mgr.set_field(Field::FilterDate, "2024 05 01".to_string());
        mgr.set_view_mode(ViewMode::Day);
        mgr.set_view_mode(ViewMode::Month);
        mgr.set_view_mode(ViewMode::List);

        assert_eq!(mgr.active_view(), list_active);
        assert_eq!(mgr.completed_view(), list_completed);
    }

    #[test]
    fn day_view_filters_exactly_and_keeps_full_list_indices() {
        let mut mgr = manager();
        add(&mut mgr, "other", "2024 05 09");
        add(&mut mgr, "match", "2024 05 10");

        mgr.set_field(Field::FilterDate, "2024 05 10".to_string());
        mgr.set_view_mode(ViewMode::Day);

        assert!(mgr.active_view().starts_with("<div><br><label>2024 05 10</label></div><br>"));
        assert!(mgr.active_view().contains("2. match"));
        assert!(!mgr.active_view().contains("other"));
        // completed view is not populated outside list mode
        assert_eq!(mgr.completed_view(), "");
    }

    #[test]
    fn month_view_header_shows_the_prefix() {
        let mut mgr = manager();
        add(&mut mgr, "may", "2024 05 10");
        add(&mut mgr, "june", "2024 06 01");

        mgr.set_field(Field::FilterDate, "2024 05 28".to_string());
        mgr.set_view_mode(ViewMode::Month);

        assert!(mgr.active_view().starts_with("<div><br><label>2024 05</label></div><br>"));
        assert!(mgr.active_view().contains("1. may"));
        assert!(!mgr.active_view().contains("june"));
    }

    #[test]
    fn buffers_are_not_cleared_by_actions() {
        let mut mgr = manager();
        add(&mut mgr, "dup", "2024 05 01");
        mgr.add_task();

        assert_eq!(mgr.active().len(), 2);
        assert_eq!(mgr.active()[0], mgr.active()[1]);
    }

    #[test]
    fn render_is_idempotent() {
        let mut mgr = manager();
        add(&mut mgr, "same", "2024 05 01");
        let first = mgr.active_view().to_string();

        mgr.render();
        mgr.render();

        assert_eq!(mgr.active_view(), first);
    }

    #[test]
    fn views_start_as_a_single_space() {
        let mgr = manager();
        assert_eq!(mgr.active_view(), " ");
        assert_eq!(mgr.completed_view(), " ");
    }
}
