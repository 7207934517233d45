use crate::task::Task;

const MONTH_PREFIX_CHARS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Day,
    Month,
}

impl ViewMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "list" => Some(ViewMode::List),
            "day" => Some(ViewMode::Day),
            "month" => Some(ViewMode::Month),
            _ => None,
        }
    }

    pub fn includes(self, task: &Task, filter_date: &str) -> bool {
        match self {
            ViewMode::List => true,
            ViewMode::Day => task.date == filter_date,
            ViewMode::Month => month_prefix(&task.date) == month_prefix(filter_date),
        }
    }
}

// The `YYYY MM` span when the conventional date layout holds. This is a
// character count, not a calendar computation; shorter strings compare whole.
pub fn month_prefix(date: &str) -> &str {
    match date.char_indices().nth(MONTH_PREFIX_CHARS) {
        Some((byte_idx, _)) => &date[..byte_idx],
        None => date,
    }
}
