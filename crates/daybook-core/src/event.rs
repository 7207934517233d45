use serde::{Deserialize, Serialize};

// Field and action ids mirror the element ids the host surface wires up.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "task-input")]
    TaskName,
    #[serde(rename = "dueDate")]
    DueDate,
    #[serde(rename = "filterDate")]
    FilterDate,
    #[serde(rename = "description-input")]
    Description,
    #[serde(rename = "topic-input")]
    Topic,
    #[serde(rename = "remove-input")]
    RemoveIndex,
    #[serde(rename = "complete-input")]
    CompleteIndex,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::TaskName,
        Field::DueDate,
        Field::FilterDate,
        Field::Description,
        Field::Topic,
        Field::RemoveIndex,
        Field::CompleteIndex,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::TaskName => "task-input",
            Field::DueDate => "dueDate",
            Field::FilterDate => "filterDate",
            Field::Description => "description-input",
            Field::Topic => "topic-input",
            Field::RemoveIndex => "remove-input",
            Field::CompleteIndex => "complete-input",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "add")]
    Add,
    #[serde(rename = "remove")]
    Remove,
    #[serde(rename = "complete")]
    Complete,
    #[serde(rename = "list")]
    ListView,
    #[serde(rename = "day")]
    DayView,
    #[serde(rename = "month")]
    MonthView,
    #[serde(rename = "optionalGraphic")]
    ToggleGraphic,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Add,
        Action::Remove,
        Action::Complete,
        Action::ListView,
        Action::DayView,
        Action::MonthView,
        Action::ToggleGraphic,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Complete => "complete",
            Action::ListView => "list",
            Action::DayView => "day",
            Action::MonthView => "month",
            Action::ToggleGraphic => "optionalGraphic",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UiEvent {
    Input { field: Field, value: String },
    Click { action: Action },
}

impl UiEvent {
    pub fn input(field: Field, value: impl Into<String>) -> Self {
        UiEvent::Input {
            field,
            value: value.into(),
        }
    }

    pub fn click(action: Action) -> Self {
        UiEvent::Click { action }
    }
}
