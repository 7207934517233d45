use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,

    #[serde(default = "unset_date")]
    pub date: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub topic: String,
}

impl Task {
    // Sentinel meaning "no due date was ever supplied".
    pub const UNSET_DATE: &'static str = "1900 01 01";

    pub fn new(name: String, date: String, description: String, topic: String) -> Self {
        Self {
            name,
            date,
            description,
            topic,
        }
    }
}

impl Default for Task {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: unset_date(),
            description: String::new(),
            topic: String::new(),
        }
    }
}

fn unset_date() -> String {
    Task::UNSET_DATE.to_string()
}
