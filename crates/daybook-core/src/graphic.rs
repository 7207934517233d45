use tracing::debug;

use crate::manager::TaskManager;
use crate::render;

// Optional count summary. The counts are read once per toggle-on; they do not
// track later mutations until the graphic is toggled again.
#[derive(Debug, Clone)]
pub struct Graphic {
    visible: bool,
    summary_view: String,
}

impl Graphic {
    pub fn new() -> Self {
        Self {
            visible: false,
            summary_view: " ".to_string(),
        }
    }

    pub fn toggle(&mut self, tasks: &TaskManager) {
        self.visible = !self.visible;

        if self.visible {
            let active = tasks.active().len();
            let completed = tasks.completed().len();
            debug!(active, completed, "graphic shown");
            self.summary_view = render::summary_fragment(active, completed);
        } else {
            debug!("graphic hidden");
            self.summary_view.clear();
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn summary_view(&self) -> &str {
        &self.summary_view
    }
}

impl Default for Graphic {
    fn default() -> Self {
        Self::new()
    }
}
