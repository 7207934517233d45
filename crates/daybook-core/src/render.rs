use crate::task::Task;

// Entry text: `{index}. {name}[ - topic][ - description][ - Due: date]`.
// Empty segments are dropped entirely; nothing is escaped — the host surface
// owns the display of these fragments.
pub fn entry_line(index: usize, task: &Task) -> String {
    let mut line = format!("{index}. {}", task.name);

    if !task.topic.is_empty() {
        line.push_str(" - ");
        line.push_str(&task.topic);
    }
    if !task.description.is_empty() {
        line.push_str(" - ");
        line.push_str(&task.description);
    }
    if !task.date.is_empty() {
        line.push_str(" - Due: ");
        line.push_str(&task.date);
    }

    line
}

pub fn push_entry(out: &mut String, index: usize, task: &Task) {
    out.push_str("<div><label>");
    out.push_str(&entry_line(index, task));
    out.push_str("</label></div><br>");
}

pub fn push_header(out: &mut String, text: &str) {
    out.push_str("<div><br><label>");
    out.push_str(text);
    out.push_str("</label></div><br>");
}

pub fn summary_fragment(active: usize, completed: usize) -> String {
    format!(
        "<div><label>{active} tasks active</label><br>\
         <label>{completed} tasks completed</label><br></div><br>"
    )
}
