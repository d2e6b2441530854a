//! Lanes, tasks and the one-task-per-line file grammar.

/// A single task on the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    pub description: String,
    pub details: Option<String>,
    /// Display number, assigned by diagonal numbering after loading.
    pub number: Option<usize>,
}

impl Task {
    /// Build a task from user input.
    ///
    /// Both fields are trimmed, since `parse_line` trims them on the way back in.
    pub fn new(description: impl Into<String>, details: Option<String>) -> Self {
        Self {
            description: description.into().trim().to_string(),
            details: details.map(|d| d.trim().to_string()),
            number: None,
        }
    }

    /// Text shown in the overview cell: `"<number> <description>"`.
    pub fn cell_text(&self) -> String {
        match self.number {
            Some(n) => format!("{} {}", n, self.description),
            None => self.description.clone(),
        }
    }
}

/// A named column of tasks backed by one file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lane {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Lane {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tasks: Vec::new(),
        }
    }

    /// Parse the content of a lane file. Every line is one task.
    pub fn parse(name: impl Into<String>, content: &str, sep: char) -> Self {
        Self {
            name: name.into(),
            tasks: content.lines().map(|line| parse_line(line, sep)).collect(),
        }
    }

    /// Serialize the lane back into file content.
    pub fn to_file_content(&self, sep: char) -> String {
        let mut out = String::new();
        for task in &self.tasks {
            out.push_str(&format_line(task, sep));
            out.push('\n');
        }
        out
    }

    /// Position of the task carrying the given display number.
    pub fn position_of(&self, number: usize) -> Option<usize> {
        self.tasks.iter().position(|t| t.number == Some(number))
    }
}

/// Parse one line as `description` or `description <sep> details`.
///
/// Fields are trimmed and anything after the second field is ignored.
/// `\\`, `\n` and `\<sep>` are unescaped; an escaped separator does not split.
pub fn parse_line(line: &str, sep: char) -> Task {
    let mut fields = split_escaped(line, sep).into_iter();
    let description = fields.next().map(|f| unescape(f.trim(), sep)).unwrap_or_default();
    let details = fields.next().map(|f| unescape(f.trim(), sep));

    Task {
        description,
        details,
        number: None,
    }
}

/// Format a task as a single line using the same grammar `parse_line` reads.
pub fn format_line(task: &Task, sep: char) -> String {
    let description = escape(&task.description, sep);
    match &task.details {
        Some(details) => format!("{} {} {}", description, sep, escape(details, sep)),
        None => description,
    }
}

fn split_escaped(line: &str, sep: char) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == sep {
            fields.push(&line[start..i]);
            start = i + c.len_utf8();
        }
    }
    fields.push(&line[start..]);
    fields
}

fn unescape(field: &str, sep: char) -> String {
    let mut out = String::with_capacity(field.len());
    let mut chars = field.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            Some('n') => {
                out.push('\n');
                chars.next();
            }
            Some(next) if next == sep => {
                out.push(sep);
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}

fn escape(text: &str, sep: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c if c == sep => {
                out.push('\\');
                out.push(sep);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_detailed_lines() {
        let lane = Lane::parse("Todo", "Buy milk\nCall Bob | before 5pm\n", '|');

        assert_eq!(lane.tasks.len(), 2);
        assert_eq!(lane.tasks[0], Task::new("Buy milk", None));
        assert_eq!(
            lane.tasks[1],
            Task::new("Call Bob", Some("before 5pm".to_string()))
        );
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let task = parse_line("a | b | c | d", '|');
        assert_eq!(task.description, "a");
        assert_eq!(task.details.as_deref(), Some("b"));
    }

    #[test]
    fn test_parse_trims_fields() {
        let task = parse_line("   spaced out   |   here  ", '|');
        assert_eq!(task.description, "spaced out");
        assert_eq!(task.details.as_deref(), Some("here"));
    }

    #[test]
    fn test_parse_trailing_separator_gives_empty_details() {
        let task = parse_line("desc |", '|');
        assert_eq!(task.description, "desc");
        assert_eq!(task.details.as_deref(), Some(""));
    }

    #[test]
    fn test_parse_custom_separator() {
        let task = parse_line("deploy ; after review | not a split", ';');
        assert_eq!(task.description, "deploy");
        assert_eq!(task.details.as_deref(), Some("after review | not a split"));
    }

    #[test]
    fn test_parse_keeps_blank_lines_as_tasks() {
        let lane = Lane::parse("Todo", "one\n\nthree\n", '|');
        assert_eq!(lane.tasks.len(), 3);
        assert_eq!(lane.tasks[1].description, "");
    }

    #[test]
    fn test_parse_escapes() {
        let task = parse_line(r"pipe \| inside | line one\nline two \\ done", '|');
        assert_eq!(task.description, "pipe | inside");
        assert_eq!(task.details.as_deref(), Some("line one\nline two \\ done"));
    }

    #[test]
    fn test_unknown_escape_is_literal() {
        let task = parse_line(r"C:\path\to", '|');
        assert_eq!(task.description, r"C:\path\to");
    }

    #[test]
    fn test_format_multiline_details_survive_reparse() {
        let task = Task::new("fix | build", Some("step 1\nstep 2 \\o/".to_string()));
        let line = format_line(&task, '|');

        assert!(!line.contains('\n'));
        assert_eq!(line, r"fix \| build | step 1\nstep 2 \\o/");
        assert_eq!(parse_line(&line, '|'), task);
    }

    #[test]
    fn test_new_trims_so_details_survive_reparse() {
        let task = Task::new("  x ", Some("  indented\n    more  ".to_string()));
        assert_eq!(task.description, "x");
        assert_eq!(task.details.as_deref(), Some("indented\n    more"));

        let line = format_line(&task, '|');
        assert_eq!(line, r"x | indented\n    more");
        assert_eq!(parse_line(&line, '|'), task);
    }

    #[test]
    fn test_to_file_content() {
        let mut lane = Lane::new("Todo");
        lane.tasks.push(Task::new("Buy milk", None));
        lane.tasks.push(Task::new("Call Bob", Some("before 5pm".to_string())));

        assert_eq!(
            lane.to_file_content('|'),
            "Buy milk\nCall Bob | before 5pm\n"
        );
        assert_eq!(Lane::new("Empty").to_file_content('|'), "");
    }

    #[test]
    fn test_cell_text() {
        let mut task = Task::new("Buy milk", None);
        assert_eq!(task.cell_text(), "Buy milk");
        task.number = Some(4);
        assert_eq!(task.cell_text(), "4 Buy milk");
    }
}
