use dk_app::Notice;

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// Lines for stdout.
    pub lines: Vec<String>,
    pub notice: Option<Notice>,
}

impl Report {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            notice: None,
        }
    }

    pub fn line(line: impl Into<String>) -> Self {
        Self::new(vec![line.into()])
    }

    pub fn notice_only(notice: Notice) -> Self {
        Self {
            lines: Vec::new(),
            notice: Some(notice),
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn is_error(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_error)
    }
}
