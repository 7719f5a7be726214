//! Result types for intent execution

/// Whether the plan produced a selection at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStatus {
    /// The plan was executed
    Selected,
    /// The plan carried no usable signal, nothing was selected
    Undetermined,
}

/// Identifiers selected by a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Identifiers in result order
    pub ids: Vec<String>,
    pub status: SelectionStatus,
    /// Records that passed the filter
    pub matched_count: usize,
    /// Whether the sort was applied
    pub sort_applied: bool,
    /// Whether the limit dropped records
    pub limit_applied: bool,
}

impl Selection {
    /// The result of an empty plan
    pub fn undetermined() -> Self {
        Self {
            ids: Vec::new(),
            status: SelectionStatus::Undetermined,
            matched_count: 0,
            sort_applied: false,
            limit_applied: false,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        self.status == SelectionStatus::Undetermined
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn into_ids(self) -> Vec<String> {
        self.ids
    }

    /// Comma-separated identifiers, as returned to the front end
    pub fn joined(&self) -> String {
        self.ids.join(",")
    }
}
