use serde::Serialize;
use thiserror::Error;

use crate::entity::{EntityId, Importance, Task, TaskStatus};

/// How a grid column presents its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Fixed set of values, rendered by label.
    Enum(&'static [&'static str]),
    /// Single-line text.
    Text,
    /// Multi-line text.
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridColumn {
    pub header: &'static str,
    pub name: &'static str,
    pub kind: ColumnKind,
}

pub const STATUS_LABELS: [&str; 5] = ["접수", "진행중", "대기중", "완료", "미해결완료"];
pub const IMPORTANCE_LABELS: [&str; 6] = ["루틴", "긴급", "높음", "보통", "낮음", "보류"];

/// Column schema handed to the grid collaborator.
pub const GRID_COLUMNS: [GridColumn; 6] = [
    GridColumn {
        header: "상태",
        name: "status",
        kind: ColumnKind::Enum(&STATUS_LABELS),
    },
    GridColumn {
        header: "중요도",
        name: "importance",
        kind: ColumnKind::Enum(&IMPORTANCE_LABELS),
    },
    GridColumn {
        header: "카테고리",
        name: "category",
        kind: ColumnKind::Text,
    },
    GridColumn {
        header: "제목",
        name: "title",
        kind: ColumnKind::Lines,
    },
    GridColumn {
        header: "내용",
        name: "content",
        kind: ColumnKind::Lines,
    },
    GridColumn {
        header: "D-Day",
        name: "dDay",
        kind: ColumnKind::Text,
    },
];

/// One task as the grid sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub id: EntityId,
    pub status: TaskStatus,
    pub importance: Importance,
    pub category: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "dDay")]
    pub d_day: String,
}

impl GridRow {
    /// The value under the column named `name`, or `None` for unknown columns.
    pub fn cell(&self, name: &str) -> Option<&str> {
        match name {
            "status" => Some(self.status.label()),
            "importance" => Some(self.importance.label()),
            "category" => Some(self.category.as_str()),
            "title" => Some(self.title.as_str()),
            "content" => Some(self.content.as_str()),
            "dDay" => Some(self.d_day.as_str()),
            _ => None,
        }
    }
}

impl From<&Task> for GridRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            status: task.status,
            importance: task.importance,
            category: task.category.clone(),
            title: task.title.clone(),
            content: task.content.clone(),
            d_day: task.d_day.clone(),
        }
    }
}

/// Every task, in collection order, whether or not its category exists.
pub fn grid_projection(tasks: &[Task]) -> Vec<GridRow> {
    tasks.iter().map(GridRow::from).collect()
}

#[derive(Debug, Error)]
#[error("grid collaborator failed: {0}")]
pub struct CollaboratorError(pub String);

/// An external tabular widget fed with grid rows.
///
/// The binding only pushes rows in. Edits made inside the widget are not read back.
pub trait GridCollaborator {
    fn load(&mut self, columns: &[GridColumn], rows: &[GridRow]) -> Result<(), CollaboratorError>;
}

/// Keeps a collaborator loaded with the current task list.
pub struct GridBinding<C> {
    collaborator: C,
    mounted: bool,
}

impl<C: GridCollaborator> GridBinding<C> {
    /// Hand the initial rows to `collaborator`. A failure is logged and leaves
    /// the binding unmounted; it never reaches the caller.
    pub fn mount(collaborator: C, tasks: &[Task]) -> Self {
        let mut binding = Self {
            collaborator,
            mounted: false,
        };
        match binding.push(tasks) {
            Ok(()) => binding.mounted = true,
            Err(e) => tracing::warn!(error = %e, "grid collaborator did not initialize"),
        }
        binding
    }

    /// Push the current rows after a change. Does nothing if mounting failed.
    pub fn refresh(&mut self, tasks: &[Task]) {
        if !self.mounted {
            return;
        }
        if let Err(e) = self.push(tasks) {
            tracing::warn!(error = %e, "grid collaborator rejected reload");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn collaborator(&self) -> &C {
        &self.collaborator
    }

    fn push(&mut self, tasks: &[Task]) -> Result<(), CollaboratorError> {
        let rows = grid_projection(tasks);
        self.collaborator.load(&GRID_COLUMNS, &rows)
    }
}

/// Plain-text table collaborator used by the command line.
#[derive(Debug, Default)]
pub struct TextGrid {
    rendered: String,
}

impl TextGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl GridCollaborator for TextGrid {
    fn load(&mut self, columns: &[GridColumn], rows: &[GridRow]) -> Result<(), CollaboratorError> {
        // Multi-line cells are flattened onto one line
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| row.cell(col.name).unwrap_or_default().replace('\n', " / "))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                cells
                    .iter()
                    .map(|r| r[i].chars().count())
                    .chain(std::iter::once(col.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let header: Vec<&str> = columns.iter().map(|c| c.header).collect();
        push_line(&mut out, header.iter().copied(), &widths);
        push_line(
            &mut out,
            widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().iter().map(String::as_str),
            &widths,
        );
        for row in &cells {
            push_line(&mut out, row.iter().map(String::as_str), &widths);
        }

        self.rendered = out;
        Ok(())
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}
