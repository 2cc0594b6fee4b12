/// Character the engine stores in cells that were never written.
/// Normalized to an ordinary space in all caller-visible text.
pub const BLANK_SENTINEL: char = '\u{0}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Input,
    Protected,
}

/// A contiguous screen region with a value. Positions are zero-based
/// screen coordinates of the first value cell (the cell after the
/// field's attribute position).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    row: usize,
    col: usize,
    value: String,
    kind: FieldKind,
    pending: Option<String>,
}

impl Field {
    pub fn new(row: usize, col: usize, value: String, kind: FieldKind) -> Self {
        Self {
            row,
            col,
            value,
            kind,
            pending: None,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Raw value as the engine reported it, blank sentinel included.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value with every blank sentinel replaced by a space. Not trimmed.
    pub fn display_value(&self) -> String {
        self.value.replace(BLANK_SENTINEL, " ")
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_input(&self) -> bool {
        self.kind == FieldKind::Input
    }

    /// Buffered value waiting for the next submitting action, if any.
    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub(crate) fn set_pending(&mut self, value: String) {
        self.pending = Some(value);
    }
}
