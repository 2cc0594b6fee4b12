use std::io;

use unicode_width::UnicodeWidthChar;

use crate::domain::model::field::{BLANK_SENTINEL, Field};

/// One screen snapshot: cell grid, cursor, and the ordered field list.
///
/// Replaced wholesale on every refresh. The only mutation allowed in
/// between is buffering a pending edit on one of its fields; the next
/// refresh discards that state with the rest of the snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    width: usize,
    height: usize,
    rows: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    fields: Vec<Field>,
}

impl Screen {
    pub fn new(
        width: usize,
        height: usize,
        rows: Vec<String>,
        cursor_row: usize,
        cursor_col: usize,
        fields: Vec<Field>,
    ) -> Self {
        let mut rows = rows;
        rows.resize(height, String::new());
        let rows = rows
            .into_iter()
            .map(|row| {
                let mut cells: Vec<char> = row.chars().take(width).collect();
                cells.resize(width, BLANK_SENTINEL);
                cells.into_iter().collect()
            })
            .collect();
        Self {
            width,
            height,
            rows,
            cursor_row,
            cursor_col,
            fields,
        }
    }

    /// The snapshot a session holds before its first refresh.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            rows: Vec::new(),
            cursor_row: 0,
            cursor_col: 0,
            fields: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cursor position as (row, col), zero-based.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Raw character at (col, row), blank sentinel included.
    pub fn char_at(&self, col: usize, row: usize) -> Option<char> {
        self.rows.get(row)?.chars().nth(col)
    }

    /// One row of text with blank sentinels normalized to spaces.
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.rows
            .get(row)
            .map(|text| text.replace(BLANK_SENTINEL, " "))
    }

    /// The whole screen as normalized text, one line per row.
    pub fn render_text(&self) -> String {
        let lines: Vec<String> = (0..self.height)
            .filter_map(|row| self.row_text(row))
            .collect();
        lines.join("\n")
    }

    /// Framed dump: a `+---+` rule, every row padded or truncated to the
    /// screen width between `|` borders, and the rule again.
    pub fn write_framed(&self, out: &mut impl io::Write) -> io::Result<()> {
        let rule = format!("+{}+", "-".repeat(self.width));
        writeln!(out, "{rule}")?;
        for row in 0..self.height {
            let line = self.row_text(row).unwrap_or_default();
            writeln!(out, "|{}|", fit_to_width(&line, self.width))?;
        }
        writeln!(out, "{rule}")?;
        Ok(())
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn field_mut(&mut self, index: usize) -> Option<&mut Field> {
        self.fields.get_mut(index)
    }

    /// Index of the field whose value region contains the cursor.
    pub fn focused_field_index(&self) -> Option<usize> {
        if self.width == 0 {
            return None;
        }
        let cursor = self.cursor_row * self.width + self.cursor_col;
        self.fields.iter().position(|field| {
            let start = field.row() * self.width + field.col();
            let len = field.value().chars().count();
            start <= cursor && cursor < start + len
        })
    }
}

/// Pad with spaces or truncate so the result occupies exactly `width`
/// display columns.
fn fit_to_width(line: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(width);
    let mut used = 0;
    for ch in line.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        fitted.push(ch);
        used += w;
    }
    for _ in used..width {
        fitted.push(' ');
    }
    fitted
}
