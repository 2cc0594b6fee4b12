use crate::domain::model::{BLANK_SENTINEL, Field, FieldKind, Screen};
use crate::shared::error::SessionError;

/// Bit in the c0 field attribute that marks the field protected.
const PROTECTED_BIT: u8 = 0x20;

/// Connection state and screen geometry reported by the engine after
/// every action, on a single line of twelve space-separated fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStatus {
    pub connected: bool,
    pub rows: usize,
    pub cols: usize,
    pub cursor_row: usize,
    pub cursor_col: usize,
}

/// Parse the engine status line.
/// Input format: `U F U C(host) I 2 24 80 6 12 0x0 0.061`
/// Field 3 carries the connection state (`C(host)` or `N`), fields 6/7
/// the screen rows/columns, fields 8/9 the cursor row/column.
pub fn parse_status(line: &str) -> Result<EngineStatus, SessionError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 10 {
        return Err(malformed_status(line));
    }
    Ok(EngineStatus {
        connected: fields[3].starts_with('C'),
        rows: parse_geometry(fields[6], line)?,
        cols: parse_geometry(fields[7], line)?,
        cursor_row: parse_geometry(fields[8], line)?,
        cursor_col: parse_geometry(fields[9], line)?,
    })
}

/// Build a screen snapshot from the data lines of a buffer read, one
/// line per screen row. Tokens per line:
/// - `SF(c0=xx,...)` starts a field and occupies one buffer position
/// - `SA(...)` sets character attributes and occupies no position
/// - `GE(xx)` and bare `xx` are one cell each, hex Latin-1 byte values
///
/// `00` cells stay as the blank sentinel; normalization to spaces
/// happens at read time, never here.
pub fn parse_read_buffer(lines: &[String], status: &EngineStatus) -> Result<Screen, SessionError> {
    let width = status.cols;
    let height = status.rows;
    if width == 0 || height == 0 {
        return Err(SessionError::EngineProtocol(format!(
            "status line reports a {height}x{width} screen"
        )));
    }

    let mut cells: Vec<char> = Vec::with_capacity(width * height);
    let mut starts: Vec<FieldStart> = Vec::new();
    for line in lines {
        for token in line.split_whitespace() {
            if let Some(attributes) = strip_call(token, "SF") {
                starts.push(FieldStart {
                    position: cells.len(),
                    protected: attribute_is_protected(attributes),
                });
                cells.push(BLANK_SENTINEL);
            } else if strip_call(token, "SA").is_some() {
                // Character attribute change, no buffer position.
            } else if let Some(hex) = strip_call(token, "GE") {
                cells.push(parse_cell(hex, token)?);
            } else {
                cells.push(parse_cell(token, token)?);
            }
        }
    }

    if cells.len() != width * height {
        return Err(SessionError::EngineProtocol(format!(
            "buffer read returned {} cells for a {height}x{width} screen",
            cells.len()
        )));
    }

    let fields = build_fields(&cells, &starts, width);
    let rows = cells
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect();
    Ok(Screen::new(
        width,
        height,
        rows,
        status.cursor_row,
        status.cursor_col,
        fields,
    ))
}

/// Escape a value for use inside a quoted `String("...")` action
/// argument: backslashes and double quotes get a backslash prefix, and
/// line breaks and tabs become their C-style escapes. The action must
/// stay on one wire line; a raw newline would end it mid-argument.
pub fn escape_string_argument(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

struct FieldStart {
    position: usize,
    protected: bool,
}

/// A field's content begins one position after its attribute cell and
/// runs to the next attribute cell, or to the end of the buffer for the
/// last field.
fn build_fields(cells: &[char], starts: &[FieldStart], width: usize) -> Vec<Field> {
    let total = cells.len();
    starts
        .iter()
        .enumerate()
        .map(|(index, start)| {
            let begin = start.position + 1;
            let end = starts.get(index + 1).map_or(total, |next| next.position);
            let value: String = cells[begin..end].iter().collect();
            // An attribute on the very last cell starts a field with no
            // content; anchor it at the attribute itself.
            let anchor = if begin < total { begin } else { start.position };
            let kind = if start.protected {
                FieldKind::Protected
            } else {
                FieldKind::Input
            };
            Field::new(anchor / width, anchor % width, value, kind)
        })
        .collect()
}

/// Inner text of `name(...)` tokens, None if the token is anything else.
fn strip_call<'a>(token: &'a str, name: &str) -> Option<&'a str> {
    token
        .strip_prefix(name)?
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn attribute_is_protected(attributes: &str) -> bool {
    attributes
        .split(',')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "c0")
        .and_then(|(_, value)| u8::from_str_radix(value, 16).ok())
        .is_some_and(|value| value & PROTECTED_BIT != 0)
}

fn parse_cell(hex: &str, token: &str) -> Result<char, SessionError> {
    u8::from_str_radix(hex, 16)
        .map(char::from)
        .map_err(|_| SessionError::EngineProtocol(format!("unrecognized buffer token [{token}]")))
}

fn parse_geometry(token: &str, line: &str) -> Result<usize, SessionError> {
    token.parse().map_err(|_| malformed_status(line))
}

fn malformed_status(line: &str) -> SessionError {
    SessionError::EngineProtocol(format!("malformed status line [{line}]"))
}
