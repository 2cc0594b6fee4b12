use crate::domain::primitive::MatchMode;

#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error("not connected")]
    NotConnected,

    #[error("label [{label}] with skip [{skip}] and match mode [{match_mode}] matched fewer than [{match_number}] times")]
    LabelNotFound {
        label: String,
        skip: usize,
        match_number: usize,
        match_mode: MatchMode,
    },

    #[error(
        "field [{resolved_index}] for [{label}] with skip [{skip}] is past the last field [{field_count}]"
    )]
    FieldOutOfRange {
        label: String,
        skip: usize,
        resolved_index: usize,
        field_count: usize,
    },

    #[error(
        "field [{field_text}] after match [{match_number}] for [{label}] with skip [{skip}] found with match mode [{match_mode}] is not an input field"
    )]
    NotInputField {
        field_text: String,
        label: String,
        skip: usize,
        match_number: usize,
        match_mode: MatchMode,
    },

    #[error("cursor is not inside an input field")]
    NoFocusedInputField,

    #[error("row [{row}] is past the last screen row [{height}]")]
    RowOutOfRange { row: usize, height: usize },

    #[error("Failed to spawn terminal engine: {0}")]
    EngineSpawn(#[source] std::io::Error),

    #[error("Engine I/O error: {0}")]
    EngineIo(#[source] std::io::Error),

    #[error("Engine protocol error: {0}")]
    EngineProtocol(String),

    #[error("Output error: {0}")]
    Output(#[source] std::io::Error),
}
