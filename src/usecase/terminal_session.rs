use std::io::Write;

use crate::domain::locator;
use crate::domain::model::{Field, Screen};
use crate::domain::primitive::{FieldIdentifier, Parameter, SessionConfig};
use crate::interface_adapter::port::{EnginePort, FieldEdit, TerminalObserver};
use crate::shared::error::SessionError;
use crate::usecase::observer_registry::{ObserverId, ObserverRegistry};

/// Facade over one terminal session: locate fields by label, read and
/// write values, trigger action keys, observe every state transition.
///
/// Writes are buffered on the current snapshot and pushed to the engine
/// by the next submitting action (`enter`, `tab`, `pf`), mirroring the
/// terminal convention that edits travel only when an action key is
/// pressed.
pub struct TerminalSession<E: EnginePort> {
    config: SessionConfig,
    engine: E,
    attached: bool,
    screen: Screen,
    observers: ObserverRegistry,
}

impl<E: EnginePort> TerminalSession<E> {
    pub fn new(config: SessionConfig, engine: E) -> Self {
        Self {
            config,
            engine,
            attached: false,
            screen: Screen::empty(),
            observers: ObserverRegistry::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The snapshot as of the last refresh.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn add_observer(&mut self, observer: Box<dyn TerminalObserver>) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Attach the engine, take the first snapshot, and notify observers.
    /// Connecting an already connected session replaces the previous
    /// connection. Returns the session for chaining.
    pub fn connect(&mut self) -> Result<&mut Self, SessionError> {
        self.engine.connect(&self.config)?;
        self.attached = true;
        self.refresh_screen()?;
        self.observers.notify_connect(&self.config);
        self.observers.notify_command_issued("connect", None, &[]);
        Ok(self)
    }

    /// Drop the host connection. The session stays attached: operations
    /// keep reaching the engine, which reports its own state from there.
    pub fn disconnect(&mut self) -> Result<(), SessionError> {
        self.guard()?;
        self.engine.disconnect()?;
        self.observers.notify_disconnect();
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.attached && self.engine.is_connected()
    }

    pub fn enter(&mut self) -> Result<(), SessionError> {
        self.dispatch("enter", true, &[], |engine| engine.enter())
    }

    pub fn tab(&mut self) -> Result<(), SessionError> {
        self.dispatch("tab", true, &[], |engine| engine.tab())
    }

    pub fn pf(&mut self, n: u8) -> Result<(), SessionError> {
        self.dispatch("pf", true, &[Parameter::new("n", n)], |engine| engine.pf(n))
    }

    pub fn pa(&mut self, n: u8) -> Result<(), SessionError> {
        self.dispatch("pa", false, &[Parameter::new("n", n)], |engine| {
            engine.pa(n)
        })
    }

    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.dispatch("clear", false, &[], |engine| engine.clear())
    }

    /// Erase from the cursor to the end of the current field.
    pub fn clear_screen(&mut self) -> Result<(), SessionError> {
        self.dispatch("clearScreen", false, &[], |engine| {
            engine.erase_end_of_field()
        })
    }

    /// Buffer `value` into the field the identifier resolves to. Nothing
    /// reaches the engine until the next submitting action.
    pub fn write(
        &mut self,
        identifier: impl Into<FieldIdentifier>,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.guard()?;
        let identifier = identifier.into();
        let value = value.into();
        let index = locator::find_field_index(self.screen.fields(), &identifier)?;
        let field = &self.screen.fields()[index];
        if !field.is_input() {
            return Err(SessionError::NotInputField {
                field_text: field.display_value().trim().to_string(),
                label: identifier.label.clone(),
                skip: identifier.skip,
                match_number: identifier.match_number,
                match_mode: identifier.match_mode,
            });
        }
        if let Some(field) = self.screen.field_mut(index) {
            field.set_pending(value.clone());
        }
        let mut parameters = identifier.to_parameters();
        parameters.push(Parameter::new("value", &value));
        self.observers.notify_command_issued("write", None, &parameters);
        Ok(())
    }

    /// Send text as raw keystrokes at the cursor, one key per character,
    /// bypassing field lookup.
    pub fn send_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.dispatch(
            "write",
            false,
            &[Parameter::new("value", text)],
            |engine| {
                for ch in text.chars() {
                    engine.send_key(ch as u32)?;
                }
                Ok(())
            },
        )
    }

    /// Buffer `text` into the input field containing the cursor.
    pub fn type_text(&mut self, text: impl Into<String>) -> Result<(), SessionError> {
        self.guard()?;
        let text = text.into();
        let index = self
            .screen
            .focused_field_index()
            .filter(|&index| self.screen.fields()[index].is_input())
            .ok_or(SessionError::NoFocusedInputField)?;
        if let Some(field) = self.screen.field_mut(index) {
            field.set_pending(text.clone());
        }
        self.observers
            .notify_command_issued("type", None, &[Parameter::new("text", &text)]);
        Ok(())
    }

    /// Normalized, trimmed value of the field the identifier resolves
    /// to. Reads the snapshot only: a value buffered by `write` is not
    /// visible until an action submits it and the refresh brings it back.
    pub fn read(&mut self, identifier: impl Into<FieldIdentifier>) -> Result<String, SessionError> {
        self.guard()?;
        let identifier = identifier.into();
        let field = locator::find_field(self.screen.fields(), &identifier)?;
        let value = field.display_value().trim().to_string();
        let parameters = identifier.to_parameters();
        self.observers
            .notify_command_issued("read", Some(&value), &parameters);
        Ok(value)
    }

    pub fn field(&self, identifier: impl Into<FieldIdentifier>) -> Result<&Field, SessionError> {
        self.guard()?;
        locator::find_field(self.screen.fields(), &identifier.into())
    }

    /// Index of the label match itself, skip not applied. Diagnostic
    /// companion to `field`.
    pub fn field_index(
        &self,
        identifier: impl Into<FieldIdentifier>,
    ) -> Result<Option<usize>, SessionError> {
        self.guard()?;
        Ok(locator::label_match_index(
            self.screen.fields(),
            &identifier.into(),
        ))
    }

    pub fn screen_has_label(
        &self,
        identifier: impl Into<FieldIdentifier>,
    ) -> Result<bool, SessionError> {
        self.guard()?;
        Ok(locator::label_match_index(self.screen.fields(), &identifier.into()).is_some())
    }

    /// One whole screen row as normalized text, independent of field
    /// structure.
    pub fn line(&self, row: usize) -> Result<String, SessionError> {
        self.guard()?;
        self.screen
            .row_text(row)
            .ok_or(SessionError::RowOutOfRange {
                row,
                height: self.screen.height(),
            })
    }

    pub fn screen_text(&self) -> Result<String, SessionError> {
        self.guard()?;
        Ok(self.screen.render_text())
    }

    pub fn width(&self) -> Result<usize, SessionError> {
        self.guard()?;
        Ok(self.screen.width())
    }

    pub fn height(&self) -> Result<usize, SessionError> {
        self.guard()?;
        Ok(self.screen.height())
    }

    /// One `index=[value]` line per field, values normalized but not
    /// trimmed.
    pub fn print_fields(&self, out: &mut impl Write) -> Result<(), SessionError> {
        self.guard()?;
        for (index, field) in self.screen.fields().iter().enumerate() {
            writeln!(out, "{index}=[{}]", field.display_value()).map_err(SessionError::Output)?;
        }
        Ok(())
    }

    pub fn print_screen(&self, out: &mut impl Write) -> Result<(), SessionError> {
        self.guard()?;
        self.screen.write_framed(out).map_err(SessionError::Output)
    }

    pub fn set_debug(&mut self, debug: bool) -> Result<(), SessionError> {
        self.guard()?;
        self.engine.set_debug(debug);
        Ok(())
    }

    fn guard(&self) -> Result<(), SessionError> {
        if !self.attached {
            return Err(SessionError::NotConnected);
        }
        Ok(())
    }

    fn refresh_screen(&mut self) -> Result<(), SessionError> {
        self.screen = self.engine.read_screen()?;
        self.observers.notify_screen_updated(&self.screen);
        Ok(())
    }

    fn pending_edits(&self) -> Vec<FieldEdit> {
        self.screen
            .fields()
            .iter()
            .filter_map(|field| {
                field.pending().map(|value| FieldEdit {
                    row: field.row(),
                    col: field.col(),
                    value: value.to_string(),
                })
            })
            .collect()
    }

    /// Shared pipeline for every screen-mutating action: guard, submit
    /// buffered edits (submitting actions only), run the engine action,
    /// refresh, report the command.
    fn dispatch<F>(
        &mut self,
        command: &str,
        submit: bool,
        parameters: &[Parameter],
        action: F,
    ) -> Result<(), SessionError>
    where
        F: FnOnce(&mut E) -> Result<(), SessionError>,
    {
        self.guard()?;
        if submit {
            let edits = self.pending_edits();
            self.engine.submit_edits(&edits)?;
        }
        action(&mut self.engine)?;
        self.refresh_screen()?;
        self.observers
            .notify_command_issued(command, None, parameters);
        Ok(())
    }
}
