use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use markdown_livepane_engine::{Cmd, LivePreview};
use std::path::PathBuf;

use crate::session::Session;
use crate::view::Theme;

/// Action that has to wait for the unsaved-changes question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    New,
    Open,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Edit,
    /// "Save changes to NAME? (y/n/esc)"
    ConfirmDiscard { then: Pending },
    OpenPrompt { input: String },
    /// `then` runs once the save succeeds
    SaveAsPrompt { input: String, then: Option<Pending> },
}

pub struct App {
    pub session: Session,
    pub preview: LivePreview,
    pub theme: Theme,
    pub mode: Mode,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, theme: Theme) -> Self {
        Self {
            session,
            preview: LivePreview::new(),
            theme,
            mode: Mode::Edit,
            status: String::new(),
            should_quit: false,
        }
    }

    /// Text for the bottom line: the active prompt, else the last status message.
    pub fn status_line(&self) -> String {
        match &self.mode {
            Mode::Edit if self.status.is_empty() => {
                "^N new  ^O open  ^S save  F12 save as  ^Q quit".to_string()
            }
            Mode::Edit => self.status.clone(),
            Mode::ConfirmDiscard { .. } => {
                format!("Save changes to {}? (y/n/esc)", self.session.name())
            }
            Mode::OpenPrompt { input } => format!("Open: {input}"),
            Mode::SaveAsPrompt { input, .. } => format!("Save as: {input}"),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode.clone() {
            Mode::Edit => self.handle_edit_key(key),
            Mode::ConfirmDiscard { then } => self.handle_confirm_key(key, then),
            Mode::OpenPrompt { input } => {
                if let Some(path) = self.handle_prompt_key(key, input, |input| Mode::OpenPrompt {
                    input,
                }) {
                    self.mode = Mode::Edit;
                    self.open(path);
                }
            }
            Mode::SaveAsPrompt { input, then } => {
                if let Some(path) = self.handle_prompt_key(key, input, |input| {
                    Mode::SaveAsPrompt { input, then }
                }) {
                    self.mode = Mode::Edit;
                    if self.save_as(path)
                        && let Some(then) = then
                    {
                        self.perform(then);
                    }
                }
            }
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') if ctrl && alt => self.prompt_save_as(None),
            KeyCode::F(12) => self.prompt_save_as(None),
            KeyCode::Char('n') if ctrl => self.guard(Pending::New),
            KeyCode::Char('o') if ctrl => self.guard(Pending::Open),
            KeyCode::Char('q') if ctrl => self.guard(Pending::Quit),
            KeyCode::Char('s') if ctrl => {
                self.save();
            }
            KeyCode::Char(c) if !ctrl && !alt => self.insert(&c.to_string()),
            KeyCode::Enter => self.insert("\n"),
            KeyCode::Tab => self.insert("\t"),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_caret(caret_left),
            KeyCode::Right => self.move_caret(caret_right),
            KeyCode::Up => self.move_vertical(-1),
            KeyCode::Down => self.move_vertical(1),
            KeyCode::Home => {
                let (line, _) = self.caret_point();
                self.set_caret(self.session.document.point_to_offset(line, 0));
            }
            KeyCode::End => {
                let (line, _) = self.caret_point();
                self.set_caret(self.session.document.point_to_offset(line, usize::MAX));
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent, then: Pending) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.mode = Mode::Edit;
                if self.session.path().is_none() {
                    self.prompt_save_as(Some(then));
                } else if self.save() {
                    self.perform(then);
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.mode = Mode::Edit;
                self.perform(then);
            }
            KeyCode::Esc => {
                self.mode = Mode::Edit;
                self.status = "Cancelled".to_string();
            }
            _ => {}
        }
    }

    /// Line editing for path prompts. Returns the entered path on Enter.
    fn handle_prompt_key(
        &mut self,
        key: KeyEvent,
        mut input: String,
        rebuild: impl FnOnce(String) -> Mode,
    ) -> Option<PathBuf> {
        match key.code {
            KeyCode::Enter if !input.trim().is_empty() => {
                return Some(PathBuf::from(input.trim()));
            }
            KeyCode::Esc => {
                self.mode = Mode::Edit;
                self.status = "Cancelled".to_string();
                return None;
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.push(c),
            _ => {}
        }
        self.mode = rebuild(input);
        None
    }

    /// Ask about unsaved changes before `then`, or just do it.
    fn guard(&mut self, then: Pending) {
        if self.session.is_dirty() {
            self.mode = Mode::ConfirmDiscard { then };
        } else {
            self.perform(then);
        }
    }

    fn perform(&mut self, action: Pending) {
        debug!("performing {action:?}");
        match action {
            Pending::New => {
                self.session.new_document();
                self.status = "New document".to_string();
            }
            Pending::Open => {
                self.mode = Mode::OpenPrompt {
                    input: String::new(),
                }
            }
            Pending::Quit => self.should_quit = true,
        }
    }

    fn prompt_save_as(&mut self, then: Option<Pending>) {
        let input = self
            .session
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.mode = Mode::SaveAsPrompt { input, then };
    }

    fn open(&mut self, path: PathBuf) {
        match self.session.open(&path) {
            Ok(()) => self.status = format!("Opened {}", path.display()),
            Err(e) => self.report(format!("Could not open {}: {e}", path.display())),
        }
    }

    /// Save to the current path, prompting when untitled. True when the file was written.
    fn save(&mut self) -> bool {
        match self.session.path().map(|p| p.to_path_buf()) {
            Some(path) => self.save_as(path),
            None => {
                self.prompt_save_as(None);
                false
            }
        }
    }

    fn save_as(&mut self, path: PathBuf) -> bool {
        match self.session.save_as(path.clone()) {
            Ok(()) => {
                self.status = format!("Saved {}", path.display());
                true
            }
            Err(e) => {
                self.report(format!("Could not save {}: {e}", path.display()));
                false
            }
        }
    }

    fn report(&mut self, message: String) {
        info!("{message}");
        self.status = message;
    }

    pub fn caret(&self) -> usize {
        self.session.document.selection().end
    }

    pub fn caret_point(&self) -> (usize, usize) {
        self.session.document.offset_to_point(self.caret())
    }

    fn set_caret(&mut self, at: usize) {
        self.session.document.set_selection(at..at);
    }

    fn insert(&mut self, text: &str) {
        let at = self.caret();
        self.session.document.apply(Cmd::InsertText {
            at,
            text: text.to_string(),
        });
    }

    fn backspace(&mut self) {
        let caret = self.caret();
        let start = caret_left(&self.session.document.text(), caret);
        if start < caret {
            self.session.document.apply(Cmd::DeleteRange {
                range: start..caret,
            });
        }
    }

    fn delete(&mut self) {
        let caret = self.caret();
        let end = caret_right(&self.session.document.text(), caret);
        if end > caret {
            self.session.document.apply(Cmd::DeleteRange { range: caret..end });
        }
    }

    fn move_caret(&mut self, step: fn(&str, usize) -> usize) {
        let at = step(&self.session.document.text(), self.caret());
        self.set_caret(at);
    }

    fn move_vertical(&mut self, delta: isize) {
        let (line, col) = self.caret_point();
        let Some(line) = line.checked_add_signed(delta) else {
            self.set_caret(0);
            return;
        };
        let at = self.session.document.point_to_offset(line, col);
        self.set_caret(at);
    }
}

/// Start of the char before `at`.
fn caret_left(text: &str, at: usize) -> usize {
    text[..at]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// End of the char after `at`.
fn caret_right(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map(|c| at + c.len_utf8())
        .unwrap_or(at)
}
