use markdown_livepane_engine::{Cmd, Document, IoError, display_name, read_file, write_file};
use std::path::{Path, PathBuf};

/// The open document plus where it lives on disk and whether it has been saved.
///
/// The engine's `Document` knows nothing about files; saved state is tracked
/// here by remembering the document version at the last load or save.
#[derive(Debug, Default)]
pub struct Session {
    pub document: Document,
    path: Option<PathBuf>,
    saved_version: u64,
}

impl Session {
    /// Start a session for the command-line argument, if any.
    ///
    /// A path that does not exist yet gives an empty document that will be
    /// created on first save.
    pub fn start(path: Option<PathBuf>) -> Result<Self, IoError> {
        let mut session = Self::default();
        if let Some(path) = path {
            match session.open(&path) {
                Ok(()) => {}
                Err(IoError::NotFound(_)) => session.path = Some(path),
                Err(e) => return Err(e),
            }
        }
        Ok(session)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn name(&self) -> String {
        display_name(self.path())
    }

    pub fn is_dirty(&self) -> bool {
        self.document.version() != self.saved_version
    }

    /// Window title: `"{name}{ *} - Markdown Editor"`
    pub fn title(&self) -> String {
        let marker = if self.is_dirty() { " *" } else { "" };
        format!("{}{marker} - Markdown Editor", self.name())
    }

    /// Empty the buffer and forget the file.
    pub fn new_document(&mut self) {
        self.replace(String::new());
        self.path = None;
    }

    /// Replace the buffer with a file's text. On error the session is untouched.
    pub fn open(&mut self, path: &Path) -> Result<(), IoError> {
        let text = read_file(path)?;
        self.replace(text);
        self.path = Some(path.to_path_buf());
        Ok(())
    }

    /// Write the buffer to `path` and adopt it as the document's file.
    pub fn save_as(&mut self, path: PathBuf) -> Result<(), IoError> {
        write_file(&path, &self.document.text())?;
        self.path = Some(path);
        self.saved_version = self.document.version();
        Ok(())
    }

    fn replace(&mut self, text: String) {
        self.document.apply(Cmd::ReplaceAll { text });
        self.document.set_selection(0..0);
        self.saved_version = self.document.version();
    }
}
