//! Write-only clipboard access.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ClipboardError;

/// X11 and Wayland clipboards are served by the copying process, so copied
/// text disappears when passkeep exits.
pub const SERVED_BY_PROCESS: bool = cfg!(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
));

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Copies `text` for use after this process is gone.
    ///
    /// Where the process serves the clipboard itself, this blocks until
    /// another program takes the clipboard over.
    fn copy_and_hold(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copy(text)
    }

    /// True when something copied through this handle is lost on exit.
    fn cleared_on_exit(&self) -> bool {
        false
    }
}

/// The desktop clipboard.
///
/// The handle is opened on first use and kept alive afterwards, since some
/// platforms drop clipboard contents when the owning handle goes away.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            let handle = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(handle);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("no clipboard handle".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        log::debug!("Copied {} characters to clipboard", text.chars().count());
        Ok(())
    }

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn copy_and_hold(&mut self, text: &str) -> Result<(), ClipboardError> {
        use arboard::SetExtLinux;

        log::debug!("Holding clipboard until another program replaces it");
        self.handle()?
            .set()
            .wait()
            .text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        log::debug!("Clipboard taken over by another program");
        Ok(())
    }

    fn cleared_on_exit(&self) -> bool {
        SERVED_BY_PROCESS && self.inner.is_some()
    }
}

/// In-process clipboard, for headless runs and tests.
///
/// Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

/// Text the user should see when leaving with `clipboard` still holding
/// something only this process can serve.
pub fn exit_notice(clipboard: &dyn Clipboard) -> Option<&'static str> {
    clipboard
        .cleared_on_exit()
        .then_some("Note: copied passwords are cleared from the clipboard when passkeep exits.")
}
