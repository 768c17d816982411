use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Longest URL accepted for copying (bytes)
const MAX_URL_BYTES: usize = 8 * 1024;

/// Clipboard seam (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Check a result URL before it touches the clipboard, returning the text to copy
fn prepare_url(url: &str) -> Result<&str> {
    let url = url.trim();

    if url.is_empty() {
        bail!("Result has an empty URL");
    }
    if url.len() > MAX_URL_BYTES {
        bail!("URL too large to copy ({} bytes, max {})", url.len(), MAX_URL_BYTES);
    }
    if url.chars().any(char::is_control) {
        bail!("URL contains control characters");
    }

    Ok(url)
}

fn copy_with_provider(url: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    let url = prepare_url(url)?;
    provider.set_text(url)
}

/// Copy a result URL to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - The URL is empty, oversized, or contains control characters
/// - The system clipboard is unavailable (headless environment) or locked
pub fn copy_url_to_clipboard(url: &str) -> Result<()> {
    // Validate before touching the clipboard so CI gets the real reason
    prepare_url(url)?;

    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(url, &mut clipboard)
}
