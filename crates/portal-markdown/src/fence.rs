//! Code fence tracking for container preprocessing.
//!
//! Container markers (`:::`) inside fenced code are literal text, so the
//! preprocessor must know whether a line sits inside a fence.

/// Tracks fenced code state during line-by-line processing.
///
/// A fence opens with three or more backticks or tildes and closes with a
/// run of the same character at least as long, followed only by whitespace.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    /// Fence character and opening length while inside a fence.
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed one line. Returns `true` if the line opened or closed a fence.
    pub(crate) fn update(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let Some((ch, len)) = fence_run(trimmed) else {
            return false;
        };

        match self.open {
            Some((open_ch, open_len)) => {
                let closes = ch == open_ch
                    && len >= open_len
                    && trimmed[len..].chars().all(char::is_whitespace);
                if closes {
                    self.open = None;
                }
                closes
            }
            None => {
                self.open = Some((ch, len));
                true
            }
        }
    }
}

/// Leading run of three or more fence characters.
fn fence_run(trimmed: &str) -> Option<(char, usize)> {
    let first = trimmed.chars().next().filter(|&c| c == '`' || c == '~')?;
    // Fence characters are ASCII, so the char count is also the byte length.
    let len = trimmed.chars().take_while(|&c| c == first).count();
    (len >= 3).then_some((first, len))
}
