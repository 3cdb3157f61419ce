//! Container block directives: `::: name info` ... `:::`

use portal_config::ContainerOptions;

/// Handler for one container block type.
///
/// The processor calls [`start`](Self::start) for an opening marker whose
/// type matches [`name`](Self::name) and [`end`](Self::end) for the matching
/// closing marker. Returned HTML replaces the marker line and passes through
/// the markdown parser as a raw HTML block.
///
/// Handlers implement `Send` only, since every render builds its own
/// processor.
pub trait ContainerDirective: Send {
    /// Block type matched after the colons, e.g. `info`.
    fn name(&self) -> &str;

    /// Opening HTML for a marker line carrying `info` after the type.
    ///
    /// Returning `None` declines the block; the marker is kept as text.
    fn start(&mut self, info: &str, line: usize) -> Option<String>;

    /// Closing HTML.
    ///
    /// **Invariant**: only called after a successful `start()`.
    fn end(&mut self, line: usize) -> Option<String>;
}

/// Custom block configured by a container plugin registration.
///
/// Renders `before(title)` and `after` from [`ContainerOptions`]. Content
/// between them is not escaped or sanitized.
pub struct CustomBlock {
    options: ContainerOptions,
}

impl CustomBlock {
    pub fn new(options: ContainerOptions) -> Self {
        Self { options }
    }
}

impl ContainerDirective for CustomBlock {
    fn name(&self) -> &str {
        &self.options.kind
    }

    fn start(&mut self, info: &str, _line: usize) -> Option<String> {
        Some(self.options.render_before(info))
    }

    fn end(&mut self, _line: usize) -> Option<String> {
        Some(self.options.after.clone())
    }
}
