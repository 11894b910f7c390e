//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including the forwarded-variable report.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Suppress progress messages; keep results and warnings.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows progress messages.
    pub fn shows_progress(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status and result messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows secondary detail lines.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
