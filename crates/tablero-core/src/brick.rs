//! Brick verification types.
//!
//! Every widget carries a set of falsifiable assertions about its rendered
//! state (contrast, latency) and a per-phase performance budget. Hosts may
//! verify bricks before painting; a widget whose assertions fail reports an
//! invalid verification rather than silently rendering wrong.

use std::time::Duration;

/// An assertion that must hold for a widget to render correctly.
#[derive(Debug, Clone, PartialEq)]
pub enum BrickAssertion {
    /// Text content must be visible (not hidden, not zero-opacity)
    TextVisible,

    /// WCAG 2.1 AA contrast ratio requirement (4.5:1 for normal text)
    ContrastRatio(f32),

    /// Maximum render latency in milliseconds
    MaxLatencyMs(u32),

    /// Element must be focusable for accessibility
    Focusable,
}

/// Performance budget for a widget's render phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickBudget {
    /// Maximum time for measure phase
    pub measure_ms: u32,
    /// Maximum time for layout phase
    pub layout_ms: u32,
    /// Maximum time for paint phase
    pub paint_ms: u32,
    /// Total budget (may be less than sum of phases)
    pub total_ms: u32,
}

impl BrickBudget {
    /// Create a budget with equal distribution across phases.
    #[must_use]
    pub const fn uniform(total_ms: u32) -> Self {
        let phase_ms = total_ms / 3;
        Self {
            measure_ms: phase_ms,
            layout_ms: phase_ms,
            paint_ms: phase_ms,
            total_ms,
        }
    }

    /// Create a custom budget with specified phase limits.
    #[must_use]
    pub const fn new(measure_ms: u32, layout_ms: u32, paint_ms: u32) -> Self {
        Self {
            measure_ms,
            layout_ms,
            paint_ms,
            total_ms: measure_ms + layout_ms + paint_ms,
        }
    }

    /// Convert to Duration.
    #[must_use]
    pub const fn as_duration(&self) -> Duration {
        Duration::from_millis(self.total_ms as u64)
    }
}

impl Default for BrickBudget {
    fn default() -> Self {
        // 16ms total for 60fps
        Self::uniform(16)
    }
}

/// Result of verifying a widget's assertions.
#[derive(Debug, Clone, Default)]
pub struct BrickVerification {
    /// All assertions that passed
    pub passed: Vec<BrickAssertion>,
    /// All assertions that failed with reasons
    pub failed: Vec<(BrickAssertion, String)>,
}

impl BrickVerification {
    /// Check if all assertions passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    /// Get the falsification score (passed / total).
    #[must_use]
    pub fn score(&self) -> f32 {
        let total = self.passed.len() + self.failed.len();
        if total == 0 {
            1.0
        } else {
            self.passed.len() as f32 / total as f32
        }
    }
}

/// Verifiable widget contract.
///
/// Tablero's `Widget` trait requires `Brick`, so every widget declares its
/// assertions and budget and can be verified before painting.
pub trait Brick: Send + Sync {
    /// Get the brick's unique type name.
    fn brick_name(&self) -> &'static str;

    /// Get all assertions for this brick.
    fn assertions(&self) -> &[BrickAssertion];

    /// Get the performance budget.
    fn budget(&self) -> BrickBudget {
        BrickBudget::default()
    }

    /// Verify all assertions against current state.
    fn verify(&self) -> BrickVerification;

    /// Check if this brick can be rendered (all assertions pass).
    fn can_render(&self) -> bool {
        self.verify().is_valid()
    }
}
