//! Theme controller
//!
//! Owns the shuffled registry, the active theme index, and the scheduler.
//! Advancing or retreating wraps in both directions and always restarts the
//! selected theme's pattern with fresh run state, even when the theme did
//! not change.

use neon_theme::{Theme, ThemeRegistry};

use crate::scheduler::{RunToken, Scheduler};

/// Rotates through the registry and drives the scheduler
pub struct ThemeController {
    registry: ThemeRegistry,
    index: usize,
    scheduler: Scheduler,
}

impl ThemeController {
    /// Create a controller starting at index 0
    ///
    /// Does not apply the first theme; call `apply_current` once the render
    /// target is ready.
    pub fn new(registry: ThemeRegistry, scheduler: Scheduler) -> Self {
        Self {
            registry,
            index: 0,
            scheduler,
        }
    }

    /// Apply the theme at the active index
    ///
    /// Sets the theme's palette and starts its pattern, replacing any
    /// running pattern.
    pub fn apply_current(&mut self) -> RunToken {
        let theme = self.registry.get(self.index);
        log::info!(
            "Applying theme '{}' ({:?}, index {}/{})",
            theme.name,
            theme.pattern,
            self.index,
            self.registry.len()
        );
        self.scheduler.start(theme.pattern, theme.palette)
    }

    /// Move to the next theme, wrapping to 0 past the end
    pub fn advance(&mut self) -> RunToken {
        self.index = (self.index + 1) % self.registry.len();
        self.apply_current()
    }

    /// Move to the previous theme, wrapping to the last from 0
    pub fn retreat(&mut self) -> RunToken {
        self.index = (self.index + self.registry.len() - 1) % self.registry.len();
        self.apply_current()
    }

    /// Theme at the active index
    pub fn current(&self) -> &Theme {
        self.registry.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }
}
