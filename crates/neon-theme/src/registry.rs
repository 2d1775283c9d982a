//! Theme registry
//!
//! Holds the fixed theme sequence used for navigation. The sequence is
//! permuted exactly once at construction; themes are immutable afterwards.

use crate::Theme;

/// Registry of available themes in navigation order
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    /// Create a registry with the given navigation order, unshuffled
    ///
    /// Precondition: `themes` must not be empty.
    pub fn new(themes: Vec<Theme>) -> Self {
        assert!(!themes.is_empty(), "theme registry must contain at least one theme");
        Self { themes }
    }

    /// Create a registry, shuffling the themes once with a Fisher-Yates pass
    ///
    /// The post-shuffle order is the navigation order for the rest of the
    /// process. The same seed always produces the same order.
    pub fn shuffled(mut themes: Vec<Theme>, seed: u64) -> Self {
        assert!(!themes.is_empty(), "theme registry must contain at least one theme");

        let mut state = seed;
        for i in (1..themes.len()).rev() {
            state = mix(state);
            let j = (state % (i as u64 + 1)) as usize;
            themes.swap(i, j);
        }

        log::info!(
            "Theme registry shuffled {} themes (seed {}): {:?}",
            themes.len(),
            seed,
            themes.iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
        );
        Self { themes }
    }

    /// Number of themes
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Theme at a navigation index
    ///
    /// Panics if the index is out of range; callers hold indices produced by
    /// modular arithmetic over `len()`.
    pub fn get(&self, index: usize) -> &Theme {
        &self.themes[index]
    }

    /// All themes in navigation order
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }
}

/// Hash-based pseudo-random step for the shuffle
fn mix(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e3779b97f4a7c15);
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51afd7ed558ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ceb9fe1a85ec53);
    x ^= x >> 33;
    x
}
