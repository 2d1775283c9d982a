//! Built-in theme set
//!
//! The ten product themes, each pairing a neon palette with one backdrop
//! pattern. Authored order is not significant at runtime; the registry
//! shuffles once at startup and that order defines navigation.

use crate::{Palette, Pattern, Theme};

/// A built-in theme definition
struct BuiltinTheme {
    name: &'static str,
    c1: &'static str,
    c2: &'static str,
    pattern: Pattern,
}

const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme { name: "blue", c1: "#00d4ff", c2: "#0066ff", pattern: Pattern::Stars },
    BuiltinTheme { name: "purple", c1: "#b967ff", c2: "#7a2bff", pattern: Pattern::Waves },
    BuiltinTheme { name: "cyan", c1: "#00fff0", c2: "#00a8cc", pattern: Pattern::Orbits },
    BuiltinTheme { name: "green", c1: "#39ff14", c2: "#00b84d", pattern: Pattern::Particles },
    BuiltinTheme { name: "orange", c1: "#ff9e00", c2: "#ff5500", pattern: Pattern::Waves },
    BuiltinTheme { name: "pink", c1: "#ff4fd8", c2: "#ff8ae2", pattern: Pattern::Stars },
    BuiltinTheme { name: "matrix", c1: "#00ff46", c2: "#003b00", pattern: Pattern::Matrix },
    BuiltinTheme { name: "aurora", c1: "#36f1cd", c2: "#7a5cff", pattern: Pattern::Aurora },
    BuiltinTheme { name: "galaxy", c1: "#cfd8ff", c2: "#8a2be2", pattern: Pattern::Galaxy },
    BuiltinTheme { name: "plasma", c1: "#ff32c8", c2: "#32c8ff", pattern: Pattern::Plasma },
];

/// Construct the built-in theme list in authored order
pub fn builtin_themes() -> Vec<Theme> {
    BUILTIN_THEMES
        .iter()
        .map(|t| Theme::new(t.name, Palette::parse(t.c1, t.c2), t.pattern))
        .collect()
}
