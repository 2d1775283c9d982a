//! Neon theme model
//!
//! This crate provides:
//! - Color parsing for the palette value formats themes use
//! - Theme struct pairing a palette with a backdrop pattern
//! - The shuffled theme registry that defines navigation order

pub mod color;
pub mod registry;
pub mod themes;

pub use color::Color;
pub use registry::ThemeRegistry;
pub use themes::builtin_themes;

/// Identifier for one procedural backdrop animation algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Point stars falling downward, wrapping to the top
    Stars,
    /// Stacked sine curves with advancing phase
    Waves,
    /// Concentric rings with orbiting markers
    Orbits,
    /// Points with constant velocity reflecting off the edges
    Particles,
    /// Falling glyph columns with a trailing ghost
    Matrix,
    /// Radial wash plus horizontal sine ribbons
    Aurora,
    /// Pulsing star field with a central nebula
    Galaxy,
    /// Per-pixel procedural color field with ghosting
    Plasma,
}

impl Pattern {
    /// All patterns in declaration order
    pub const ALL: [Pattern; 8] = [
        Pattern::Stars,
        Pattern::Waves,
        Pattern::Orbits,
        Pattern::Particles,
        Pattern::Matrix,
        Pattern::Aurora,
        Pattern::Galaxy,
        Pattern::Plasma,
    ];

    /// Stable lowercase name for this pattern
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Stars => "stars",
            Pattern::Waves => "waves",
            Pattern::Orbits => "orbits",
            Pattern::Particles => "particles",
            Pattern::Matrix => "matrix",
            Pattern::Aurora => "aurora",
            Pattern::Galaxy => "galaxy",
            Pattern::Plasma => "plasma",
        }
    }

    /// Parse a pattern from its name
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stars" => Some(Pattern::Stars),
            "waves" => Some(Pattern::Waves),
            "orbits" => Some(Pattern::Orbits),
            "particles" => Some(Pattern::Particles),
            "matrix" => Some(Pattern::Matrix),
            "aurora" => Some(Pattern::Aurora),
            "galaxy" => Some(Pattern::Galaxy),
            "plasma" => Some(Pattern::Plasma),
            _ => None,
        }
    }
}

/// The two colors a pattern's drawing calls use
///
/// Some patterns only use the primary color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary color (`--c1` in the original theme classes)
    pub c1: Color,
    /// Secondary color (`--c2`)
    pub c2: Color,
}

impl Palette {
    pub fn new(c1: Color, c2: Color) -> Self {
        Self { c1, c2 }
    }

    /// Parse a palette from two color strings
    ///
    /// Missing or invalid values are a precondition violation, not a fatal
    /// condition: they are logged and replaced with white.
    pub fn parse(c1: &str, c2: &str) -> Self {
        let parse_or_white = |s: &str| {
            Color::parse(s).unwrap_or_else(|| {
                log::warn!("Invalid palette color {:?}, falling back to white", s);
                Color::WHITE
            })
        };
        Self {
            c1: parse_or_white(c1),
            c2: parse_or_white(c2),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            c1: Color::WHITE,
            c2: Color::WHITE,
        }
    }
}

/// A selectable (palette, pattern) pair
///
/// Immutable once constructed; the registry never mutates themes after its
/// one-time shuffle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name, used for logging and as the page-level identity
    pub name: String,
    pub palette: Palette,
    pub pattern: Pattern,
}

impl Theme {
    pub fn new(name: impl Into<String>, palette: Palette, pattern: Pattern) -> Self {
        Self {
            name: name.into(),
            palette,
            pattern,
        }
    }
}
