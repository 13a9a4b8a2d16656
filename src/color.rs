#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    /// Parses a collector color symbol ("W", "U", "B", "R", "G").
    /// Anything else is not a color symbol.
    pub fn from_symbol(symbol: &str) -> Option<Color> {
        match symbol {
            "W" => Some(Color::White),
            "U" => Some(Color::Blue),
            "B" => Some(Color::Black),
            "R" => Some(Color::Red),
            "G" => Some(Color::Green),
            _ => None,
        }
    }

    /// The single-letter symbol used in collector data and export rows.
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

/// A card's color identity as bitflags. May be empty (colorless).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSet(u8);

impl ColorSet {
    pub const COLORLESS: Self = Self(0);

    /// Creates a new empty ColorSet.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Creates a ColorSet from a single color.
    pub const fn from_color(color: Color) -> Self {
        match color {
            Color::White => Self(1 << 0),
            Color::Blue => Self(1 << 1),
            Color::Black => Self(1 << 2),
            Color::Red => Self(1 << 3),
            Color::Green => Self(1 << 4),
        }
    }

    /// Builds a ColorSet from collector symbol strings; unknown symbols are ignored.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Self {
        symbols
            .iter()
            .filter_map(|s| Color::from_symbol(s.as_ref()))
            .collect()
    }

    /// Returns true if this set contains no colors.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this set contains the given color.
    pub const fn contains(self, color: Color) -> bool {
        self.0 & Self::from_color(color).0 != 0
    }

    /// Returns the number of colors in this set.
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Adds a color to this set, returning the new set.
    pub const fn with(self, color: Color) -> Self {
        Self(self.0 | Self::from_color(color).0)
    }

    /// The symbols of this set in WUBRG order, e.g. "WU" or "" for colorless.
    pub fn symbols(self) -> String {
        Color::ALL
            .into_iter()
            .filter(|&c| self.contains(c))
            .map(Color::symbol)
            .collect()
    }
}

impl From<Color> for ColorSet {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        iter.into_iter()
            .fold(ColorSet::COLORLESS, |set, color| set.with(color))
    }
}

#[cfg(feature = "serialization")]
mod serde_impl {
    use super::{Color, ColorSet};
    use serde::de::{self, Deserializer, Visitor};
    use serde::{Deserialize, Serialize, Serializer};

    // Serialized as the symbol string ("WU", "" for colorless) so the
    // browser client and export rows see collector notation, not bitflags.
    impl Serialize for ColorSet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.symbols())
        }
    }

    impl<'de> Deserialize<'de> for ColorSet {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct SymbolsVisitor;

            impl<'de> Visitor<'de> for SymbolsVisitor {
                type Value = ColorSet;

                fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                    f.write_str("a string of color symbols like \"WU\"")
                }

                fn visit_str<E: de::Error>(self, value: &str) -> Result<ColorSet, E> {
                    Ok(value
                        .chars()
                        .filter_map(|c| Color::from_symbol(&c.to_string()))
                        .collect())
                }
            }

            deserializer.deserialize_str(SymbolsVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_set_empty() {
        let set = ColorSet::new();
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert_eq!(set.symbols(), "");
    }

    #[test]
    fn test_color_set_from_symbols() {
        let set = ColorSet::from_symbols(&["U", "W"]);
        assert!(set.contains(Color::White));
        assert!(set.contains(Color::Blue));
        assert!(!set.contains(Color::Red));
        assert_eq!(set.count(), 2);
        // WUBRG order regardless of input order
        assert_eq!(set.symbols(), "WU");
    }

    #[test]
    fn test_unknown_symbols_ignored() {
        let set = ColorSet::from_symbols(&["W", "C", "X"]);
        assert_eq!(set.count(), 1);
        assert!(set.contains(Color::White));
    }

    #[test]
    fn test_from_iterator() {
        let set: ColorSet = [Color::Red, Color::Green].into_iter().collect();
        assert_eq!(set.symbols(), "RG");
    }
}
