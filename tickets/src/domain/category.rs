//! Train categories and the category filter.

use std::collections::BTreeSet;
use std::fmt;

/// Train category, identified by the first letter of the train code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrainCategory {
    /// 动车 (D)
    Emu,
    /// 高铁 (G)
    HighSpeed,
    /// 城际 (C)
    Intercity,
    /// 快速 (K)
    Fast,
    /// 特快 (T)
    Express,
    /// 直达 (Z)
    Direct,
}

impl TrainCategory {
    /// All categories, in command-line flag order.
    pub const ALL: [TrainCategory; 6] = [
        TrainCategory::Emu,
        TrainCategory::HighSpeed,
        TrainCategory::Intercity,
        TrainCategory::Fast,
        TrainCategory::Express,
        TrainCategory::Direct,
    ];

    /// Look up a category from a train-code initial. Case-insensitive.
    ///
    /// ```
    /// use tickets::domain::TrainCategory;
    ///
    /// assert_eq!(TrainCategory::from_initial('G'), Some(TrainCategory::HighSpeed));
    /// assert_eq!(TrainCategory::from_initial('g'), Some(TrainCategory::HighSpeed));
    /// assert_eq!(TrainCategory::from_initial('Y'), None);
    /// ```
    pub fn from_initial(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'd' => Some(TrainCategory::Emu),
            'g' => Some(TrainCategory::HighSpeed),
            'c' => Some(TrainCategory::Intercity),
            'k' => Some(TrainCategory::Fast),
            't' => Some(TrainCategory::Express),
            'z' => Some(TrainCategory::Direct),
            _ => None,
        }
    }

    /// Category of a train code, based on its first character.
    pub fn of_code(code: &str) -> Option<Self> {
        code.chars().next().and_then(Self::from_initial)
    }

    /// The lowercase filter letter (as used by the command-line flags).
    pub fn letter(&self) -> char {
        match self {
            TrainCategory::Emu => 'd',
            TrainCategory::HighSpeed => 'g',
            TrainCategory::Intercity => 'c',
            TrainCategory::Fast => 'k',
            TrainCategory::Express => 't',
            TrainCategory::Direct => 'z',
        }
    }

    /// Chinese display label.
    pub fn label(&self) -> &'static str {
        match self {
            TrainCategory::Emu => "动车",
            TrainCategory::HighSpeed => "高铁",
            TrainCategory::Intercity => "城际",
            TrainCategory::Fast => "快速",
            TrainCategory::Express => "特快",
            TrainCategory::Direct => "直达",
        }
    }
}

impl fmt::Display for TrainCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of requested train categories.
///
/// An empty filter accepts every train.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter(BTreeSet<TrainCategory>);

impl CategoryFilter {
    /// A filter that accepts every train.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, category: TrainCategory) {
        self.0.insert(category);
    }

    pub fn contains(&self, category: TrainCategory) -> bool {
        self.0.contains(&category)
    }

    /// Whether a train with this code should be shown.
    ///
    /// Codes whose initial is not a known category only pass an empty filter.
    pub fn accepts(&self, code: &str) -> bool {
        if self.0.is_empty() {
            return true;
        }
        TrainCategory::of_code(code).is_some_and(|c| self.0.contains(&c))
    }

    pub fn iter(&self) -> impl Iterator<Item = TrainCategory> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<TrainCategory> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = TrainCategory>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_roundtrip() {
        for category in TrainCategory::ALL {
            assert_eq!(TrainCategory::from_initial(category.letter()), Some(category));
        }
    }

    #[test]
    fn of_code_uses_first_char() {
        assert_eq!(TrainCategory::of_code("G1"), Some(TrainCategory::HighSpeed));
        assert_eq!(TrainCategory::of_code("D3125"), Some(TrainCategory::Emu));
        assert_eq!(TrainCategory::of_code("1461"), None);
        assert_eq!(TrainCategory::of_code(""), None);
    }

    #[test]
    fn empty_filter_accepts_everything() {
        let filter = CategoryFilter::all();
        assert!(filter.accepts("G1"));
        assert!(filter.accepts("D5"));
        assert!(filter.accepts("1461"));
        assert!(filter.accepts(""));
    }

    #[test]
    fn filter_matches_initial_case_insensitively() {
        let filter: CategoryFilter = [TrainCategory::HighSpeed].into_iter().collect();
        assert!(filter.accepts("G1"));
        assert!(filter.accepts("g1"));
        assert!(!filter.accepts("D1"));
        assert!(!filter.accepts("1461"));
        assert!(!filter.accepts(""));
    }

    #[test]
    fn filter_with_several_categories() {
        let filter: CategoryFilter = [TrainCategory::Emu, TrainCategory::Direct]
            .into_iter()
            .collect();
        assert!(filter.accepts("D701"));
        assert!(filter.accepts("Z19"));
        assert!(!filter.accepts("K1"));
        assert_eq!(
            filter.iter().collect::<Vec<_>>(),
            vec![TrainCategory::Emu, TrainCategory::Direct]
        );
    }
}
