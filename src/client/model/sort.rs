/// Feed sort orders offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    Recent,
    Oldest,
    #[default]
    Interesting,
    MindBlowing,
    False,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        Self::Recent,
        Self::Oldest,
        Self::Interesting,
        Self::MindBlowing,
        Self::False,
    ];

    /// Value of the `sort` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Recent => "-createdAt",
            Self::Oldest => "createdAt",
            Self::Interesting => "-votesInteresting",
            Self::MindBlowing => "-votesMindBlowing",
            Self::False => "-votesFalse",
        }
    }

    /// Value used by the `<select>` element.
    pub fn value(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Oldest => "oldest",
            Self::Interesting => "interesting",
            Self::MindBlowing => "mindblowing",
            Self::False => "false",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Recent => "Most recent",
            Self::Oldest => "Oldest",
            Self::Interesting => "Most interesting",
            Self::MindBlowing => "Most mind-blowing",
            Self::False => "Most disputed",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.value() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sorts_by_interesting_votes() {
        assert_eq!(SortOption::default().as_query(), "-votesInteresting");
    }

    #[test]
    fn select_values_map_back() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::from_value(option.value()), Some(option));
        }
        assert_eq!(SortOption::from_value("popular"), None);
    }
}
