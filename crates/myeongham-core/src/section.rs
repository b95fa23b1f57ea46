//! The card's sections and navigation order.

/// A navigable section of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Hero view with the name art and animated background.
    #[default]
    Home,
    /// Short biography.
    About,
    /// Skill bars.
    Skills,
    /// Project list.
    Projects,
    /// Contact details and links.
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Title shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Position within [`Section::ALL`].
    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Skills => 2,
            Section::Projects => 3,
            Section::Contact => 4,
        }
    }

    /// Section at the given navigation position, if any.
    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    /// The next section, wrapping at the end.
    pub fn next(self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// The previous section, wrapping at the start.
    pub fn prev(self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}
