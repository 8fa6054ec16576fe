// Shared enums: suggestion categories and style names.

/// The five suggestion categories produced by the engine.
///
/// Every engine result contains exactly these five keys, in this order,
/// even when some categories are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Affix-mutated forms of a single word.
    Variations,
    /// Joined forms of two or more input words.
    Combinations,
    /// Input words paired with theme words from a style.
    Styled,
    /// Letter-extraction summaries of the whole phrase.
    Acronyms,
    /// Portmanteau words spliced from two input words.
    Blends,
}

impl Category {
    /// All categories in result order.
    pub const ALL: [Category; 5] = [
        Category::Variations,
        Category::Combinations,
        Category::Styled,
        Category::Acronyms,
        Category::Blends,
    ];

    /// The category's key in serialized output.
    pub fn name(self) -> &'static str {
        match self {
            Category::Variations => "variations",
            Category::Combinations => "combinations",
            Category::Styled => "styled",
            Category::Acronyms => "acronyms",
            Category::Blends => "blends",
        }
    }
}

/// Named style for theme-word pairings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Modern,
    Elegant,
    Playful,
    Professional,
    Innovative,
}

impl Style {
    /// Parse a style name, case-insensitively.
    ///
    /// Unknown names silently fall back to [`Style::Modern`]; callers that
    /// need strict parsing can compare against [`Style::name`] themselves.
    pub fn from_name(name: &str) -> Style {
        match name.to_lowercase().as_str() {
            "elegant" => Style::Elegant,
            "playful" => Style::Playful,
            "professional" => Style::Professional,
            "innovative" => Style::Innovative,
            _ => Style::Modern,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Modern => "modern",
            Style::Elegant => "elegant",
            Style::Playful => "playful",
            Style::Professional => "professional",
            Style::Innovative => "innovative",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order_is_stable() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["variations", "combinations", "styled", "acronyms", "blends"]
        );
    }

    #[test]
    fn style_parse_round_trips() {
        for style in [
            Style::Modern,
            Style::Elegant,
            Style::Playful,
            Style::Professional,
            Style::Innovative,
        ] {
            assert_eq!(Style::from_name(style.name()), style);
        }
    }

    #[test]
    fn style_parse_is_case_insensitive() {
        assert_eq!(Style::from_name("ELEGANT"), Style::Elegant);
        assert_eq!(Style::from_name("Playful"), Style::Playful);
    }

    #[test]
    fn unknown_style_falls_back_to_modern() {
        assert_eq!(Style::from_name("brutalist"), Style::Modern);
        assert_eq!(Style::from_name(""), Style::Modern);
    }
}
