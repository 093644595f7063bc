//! Summary cards

use serde::Serialize;

/// Emphasis applied to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Destructive,
}

/// One headline metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: usize,
    pub variant: CardVariant,
}

impl SummaryCard {
    #[inline]
    #[must_use]
    pub fn new(title: &'static str, value: usize) -> Self {
        Self {
            title,
            value,
            variant: CardVariant::Default,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }
}

/// Look up a card by title
#[must_use]
pub fn find_card<'a>(cards: &'a [SummaryCard], title: &str) -> Option<&'a SummaryCard> {
    cards.iter().find(|card| card.title == title)
}
