#![forbid(unsafe_code)]

//! The ordered, append-only card container.

use lazyfeed_core::{ElementId, ElementIdAllocator};
use rustc_hash::FxHashMap;

use crate::card::{Card, CardClass};

/// Ordered sequence of cards. Cards are only ever appended.
#[derive(Debug, Clone, Default)]
pub struct CardContainer {
    cards: Vec<Card>,
    index: FxHashMap<ElementId, usize>,
    ids: ElementIdAllocator,
}

impl CardContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Container pre-populated with one card per text, in order.
    #[must_use]
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut container = Self::new();
        for text in texts {
            let card = container.create_card(text);
            container.append(card);
        }
        container
    }

    /// Build a detached card with a fresh id. It is not part of the
    /// container until [`append`](Self::append)ed.
    pub fn create_card(&mut self, text: impl Into<String>) -> Card {
        Card::new(self.ids.allocate(), text)
    }

    /// Append `card` at the end. Returns its position, or `None` if a card
    /// with the same id is already present.
    pub fn append(&mut self, card: Card) -> Option<usize> {
        if self.index.contains_key(&card.id()) {
            return None;
        }
        let position = self.cards.len();
        self.index.insert(card.id(), position);
        self.cards.push(card);
        Some(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Card> {
        self.position(id).map(|i| &self.cards[i])
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Card> {
        self.position(id).map(|i| &mut self.cards[i])
    }

    /// Card at `position`.
    #[must_use]
    pub fn at(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Position of `id` in the sequence.
    #[must_use]
    pub fn position(&self, id: ElementId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// The last child, if it carries the `CARD` class.
    #[must_use]
    pub fn last_card(&self) -> Option<ElementId> {
        self.cards
            .last()
            .filter(|c| c.has_class(CardClass::CARD))
            .map(Card::id)
    }

    /// Ids of every card carrying `class`, in order.
    #[must_use]
    pub fn query_by_class(&self, class: CardClass) -> Vec<ElementId> {
        self.cards
            .iter()
            .filter(|c| c.has_class(class))
            .map(Card::id)
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Number of cards currently revealed.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_revealed()).count()
    }
}

impl<'a> IntoIterator for &'a CardContainer {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
