use crate::gesture::SwipeDirection;
use crate::session::Identity;
use serde::{Deserialize, Serialize};

pub const DEFAULT_AGE: u32 = 25;
pub const DEFAULT_SUBTITLE: &str = "New to the app!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub image: String,
    pub subtitle: String,
    pub smashes: u32,
    pub passes: u32,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
}

impl ProfileCard {
    /// Share of decided swipes that were smashes, rounded to a whole
    /// percentage. 0 while the card has no swipes at all.
    pub fn smash_rate(&self) -> u32 {
        let total = self.smashes + self.passes;
        if total == 0 {
            return 0;
        }
        (f64::from(self.smashes) / f64::from(total) * 100.0).round() as u32
    }
}

/// Ordered card queue plus a cursor marking the next undecided card. The
/// cursor only moves forward and is deliberately not persisted: counters
/// survive a reload, "already seen" does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    cards: Vec<ProfileCard>,
    position: usize,
}

impl Deck {
    pub fn new(cards: Vec<ProfileCard>) -> Self {
        Self { cards, position: 0 }
    }

    pub fn cards(&self) -> &[ProfileCard] {
        &self.cards
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn top_card(&self) -> Option<&ProfileCard> {
        self.cards.get(self.position)
    }

    /// Records a decision on the top card and advances the cursor. Returns
    /// false when the deck is exhausted; callers persist the list on true.
    pub fn commit_swipe(&mut self, direction: SwipeDirection) -> bool {
        let Some(card) = self.cards.get_mut(self.position) else {
            return false;
        };
        match direction {
            SwipeDirection::Smash => card.smashes += 1,
            SwipeDirection::Pass => card.passes += 1,
        }
        self.position += 1;
        true
    }

    pub fn add_card(&mut self, image: String, subtitle: String, owner: &Identity) {
        let subtitle = if subtitle.is_empty() {
            DEFAULT_SUBTITLE.to_string()
        } else {
            subtitle
        };
        self.cards.push(ProfileCard {
            id: self.mint_id(),
            name: owner.username.clone(),
            age: DEFAULT_AGE,
            image,
            subtitle,
            smashes: 0,
            passes: 0,
            is_owner: true,
            owner_id: Some(owner.id),
        });
    }

    pub fn posts_owned_by(&self, identity: &Identity) -> Vec<&ProfileCard> {
        self.cards
            .iter()
            .filter(|card| card.owner_id == Some(identity.id))
            .collect()
    }

    /// One greater than the highest id referenced anywhere in the deck,
    /// covering card ids and owner ids so neither namespace can collide
    /// with a value a card still points at.
    pub fn mint_id(&self) -> u64 {
        self.cards
            .iter()
            .flat_map(|card| [Some(card.id), card.owner_id])
            .flatten()
            .max()
            .map_or(1, |max| max + 1)
    }
}

pub fn sample_cards() -> Vec<ProfileCard> {
    vec![
        ProfileCard {
            id: 1,
            name: "Alex".to_string(),
            age: 25,
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=600&fit=crop"
                .to_string(),
            subtitle: "Love hiking and good coffee ☕".to_string(),
            smashes: 0,
            passes: 0,
            is_owner: false,
            owner_id: None,
        },
        ProfileCard {
            id: 2,
            name: "Sam".to_string(),
            age: 28,
            image: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=600&fit=crop"
                .to_string(),
            subtitle: "Artist and dog lover 🎨🐕".to_string(),
            smashes: 0,
            passes: 0,
            is_owner: false,
            owner_id: None,
        },
    ]
}
