use crate::deck::ProfileCard;
use crate::session::Identity;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use log::warn;

const CARDS_KEY: &str = "cards";
const CURRENT_USER_KEY: &str = "currentUser";

pub fn load_cards() -> Vec<ProfileCard> {
    match LocalStorage::get::<Vec<ProfileCard>>(CARDS_KEY) {
        Ok(cards) => cards,
        Err(StorageError::KeyNotFound(_)) => Vec::new(),
        Err(err) => {
            warn!("Discarding unreadable card list: {}", err);
            Vec::new()
        }
    }
}

pub fn save_cards(cards: &[ProfileCard]) {
    if let Err(err) = LocalStorage::set(CARDS_KEY, cards) {
        warn!("Failed to persist card list: {}", err);
    }
}

pub fn load_identity() -> Option<Identity> {
    match LocalStorage::get::<Identity>(CURRENT_USER_KEY) {
        Ok(identity) => Some(identity),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            warn!("Discarding unreadable session: {}", err);
            None
        }
    }
}

pub fn save_identity(identity: &Identity) {
    if let Err(err) = LocalStorage::set(CURRENT_USER_KEY, identity) {
        warn!("Failed to persist session: {}", err);
    }
}

pub fn clear_identity() {
    LocalStorage::delete(CURRENT_USER_KEY);
}
