use gloo_storage::{LocalStorage, Storage};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::encoding::Guess;
use crate::streak::StreakState;

const DEPUTY_GUESSES_KEY: &str = "deputavasGuesses";
const PROJECT_GUESSES_KEY: &str = "deputavasProjectGuesses";
const SESSION_KEY: &str = "deputavasGameState";
const STREAK_KEY: &str = "deputavasStreak";

/// Phase of the current card: guess the bloc, then the party, then a
/// short reveal before advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Round {
    #[serde(rename = "bloc")]
    Bloc,
    #[serde(rename = "party")]
    Party,
    #[serde(rename = "reveal")]
    Reveal,
}

/// In-progress session snapshot. The deck itself is never stored; it is
/// rebuilt from `seed`, so the snapshot stays small.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub seed: i64,
    pub current_index: usize,
    pub round: Round,
    pub last_result: Option<Guess>,
}

pub fn load_deputy_guesses() -> Vec<Guess> {
    load_or_default(DEPUTY_GUESSES_KEY)
}

pub fn save_deputy_guesses(guesses: &[Guess]) {
    save(DEPUTY_GUESSES_KEY, &guesses);
}

pub fn load_project_guesses() -> Vec<Guess> {
    load_or_default(PROJECT_GUESSES_KEY)
}

pub fn save_project_guesses(guesses: &[Guess]) {
    save(PROJECT_GUESSES_KEY, &guesses);
}

pub fn load_session() -> Option<StoredSession> {
    LocalStorage::get(SESSION_KEY).ok()
}

pub fn save_session(session: &StoredSession) {
    save(SESSION_KEY, session);
}

pub fn clear_session() {
    LocalStorage::delete(SESSION_KEY);
}

pub fn load_streak() -> StreakState {
    load_or_default(STREAK_KEY)
}

pub fn save_streak(streak: &StreakState) {
    save(STREAK_KEY, streak);
}

/// "Play again" wipes guesses and the session; streaks and badges are
/// lifetime state and survive.
pub fn clear_game_data() {
    LocalStorage::delete(DEPUTY_GUESSES_KEY);
    LocalStorage::delete(PROJECT_GUESSES_KEY);
    clear_session();
}

fn load_or_default<T>(key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match LocalStorage::get::<T>(key) {
        Ok(value) => value,
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => T::default(),
        Err(err) => {
            warn!("Falling back to default for {key}: {err}");
            T::default()
        }
    }
}

fn save<T: Serialize>(key: &str, value: &T) {
    if let Err(err) = LocalStorage::set(key, value) {
        warn!("Failed to persist {key}: {err}");
    }
}
