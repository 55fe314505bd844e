//! Game catalog shown on the portal home page
//!
//! Title search and category filtering, the like toggle, and the BEST / NEW
//! shelves the filtered list is laid out in.

use crate::errors::{EconomyError, Result};
use crate::params::{MAX_DISPLAYED_GAMES, SHELF_SIZE};
use crate::types::GameId;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Category that matches every game
pub const ALL_CATEGORIES: &str = "전체";

/// Categories offered by the home page filter, [`ALL_CATEGORIES`] first
pub const GAME_CATEGORIES: &[&str] = &[
    ALL_CATEGORIES,
    "액션",
    "퍼즐",
    "레이싱",
    "RPG",
    "아케이드",
    "전략",
    "시뮬레이션",
    "어드벤처",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub developer_id: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub plays: u64,
    /// Average star rating, 0-5
    #[serde(default)]
    pub rating: Decimal,
    #[serde(default)]
    pub is_liked: bool,
}

impl Game {
    pub fn new(id: GameId, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            description: String::new(),
            developer_id: String::new(),
            image: String::new(),
            likes: 0,
            plays: 0,
            rating: Decimal::ZERO,
            is_liked: false,
        }
    }

    /// Case-insensitive title substring match; an empty term matches all
    pub fn matches_search(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(&term.to_lowercase())
    }

    pub fn in_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }

    /// Flip the viewer's like and move the like count with it
    pub fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes = self.likes.saturating_add(1);
        }
        self.is_liked = !self.is_liked;
    }
}

/// Games matching both filters, in catalog order, at most [`MAX_DISPLAYED_GAMES`]
pub fn filter_games<'a>(games: &'a [Game], search: &str, category: &str) -> Vec<&'a Game> {
    let shown: Vec<&Game> = games
        .iter()
        .filter(|game| game.matches_search(search) && game.in_category(category))
        .take(MAX_DISPLAYED_GAMES)
        .collect();

    debug!(
        target: "economy",
        search,
        category,
        shown = shown.len(),
        "game catalog filtered"
    );
    shown
}

/// Toggle the like on game `id`
pub fn toggle_like(games: &mut [Game], id: GameId) -> Result<&Game> {
    let game = games
        .iter_mut()
        .find(|game| game.id == id)
        .ok_or(EconomyError::UnknownGame(id))?;
    game.toggle_like();
    Ok(game)
}

/// Home page shelf a displayed game lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shelf {
    Best,
    New,
    Regular,
}

impl Shelf {
    /// Shelf for the game at `position` (0-based) of the filtered list
    pub fn for_position(position: usize) -> Self {
        match position / SHELF_SIZE {
            0 => Shelf::Best,
            1 => Shelf::New,
            _ => Shelf::Regular,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shelf::Best => "BEST",
            Shelf::New => "NEW",
            Shelf::Regular => "",
        }
    }
}

/// Compact count for game cards: `1.2K` from 1000 up, plain below
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let thousands = (Decimal::from(count) / Decimal::ONE_THOUSAND)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{thousands:.1}K")
}

/// Parse a JSON array of games
pub fn parse_games_json(input: &str) -> Result<Vec<Game>> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Game> {
        vec![
            Game::new(1, "Space Adventure", "액션"),
            Game::new(2, "Racing Fever", "레이싱"),
            Game::new(3, "Tower Defense", "전략"),
            Game::new(4, "Ninja Run", "액션"),
        ]
    }

    fn ids(games: &[&Game]) -> Vec<GameId> {
        games.iter().map(|g| g.id).collect()
    }

    #[test]
    fn test_empty_search_all_categories_shows_everything() {
        let games = catalog();
        assert_eq!(ids(&filter_games(&games, "", ALL_CATEGORIES)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_title() {
        let games = catalog();
        assert_eq!(ids(&filter_games(&games, "RUN", ALL_CATEGORIES)), vec![4]);
        assert_eq!(ids(&filter_games(&games, "e", ALL_CATEGORIES)), vec![1, 2, 3]);
        assert!(filter_games(&games, "chess", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn test_category_must_match_exactly() {
        let games = catalog();
        assert_eq!(ids(&filter_games(&games, "", "액션")), vec![1, 4]);
        assert_eq!(ids(&filter_games(&games, "space", "액션")), vec![1]);
        assert!(filter_games(&games, "", "퍼즐").is_empty());
    }

    #[test]
    fn test_result_capped_at_twelve() {
        let games: Vec<Game> = (1..=20).map(|id| Game::new(id, format!("Game {id}"), "퍼즐")).collect();
        let shown = filter_games(&games, "game", ALL_CATEGORIES);
        assert_eq!(shown.len(), 12);
        assert_eq!(shown[11].id, 12);
    }

    #[test]
    fn test_toggle_like_round_trip() {
        let mut games = catalog();
        games[1].likes = 2_156;

        let liked = toggle_like(&mut games, 2).unwrap();
        assert!(liked.is_liked);
        assert_eq!(liked.likes, 2_157);

        let unliked = toggle_like(&mut games, 2).unwrap();
        assert!(!unliked.is_liked);
        assert_eq!(unliked.likes, 2_156);
    }

    #[test]
    fn test_toggle_like_unknown_game() {
        let mut games = catalog();
        assert!(matches!(
            toggle_like(&mut games, 99),
            Err(EconomyError::UnknownGame(99))
        ));
    }

    #[test]
    fn test_shelves() {
        assert_eq!(Shelf::for_position(0), Shelf::Best);
        assert_eq!(Shelf::for_position(3), Shelf::Best);
        assert_eq!(Shelf::for_position(4), Shelf::New);
        assert_eq!(Shelf::for_position(8), Shelf::Regular);
        assert_eq!(Shelf::for_position(11), Shelf::Regular);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_247), "1.2K");
        assert_eq!(format_count(15_420), "15.4K");
        assert_eq!(format_count(23_450), "23.5K");
        assert_eq!(format_count(2_000), "2.0K");
    }

    #[test]
    fn test_parse_games_json_defaults() {
        let games = parse_games_json(
            r#"[{"id": 7, "title": "Puzzle Box", "category": "퍼즐", "isLiked": true, "likes": 3}]"#,
        )
        .unwrap();
        assert_eq!(games[0].title, "Puzzle Box");
        assert!(games[0].is_liked);
        assert_eq!(games[0].plays, 0);
        assert!(parse_games_json("{}").is_err());
    }
}
