//! Teams of players sharing a game result.

use crate::person::PlayerRef;
use crate::types::GameResult;
use sha2::{Digest, Sha256};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a team
pub type TeamRef = Rc<RefCell<Team>>;

/// A group of players, in the order they joined
#[derive(Debug, Clone)]
pub struct Team {
    /// Team number as recorded in the replay
    pub number: u8,
    players: Vec<PlayerRef>,
    result: GameResult,
    lineup: String,
}

impl Team {
    /// Create an empty team with an unknown result
    pub fn new(number: u8) -> Self {
        Self {
            number,
            players: Vec::new(),
            result: GameResult::Unknown,
            lineup: String::new(),
        }
    }

    /// Wrap the team in a shared handle
    pub fn into_ref(self) -> TeamRef {
        Rc::new(RefCell::new(self))
    }

    /// Add a player to the team and point the player back at it
    ///
    /// Joining a team the player is already on leaves the roster as it
    /// is. The back-reference follows the most recent join; rosters of
    /// teams joined earlier are not changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use sc2_objects::{GameResult, Player, Team};
    ///
    /// let team = Team::new(1).into_ref();
    /// let player = Player::new(1, "Alice").into_ref();
    ///
    /// Team::join(&team, &player);
    /// team.borrow_mut().set_result(GameResult::Win);
    ///
    /// assert_eq!(player.borrow().result(), GameResult::Win);
    /// ```
    pub fn join(team: &TeamRef, player: &PlayerRef) {
        player.borrow_mut().set_team(Rc::downgrade(team));

        let mut team = team.borrow_mut();
        if team.players.iter().any(|member| Rc::ptr_eq(member, player)) {
            log::debug!(
                "Player {} is already on team {}",
                player.borrow().pid,
                team.number
            );
            return;
        }
        team.players.push(Rc::clone(player));
    }

    /// Members in join order
    pub fn players(&self) -> &[PlayerRef] {
        &self.players
    }

    /// Iterate over members in join order
    pub fn iter(&self) -> std::slice::Iter<'_, PlayerRef> {
        self.players.iter()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the team has no members
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Result of the game for this team
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Record the result of the game for this team
    pub fn set_result(&mut self, result: GameResult) {
        self.result = result;
    }

    /// Race lineup, such as `PZ`
    pub fn lineup(&self) -> &str {
        &self.lineup
    }

    /// Store a race lineup supplied by the decoder
    pub fn set_lineup(&mut self, lineup: impl Into<String>) {
        self.lineup = lineup.into();
    }

    /// Build a lineup from the members' played races
    ///
    /// Letters are sorted; members without a played race, or still on
    /// `Random`, are left out.
    pub fn derive_lineup(&self) -> String {
        let mut letters: Vec<char> = self
            .players
            .iter()
            .filter_map(|player| player.borrow().play_race)
            .filter(|race| *race != crate::Race::Random)
            .map(crate::Race::letter)
            .collect();
        letters.sort_unstable();
        letters.into_iter().collect()
    }

    /// Identity hash of the team's membership
    ///
    /// SHA-256 over the members' profile URLs, sorted and joined with
    /// commas. Join order does not matter and the value is recomputed on
    /// every call.
    pub fn hash(&self) -> String {
        let mut urls: Vec<String> = self
            .players
            .iter()
            .map(|player| player.borrow().url())
            .collect();
        urls.sort();

        let raw = urls.join(",");
        log::trace!("Hashing team {} membership: {}", self.number, raw);

        hex::encode(Sha256::digest(raw.as_bytes()))
    }
}

impl<'a> IntoIterator for &'a Team {
    type Item = &'a PlayerRef;
    type IntoIter = std::slice::Iter<'a, PlayerRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Race};
    use pretty_assertions::assert_eq;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn player(pid: u8, name: &str, race: Option<Race>) -> PlayerRef {
        let mut player = Player::new(pid, name);
        player.gateway = "us".to_string();
        player.subregion = 1;
        player.uid = 1000 + pid as u32;
        player.play_race = race;
        player.into_ref()
    }

    #[test]
    fn test_new_team() {
        let team = Team::new(2);
        assert_eq!(team.number, 2);
        assert!(team.is_empty());
        assert_eq!(team.result(), GameResult::Unknown);
        assert_eq!(team.lineup(), "");
    }

    #[test]
    fn test_empty_hash() {
        assert_eq!(Team::new(1).hash(), EMPTY_SHA256);
    }

    #[test]
    fn test_hash_ignores_join_order() {
        let bob = player(1, "Bob", None);
        let alice = player(2, "Alice", None);

        let first = Team::new(1).into_ref();
        Team::join(&first, &bob);
        Team::join(&first, &alice);

        let second = Team::new(1).into_ref();
        Team::join(&second, &alice);
        Team::join(&second, &bob);

        assert_eq!(first.borrow().hash(), second.borrow().hash());
        assert_eq!(first.borrow().players()[0].borrow().name, "Bob");
        assert_eq!(second.borrow().players()[0].borrow().name, "Alice");
    }

    #[test]
    fn test_hash_tracks_membership() {
        let team = Team::new(1).into_ref();
        Team::join(&team, &player(1, "Bob", None));
        let before = team.borrow().hash();

        Team::join(&team, &player(2, "Alice", None));
        let after = team.borrow().hash();

        assert_ne!(before, after);
        assert_eq!(after.len(), 64);
    }

    #[test]
    fn test_hash_matches_joined_urls() {
        let team = Team::new(1).into_ref();
        let bob = player(1, "Bob", None);
        let alice = player(2, "Alice", None);
        Team::join(&team, &bob);
        Team::join(&team, &alice);

        let raw = format!("{},{}", bob.borrow().url(), alice.borrow().url());
        let expected = hex::encode(Sha256::digest(raw.as_bytes()));
        // "1001/1/Bob" sorts before "1002/1/Alice"
        assert_eq!(team.borrow().hash(), expected);
    }

    #[test]
    fn test_result_delegation() {
        let team = Team::new(1).into_ref();
        let bob = player(1, "Bob", None);
        assert_eq!(bob.borrow().result(), GameResult::Unknown);

        Team::join(&team, &bob);
        assert_eq!(bob.borrow().result(), GameResult::Unknown);

        team.borrow_mut().set_result(GameResult::Loss);
        assert_eq!(bob.borrow().result(), GameResult::Loss);
        assert_eq!(bob.borrow().team().unwrap().borrow().number, 1);
    }

    #[test]
    fn test_result_after_team_dropped() {
        let bob = player(1, "Bob", None);
        {
            let team = Team::new(1).into_ref();
            Team::join(&team, &bob);
            team.borrow_mut().set_result(GameResult::Win);
        }
        assert_eq!(bob.borrow().result(), GameResult::Unknown);
    }

    #[test]
    fn test_rejoin_is_ignored() {
        let team = Team::new(1).into_ref();
        let bob = player(1, "Bob", None);
        Team::join(&team, &bob);
        let hash = team.borrow().hash();

        Team::join(&team, &bob);
        assert_eq!(team.borrow().len(), 1);
        assert_eq!(team.borrow().hash(), hash);
    }

    #[test]
    fn test_join_second_team() {
        let first = Team::new(1).into_ref();
        let second = Team::new(2).into_ref();
        let bob = player(1, "Bob", None);
        Team::join(&first, &bob);
        Team::join(&second, &bob);
        Team::join(&first, &bob);

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(second.borrow().len(), 1);
        assert_eq!(first.borrow().hash(), second.borrow().hash());
        assert_eq!(bob.borrow().team().unwrap().borrow().number, 1);
    }

    #[test]
    fn test_derive_lineup() {
        let team = Team::new(1).into_ref();
        Team::join(&team, &player(1, "Zed", Some(Race::Zerg)));
        Team::join(&team, &player(2, "Pat", Some(Race::Protoss)));
        Team::join(&team, &player(3, "Ran", Some(Race::Random)));
        Team::join(&team, &player(4, "Nil", None));

        let lineup = team.borrow().derive_lineup();
        assert_eq!(lineup, "PZ");

        team.borrow_mut().set_lineup(lineup);
        assert_eq!(team.borrow().lineup(), "PZ");
        assert_eq!(team.borrow().iter().count(), 4);
    }
}
