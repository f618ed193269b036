//! Game participants.
//!
//! Every participant shares a [`Person`] record (identity plus the events
//! and messages they produced). Observers add nothing to it; players add
//! lobby settings, account data and a link to their [`Team`].
//! [`Participant`] is the tagged union the decoder keeps per pid.

use crate::event::{Event, EventKind, Message};
use crate::team::{Team, TeamRef};
use crate::types::{ColorData, Difficulty, GameResult, Race};
use crate::{Error, Result};
use std::cell::RefCell;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::rc::{Rc, Weak};

/// Shared handle to a player, as held by teams and the decoder
pub type PlayerRef = Rc<RefCell<Player>>;

/// Identity and activity log common to observers and players
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    /// Unique id of the person within this game
    pub pid: u8,
    /// Battle.net display name
    pub name: String,
    /// Whether the person is a human rather than a computer
    pub is_human: bool,
    /// Whether this person recorded the replay
    pub recorder: bool,
    /// Region of the person's account
    pub region: String,
    /// Chat messages sent during the game
    pub messages: Vec<Message>,
    /// Game events generated during the game
    pub events: Vec<Event>,
}

impl Person {
    /// Create a person with empty activity logs
    pub fn new(pid: u8, name: impl Into<String>) -> Self {
        Self {
            pid,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a game event
    pub fn record_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Append a chat message
    pub fn record_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Events of one category, in recording order
    pub fn events_of(&self, kind: EventKind) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |event| event.kind == kind)
    }

    /// Camera movement events
    pub fn camera_events(&self) -> impl Iterator<Item = &Event> {
        self.events_of(EventKind::Camera)
    }

    /// Ability events
    pub fn ability_events(&self) -> impl Iterator<Item = &Event> {
        self.events_of(EventKind::Ability)
    }

    /// Selection events
    pub fn selection_events(&self) -> impl Iterator<Item = &Event> {
        self.events_of(EventKind::Selection)
    }
}

/// A non-playing participant. Observers are always human.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observer {
    /// Shared identity record
    pub person: Person,
}

impl Observer {
    /// Create an observer
    pub fn new(pid: u8, name: impl Into<String>) -> Self {
        let mut person = Person::new(pid, name);
        person.is_human = true;
        Self { person }
    }

    /// Always `true`
    pub fn is_observer(&self) -> bool {
        true
    }
}

impl Deref for Observer {
    type Target = Person;

    fn deref(&self) -> &Person {
        &self.person
    }
}

impl DerefMut for Observer {
    fn deref_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} - {}", self.pid, self.name)
    }
}

/// A playing participant
#[derive(Debug, Clone)]
pub struct Player {
    /// Shared identity record
    pub person: Person,
    team: Option<Weak<RefCell<Team>>>,
    /// Player color
    pub color: Option<ColorData>,
    /// Race picked in the lobby
    pub pick_race: Option<Race>,
    /// Race actually played
    pub play_race: Option<Race>,
    /// Computer difficulty, `Medium` for humans
    pub difficulty: Difficulty,
    /// Handicap percentage, 50 to 100
    pub handicap: u8,
    /// Gateway of the account, such as `us`
    pub gateway: String,
    /// Subregion within the gateway
    pub subregion: u32,
    /// Account id for the gateway and subregion. Zero for offline games.
    pub uid: u32,
}

impl Player {
    /// Create a player with no team
    pub fn new(pid: u8, name: impl Into<String>) -> Self {
        Self {
            person: Person::new(pid, name),
            team: None,
            color: None,
            pick_race: None,
            play_race: None,
            difficulty: Difficulty::default(),
            handicap: 100,
            gateway: String::new(),
            subregion: 0,
            uid: 0,
        }
    }

    /// Wrap the player in a shared handle
    pub fn into_ref(self) -> PlayerRef {
        Rc::new(RefCell::new(self))
    }

    /// Always `false`
    pub fn is_observer(&self) -> bool {
        false
    }

    /// The player's Battle.net profile URL
    pub fn url(&self) -> String {
        format!(
            "http://{}.battle.net/sc2/en/profile/{}/{}/{}/",
            self.gateway, self.uid, self.subregion, self.name
        )
    }

    /// The team the player belongs to, if it is still alive
    pub fn team(&self) -> Option<TeamRef> {
        self.team.as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_team(&mut self, team: Weak<RefCell<Team>>) {
        self.team = Some(team);
    }

    /// The game result of the player's team, `Unknown` without a team
    pub fn result(&self) -> GameResult {
        self.team()
            .map_or(GameResult::Unknown, |team| team.borrow().result())
    }

    /// Render a template with `{field}` placeholders
    ///
    /// Supported fields are `pid`, `name`, `gateway`, `region`,
    /// `subregion`, `uid`, `handicap`, `pick_race`, `play_race`,
    /// `difficulty`, `url` and `result`. `{{` and `}}` produce literal
    /// braces; an unterminated placeholder or a lone `}` is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sc2_objects::Player;
    ///
    /// let mut player = Player::new(1, "Alice");
    /// player.gateway = "eu".to_string();
    /// assert_eq!(player.format("{name}@{gateway}").unwrap(), "Alice@eu");
    /// ```
    pub fn format(&self, template: &str) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut chars = template.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|&(_, next)| next == '{').is_some() => output.push('{'),
                '}' if chars.next_if(|&(_, next)| next == '}').is_some() => output.push('}'),
                '{' => {
                    let mut field = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        field.push(c);
                    }
                    if !closed {
                        return Err(Error::MalformedFormat {
                            position,
                            reason: "unterminated placeholder",
                        });
                    }

                    let value = self
                        .field_value(&field)
                        .ok_or(Error::UnknownFormatField(field))?;
                    output.push_str(&value);
                }
                '}' => {
                    return Err(Error::MalformedFormat {
                        position,
                        reason: "single '}' outside a placeholder",
                    });
                }
                _ => output.push(c),
            }
        }

        Ok(output)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let race = |race: Option<Race>| race.map(|r| r.to_string()).unwrap_or_default();

        let value = match field {
            "pid" => self.pid.to_string(),
            "name" => self.name.clone(),
            "gateway" => self.gateway.clone(),
            "region" => self.region.clone(),
            "subregion" => self.subregion.to_string(),
            "uid" => self.uid.to_string(),
            "handicap" => self.handicap.to_string(),
            "pick_race" => race(self.pick_race),
            "play_race" => race(self.play_race),
            "difficulty" => self.difficulty.to_string(),
            "url" => self.url(),
            "result" => self.result().to_string(),
            _ => return None,
        };
        Some(value)
    }
}

impl Deref for Player {
    type Target = Person;

    fn deref(&self) -> &Person {
        &self.person
    }
}

impl DerefMut for Player {
    fn deref_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.play_race {
            Some(race) => write!(f, "Player {} - {} ({})", self.pid, self.name, race),
            None => write!(f, "Player {} - {} (Unknown)", self.pid, self.name),
        }
    }
}

/// Any participant of a game
#[derive(Debug, Clone)]
pub enum Participant {
    /// A non-playing participant
    Observer(Observer),
    /// A playing participant
    Player(PlayerRef),
}

impl Participant {
    /// Unique id within the game
    pub fn pid(&self) -> u8 {
        self.with_person(|person| person.pid)
    }

    /// Display name
    pub fn name(&self) -> String {
        self.with_person(|person| person.name.clone())
    }

    /// Whether this participant is an observer
    pub fn is_observer(&self) -> bool {
        matches!(self, Self::Observer(_))
    }

    /// Whether this participant is human
    pub fn is_human(&self) -> bool {
        self.with_person(|person| person.is_human)
    }

    /// The player handle, if this participant plays
    pub fn as_player(&self) -> Option<&PlayerRef> {
        match self {
            Self::Player(player) => Some(player),
            Self::Observer(_) => None,
        }
    }

    /// Run a closure against the shared identity record
    pub fn with_person<R>(&self, f: impl FnOnce(&Person) -> R) -> R {
        match self {
            Self::Observer(observer) => f(&observer.person),
            Self::Player(player) => f(&player.borrow().person),
        }
    }
}

impl From<Observer> for Participant {
    fn from(observer: Observer) -> Self {
        Self::Observer(observer)
    }
}

impl From<PlayerRef> for Participant {
    fn from(player: PlayerRef) -> Self {
        Self::Player(player)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Observer(observer) => fmt::Display::fmt(observer, f),
            Self::Player(player) => fmt::Display::fmt(&*player.borrow(), f),
        }
    }
}
