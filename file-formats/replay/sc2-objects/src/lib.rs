//! Domain objects for parsed StarCraft II replays.
//!
//! A replay decoder fills these objects in while it streams through the
//! replay's files. The crate itself performs no protocol parsing and no
//! network access; it only owns the entities and the few derived values
//! computed from them:
//!
//! - [`Attribute`] decodes a raw lobby setting through an
//!   [`AttributeRegistry`]
//! - [`Team::hash`] derives an order-independent identity from the
//!   members' profile URLs
//! - [`DepotFile`] turns a depot descriptor into a CDN download URL
//!
//! # Examples
//!
//! ```
//! use sc2_objects::{GameResult, Player, Team};
//!
//! let team = Team::new(1).into_ref();
//!
//! let mut alice = Player::new(1, "Alice");
//! alice.gateway = "eu".to_string();
//! alice.subregion = 1;
//! alice.uid = 42;
//! let alice = alice.into_ref();
//!
//! Team::join(&team, &alice);
//! team.borrow_mut().set_result(GameResult::Win);
//!
//! assert_eq!(alice.borrow().result(), GameResult::Win);
//! assert_eq!(team.borrow().hash().len(), 64);
//! ```

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attribute;
pub mod depot;
pub mod error;
pub mod event;
pub mod graph;
pub mod lobby;
pub mod person;
#[cfg(feature = "yaml")]
pub mod registry_loader;
pub mod summary;
pub mod team;
pub mod types;

pub use attribute::Attribute;
pub use depot::DepotFile;
pub use error::{Error, Result};
pub use event::{Event, EventKind, Message, MessageTarget};
pub use graph::Graph;
pub use lobby::{AttributeRegistry, LobbyProperty};
pub use person::{Observer, Participant, Person, Player, PlayerRef};
pub use summary::{PlayerSummary, StatNames};
pub use team::{Team, TeamRef};
pub use types::{BnetData, BuildEntry, ColorData, Difficulty, GameResult, Location, MapData, Race};
