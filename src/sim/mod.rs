//! Gameplay core
//!
//! Everything with real rules lives here. The module is engine-agnostic:
//! - Contact and overlap arrive as plain inputs from the host
//! - Randomness is injected through `UniformSource`
//! - No rendering, audio or platform dependencies

pub mod footprint;
pub mod item;
pub mod platform;
pub mod player;
pub mod rng;
pub mod state;
pub mod supervisor;
pub mod tick;

pub use footprint::Footprint;
pub use item::{CollectionTracker, Item, ItemPool, NOT_STARTED};
pub use platform::{Platform, PlatformField};
pub use player::{ControlOutcome, Player, PlayerController, Pose};
pub use rng::{PcgUniform, SequenceUniform, UniformSource};
pub use state::{GameEvent, GamePhase, GameState};
pub use supervisor::RunSupervisor;
pub use tick::{TickInput, handle_overlap, tick};
