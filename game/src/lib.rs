pub mod collision;
pub mod constants;
pub mod events;
pub mod game;
pub mod input;
pub mod settings;
pub mod world_data;

pub use events::GameEvent;
pub use game::{Game, GamePhase};
pub use input::{FrameInput, Steer};
pub use settings::Settings;
pub use world_data::WorldData;
