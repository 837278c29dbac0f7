pub mod errors;
pub mod game;
pub mod player;
pub mod question;
pub mod settings;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use player::*;
pub use question::*;
pub use settings::*;
