pub mod game_events;
pub mod question_bank;
pub mod roster;
pub mod scoring;
pub mod session;
pub mod turn;

// Re-export main components
pub use game_events::*;
pub use question_bank::*;
pub use roster::*;
pub use scoring::*;
pub use session::*;
pub use turn::*;
