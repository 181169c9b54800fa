pub mod engine;
pub mod model;
pub mod observability;

pub use engine::{Engine, EngineError};
pub use model::{Assignment, BookingInfo, Day, RoomId};
