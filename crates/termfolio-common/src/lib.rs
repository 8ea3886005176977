pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, TermfolioError};
pub use events::Event;
pub use id::SessionId;
pub use types::{Color, Point, Rect};

pub type Result<T> = std::result::Result<T, TermfolioError>;
