pub mod decoder;
pub mod encoder;
pub mod matcher;
pub mod window;

pub use decoder::Decoder;
pub use encoder::Encoder;
pub use matcher::{BruteForceMatchFinder, Match, MatchFinder};
pub use window::SlidingWindow;
