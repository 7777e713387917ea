pub mod closures;
pub mod concurrency;
pub mod countdown;
pub mod enums;
pub mod errors;
pub mod operators;
pub mod protocols;
pub mod stack;
pub mod strings;
pub mod users;

pub use countdown::Countdown;
pub use stack::{Container, Stack};
