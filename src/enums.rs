use std::fmt;

use crate::protocols::Turnable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    /// Every direction, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];
}

impl Turnable for Direction {
    fn make_a_u_turn(&mut self) {
        *self = match self {
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::North => Direction::South,
            Direction::South => Direction::North,
        };
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::East => "east",
            Direction::West => "west",
            Direction::North => "north",
            Direction::South => "south",
        };
        f.write_str(name)
    }
}

/// The state of a request, with the data each state carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResponse {
    Loading,
    Success { result: String },
    Failure { status_code: u16, message: String },
}

impl NetworkResponse {
    pub fn message(&self) -> String {
        match self {
            NetworkResponse::Loading => "Fetching...".to_string(),
            NetworkResponse::Success { result } => result.clone(),
            NetworkResponse::Failure {
                status_code,
                message,
            } => format!("Error {} - {}", status_code, message),
        }
    }
}
