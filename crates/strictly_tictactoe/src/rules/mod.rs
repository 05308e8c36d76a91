//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). None of them look at
//! history; the status of any snapshot can be computed on demand.

pub mod draw;
pub mod play;
pub mod win;

pub use draw::is_full;
pub use play::play;
pub use win::{LINES, calculate_winner, check_winner};
