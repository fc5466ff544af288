//! Win and draw detection.

mod draw;
mod win;

pub use draw::is_draw;
pub use win::check_winner;
