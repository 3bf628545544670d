//! Command builders for the face's visual elements.
//!
//! Each submodule records the draw commands for one element; nothing here
//! touches a display directly.

pub mod date;
pub mod hands;
pub mod ticks;

pub use date::push_date_block;
pub use hands::{HandShape, hour_hand, minute_hand, push_hand, second_hand};
pub use ticks::push_tick_marks;
