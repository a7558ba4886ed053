pub mod gauge;
pub mod input;

pub use gauge::{render_bar, ScoreBar};
pub use input::{InputWidget, SelectWidget};
