pub mod chart;
pub mod forms;
pub mod history;
pub mod scoreboard;
pub mod template;

pub use chart::*;
pub use forms::*;
pub use history::*;
pub use scoreboard::*;
pub use template::*;
