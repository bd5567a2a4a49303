mod meal;
mod plan;
mod timestamp;
mod week;

pub use meal::*;
pub use plan::*;
pub use week::*;
