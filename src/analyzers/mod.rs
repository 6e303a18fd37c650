pub mod trend;

pub use trend::{ema, mean};
