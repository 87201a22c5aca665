// Providers layer - Injectable sources of ambient values
pub mod clock;

pub use clock::{Clock, SystemClock};
