pub mod config;
pub mod error;
pub mod feature_flags;
pub mod records;
pub mod session;
pub mod stats;
pub mod view_state;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use records::*;
pub use session::*;
pub use stats::*;
pub use view_state::*;
