mod dashboard;
pub use dashboard::*;

mod session;
pub use session::*;
