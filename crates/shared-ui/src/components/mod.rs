// Standalone components
pub mod button;
pub mod card;
pub mod page_shell;
pub mod skeleton;

// Data display, depends on theme
pub mod chart;

pub use button::*;
pub use card::*;
pub use chart::*;
pub use page_shell::*;
pub use skeleton::*;
