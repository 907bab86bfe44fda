//! Platform-independent half of the parallax strip.
//!
//! Nothing here touches the DOM: the web front-end measures the page, feeds
//! input into [`ScrollController`] and implements [`Scene`] to receive the
//! styles computed each frame.

pub mod config;
pub mod constants;
pub mod effects;
pub mod frame;
pub mod keyboard;
pub mod scroll;
pub mod section;
pub mod stagger;

pub use config::*;
pub use effects::*;
pub use frame::*;
pub use keyboard::*;
pub use scroll::*;
pub use section::*;
