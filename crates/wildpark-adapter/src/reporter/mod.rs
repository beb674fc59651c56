//! Reporter Adapters - Where park events end up
//!
//! These implement the `Reporter` port from wildpark-domain.

pub mod fanout;
pub mod journal;
pub mod logging;
pub mod memory;
pub mod terminal;
