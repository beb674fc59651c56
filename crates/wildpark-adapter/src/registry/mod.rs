//! Registry Adapters - Sharing a park between owners
//!
//! The domain `Park` is a plain value. These adapters put it behind a lock
//! so several handles (or threads) can use the same instance.

pub mod shared;
