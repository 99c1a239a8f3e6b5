//! Platform service abstractions for cmdsim.
//!
//! The interpreter never reads the host machine. System figures come from a
//! [`SystemInfoService`] that fabricates plausible snapshots, and the clock
//! verbs read a [`TimeService`]. [`DesktopPlatform`] backs both with the
//! thread RNG and the host clock; [`SeededPlatform`] is deterministic for
//! tests.

mod services;

pub use services::*;
