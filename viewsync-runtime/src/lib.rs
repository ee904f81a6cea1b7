// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Clock and sleep abstraction.
//!
//! Every suspension point of the controller that depends on time (auto-refresh
//! ticks, fetch timeouts, activity windows) goes through [`timer::Timer`], so tests
//! can drive it with a paused clock.

pub mod impls;
pub mod timer;

#[cfg(feature = "runtime-tokio")]
pub use impls::tokio::TokioTimer;
pub use timer::Timer;
