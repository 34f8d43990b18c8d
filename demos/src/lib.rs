// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Dropline crates.
//!
//! See the `examples/` directory; each file documents its own `cargo run`
//! invocation.
