// SPDX-License-Identifier: MPL-2.0
//! UI state helpers shared by the pages.

pub mod debounce;

pub use debounce::{Debounce, Highlight};
