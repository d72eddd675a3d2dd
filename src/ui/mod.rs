// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toast queue with iced.

pub mod design_tokens;
pub mod toaster;

pub use toaster::{handle_message, subscription, Message, Toaster};
