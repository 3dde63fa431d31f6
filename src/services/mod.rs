// SPDX-License-Identifier: MIT

//! Service layer.

pub mod session;

pub use session::SessionStore;
