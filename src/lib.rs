//! Bivista — the presentation layer for the BI Assistant dashboard.
//!
//! This crate renders a business-intelligence dashboard as themed HTML over
//! a local HTTP endpoint. It owns page configuration, CSS theming, session
//! state, and the UI helper widgets; data analysis and chart construction
//! are opaque collaborators reached through the traits in [`data`].
//!
//! # Quick start
//!
//! ```
//! use bivista::state::{MessageKind, SessionStore};
//! use bivista::theme::Theme;
//!
//! let mut sessions = SessionStore::new();
//! let state = sessions.initialize("demo");
//! state.selected_theme = Theme::from_name("executive");
//! state.add_message("loaded sales.csv", MessageKind::Success);
//! assert_eq!(state.success_messages.len(), 1);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod page;
pub mod server;
pub mod state;
pub mod theme;
pub mod upload;
pub mod widgets;
