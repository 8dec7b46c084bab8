//! # Simstat Render - Fixed-Width Statistics Tables
//!
//! `simstat-render` is the rendering core of the `simstat` statistics viewer:
//! a Unicode-aware, fixed-width, two-column table renderer for terminals.
//!
//! ## Core Concepts
//!
//! - [`display_width`] / [`pad_right`] / [`wrap`]: display-column text
//!   primitives. East Asian wide glyphs count as 2 columns, so padding and
//!   wrapping keep the box aligned in any monospaced terminal
//! - [`Scalar`]: closed variant over the JSON scalar types, one
//!   stringify-and-format rule per variant (thousands separators on numbers)
//! - [`Record`]: an ordered key/value entry; [`Record::divider`] is the
//!   sentinel that renders as a horizontal rule
//! - [`Layout`]: explicit width configuration (total width, key column)
//! - [`Table`]: the renderer (header, wrapped rows, rule lines)
//!
//! ## Quick Start
//!
//! ```rust
//! use simstat_render::{Layout, Record, Table};
//!
//! let records = vec![
//!     Record::new("Sim Cycles", 1000i64),
//!     Record::new("IPC", "0.5000"),
//!     Record::divider(),
//!     Record::new("branch_mispredicts", 10i64),
//! ];
//!
//! let table = Table::new(Layout::default());
//! let output = table.render(&records);
//! assert!(output.contains("| 1,000"));
//! ```
//!
//! Rendering is a pure, single-pass transform with no failure modes: any
//! record list renders at any layout without panicking.

pub mod scalar;
pub mod table;
pub mod util;

pub use scalar::Scalar;
pub use table::{Layout, Record, Rule, Table, DEFAULT_WIDTH, DIVIDER_KEY, KEY_WIDTH};
pub use util::{display_width, pad_right, wrap};
