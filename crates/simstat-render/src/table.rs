//! The boxed two-column statistics table.
//!
//! Renders an ordered list of [`Record`]s as a fixed-width `key | value`
//! table: heavy rules around a "Field" / "Value" header, one row per record,
//! divider sentinels as light rules. Values wider than the value column wrap
//! onto continuation lines with a blank key cell, so the box stays aligned.
//!
//! # Example
//!
//! ```rust
//! use simstat_render::{Layout, Record, Table};
//!
//! let records = vec![
//!     Record::new("IPC", "0.5000"),
//!     Record::divider(),
//!     Record::new("branch_mispredicts", 10i64),
//! ];
//!
//! let table = Table::new(Layout::default());
//! print!("{}", table.render(&records));
//! ```

use crate::scalar::Scalar;
use crate::util::{display_width, pad_right, wrap};

/// Default total table width, also the cap applied to wider terminals.
pub const DEFAULT_WIDTH: usize = 80;

/// Fixed display width of the key column.
pub const KEY_WIDTH: usize = 25;

/// Sentinel key marking a horizontal rule instead of a data row.
pub const DIVIDER_KEY: &str = "---";

/// Non-content characters per row: `"| "`, `" | "`, `" |"`.
const ROW_OVERHEAD: usize = 7;

/// One table entry: a key/value pair, or the divider sentinel.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub key: String,
    pub value: Scalar,
}

impl Record {
    /// Create a data record.
    pub fn new(key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Record {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create the divider sentinel, rendered as a light rule.
    pub fn divider() -> Self {
        Record::new(DIVIDER_KEY, DIVIDER_KEY)
    }

    /// Whether this record is the divider sentinel.
    pub fn is_divider(&self) -> bool {
        self.key == DIVIDER_KEY
    }
}

/// Explicit width configuration for a table.
///
/// Passed into the renderer by value; there is no module-level width state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Total table width in display columns, borders included.
    pub total_width: usize,
    /// Display width of the key column.
    pub key_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            total_width: DEFAULT_WIDTH,
            key_width: KEY_WIDTH,
        }
    }
}

impl Layout {
    /// Layout with the given total width and the default key column.
    pub fn new(total_width: usize) -> Self {
        Layout {
            total_width,
            ..Default::default()
        }
    }

    /// Display width of the value column.
    ///
    /// Total width minus the key column and the row overhead, floored at one
    /// column so pathologically narrow layouts still render.
    pub fn value_width(&self) -> usize {
        self.total_width
            .saturating_sub(self.key_width + ROW_OVERHEAD)
            .max(1)
    }
}

/// Weight of a horizontal rule line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// `=` fill: table frame and header separator.
    Heavy,
    /// `-` fill: divider between derived metrics and raw fields.
    Light,
}

impl Rule {
    fn fill(&self) -> char {
        match self {
            Rule::Heavy => '=',
            Rule::Light => '-',
        }
    }
}

/// Renders records as a boxed two-column table.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    layout: Layout,
}

impl Table {
    /// Create a table renderer with the given layout.
    pub fn new(layout: Layout) -> Self {
        Table { layout }
    }

    /// Format one key/value pair as `| <key> | <value> |` lines.
    ///
    /// Header rows keep the value on a single line; data values word-wrap to
    /// the value column, continuation lines carrying a blank padded key cell.
    /// Always produces at least one line, even for an empty value.
    pub fn row(&self, key: &str, value: &str, is_header: bool) -> Vec<String> {
        let value_width = self.layout.value_width();
        let mut value_lines = if is_header {
            vec![value.to_string()]
        } else {
            wrap(value, value_width)
        };
        if value_lines.is_empty() {
            value_lines.push(String::new());
        }

        let mut lines = Vec::with_capacity(value_lines.len());
        lines.push(format!(
            "| {} | {} |",
            pad_right(key, self.layout.key_width),
            pad_right(&value_lines[0], value_width),
        ));
        for value_line in &value_lines[1..] {
            lines.push(format!(
                "| {} | {} |",
                pad_right("", self.layout.key_width),
                pad_right(value_line, value_width),
            ));
        }
        lines
    }

    /// Format a horizontal rule: `+<fill>+<fill>+`, each cell two columns
    /// wider than its content for the margin spaces of data rows.
    pub fn rule(&self, rule: Rule) -> String {
        let fill = rule.fill();
        format!(
            "+{}+{}+",
            std::iter::repeat_n(fill, self.layout.key_width + 2).collect::<String>(),
            std::iter::repeat_n(fill, self.layout.value_width() + 2).collect::<String>(),
        )
    }

    /// Render the complete table.
    ///
    /// Heavy top rule, header row, heavy rule, one entry per record (divider
    /// sentinels as light rules), heavy bottom rule. Each output row is
    /// terminated by a newline.
    pub fn render(&self, records: &[Record]) -> String {
        let mut lines = Vec::with_capacity(records.len() + 4);

        lines.push(self.rule(Rule::Heavy));
        lines.extend(self.row("Field", "Value", true));
        lines.push(self.rule(Rule::Heavy));

        for record in records {
            if record.is_divider() {
                lines.push(self.rule(Rule::Light));
            } else {
                lines.extend(self.row(&record.key, &record.value.to_string(), false));
            }
        }

        lines.push(self.rule(Rule::Heavy));

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
