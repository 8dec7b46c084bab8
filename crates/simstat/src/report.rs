//! Derived metrics and record assembly.
//!
//! Turns a decoded statistics document into the ordered record list the
//! renderer consumes: the four derived-metric rows, a divider, then every
//! remaining raw field in file order.

use serde_json::Value;
use simstat_render::{Record, Scalar};

use crate::load::Stats;

/// Cycle count field consumed by the derived metrics.
const CYCLES_FIELD: &str = "simulator_cycles";

/// Instruction count field consumed by the derived metrics.
const OPS_FIELD: &str = "all_ops";

/// Build the ordered record list for a statistics document.
///
/// `simulator_cycles` and `all_ops` default to 0 when missing or
/// non-numeric; zero-cycle and zero-instruction runs report 0.0000 for the
/// affected ratio instead of dividing. The two consumed fields do not repeat
/// in the raw dump below the divider.
pub fn build_records(stats: &Stats) -> Vec<Record> {
    let cycles = numeric(stats, CYCLES_FIELD);
    let instructions = numeric(stats, OPS_FIELD);

    let ipc = if cycles > 0.0 {
        instructions / cycles
    } else {
        0.0
    };
    let cpi = if instructions > 0.0 {
        cycles / instructions
    } else {
        0.0
    };

    let mut records = vec![
        Record::new("Sim Cycles", raw_scalar(stats, CYCLES_FIELD)),
        Record::new("Instructions", raw_scalar(stats, OPS_FIELD)),
        Record::new("IPC", format!("{ipc:.4}")),
        Record::new("CPI", format!("{cpi:.4}")),
        Record::divider(),
    ];

    for (key, value) in stats {
        if key == CYCLES_FIELD || key == OPS_FIELD {
            continue;
        }
        records.push(Record::new(key.clone(), Scalar::from(value)));
    }

    records
}

fn numeric(stats: &Stats, field: &str) -> f64 {
    stats.get(field).and_then(Value::as_f64).unwrap_or(0.0)
}

fn raw_scalar(stats: &Stats, field: &str) -> Scalar {
    stats.get(field).map(Scalar::from).unwrap_or(Scalar::Int(0))
}
