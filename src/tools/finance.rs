use crate::convert::parse_numeric;
use crate::tools::error::ToolError;
use serde::{Deserialize, Serialize};

pub const MAX_TIP_PERCENT: f64 = 50.0;
pub const DEFAULT_TIP_PERCENT: f64 = 15.0;
pub const DEFAULT_GST_RATE: f64 = 18.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TipSplit {
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
}

/// Split a bill with tip between `people` (0 counts as 1)
pub fn split_tip(bill: f64, tip_percent: f64, people: u32) -> Result<TipSplit, ToolError> {
    if !(0.0..=MAX_TIP_PERCENT).contains(&tip_percent) {
        return Err(ToolError::TipPercent {
            max: MAX_TIP_PERCENT,
            got: tip_percent,
        });
    }

    let tip = bill * tip_percent / 100.0;
    let total = bill + tip;
    Ok(TipSplit {
        tip,
        total,
        per_person: total / f64::from(people.max(1)),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GstMode {
    /// Amount excludes tax; add it on top
    Add,
    /// Amount includes tax; extract it
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GstBreakdown {
    pub gst: f64,
    pub net: f64,
}

pub fn gst(amount: f64, rate: f64, mode: GstMode) -> GstBreakdown {
    match mode {
        GstMode::Add => {
            let gst = amount * rate / 100.0;
            GstBreakdown {
                gst,
                net: amount + gst,
            }
        }
        GstMode::Remove => {
            let gst = amount - amount * (100.0 / (100.0 + rate));
            GstBreakdown {
                gst,
                net: amount - gst,
            }
        }
    }
}

/// GST over typed text; unparseable fields count as zero
pub fn gst_from_text(amount: &str, rate: &str, mode: GstMode) -> GstBreakdown {
    gst(
        parse_numeric(amount).unwrap_or(0.0),
        parse_numeric(rate).unwrap_or(0.0),
        mode,
    )
}
