use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::input::InputError;
use crate::pipeline::session::{SessionReport, Validation};

pub mod json;
pub mod text;

pub const TOOL_NAME: &str = "emostate";
pub const DISCLAIMER: &str =
    "This is not a medical diagnosis. Consult a professional for medical advice.";

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub validation: &'a Validation,
    pub report: &'a SessionReport,
}

impl<'a> SummaryData<'a> {
    pub fn new(validation: &'a Validation, report: &'a SessionReport) -> Self {
        Self {
            tool: TOOL_NAME,
            version: env!("CARGO_PKG_VERSION"),
            validation,
            report,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WrittenReports {
    pub report_txt: PathBuf,
    pub summary_json: PathBuf,
}

pub fn write_reports(
    summary: &SummaryData<'_>,
    out_dir: &Path,
) -> Result<WrittenReports, InputError> {
    fs::create_dir_all(out_dir).map_err(|e| InputError::io(out_dir, e))?;

    let report_txt = out_dir.join("report.txt");
    let text = text::render_report_text(summary.report);
    fs::write(&report_txt, text).map_err(|e| InputError::io(&report_txt, e))?;

    let summary_json = out_dir.join("summary.json");
    let json = json::render_summary_json(summary)?;
    fs::write(&summary_json, json).map_err(|e| InputError::io(&summary_json, e))?;

    tracing::info!(
        report = %report_txt.display(),
        summary = %summary_json.display(),
        "reports written"
    );

    Ok(WrittenReports {
        report_txt,
        summary_json,
    })
}

pub fn format_f64_1(v: f64) -> String {
    format!("{:.1}", v)
}

pub fn format_f32_2(v: f32) -> String {
    format!("{:.2}", v)
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
