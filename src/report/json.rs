use serde::Serialize;

use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData<'_>) -> Result<String, serde_json::Error> {
    render_json(data)
}

/// Pretty JSON with a trailing newline.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}
