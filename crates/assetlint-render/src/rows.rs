use crate::RenderableRow;

/// One line per asset: `OK   <path>` or `WARN <path>: <reason> (suggest: <name>)`.
///
/// Valid rows are only listed when `show_ok` is set.
pub fn render_rows(rows: &[RenderableRow], show_ok: bool) -> Vec<String> {
    rows.iter()
        .filter_map(|row| match &row.reason {
            None if show_ok => Some(format!("OK   {}", row.path)),
            None => None,
            Some(reason) => {
                let mut line = format!("WARN {}: {}", row.path, reason);
                if let Some(s) = &row.suggestion {
                    line.push_str(&format!(" (suggest: {s})"));
                }
                Some(line)
            }
        })
        .collect()
}
