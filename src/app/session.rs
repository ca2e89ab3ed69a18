use crate::core::engine::VisitEngine;
use crate::core::{Pipeline, VisitRequest};
use std::io::{self, Write};

/// Runs one visitor request end to end and writes every user-facing line to `out`.
///
/// Request and file errors are written as messages and still return `Ok`; only a
/// failure to write to `out` is an error.
pub fn plan_visit<P: Pipeline, W: Write>(pipeline: P, input: &str, out: &mut W) -> io::Result<()> {
    let request = match VisitRequest::parse(input) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejected request {:?}: {}", input.trim(), e);
            return writeln!(out, "{}", e.user_friendly_message());
        }
    };

    writeln!(out, "{}", request.season_line())?;

    let engine = VisitEngine::new(pipeline);
    match engine.run(&request) {
        Ok(report) => {
            for line in report.lines() {
                writeln!(out, "{}", line)?;
            }
        }
        Err(e) => {
            tracing::error!("Could not build visit report: {}", e);
            writeln!(out, "{}", e.user_friendly_message())?;
        }
    }

    Ok(())
}

/// 顯示提示並讀取一行輸入
pub fn prompt_request<R: io::BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<String> {
    write!(out, "{}", crate::core::request::PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
