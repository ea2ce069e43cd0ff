// Diagnostic renderers.

use serde::Serialize;
use std::io::{Result, Write};

use crate::domain::diagnostic::UnitReport;
use crate::ports::DiagnosticSink;

/// `file:line:col: message`, one finding per line.
pub struct TextReporter;

impl DiagnosticSink for TextReporter {
    fn report(&self, reports: &[UnitReport], out: &mut dyn Write) -> Result<()> {
        for report in reports {
            for diag in &report.diagnostics {
                writeln!(out, "{}:{}: {}", report.file, diag.pos, diag.message)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct UnitDto<'a> {
    file: &'a str,
    diagnostics: Vec<DiagnosticDto<'a>>,
}

#[derive(Debug, Serialize)]
struct DiagnosticDto<'a> {
    posn: String,
    category: &'static str,
    message: &'a str,
}

/// One JSON object per unit, newline separated.
pub struct JsonReporter;

impl DiagnosticSink for JsonReporter {
    fn report(&self, reports: &[UnitReport], out: &mut dyn Write) -> Result<()> {
        for report in reports {
            let dto = UnitDto {
                file: &report.file,
                diagnostics: report
                    .diagnostics
                    .iter()
                    .map(|d| DiagnosticDto {
                        posn: format!("{}:{}", report.file, d.pos),
                        category: d.category.as_str(),
                        message: &d.message,
                    })
                    .collect(),
            };
            serde_json::to_writer(&mut *out, &dto)?;
            writeln!(out)?;
        }
        Ok(())
    }
}
