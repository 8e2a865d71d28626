//! Diagnostics for a script fragment.

use smol_str::SmolStr;

use crate::base::{TextRange, TextSize};
use crate::document::Document;
use crate::engine::{Analysis, EngineDiagnostic};
use crate::error::Result;
use crate::protocol::{Diagnostic, NumberOrString};

use super::convert::{severity_for, to_protocol_range};

/// Collect syntactic, suggestion and semantic findings, in that order.
///
/// Findings without a location are reported at the start of the fragment.
pub fn diagnostics(analysis: &Analysis, document: &dyn Document) -> Result<Vec<Diagnostic>> {
    let path = analysis.path();
    let engine = &analysis.engine;

    let mut findings = engine.syntactic_diagnostics(&path)?;
    findings.extend(engine.suggestion_diagnostics(&path)?);
    findings.extend(engine.semantic_diagnostics(&path)?);

    let source = SmolStr::new_static(document.script_kind().diagnostic_source());
    let diagnostics: Vec<Diagnostic> = findings
        .iter()
        .map(|finding| to_diagnostic(document, finding, &source))
        .collect();

    tracing::debug!(%path, count = diagnostics.len(), "diagnostics");
    Ok(diagnostics)
}

fn to_diagnostic(document: &dyn Document, finding: &EngineDiagnostic, source: &SmolStr) -> Diagnostic {
    let span = finding
        .span
        .unwrap_or_else(|| TextRange::empty(TextSize::from(0)));
    Diagnostic {
        range: to_protocol_range(document, span),
        severity: Some(severity_for(finding.category)),
        code: Some(diagnostic_code(finding.code)),
        source: Some(source.clone()),
        message: finding.message.flatten("\n"),
    }
}

/// Codes that do not fit the protocol's integer are sent as strings.
fn diagnostic_code(code: u32) -> NumberOrString {
    match i32::try_from(code) {
        Ok(code) => NumberOrString::Number(code),
        Err(_) => NumberOrString::String(code.to_string()),
    }
}
