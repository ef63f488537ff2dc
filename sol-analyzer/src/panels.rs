//! ABI listing and report summary derived from an analysis

use crate::report::AnalysisReport;
use serde::Serialize;
use std::fmt;

/// One row of the ABI listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AbiRow {
    Constructor {
        params: String,
    },
    Function {
        visibility: String,
        name: String,
        params: String,
        mutability: Option<String>,
        returns: String,
        gas: Option<String>,
    },
    Event {
        name: String,
        params: String,
    },
    StateVar {
        #[serde(rename = "type")]
        ty: String,
        name: String,
        visibility: String,
    },
}

impl AbiRow {
    /// Badge shown in front of the row
    pub fn badge(&self) -> &str {
        match self {
            AbiRow::Constructor { .. } => "constructor",
            AbiRow::Function { visibility, .. } => visibility,
            AbiRow::Event { .. } => "event",
            AbiRow::StateVar { .. } => "state",
        }
    }
}

impl fmt::Display for AbiRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiRow::Constructor { params } => write!(f, "constructor({})", params),
            AbiRow::Function {
                name,
                params,
                mutability,
                returns,
                gas,
                ..
            } => {
                write!(f, "{}({})", name, params)?;
                if let Some(mutability) = mutability {
                    write!(f, " {}", mutability)?;
                }
                write!(f, " → {}", returns)?;
                if let Some(gas) = gas {
                    write!(f, " ⛽{}", gas)?;
                }
                Ok(())
            }
            AbiRow::Event { name, params } => write!(f, "{}({})", name, params),
            AbiRow::StateVar {
                ty,
                name,
                visibility,
            } => write!(f, "{} {} {}", ty, name, visibility),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

/// Constructor, functions, events and state variables, in that order
pub fn abi_rows(report: &AnalysisReport) -> Vec<AbiRow> {
    let mut rows = Vec::new();

    if report.has_constructor {
        rows.push(AbiRow::Constructor {
            params: report.constructor_params.clone(),
        });
    }

    rows.extend(report.functions.iter().map(|function| AbiRow::Function {
        visibility: function.visibility.clone(),
        name: function.name.clone(),
        params: function.params.clone(),
        mutability: non_empty(&function.mutability),
        returns: non_empty(&function.returns).unwrap_or_else(|| "void".to_string()),
        gas: report.function_gas(&function.name).map(str::to_string),
    }));

    rows.extend(report.events.iter().map(|event| AbiRow::Event {
        name: event.name.clone(),
        params: event.params.clone(),
    }));

    rows.extend(report.state_vars.iter().map(|var| AbiRow::StateVar {
        ty: var.ty.clone(),
        name: var.name.clone(),
        visibility: var.visibility.clone(),
    }));

    rows
}

/// Key/value rows of the analysis report panel
pub fn info_rows(report: &AnalysisReport) -> Vec<(&'static str, String)> {
    let modifiers = if report.modifiers.is_empty() {
        "None".to_string()
    } else {
        report.modifiers.join(", ")
    };
    let security = match report.security_issues.len() {
        0 => "✅ Clean".to_string(),
        n => format!("⚠️ {} issue(s)", n),
    };

    vec![
        ("Contract", report.contract_name.clone()),
        ("Pragma", report.pragma.clone()),
        (
            "License",
            report.license.clone().unwrap_or_else(|| "None".to_string()),
        ),
        ("Functions", report.functions.len().to_string()),
        ("Events", report.events.len().to_string()),
        ("State Vars", report.state_vars.len().to_string()),
        ("Modifiers", modifiers),
        (
            "Constructor",
            if report.has_constructor { "Yes" } else { "No" }.to_string(),
        ),
        (
            "Deploy Gas",
            report
                .gas_estimates
                .deployment
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
        ),
        ("Security", security),
    ]
}
