//! Instruction sent along with the contract source

const INSTRUCTION: &str = "You are an expert Solidity compiler and smart contract security auditor. \
Analyze the Solidity code below and return ONLY a raw JSON object — no markdown, no backticks, no extra text.";

const SCHEMA: &str = r#"{
  "success": boolean,
  "contractName": "string",
  "pragma": "string",
  "license": "string or null",
  "errors": ["error with line info if possible"],
  "warnings": ["warnings"],
  "functions": [{"name":"","visibility":"","mutability":"","params":"","returns":""}],
  "events": [{"name":"","params":""}],
  "stateVars": [{"name":"","type":"","visibility":""}],
  "modifiers": ["names"],
  "hasConstructor": boolean,
  "constructorParams": "string",
  "gasEstimates": {"deployment":"range","functions":{"fnName":"range"}},
  "securityIssues": ["detailed security issues"],
  "suggestions": ["improvement suggestions"],
  "summary": "2-3 sentence summary"
}"#;

/// Full prompt for one compile request
pub fn build_prompt(source: &str) -> String {
    format!(
        "{}\n\nJSON structure:\n{}\n\nCode:\n{}\n\nReturn ONLY valid JSON.",
        INSTRUCTION, SCHEMA, source
    )
}
