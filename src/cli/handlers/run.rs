use anyhow::{Context, Result};
use serde_json::Value;

use crate::graphql::{Operation, OperationName, Selection, execute};

use super::CommandContext;

pub fn handle_run(
    ctx: CommandContext,
    operation: String,
    args: Vec<String>,
    select: String,
) -> Result<()> {
    let name: OperationName = operation.parse()?;
    let selection = Selection::parse(&select)?;

    let mut op = Operation::new(name, selection);
    for raw in &args {
        let (key, value) = parse_arg(raw)?;
        op = op.arg(key, value);
    }

    let schema = ctx.schema();
    let result = tokio::runtime::Runtime::new()?
        .block_on(execute(&schema, &op))
        .with_context(|| format!("{} failed", name))?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Splits `name=value`; values that are not valid JSON are kept as strings.
fn parse_arg(raw: &str) -> Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .with_context(|| format!("Argument '{}' must look like name=value", raw))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.trim().to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arg_reads_json_numbers() {
        let (key, value) = parse_arg("id=2").unwrap();
        assert_eq!(key, "id");
        assert_eq!(value, Value::from(2));
    }

    #[test]
    fn test_parse_arg_keeps_text_as_string() {
        let (_, value) = parse_arg("id=two").unwrap();
        assert_eq!(value, Value::String("two".to_string()));
    }

    #[test]
    fn test_parse_arg_requires_equals() {
        assert!(parse_arg("id").is_err());
    }
}
