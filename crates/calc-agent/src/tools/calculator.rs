use std::future::ready;

use calc_agent_core::tool::{Tool, ToolResult};
use schemars::{JsonSchema, schema_for};
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Deserialize, JsonSchema)]
pub struct CalculatorParameters {
    #[schemars(description = "The first number.")]
    a: f64,
    #[schemars(description = "The second number.")]
    b: f64,
    #[schemars(description = "The operation to perform.")]
    operation: String,
}

/// A tool for basic arithmetic over two operands.
///
/// A division by zero or an unsupported operation does not fail the
/// call; both come back as a readable error text for the model to
/// explain in its final answer.
pub struct CalculatorTool {
    parameter_schema: Value,
}

impl CalculatorTool {
    /// Creates a new calculator tool.
    pub fn new() -> Self {
        let mut parameter_schema =
            schema_for!(CalculatorParameters).to_value();
        // `operation` stays an open string in the input type so that an
        // unsupported value decodes fine and gets answered with an
        // error text; the declared schema still narrows what the model
        // may send.
        parameter_schema["properties"]["operation"]["enum"] =
            json!(["add", "subtract", "multiply", "divide"]);
        CalculatorTool { parameter_schema }
    }
}

impl Default for CalculatorTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for CalculatorTool {
    type Input = CalculatorParameters;

    fn name(&self) -> &str {
        "calculator"
    }

    fn description(&self) -> &str {
        "Performs basic arithmetic operations \
         (addition, subtraction, multiplication, division)."
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn execute(
        &self,
        input: CalculatorParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        ready(Ok(calculate(&input)))
    }
}

fn calculate(input: &CalculatorParameters) -> String {
    let result = match input.operation.as_str() {
        "add" => input.a + input.b,
        "subtract" => input.a - input.b,
        "multiply" => input.a * input.b,
        "divide" => {
            if input.b == 0.0 {
                return "Chyba: Delenie nulou.".to_owned();
            }
            input.a / input.b
        }
        other => return format!("Chyba: Neznáma operácia '{other}'."),
    };
    format_number(result)
}

// Integral values keep a trailing `.0` ("819.0", not "819").
fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
