// Prompt templates for code generation.
// The response format requested here is exactly what `extractor` parses.

/// Marker preceding the generated code in the model's answer.
pub const CODE_MARKER: &str = "CODE:";
/// Marker preceding the explanation in the model's answer.
pub const EXPLANATION_MARKER: &str = "EXPLANATION:";
/// Opening fence of a Python code block.
pub const PYTHON_FENCE: &str = "```python";
/// Closing fence of any code block.
pub const CLOSING_FENCE: &str = "```";

const RESPONSE_FORMAT: &str = r#"Format your response exactly like this:
CODE:
```python
[your code here]
```
EXPLANATION:
[brief explanation of what the code does]"#;

/// Builds the provider prompt. Blank `existing_code` is treated as "no prior code".
///
/// User text is spliced in with `format!`, so braces or placeholder-looking
/// text inside the code or the instruction reach the model unchanged.
pub fn build_prompt(prompt: &str, existing_code: Option<&str>) -> String {
    match existing_code.filter(|code| !code.trim().is_empty()) {
        Some(code) => format!(
            "You are a Python coding assistant. Here is the existing code:\n\n\
             ```python\n{code}\n```\n\n\
             Modify this code according to the following instruction:\n\n\
             {prompt}\n\n\
             Return the complete updated code.\n\n\
             {format}",
            code = code,
            prompt = prompt,
            format = RESPONSE_FORMAT,
        ),
        None => format!(
            "You are a Python coding assistant. \
             Generate clean, working Python code for the following request:\n\n\
             {prompt}\n\n\
             {format}",
            prompt = prompt,
            format = RESPONSE_FORMAT,
        ),
    }
}
