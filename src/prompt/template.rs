//! Placeholder substitution for prompt templates.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Names are matched exactly as written; `{ name }` looks up `" name "`.
//! Any placeholder without a value is an error rather than an empty
//! substitution, and so is a lone `}`.

use std::collections::HashMap;
use std::fmt;

/// Error type for template rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A variable was referenced but not provided.
    UndefinedVariable {
        /// The name of the undefined variable.
        name: String,
        /// Byte offset of the opening `{`.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// Byte offset of the unmatched `{`.
        position: usize,
    },
    /// A single `}` that is neither closing a placeholder nor escaped.
    StrayClosingBrace {
        /// Byte offset of the `}`.
        position: usize,
    },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName {
        /// Byte offset of the empty placeholder.
        position: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UndefinedVariable { name, position } => {
                write!(
                    f,
                    "undefined variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::StrayClosingBrace { position } => {
                write!(
                    f,
                    "single '}}' at position {} in template (use '}}}}' for a literal brace)",
                    position
                )
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Render a template string by substituting variables.
///
/// # Examples
///
/// ```
/// use agentprompt::prompt::{render_template, vars};
///
/// let vars = vars([("description", "Design the schema")]);
/// let result = render_template("Agent Role: {description}", &vars).unwrap();
/// assert_eq!(result, "Agent Role: Design the schema");
/// ```
///
/// Use `{{` to render a literal `{`:
///
/// ```
/// use std::collections::HashMap;
/// use agentprompt::prompt::render_template;
///
/// let result = render_template("Use {{var}} for variables", &HashMap::new()).unwrap();
/// assert_eq!(result, "Use {var} for variables");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut var_name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => var_name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                if var_name.is_empty() {
                    return Err(TemplateError::EmptyVariableName { position: pos });
                }

                match variables.get(&var_name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedVariable {
                            name: var_name,
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                    result.push('}');
                } else {
                    return Err(TemplateError::StrayClosingBrace { position: pos });
                }
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Double every brace in `text` so it renders back to itself.
pub fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
