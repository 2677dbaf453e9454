//! Prompt rendering.
//!
//! - **Template**: `{variable}` substitution engine
//! - **Render**: fills the shared template from an agent record and frames
//!   the result for printing
//!
//! # Template Syntax
//!
//! ```text
//! Agent Role: {description}
//!
//! Your Areas of Expertise:
//! {expertise}
//! ```
//!
//! Use `{{` to escape and render a literal `{`.

mod render;
mod template;

pub use render::{
    DEFAULT_TEMPLATE, bullet_list, default_template, format_prompt, prompt_variables,
    render_banner,
};
pub use template::{TemplateError, escape_braces, render_template, vars};
