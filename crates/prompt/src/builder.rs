//! Prompt rendering for persona calls.

use crate::types::Persona;
use handlebars::Handlebars;
use salesdesk_core::{AppError, AppResult};
use std::collections::BTreeMap;

/// Placeholder rendered when no context accompanies a query.
pub const NO_CONTEXT: &str = "No extra context";

/// Template shared by every persona.
const PERSONA_TEMPLATE: &str = r#"You are {{name}}, role: {{role}}.
Instructions: {{instructions}}

User Query: {{query}}

Context: {{context}}

Note: Check the context for information that helps answer the query. If it is not relevant, answer from your own knowledge, skills, and reasoning instead.
For example, when the context lists companies with their industries and locations, use it to suggest potential leads that match the user's query.
States in the context may be written as two-letter abbreviations such as "CA" or "NY". Interpret them as the full state names, such as "California" or "New York", when writing your response.

Always provide an answer, even when the context offers little information.
"#;

/// Render the prompt sent to the model for `persona`.
///
/// A missing or blank `context` renders as [`NO_CONTEXT`]. Rendering is
/// deterministic: equal inputs give byte-identical output.
///
/// # Example
/// ```
/// use salesdesk_prompt::{build_prompt, builtin_personas};
///
/// let persona = &builtin_personas()[0];
/// let prompt = build_prompt(persona, "Find SaaS leads in CA", None).unwrap();
/// assert!(prompt.contains("Context: No extra context"));
/// ```
pub fn build_prompt(persona: &Persona, query: &str, context: Option<&str>) -> AppResult<String> {
    tracing::debug!("Building prompt for persona: {}", persona.id);

    let context = context
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(NO_CONTEXT);

    let mut variables = BTreeMap::new();
    variables.insert("name", persona.name.as_str());
    variables.insert("role", persona.role.as_str());
    variables.insert("instructions", persona.instructions.as_str());
    variables.insert("query", query);
    variables.insert("context", context);

    render_template(PERSONA_TEMPLATE, &variables)
}

/// Render a Handlebars template with variables.
fn render_template(template: &str, variables: &BTreeMap<&str, &str>) -> AppResult<String> {
    let mut handlebars = Handlebars::new();

    // Plain text prompt, not HTML
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars
        .register_template_string("prompt", template)
        .map_err(|e| AppError::Prompt(format!("Failed to register template: {}", e)))?;

    handlebars
        .render("prompt", variables)
        .map_err(|e| AppError::Prompt(format!("Failed to render template: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::builtin_personas;

    fn prospecting() -> Persona {
        builtin_personas().remove(0)
    }

    #[test]
    fn test_render_simple_template() {
        let mut vars = BTreeMap::new();
        vars.insert("query", "Hello, <world> & \"friends\"");

        let result = render_template("Question: {{query}}", &vars).unwrap();
        assert_eq!(result, "Question: Hello, <world> & \"friends\"");
    }

    #[test]
    fn test_prompt_interpolates_persona_and_query() {
        let prompt = build_prompt(
            &prospecting(),
            "Find SaaS leads in CA",
            Some("Company,Industry,State\nAcme,SaaS,CA"),
        )
        .unwrap();

        assert!(prompt.starts_with(
            "You are Prospecting Agent, role: Helps sales reps discover high-potential leads.\n"
        ));
        assert!(prompt.contains("User Query: Find SaaS leads in CA\n"));
        assert!(prompt.contains("Context: Company,Industry,State\nAcme,SaaS,CA\n"));
        assert!(prompt.contains("\"California\""));
        assert!(prompt.contains("Always provide an answer"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let persona = prospecting();
        let a = build_prompt(&persona, "q", Some("ctx")).unwrap();
        let b = build_prompt(&persona, "q", Some("ctx")).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_absent_and_empty_context_match() {
        let persona = prospecting();
        let none = build_prompt(&persona, "q", None).unwrap();
        let empty = build_prompt(&persona, "q", Some("")).unwrap();
        let blank = build_prompt(&persona, "q", Some("  \n")).unwrap();

        assert!(none.contains("Context: No extra context\n"));
        assert_eq!(none, empty);
        assert_eq!(none, blank);
    }

    #[test]
    fn test_empty_query_is_accepted() {
        let prompt = build_prompt(&prospecting(), "", None).unwrap();
        assert!(prompt.contains("User Query: \n"));
    }

    #[test]
    fn test_query_with_template_syntax_is_literal() {
        let prompt = build_prompt(&prospecting(), "{{role}}", None).unwrap();
        assert!(prompt.contains("User Query: {{role}}\n"));
    }
}
