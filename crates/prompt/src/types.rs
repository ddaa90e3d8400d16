//! Persona types.

use serde::{Deserialize, Serialize};

/// A named role/instruction pair the model is asked to play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Short identifier used on the command line (e.g., "prospecting")
    pub id: String,

    /// Display name, also recorded in the interaction log
    pub name: String,

    /// One-line description of the persona's job
    pub role: String,

    /// Free-text instructions interpolated into the prompt
    #[serde(default)]
    pub instructions: String,
}

impl Persona {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: impl Into<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            instructions: instructions.into(),
        }
    }
}

/// The three personas shipped with salesdesk.
pub fn builtin_personas() -> Vec<Persona> {
    vec![
        Persona::new(
            "prospecting",
            "Prospecting Agent",
            "Helps sales reps discover high-potential leads",
            "Use dataset and all columns and reason based on the column values to suggest \
             businesses and answer user queries. Explain reasoning.",
        ),
        Persona::new(
            "insights",
            "Prospect Insights Agent",
            "Analyzes selected prospects",
            "Use dataset and all columns and reason based on the column values Perform SWOT \
             analysis, review SEO, social presence, and identify opportunities. Suggest \
             tailored engagement strategies.",
        ),
        Persona::new(
            "communication",
            "Communication Agent",
            "Crafts personalized communication",
            "Use dataset and all columns and reason based on the column values, Write \
             personalized emails, LinkedIn messages, or scripts. Adapt tone to industry and \
             prospect\u{2019}s needs.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_personas() {
        let personas = builtin_personas();
        let ids: Vec<&str> = personas.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["prospecting", "insights", "communication"]);
        assert_eq!(personas[0].name, "Prospecting Agent");
        assert!(personas[2].instructions.ends_with("prospect\u{2019}s needs."));
    }

    #[test]
    fn test_persona_deserialization_defaults_instructions() {
        let yaml = "id: closer\nname: Closer\nrole: Closes deals\n";
        let persona: Persona = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(persona.id, "closer");
        assert_eq!(persona.instructions, "");
    }
}
