//! Persona lookup: workspace YAML overrides first, built-ins second.

use crate::types::{builtin_personas, Persona};
use salesdesk_core::config::DATA_DIR;
use salesdesk_core::{AppError, AppResult};
use std::path::{Path, PathBuf};

fn personas_dir(workspace_path: &Path) -> PathBuf {
    workspace_path.join(DATA_DIR).join("personas")
}

/// Load a persona by ID.
///
/// `.salesdesk/personas/<id>.yml` wins when present; otherwise the built-in
/// persona with that ID is returned.
///
/// # Example
/// ```no_run
/// use salesdesk_prompt::load_persona;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let persona = load_persona(Path::new("."), "prospecting")?;
/// println!("Loaded persona: {}", persona.name);
/// # Ok(())
/// # }
/// ```
pub fn load_persona(workspace_path: &Path, persona_id: &str) -> AppResult<Persona> {
    let persona_file = personas_dir(workspace_path).join(format!("{}.yml", persona_id));

    if persona_file.exists() {
        tracing::debug!("Loading persona from: {:?}", persona_file);

        let contents = std::fs::read_to_string(&persona_file).map_err(|e| {
            AppError::Prompt(format!(
                "Failed to read persona file {:?}: {}",
                persona_file, e
            ))
        })?;

        let persona: Persona = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Prompt(format!(
                "Failed to parse persona YAML {:?}: {}",
                persona_file, e
            ))
        })?;

        validate_persona(&persona)?;

        if persona.id != persona_id {
            return Err(AppError::Prompt(format!(
                "Persona file {:?} declares id '{}'",
                persona_file, persona.id
            )));
        }

        tracing::info!("Loaded persona: {} ({})", persona.id, persona.name);
        return Ok(persona);
    }

    builtin_personas()
        .into_iter()
        .find(|p| p.id == persona_id)
        .ok_or_else(|| {
            AppError::Prompt(format!(
                "Unknown persona '{}'. Available: {}",
                persona_id,
                list_personas(workspace_path)
                    .map(|ids| ids.join(", "))
                    .unwrap_or_default()
            ))
        })
}

/// List built-in persona IDs plus any defined in the workspace, sorted.
pub fn list_personas(workspace_path: &Path) -> AppResult<Vec<String>> {
    let mut persona_ids: Vec<String> = builtin_personas().into_iter().map(|p| p.id).collect();

    let dir = personas_dir(workspace_path);
    if dir.exists() {
        for entry in walkdir::WalkDir::new(&dir)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("yml") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    persona_ids.push(stem.to_string());
                }
            }
        }
    }

    persona_ids.sort();
    persona_ids.dedup();
    Ok(persona_ids)
}

fn validate_persona(persona: &Persona) -> AppResult<()> {
    if persona.id.trim().is_empty() {
        return Err(AppError::Prompt("Persona id cannot be empty".to_string()));
    }

    if persona.name.trim().is_empty() {
        return Err(AppError::Prompt("Persona name cannot be empty".to_string()));
    }

    if persona.role.trim().is_empty() {
        return Err(AppError::Prompt("Persona role cannot be empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_persona(dir: &Path, file_id: &str, body: &str) {
        let personas = personas_dir(dir);
        fs::create_dir_all(&personas).unwrap();
        fs::write(personas.join(format!("{}.yml", file_id)), body).unwrap();
    }

    #[test]
    fn test_load_builtin_persona() {
        let temp_dir = TempDir::new().unwrap();
        let persona = load_persona(temp_dir.path(), "insights").unwrap();
        assert_eq!(persona.name, "Prospect Insights Agent");
    }

    #[test]
    fn test_yaml_overrides_builtin() {
        let temp_dir = TempDir::new().unwrap();
        write_persona(
            temp_dir.path(),
            "prospecting",
            "id: prospecting\nname: Lead Finder\nrole: Finds leads\ninstructions: Be brief.\n",
        );

        let persona = load_persona(temp_dir.path(), "prospecting").unwrap();
        assert_eq!(persona.name, "Lead Finder");
        assert_eq!(persona.instructions, "Be brief.");
    }

    #[test]
    fn test_load_unknown_persona() {
        let temp_dir = TempDir::new().unwrap();
        match load_persona(temp_dir.path(), "nonexistent") {
            Err(AppError::Prompt(msg)) => assert!(msg.contains("communication")),
            _ => panic!("Expected prompt error for unknown persona"),
        }
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        write_persona(temp_dir.path(), "broken", "invalid: yaml: content:");
        assert!(load_persona(temp_dir.path(), "broken").is_err());
    }

    #[test]
    fn test_missing_name_rejected() {
        let temp_dir = TempDir::new().unwrap();
        write_persona(temp_dir.path(), "blank", "id: blank\nname: \"\"\nrole: r\n");
        assert!(load_persona(temp_dir.path(), "blank").is_err());
    }

    #[test]
    fn test_mismatched_id_rejected() {
        let temp_dir = TempDir::new().unwrap();
        write_persona(temp_dir.path(), "closer", "id: other\nname: Closer\nrole: r\n");
        assert!(load_persona(temp_dir.path(), "closer").is_err());
    }

    #[test]
    fn test_list_personas() {
        let temp_dir = TempDir::new().unwrap();
        write_persona(temp_dir.path(), "closer", "id: closer\nname: Closer\nrole: r\n");
        write_persona(temp_dir.path(), "insights", "id: insights\nname: I\nrole: r\n");

        let ids = list_personas(temp_dir.path()).unwrap();
        assert_eq!(ids, vec!["closer", "communication", "insights", "prospecting"]);
    }
}
