//! Plain-text rendering shared by the demo driver and the MCP server.

use schema::{CatalogEntry, PokemonDetail};

use crate::detail::DetailState;
use crate::evolution::EvolutionStage;

/// Normalize a user-typed name for display: first character uppercased, the
/// remainder lowercased (`"CHARIZARD"` becomes `"Charizard"`).
pub fn format_pokemon_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Returns formatted text listing the given catalog entries
pub fn format_catalog_listing(entries: &[CatalogEntry]) -> String {
    if entries.is_empty() {
        return "No entries match the current view.\n".to_string();
    }
    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "  #{} {} [{}]\n",
            entry.number,
            entry.name,
            entry.types.join(", ")
        ));
    }
    output
}

/// Returns the full detail card for a record
pub fn format_detail_card(detail: &PokemonDetail) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} (#{})\n", detail.name, detail.number));
    output.push_str("--------------------\n");
    output.push_str(&format!("Classification: {}\n", detail.classification));
    output.push_str(&format!("Type(s): {}\n", detail.types.join(" / ")));
    output.push_str(&format!(
        "Height: {} - {}\n",
        detail.height.minimum, detail.height.maximum
    ));
    output.push_str(&format!(
        "Weight: {} - {}\n",
        detail.weight.minimum, detail.weight.maximum
    ));
    output.push_str("--------------------\n");
    output.push_str("Fast Attacks:\n");
    for attack in &detail.attacks.fast {
        output.push_str(&format!(
            "  {} ({}) - Damage: {}\n",
            attack.name, attack.element_type, attack.damage
        ));
    }
    output.push_str("Special Attacks:\n");
    for attack in &detail.attacks.special {
        output.push_str(&format!(
            "  {} ({}) - Damage: {}\n",
            attack.name, attack.element_type, attack.damage
        ));
    }
    output
}

/// Returns the evolution sequence as a single arrowed line, e.g.
/// `Bulbasaur (current) -> Ivysaur (25 Bulbasaur candies) -> Venusaur (...)`.
pub fn format_evolution_chain(stages: &[EvolutionStage]) -> String {
    let mut parts = Vec::with_capacity(stages.len());
    for stage in stages {
        let mut part = stage.name.clone();
        if stage.is_current {
            part.push_str(" (current)");
        } else if let Some(requirement) = &stage.requirement {
            part.push_str(&format!(" ({} {})", requirement.amount, requirement.name));
        }
        parts.push(part);
    }
    parts.join(" -> ")
}

/// Returns the text for whatever state the record view is in
pub fn format_detail_state(state: &DetailState) -> String {
    match state {
        DetailState::Idle => "Search for a Pokemon by name.".to_string(),
        DetailState::Loading { name } => format!("Loading {}...", format_pokemon_name(name)),
        DetailState::Success { detail, chain } => {
            let mut output = format_detail_card(detail);
            output.push_str("--------------------\n");
            output.push_str(&format!("Evolutions: {}\n", format_evolution_chain(chain)));
            output
        }
        DetailState::NotFound { name } => {
            format!("No Pokemon named \"{}\" was found.", name)
        }
        DetailState::Errored { name, error } => {
            format!(
                "An error occurred while searching for \"{}\": {}",
                name, error
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn capitalizes_the_first_letter_and_lowers_the_rest() {
        assert_eq!(format_pokemon_name("pikachu"), "Pikachu");
        assert_eq!(format_pokemon_name("CHARIZARD"), "Charizard");
        assert_eq!(format_pokemon_name("mR. MiMe"), "Mr. mime");
        assert_eq!(format_pokemon_name(""), "");
    }

    #[test]
    fn evolution_chain_line_marks_current_and_requirements() {
        use schema::EvolutionRequirement;

        let stages = vec![
            EvolutionStage {
                id: "a".to_string(),
                number: "001".to_string(),
                name: "Bulbasaur".to_string(),
                image: String::new(),
                is_current: true,
                requirement: None,
            },
            EvolutionStage {
                id: "b".to_string(),
                number: "002".to_string(),
                name: "Ivysaur".to_string(),
                image: String::new(),
                is_current: false,
                requirement: Some(EvolutionRequirement {
                    amount: 25,
                    name: "Bulbasaur candies".to_string(),
                }),
            },
        ];

        assert_eq!(
            format_evolution_chain(&stages),
            "Bulbasaur (current) -> Ivysaur (25 Bulbasaur candies)"
        );
    }

    #[test]
    fn error_state_renders_a_retryable_message() {
        use crate::errors::SourceError;

        let state = DetailState::Errored {
            name: "Pikachu".to_string(),
            error: SourceError::Transport("connection reset".to_string()),
        };

        assert_eq!(
            format_detail_state(&state),
            "An error occurred while searching for \"Pikachu\": transport failure: connection reset"
        );
    }
}
