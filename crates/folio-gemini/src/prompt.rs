//! System instruction composition.
//!
//! The visitor's prompt is not part of the instruction: it is sent as the
//! user turn, unmodified.

use folio_core::models::portfolio::GroundingDocument;

/// Build the system instruction: role and tone preamble, the grounding
/// document as compact JSON, then the response protocol.
pub fn build_system_prompt(grounding: &GroundingDocument) -> String {
    let name = grounding.name();
    let first_name = name.split_whitespace().next().unwrap_or(name);

    format!(
        "ROLE: You are the \"{first_name} Agent\", the official digital representative of {name}.\n\
         TONE: Technical, concise, Neo-Brutalist (edgy but authoritative).\n\
         GROUNDING_DATA:\n\
         {json}\n\
         \n\
         PROTOCOL:\n\
         - Respond strictly using the provided portfolio data.\n\
         - For unknown queries, state: \"{first_name} hasn't shared that yet. Reach out directly via GitHub/LinkedIn.\"\n\
         - Use the STAR method (Situation, Task, Action, Result) for all technical experience queries.\n\
         - Keep every answer under 150 words.",
        json = grounding.as_json(),
    )
}

/// First `max_chars` characters of `prompt` for log lines, with an ellipsis
/// when something was cut.
pub fn preview(prompt: &str, max_chars: usize) -> String {
    match prompt.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &prompt[..cut]),
        None => prompt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_prompts() {
        assert_eq!(preview("hi", 80), "hi");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("héllo wörld", 4), "héll…");
    }
}
