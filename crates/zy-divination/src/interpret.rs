//! Interpretation templating over catalog texts.
//!
//! Pure, deterministic assembly: the same hexagram, changing lines, and
//! question always produce the same text. The question is interpolated,
//! never parsed.

use serde::{Deserialize, Serialize};

use zy_core::Hexagram;

/// The structured textual reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// What the hexagram is and says.
    pub overview: String,
    /// The present situation, framed by the question.
    pub current_situation: String,
    /// What to do now, centered on the first changing line when lines
    /// change.
    pub guidance: String,
    /// Where things are heading.
    pub outcome: String,
    /// Fixed-shape advice list: general, career, relationships, health,
    /// finance, and a closing word on the reading's stability.
    pub advice: Vec<String>,
}

/// Build the interpretation for a reading.
pub fn interpret(
    question: &str,
    hexagram: &Hexagram,
    changing: &[u32],
    resulting: Option<&Hexagram>,
) -> Interpretation {
    let overview = format!(
        "Hexagram {} — {} ({}), {}. {}",
        hexagram.number, hexagram.name, hexagram.character, hexagram.english, hexagram.judgment
    );

    let current_situation = format!(
        "Regarding \"{}\": {} {}",
        question.trim(),
        hexagram.meanings.general,
        hexagram.image
    );

    let first_changing = changing
        .first()
        .and_then(|&pos| hexagram.line_text(pos).map(|text| (pos, text)));
    let guidance = match first_changing {
        Some((pos, line)) => format!(
            "Line {pos} is changing: \"{}\" {}",
            line.text, line.meaning
        ),
        None => format!("No line is changing. {}", hexagram.meanings.advice),
    };

    let outcome = match resulting {
        Some(resulting) => format!(
            "The situation is moving toward hexagram {} — {} ({}): {}",
            resulting.number, resulting.name, resulting.english, resulting.meanings.general
        ),
        None => "The configuration is stable; this reading holds for some time.".to_string(),
    };

    Interpretation {
        overview,
        current_situation,
        guidance,
        outcome,
        advice: advice_list(hexagram, !changing.is_empty()),
    }
}

/// The fixed-shape advice list, shared with the daily reading.
///
/// Always six entries: the hexagram's standing advice, four domain
/// framings, and a closing sentence conditioned on whether any line is
/// changing.
pub fn advice_list(hexagram: &Hexagram, has_changing: bool) -> Vec<String> {
    let closing = if has_changing {
        "The changing lines mark a situation in motion; act while the door is open."
    } else {
        "With no changing lines, the counsel stands as given; let it settle."
    };
    vec![
        hexagram.meanings.advice.clone(),
        format!("Career: {}", hexagram.meanings.career),
        format!("Relationships: {}", hexagram.meanings.love),
        format!("Health: {}", hexagram.meanings.health),
        format!("Finance: {}", hexagram.meanings.finance),
        closing.to_string(),
    ]
}
