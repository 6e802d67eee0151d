use colored::*;

use crate::alphabet::AlphabetTable;
use crate::conversation::{ConversationLog, Message, Role};

/// Render one message as terminal lines.
///
/// User rows are blue and carry a dimmed `(Original: ...)` line when the
/// text was rewritten; bot rows are red and bold.
pub fn render_message(msg: &Message) -> String {
    match msg.role() {
        Role::User => {
            let mut out = format!("{} {}", "You:".bold(), msg.content()).blue().to_string();
            if let Some(original) = msg.original_text() {
                out.push('\n');
                out.push_str(&format!("  (Original: {original})").dimmed().to_string());
            }
            out
        }
        Role::Bot => format!("Bot: {}", msg.content()).red().bold().to_string(),
    }
}

/// Render the whole log, one blank line between messages.
pub fn render_log(log: &ConversationLog) -> String {
    log.iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn banner(table: &AlphabetTable) -> String {
    format!(
        "{} {}\n{}",
        "Multi-Language Assistant".bright_cyan().bold(),
        table.flags(),
        "Type anything and watch it transform into random languages!".dimmed()
    )
}

/// One line per language: id, flag, display name, alphabet size.
pub fn language_listing(table: &AlphabetTable) -> String {
    table
        .all()
        .iter()
        .map(|p| {
            format!(
                "{:<10} {} {:<10} {:>3} glyphs",
                p.id().id(),
                p.flag(),
                p.display_name(),
                p.glyphs().len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
