use colored::Colorize;

use crate::api::models::{PlayerCardView, PlayersGridView, SubEventItem};

/// Render the grid view for a terminal
pub fn format_grid(view: &PlayersGridView) -> String {
    let mut out = String::new();

    let title = view.sub_event_name.as_deref().unwrap_or("Players");
    out.push_str(&format!("{}\n", title.to_uppercase().bold()));

    if view.show_draw_selection {
        let draws: Vec<String> = view
            .draw_names
            .iter()
            .map(|name| {
                if Some(name) == view.selected_draw.as_ref() {
                    format!("[{}]", name).bold().to_string()
                } else {
                    name.dimmed().to_string()
                }
            })
            .collect();
        out.push_str(&format!("Draws: {}\n", draws.join("  ")));
    }

    if let Some(error) = &view.error {
        out.push_str(&format!("{}\n", error.red()));
        return out;
    }
    if let Some(message) = &view.empty_message {
        out.push_str(&format!("{}\n", message.dimmed()));
        return out;
    }

    for draw in &view.draws {
        out.push_str(&format!("\n{}\n", draw.name.underline()));
        for player in &draw.players {
            out.push_str(&format!("  {}\n", format_card(player)));
        }
        for team in &draw.teams {
            out.push_str(&format!("  {}\n", team.team_name.bold()));
            out.push_str(&format!("    {}\n", format_card(&team.player1)));
            out.push_str(&format!("    {}\n", format_card(&team.player2)));
        }
    }

    out
}

pub fn format_sub_events(sub_events: &[SubEventItem]) -> String {
    sub_events
        .iter()
        .map(|se| format!("{:>5}  {:<4} {}\n", se.sub_event_id, se.code.bold(), se.name))
        .collect()
}

fn format_card(card: &PlayerCardView) -> String {
    let ranking = card
        .world_ranking
        .map_or_else(|| "-".to_string(), |rank| format!("#{}", rank));
    let seed = card
        .seed
        .filter(|seed| *seed > 0)
        .map_or_else(String::new, |seed| format!(" seed #{}", seed));
    format!(
        "WR {:<5} {:<28} {:<4} {:>7} pts{}",
        ranking,
        card.name,
        card.country.cyan(),
        card.points,
        seed
    )
}
