use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::{Cell, GameState, Player, HEIGHT, WIDTH};

/// Draws the board top row first, with colored tiles and the column numbers below
pub fn draw(state: &GameState) -> Result<()> {
    let mut stdout = stdout();

    for row in (0..HEIGHT).rev() {
        stdout.queue(PrintStyledContent(style(" |")))?;
        for column in 0..WIDTH {
            let tile = Cell::new(row, column).and_then(|cell| state.get(cell));
            let content = match tile {
                Some(player) => style(format!(" {} ", player))
                    .attribute(Attribute::Bold)
                    .on(Color::Black)
                    .with(match player {
                        Player::One => Color::Red,
                        Player::Two => Color::Blue,
                    }),
                None => style("   ".to_string()),
            };
            stdout.queue(PrintStyledContent(content))?;
        }
        stdout.queue(PrintStyledContent(style(format!("| {}\n", row + 1))))?;
    }

    let footer: String = (1..=WIDTH).map(|column| format!("-{}-", column)).collect();
    stdout.queue(PrintStyledContent(style(format!(" +{}+\n", footer))))?;
    stdout.flush()?;
    Ok(())
}
