//! Terminal clock face
//!
//! Redraws a single line on stdout every time the timer publishes a snapshot.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::{
        Attribute, Color as TermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
    terminal::{Clear, ClearType},
};
use tokio::sync::watch;
use tracing::{info, warn};

use crate::{error::TimerError, state::TimerSnapshot, timer::Color};

fn term_color(color: Color) -> TermColor {
    let (r, g, b) = color.rgb();
    TermColor::Rgb { r, g, b }
}

/// Draw one snapshot over the current line
pub fn draw<W: Write>(out: &mut W, snapshot: &TimerSnapshot) -> Result<(), TimerError> {
    queue!(
        out,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        SetBackgroundColor(term_color(Color::Yellow)),
        SetForegroundColor(term_color(snapshot.color)),
        SetAttribute(Attribute::Bold),
        Print(format!("{:<10}", snapshot.label)),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(term_color(Color::Yellow)),
        SetForegroundColor(TermColor::Rgb { r: 0x40, g: 0x40, b: 0x40 }),
        Print(format!(" {} ", snapshot.clock)),
        SetForegroundColor(term_color(Color::Green)),
        Print(&snapshot.check_marks),
        ResetColor,
    )?;
    out.flush()?;
    Ok(())
}

/// Background task that keeps the terminal clock face in sync with the timer
pub async fn terminal_clock_task(mut snapshots: watch::Receiver<TimerSnapshot>) {
    info!("Starting terminal clock face");

    loop {
        let snapshot = snapshots.borrow_and_update().clone();
        if let Err(e) = draw(&mut io::stdout(), &snapshot) {
            warn!("Failed to draw clock face: {}", e);
        }

        if snapshots.changed().await.is_err() {
            info!("Timer stopped publishing, closing clock face");
            break;
        }
    }
}
