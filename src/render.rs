//! Plain-text table rendering for ranked tracks.

use crate::clients::entities::Track;

const HEADERS: [&str; 4] = ["", "Title", "Artist", "Album"];

/// Visual dialect for the rendered track table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// `+---+` bordered grid, used for the published `.txt` files.
    Ascii,
    /// Pipe table without outer rules.
    Markdown,
}

/// Render tracks as a four-column table: now-playing marker, title,
/// artist, album. Input order is preserved.
#[must_use]
pub fn render_table(tracks: &[Track], style: TableStyle) -> String {
    let rows: Vec<[String; 4]> = tracks
        .iter()
        .map(|track| {
            [
                if track.now_playing {
                    "*".to_string()
                } else {
                    String::new()
                },
                track.title.clone(),
                track.artist.clone(),
                track.album.clone(),
            ]
        })
        .collect();

    let mut widths: [usize; 4] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 4]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| {
                let width = *width;
                format!(" {cell:<width$} ")
            })
            .collect();
        format!("|{}|", padded.join("|"))
    };
    let rule = |joint: char| -> String {
        let segments: Vec<String> = widths.iter().map(|width| "-".repeat(width + 2)).collect();
        format!("{joint}{}{joint}", segments.join(&joint.to_string()))
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    match style {
        TableStyle::Ascii => {
            lines.push(rule('+'));
            lines.push(line(HEADERS));
            lines.push(rule('+'));
            for row in &rows {
                lines.push(line([
                    row[0].as_str(),
                    row[1].as_str(),
                    row[2].as_str(),
                    row[3].as_str(),
                ]));
            }
            lines.push(rule('+'));
        }
        TableStyle::Markdown => {
            lines.push(line(HEADERS));
            lines.push(rule('|'));
            for row in &rows {
                lines.push(line([
                    row[0].as_str(),
                    row[1].as_str(),
                    row[2].as_str(),
                    row[3].as_str(),
                ]));
            }
        }
    }
    lines.join("\n")
}
