//! Text rendering of a floorplan
//!
//! Every cell is drawn independently from its room type, two terminal
//! columns wide. The start room carries the player marker.

use crossterm::style::{Color, Stylize};
use fp_core::grid::GRID_WIDTH;
use fp_core::{Floorplan, RoomType, START_ROOM_INDEX};

/// How cell icons are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    #[default]
    Ascii,
    Emoji,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    pub glyphs: GlyphStyle,
    /// Print each cell's room-type code instead of its icon
    pub show_codes: bool,
    pub color: bool,
}

/// Background colour of a room type
pub fn room_color(room: RoomType) -> Color {
    match room {
        RoomType::Empty => Color::Black,
        RoomType::Normal => Color::White,
        RoomType::Boss => Color::Red,
        RoomType::Reward => Color::Rgb {
            r: 255,
            g: 215,
            b: 0,
        },
        RoomType::Shop => Color::Blue,
        RoomType::Secret => Color::Grey,
    }
}

/// Icon for a cell, two columns wide
fn cell_icon(room: RoomType, is_start: bool, glyphs: GlyphStyle) -> &'static str {
    match glyphs {
        GlyphStyle::Ascii => match room {
            _ if is_start => "@ ",
            RoomType::Empty => "  ",
            RoomType::Normal => "# ",
            RoomType::Boss => "B ",
            RoomType::Reward => "R ",
            RoomType::Shop => "$ ",
            RoomType::Secret => "? ",
        },
        GlyphStyle::Emoji => match room {
            _ if is_start => "🤠",
            RoomType::Boss => "💀",
            RoomType::Reward => "👑",
            RoomType::Shop => "👛",
            RoomType::Secret => "❓",
            RoomType::Empty | RoomType::Normal => "  ",
        },
    }
}

fn cell_text(index: usize, room: RoomType, options: &RenderOptions) -> String {
    let text = if options.show_codes {
        format!("{:>2}", room.code())
    } else {
        cell_icon(room, index == START_ROOM_INDEX, options.glyphs).to_string()
    };

    if options.color {
        let fg = match room {
            RoomType::Normal | RoomType::Reward => Color::Black,
            _ => Color::White,
        };
        format!("{}", text.with(fg).on(room_color(room)))
    } else {
        text
    }
}

/// Render `floor` as rows of text, one line per grid row
pub fn render_floor(floor: &Floorplan, options: &RenderOptions) -> String {
    floor
        .cells()
        .chunks(GRID_WIDTH)
        .enumerate()
        .map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(|(x, &room)| cell_text(y * GRID_WIDTH + x, room, options))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of where the special rooms are
pub fn summary(floor: &Floorplan) -> String {
    match floor.special_rooms() {
        Some(s) => format!(
            "{} rooms | start {} | boss {} | reward {} | shop {} | secret {}",
            floor.room_count(),
            START_ROOM_INDEX,
            s.boss,
            s.reward,
            s.shop,
            s.secret
        ),
        None => format!("{} rooms | start {}", floor.room_count(), START_ROOM_INDEX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_core::{generate_floorplan, GenerateOptions, ReplaySource};

    fn golden() -> Floorplan {
        let mut rng = ReplaySource::constant(0.6);
        generate_floorplan(&GenerateOptions::default(), &mut rng).unwrap()
    }

    #[test]
    fn test_ascii_render() {
        let text = render_floor(&golden(), &RenderOptions::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines.iter().all(|l| l.chars().count() == 20));
        assert_eq!(lines[3], "      R   #   B     ");
        assert_eq!(lines[4], "    # # # @ # # #   ");
        assert_eq!(lines[6], "          # ?       ");
    }

    #[test]
    fn test_code_render() {
        let options = RenderOptions {
            show_codes: true,
            ..Default::default()
        };
        let text = render_floor(&golden(), &options);
        let row5: Vec<u8> = text
            .lines()
            .nth(5)
            .unwrap()
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect();
        assert_eq!(row5, vec![0, 0, 0, 4, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_emoji_render() {
        let options = RenderOptions {
            glyphs: GlyphStyle::Emoji,
            ..Default::default()
        };
        let text = render_floor(&golden(), &options);
        for icon in ["🤠", "💀", "👑", "👛", "❓"] {
            assert_eq!(text.matches(icon).count(), 1, "{icon}");
        }
    }

    #[test]
    fn test_color_render_wraps_cells() {
        let options = RenderOptions {
            color: true,
            ..Default::default()
        };
        let text = render_floor(&golden(), &options);
        // crossterm drops the escapes when NO_COLOR is set
        assert!(text.contains('\u{1b}') || std::env::var_os("NO_COLOR").is_some());
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            summary(&golden()),
            "15 rooms | start 45 | boss 37 | reward 33 | shop 53 | secret 66"
        );
    }
}
