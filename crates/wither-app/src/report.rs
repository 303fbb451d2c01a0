//! Console report for a search.

use std::io::{self, Write};

use wither_rooms::{SearchArea, SearchReport};
use wither_terrain::HeightGrid;

/// Message printed when the area holds no room.
pub const NO_ROOM_MESSAGE: &str = "Failed to find room, try increasing the radius.";

/// Lines printed before generation starts.
pub fn write_header(out: &mut impl Write, area: &SearchArea) -> io::Result<()> {
    writeln!(
        out,
        "Finding wither room near block {} in chunk {} within chunk radius ({})",
        area.target(),
        area.center_chunk(),
        area.chunk_radius()
    )?;
    writeln!(out)?;
    let side = area.side_length();
    writeln!(out, "Generating {side} x {side} area of bedrock")
}

/// Lines printed once the search has finished.
pub fn write_results(out: &mut impl Write, report: &SearchReport, print_grid: bool) -> io::Result<()> {
    writeln!(out, "Generation complete!")?;
    writeln!(out)?;

    if print_grid {
        writeln!(out, "Bedrock heights from {}:", report.area.origin())?;
        write_grid(out, &report.grid)?;
        writeln!(out)?;
    }

    writeln!(out, "Finding Wither rooms")?;
    for room in &report.rooms {
        writeln!(out, "\tFound wither room centered on {room}")?;
    }

    match report.closest {
        Some(closest) => writeln!(out, "Closest room is centered on {closest}"),
        None => writeln!(out, "{NO_ROOM_MESSAGE}"),
    }
}

/// One line per grid row, heights separated by single spaces.
pub fn write_grid(out: &mut impl Write, grid: &HeightGrid) -> io::Result<()> {
    for row in grid.rows() {
        let mut first = true;
        for height in row {
            if !first {
                out.write_all(b" ")?;
            }
            write!(out, "{height}")?;
            first = false;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wither_coords::BlockPos;
    use wither_rooms::SearchLimits;

    fn area() -> SearchArea {
        SearchArea::new(BlockPos::new(-8, 8), 1, SearchLimits::default()).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header() {
        let text = render(|out| write_header(out, &area()));
        assert_eq!(
            text,
            "Finding wither room near block (-8, 8) in chunk (-1, 0) within chunk radius (1)\n\
             \n\
             Generating 32 x 32 area of bedrock\n"
        );
    }

    #[test]
    fn test_results_with_rooms() {
        let report = SearchReport {
            area: area(),
            grid: HeightGrid::for_chunk_radius(1),
            rooms: vec![BlockPos::new(0, -31), BlockPos::new(-15, 14)],
            closest: Some(BlockPos::new(-15, 14)),
        };
        let text = render(|out| write_results(out, &report, false));
        assert!(text.contains("\tFound wither room centered on (0, -31)\n"));
        assert!(text.contains("\tFound wither room centered on (-15, 14)\n"));
        assert!(text.ends_with("Closest room is centered on (-15, 14)\n"));
        assert!(!text.contains("Bedrock heights"));
    }

    #[test]
    fn test_results_without_rooms() {
        let report = SearchReport {
            area: area(),
            grid: HeightGrid::for_chunk_radius(1),
            rooms: Vec::new(),
            closest: None,
        };
        let text = render(|out| write_results(out, &report, false));
        assert!(text.ends_with(&format!("{NO_ROOM_MESSAGE}\n")));
    }

    #[test]
    fn test_grid_dump() {
        let grid = HeightGrid::from_rows(&[[123, 124], [125, 127]]).unwrap();
        let text = render(|out| write_grid(out, &grid));
        assert_eq!(text, "123 124\n125 127\n");
    }

    #[test]
    fn test_results_with_grid_names_origin() {
        let report = SearchReport {
            area: area(),
            grid: HeightGrid::for_chunk_radius(1),
            rooms: Vec::new(),
            closest: None,
        };
        let text = render(|out| write_results(out, &report, true));
        assert!(text.contains("Bedrock heights from (-32, -16):\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("0 0 0")).count(), 32);
    }
}
