//! Unit tests for patrol-grid.
//!
//! All grids are inline strings; only the file-loading tests touch disk.

#[cfg(test)]
mod helpers {
    /// The 5×5 board used across the workspace's tests.
    ///
    /// Guard at (2,2) facing north, obstructions directly above and below.
    pub const PLUS_GRID: &str = "\
.....
..#..
..^..
..#..
.....
";
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse {
    use patrol_core::{Coordinate, Heading};

    use super::helpers::PLUS_GRID;
    use crate::parse_grid;

    #[test]
    fn extents_from_rows() {
        let grid = parse_grid(PLUS_GRID).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.cell_count(), 25);
    }

    #[test]
    fn start_marker_faces_north() {
        let grid = parse_grid(PLUS_GRID).unwrap();
        assert_eq!(grid.initial_position(), Coordinate::new(2, 2));
        assert_eq!(grid.initial_heading(), Heading::North);
    }

    #[test]
    fn obstructions_recorded() {
        let grid = parse_grid(PLUS_GRID).unwrap();
        assert_eq!(grid.obstruction_count(), 2);
        assert!(grid.is_obstructed(Coordinate::new(2, 1)));
        assert!(grid.is_obstructed(Coordinate::new(2, 3)));
        assert!(!grid.is_obstructed(Coordinate::new(2, 2)));
    }

    #[test]
    fn other_characters_are_open() {
        let grid = parse_grid("x?@\n.^ \n").unwrap();
        assert_eq!(grid.obstruction_count(), 0);
        assert_eq!(grid.initial_position(), Coordinate::new(1, 1));
    }

    #[test]
    fn trailing_blank_lines_ignored() {
        let grid = parse_grid("..\n^.\n\n\n").unwrap();
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn crlf_line_endings() {
        let grid = parse_grid("..#\r\n.^.\r\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert!(grid.is_obstructed(Coordinate::new(2, 0)));
    }

    #[test]
    fn construction_is_idempotent() {
        let a = parse_grid(PLUS_GRID).unwrap();
        let b = parse_grid(PLUS_GRID).unwrap();
        assert_eq!(a.width(), b.width());
        assert_eq!(a.height(), b.height());
        assert_eq!(a.obstructions(), b.obstructions());
        assert_eq!(a.initial_position(), b.initial_position());
        assert_eq!(a.initial_heading(), b.initial_heading());
        assert_eq!(a, b);
    }
}

// ── Bounds & obstruction lookup ───────────────────────────────────────────────

#[cfg(test)]
mod bounds {
    use patrol_core::Coordinate;

    use super::helpers::PLUS_GRID;
    use crate::parse_grid;

    #[test]
    fn contains_half_open_range() {
        let grid = parse_grid(PLUS_GRID).unwrap();
        assert!(grid.contains(Coordinate::new(0, 0)));
        assert!(grid.contains(Coordinate::new(4, 4)));
        assert!(!grid.contains(Coordinate::new(5, 0)));
        assert!(!grid.contains(Coordinate::new(0, 5)));
        assert!(!grid.contains(Coordinate::new(-1, 2)));
        assert!(!grid.contains(Coordinate::new(2, -1)));
    }

    #[test]
    fn out_of_bounds_never_obstructed() {
        let grid = parse_grid("###\n#^#\n###\n").unwrap();
        for c in [(-1, 0), (3, 1), (1, -1), (1, 3)] {
            assert!(!grid.is_obstructed(Coordinate::from(c)), "{c:?}");
        }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use patrol_core::Coordinate;

    use crate::{GridError, parse_grid};

    #[test]
    fn missing_agent_marker() {
        let err = parse_grid("...\n.#.\n...\n").unwrap_err();
        assert!(matches!(err, GridError::MissingAgentMarker), "{err}");
    }

    #[test]
    fn duplicate_agent_marker() {
        let err = parse_grid("^..\n..^\n").unwrap_err();
        match err {
            GridError::DuplicateAgentMarker { first, second } => {
                assert_eq!(first, Coordinate::new(0, 0));
                assert_eq!(second, Coordinate::new(2, 1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let err = parse_grid("....\n.^.\n....\n").unwrap_err();
        match err {
            GridError::MalformedGrid { row, expected, got } => {
                assert_eq!((row, expected, got), (1, 4, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn interior_blank_line_is_malformed() {
        let err = parse_grid("..\n\n^.\n").unwrap_err();
        assert!(matches!(err, GridError::MalformedGrid { row: 1, .. }), "{err}");
    }

    #[test]
    fn empty_input() {
        assert!(matches!(parse_grid("").unwrap_err(), GridError::EmptyGrid));
        assert!(matches!(parse_grid("\n\n").unwrap_err(), GridError::EmptyGrid));
    }

    #[test]
    fn error_messages() {
        let err = GridError::MalformedGrid { row: 2, expected: 5, got: 4 };
        assert_eq!(err.to_string(), "row 2 has 4 cells, expected 5");
        assert_eq!(
            GridError::MissingAgentMarker.to_string(),
            "no guard start marker found in grid"
        );
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use patrol_core::{Coordinate, Heading};

    use super::helpers::PLUS_GRID;
    use crate::{GridError, GridModelBuilder, parse_grid};

    #[test]
    fn matches_parsed_grid() {
        let built = GridModelBuilder::new(5, 5)
            .obstructions([Coordinate::new(2, 1), Coordinate::new(2, 3)])
            .agent(Coordinate::new(2, 2), Heading::North)
            .build()
            .unwrap();
        assert_eq!(built, parse_grid(PLUS_GRID).unwrap());
    }

    #[test]
    fn custom_heading_kept() {
        let grid = GridModelBuilder::new(3, 3)
            .agent(Coordinate::new(1, 1), Heading::West)
            .build()
            .unwrap();
        assert_eq!(grid.initial_heading(), Heading::West);
    }

    #[test]
    fn duplicate_obstructions_collapse() {
        let grid = GridModelBuilder::new(3, 3)
            .obstruction(Coordinate::new(0, 0))
            .obstruction(Coordinate::new(0, 0))
            .agent(Coordinate::new(1, 1), Heading::North)
            .build()
            .unwrap();
        assert_eq!(grid.obstruction_count(), 1);
    }

    #[test]
    fn requires_agent() {
        let err = GridModelBuilder::new(3, 3).build().unwrap_err();
        assert!(matches!(err, GridError::MissingAgentMarker));
    }

    #[test]
    fn rejects_zero_extent() {
        let err = GridModelBuilder::new(0, 3)
            .agent(Coordinate::ORIGIN, Heading::North)
            .build()
            .unwrap_err();
        assert!(matches!(err, GridError::EmptyGrid));
    }

    #[test]
    fn rejects_oversized_extent() {
        let err = GridModelBuilder::new(usize::MAX, 1)
            .agent(Coordinate::ORIGIN, Heading::North)
            .build()
            .unwrap_err();
        assert!(matches!(err, GridError::TooLarge { .. }));
    }

    #[test]
    fn rejects_out_of_bounds_obstruction() {
        let err = GridModelBuilder::new(3, 3)
            .obstruction(Coordinate::new(3, 0))
            .agent(Coordinate::new(1, 1), Heading::North)
            .build()
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { what: "obstruction", .. }), "{err}");
    }

    #[test]
    fn rejects_out_of_bounds_agent() {
        let err = GridModelBuilder::new(3, 3)
            .agent(Coordinate::new(-1, 1), Heading::North)
            .build()
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { what: "guard start", .. }), "{err}");
    }
}

// ── Loading from files / readers ──────────────────────────────────────────────

#[cfg(test)]
mod load {
    use std::io::{Cursor, Write};

    use super::helpers::PLUS_GRID;
    use crate::{GridError, load_grid_path, load_grid_reader, parse_grid};

    #[test]
    fn reader_matches_parse() {
        let from_reader = load_grid_reader(Cursor::new(PLUS_GRID)).unwrap();
        assert_eq!(from_reader, parse_grid(PLUS_GRID).unwrap());
    }

    #[test]
    fn path_round_trip() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(PLUS_GRID.as_bytes()).unwrap();
        let grid = load_grid_path(file.path()).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.obstruction_count(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_grid_path(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, GridError::Io(_)), "{err}");
    }
}
