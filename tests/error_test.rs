//! Error reporting

use std::path::Path;
use tempfile::tempdir;
use tournament_pgn::config::Config;
use tournament_pgn::extractor::{read_tournament, SheetLayout};
use tournament_pgn::{NameCase, PgnError};

#[test]
fn test_read_nonexistent_file() {
    let result = read_tournament(
        Path::new("/nonexistent/path/turnuva.xlsx"),
        &SheetLayout::default(),
        NameCase::Turkish,
    );

    let err = result.unwrap_err();
    assert!(matches!(err, PgnError::FileNotFound(_)));
    assert!(format!("{}", err).contains("turnuva.xlsx"));
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("turnuva.txt");
    std::fs::write(&path, "Tur\tMasa").unwrap();

    let err = read_tournament(&path, &SheetLayout::default(), NameCase::Turkish).unwrap_err();
    assert!(matches!(err, PgnError::Workbook(_)));
}

#[test]
fn test_error_display() {
    let errors = vec![
        PgnError::Config("bad value".to_string()),
        PgnError::FileNotFound("a.xlsx".to_string()),
        PgnError::EmptyWorkbook("a.xlsx".to_string()),
        PgnError::HeaderRowNotFound("Tur".to_string()),
        PgnError::MissingColumn("Sonuç".to_string()),
        PgnError::NoRatingColumn("Rtg, UKD, ELO".to_string()),
        PgnError::MissingPlayerName("İsim".to_string()),
        PgnError::PgnWrite("out.pgn: denied".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "empty message: {:?}", err);
    }
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PgnError = io_err.into();

    assert!(matches!(err, PgnError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: PgnError = json_err.into();

    assert!(matches!(err, PgnError::JsonParse(_)));
}

#[test]
fn test_missing_config_file() {
    let err = Config::load(Some(Path::new("/nonexistent/tournament-pgn.json"))).unwrap_err();
    assert!(matches!(err, PgnError::Config(_)));
    assert!(!err.is_extraction());
}
