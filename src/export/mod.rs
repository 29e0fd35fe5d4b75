pub mod pgn;

pub use pgn::{
    generate_pgn, lookup_result, render_pgn, BodyStyle, PgnOptions, RatingTags, Side,
};

use crate::error::Result;
use crate::extractor::TournamentRecord;

/// Pretty JSON of the extracted record, for `--dump`.
pub fn record_to_json(record: &TournamentRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{Cell, GameRecord};

    #[test]
    fn test_record_to_json() {
        let record = TournamentRecord {
            tournament_name: "Açık Turnuva".into(),
            player_name: "Ali Veli".into(),
            player_rating: None,
            games: vec![GameRecord {
                round: Cell::Number(1.0),
                board: Cell::from("3a"),
                opponent_name: "Ayşe Cengiz".into(),
                opponent_rating: Some(0),
                result: "b 1".into(),
            }],
        };

        let json = record_to_json(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["player_rating"], serde_json::Value::Null);
        assert_eq!(value["games"][0]["round"], 1.0);
        assert_eq!(value["games"][0]["board"], "3a");
        assert_eq!(value["games"][0]["opponent_rating"], 0);
    }
}
