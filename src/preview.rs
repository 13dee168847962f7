//! Turn-preview field extraction.
//!
//! After every preview upload the glue layer needs a handful of fields out
//! of the decoded document to drive storage metadata and turn notifications:
//! whose turn it is, the turn counter, the civilization roster, and the
//! de-duplicated list of player ids. This module lifts them into a typed,
//! serializable view so the glue never touches the raw tree.

use serde::Serialize;
use serde_json::Value;

/// One civilization's notification-relevant fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CivSummary {
    pub civ_name: String,
    pub player_id: Option<String>,
    pub player_type: Option<String>,
}

/// The fields the notification glue reads from a decoded document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePreview {
    pub current_player: Option<String>,
    pub turns: i64,
    pub civilizations: Vec<CivSummary>,
    /// Unique player ids from `gameParameters.players` and the civilization
    /// roster, in first-seen order, empties skipped.
    pub players: Vec<String>,
}

impl GamePreview {
    /// Extracts the preview fields from a decoded document.
    ///
    /// Missing fields are tolerated: an absent roster is empty, an absent
    /// turn counter is 0.
    pub fn from_document(doc: &Value) -> GamePreview {
        let civilizations: Vec<CivSummary> = doc
            .get("civilizations")
            .and_then(Value::as_array)
            .map(|civs| civs.iter().filter_map(civ_summary).collect())
            .unwrap_or_default();

        let mut players = Vec::new();
        let parameter_players = doc
            .pointer("/gameParameters/players")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        for entry in parameter_players {
            push_player(&mut players, entry.get("playerId"));
        }
        for civ in &civilizations {
            if let Some(id) = &civ.player_id {
                if !id.is_empty() && !players.iter().any(|p| p == id) {
                    players.push(id.clone());
                }
            }
        }

        GamePreview {
            current_player: doc
                .get("currentPlayer")
                .and_then(Value::as_str)
                .map(str::to_string),
            turns: doc.get("turns").and_then(Value::as_i64).unwrap_or(0),
            civilizations,
            players,
        }
    }

    /// The player id of the civilization whose turn it is, if known.
    pub fn current_player_id(&self) -> Option<&str> {
        let current = self.current_player.as_deref()?;
        self.civilizations
            .iter()
            .find(|c| c.civ_name == current)?
            .player_id
            .as_deref()
    }

    /// Names of the human-controlled civilizations.
    pub fn human_civs(&self) -> Vec<&str> {
        self.civilizations
            .iter()
            .filter(|c| c.player_type.as_deref() == Some("Human"))
            .map(|c| c.civ_name.as_str())
            .collect()
    }
}

fn civ_summary(civ: &Value) -> Option<CivSummary> {
    Some(CivSummary {
        civ_name: civ.get("civName")?.as_str()?.to_string(),
        player_id: civ
            .get("playerId")
            .and_then(Value::as_str)
            .map(str::to_string),
        player_type: civ
            .get("playerType")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

fn push_player(players: &mut Vec<String>, id: Option<&Value>) {
    if let Some(id) = id.and_then(Value::as_str) {
        if !id.is_empty() && !players.iter().any(|p| p == id) {
            players.push(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_doc() -> Value {
        json!({
            "currentPlayer": "Rome",
            "turns": 57,
            "gameParameters": {
                "players": [
                    {"playerId": "p1"},
                    {"playerId": "p3"},
                    {"playerId": ""},
                    {"chosenCiv": "Random"},
                ],
            },
            "civilizations": [
                {"civName": "Rome", "playerId": "p1", "playerType": "Human"},
                {"civName": "Egypt", "playerId": "p2", "playerType": "Human"},
                {"civName": "Barbarians", "playerType": "AI"},
            ],
        })
    }

    #[test]
    fn extracts_scalar_fields() {
        let preview = GamePreview::from_document(&sample_doc());
        assert_eq!(preview.current_player.as_deref(), Some("Rome"));
        assert_eq!(preview.turns, 57);
    }

    #[test]
    fn extracts_civ_roster() {
        let preview = GamePreview::from_document(&sample_doc());
        assert_eq!(preview.civilizations.len(), 3);
        assert_eq!(preview.civilizations[1].civ_name, "Egypt");
        assert_eq!(preview.civilizations[1].player_id.as_deref(), Some("p2"));
        assert_eq!(preview.civilizations[2].player_id, None);
    }

    #[test]
    fn players_are_unique_in_first_seen_order() {
        let preview = GamePreview::from_document(&sample_doc());
        // p1 appears in both lists; the empty id is skipped.
        assert_eq!(preview.players, ["p1", "p3", "p2"]);
    }

    #[test]
    fn current_player_id_resolves_through_roster() {
        let preview = GamePreview::from_document(&sample_doc());
        assert_eq!(preview.current_player_id(), Some("p1"));
    }

    #[test]
    fn current_player_id_absent_when_civ_unknown() {
        let mut doc = sample_doc();
        doc["currentPlayer"] = json!("Atlantis");
        let preview = GamePreview::from_document(&doc);
        assert_eq!(preview.current_player_id(), None);
    }

    #[test]
    fn human_civs_filters_player_type() {
        let preview = GamePreview::from_document(&sample_doc());
        assert_eq!(preview.human_civs(), ["Rome", "Egypt"]);
    }

    #[test]
    fn tolerates_sparse_documents() {
        let preview = GamePreview::from_document(&json!({}));
        assert_eq!(preview.current_player, None);
        assert_eq!(preview.turns, 0);
        assert!(preview.civilizations.is_empty());
        assert!(preview.players.is_empty());
        assert_eq!(preview.current_player_id(), None);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let preview = GamePreview::from_document(&sample_doc());
        let out = serde_json::to_value(&preview).unwrap();
        assert_eq!(out["currentPlayer"], json!("Rome"));
        assert_eq!(out["civilizations"][0]["civName"], json!("Rome"));
    }
}
