use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

use super::team::Team;

/// Progress of a fixture as reported by the backend.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FixtureStatus {
    Upcoming,
    Live,
    Finished,
    #[default]
    #[serde(other)]
    Other,
}

/// Final or running score, keyed like the teams.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    #[serde(rename = "teamA")]
    pub team_a: u32,
    #[serde(rename = "teamB")]
    pub team_b: u32,
}

/// A scheduled match between two teams. Served by the `/matches` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fixture {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "teamA")]
    pub team_a: Team,
    #[serde(rename = "teamB")]
    pub team_b: Team,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub status: FixtureStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

impl Fixture {
    /// "Morocco vs Egypt"
    pub fn title(&self) -> String {
        format!("{} vs {}", self.team_a.name, self.team_b.name)
    }

    /// "Morocco 2 - 0 Egypt", or the plain title while no score is known.
    pub fn result_label(&self) -> String {
        match self.score {
            Some(score) => format!(
                "{} {} - {} {}",
                self.team_a.name, score.team_a, score.team_b, self.team_b.name
            ),
            None => self.title(),
        }
    }

    pub fn kickoff_label(&self) -> String {
        self.date.format("%d %b %Y, %H:%M UTC").to_string()
    }
}

/// Body posted to `/matches/add`. Teams are referenced by id and the date is
/// the raw `datetime-local` value picked in the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewFixture {
    #[serde(rename = "teamA")]
    pub team_a: String,
    #[serde(rename = "teamB")]
    pub team_b: String,
    pub date: String,
    pub venue: String,
}

/// Fixtures still to be played, in backend order.
pub fn upcoming(fixtures: &[Fixture]) -> Vec<&Fixture> {
    with_status(fixtures, FixtureStatus::Upcoming)
}

/// Fixtures already played, in backend order.
pub fn finished(fixtures: &[Fixture]) -> Vec<&Fixture> {
    with_status(fixtures, FixtureStatus::Finished)
}

fn with_status(fixtures: &[Fixture], status: FixtureStatus) -> Vec<&Fixture> {
    fixtures.iter().filter(|f| f.status == status).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, name: &str) -> Team {
        Team {
            id: id.into(),
            name: name.into(),
            country: name.into(),
            logo_url: String::new(),
        }
    }

    fn fixture(id: &str, status: FixtureStatus) -> Fixture {
        Fixture {
            id: id.into(),
            team_a: team("a", "Morocco"),
            team_b: team("b", "Comoros"),
            date: "2025-12-21T20:00:00Z".parse().unwrap(),
            venue: "Prince Moulay Abdellah Stadium".into(),
            status,
            score: None,
        }
    }

    #[test]
    fn fixture_decodes_populated_teams_and_millisecond_dates() {
        let json = r#"{
            "_id": "m1",
            "teamA": {"_id": "a", "name": "Morocco", "country": "Morocco", "logoUrl": ""},
            "teamB": {"_id": "b", "name": "Comoros", "country": "Comoros", "logoUrl": ""},
            "date": "2025-12-21T20:00:00.000Z",
            "venue": "Rabat",
            "status": "upcoming"
        }"#;
        let fixture: Fixture = serde_json::from_str(json).unwrap();
        assert_eq!(fixture.title(), "Morocco vs Comoros");
        assert_eq!(fixture.status, FixtureStatus::Upcoming);
        assert_eq!(fixture.kickoff_label(), "21 Dec 2025, 20:00 UTC");
    }

    #[test]
    fn unknown_or_missing_status_becomes_other() {
        let mut value = serde_json::to_value(fixture("m2", FixtureStatus::Live)).unwrap();
        value["status"] = "postponed".into();
        let parsed: Fixture = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(parsed.status, FixtureStatus::Other);

        value.as_object_mut().unwrap().remove("status");
        let parsed: Fixture = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.status, FixtureStatus::Other);
    }

    #[test]
    fn upcoming_and_finished_split_by_status() {
        let fixtures = vec![
            fixture("1", FixtureStatus::Upcoming),
            fixture("2", FixtureStatus::Finished),
            fixture("3", FixtureStatus::Live),
            fixture("4", FixtureStatus::Upcoming),
        ];
        let ids = |list: Vec<&Fixture>| list.iter().map(|f| f.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(upcoming(&fixtures)), vec!["1", "4"]);
        assert_eq!(ids(finished(&fixtures)), vec!["2"]);
    }

    #[test]
    fn new_fixture_uses_backend_field_names() {
        let body = NewFixture {
            team_a: "a".into(),
            team_b: "b".into(),
            date: "2025-12-21T20:00".into(),
            venue: "Rabat".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["teamA"], "a");
        assert_eq!(value["teamB"], "b");
    }

    #[test]
    fn result_label_includes_score_when_known() {
        let mut played = fixture("5", FixtureStatus::Finished);
        assert_eq!(played.result_label(), "Morocco vs Comoros");

        played.score = Some(Score {
            team_a: 2,
            team_b: 0,
        });
        assert_eq!(played.result_label(), "Morocco 2 - 0 Comoros");
    }

    #[test]
    fn status_displays_lowercase() {
        assert_eq!(FixtureStatus::Finished.to_string(), "finished");
        assert_eq!(FixtureStatus::Upcoming.as_ref(), "upcoming");
    }
}
