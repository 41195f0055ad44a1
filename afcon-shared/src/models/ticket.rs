use serde::{Deserialize, Serialize};

use super::fixture::Fixture;
use super::user::UserProfile;

/// A seat booked by a user for a fixture, with both references populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: UserProfile,
    #[serde(rename = "match")]
    pub fixture: Fixture,
    #[serde(rename = "seatNumber")]
    pub seat_number: String,
    #[serde(default)]
    pub status: String,
}

/// Body posted to `/tickets/add`; `user` and `match` are ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTicket {
    pub user: String,
    #[serde(rename = "match")]
    pub fixture: String,
    #[serde(rename = "seatNumber")]
    pub seat_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_decodes_populated_references() {
        let json = r#"{
            "_id": "k1",
            "user": {"_id": "u1", "username": "amina", "email": "amina@example.com"},
            "match": {
                "_id": "m1",
                "teamA": {"_id": "a", "name": "Mali", "country": "Mali", "logoUrl": ""},
                "teamB": {"_id": "b", "name": "Zambia", "country": "Zambia", "logoUrl": ""},
                "date": "2025-12-22T17:00:00.000Z",
                "venue": "Casablanca",
                "status": "upcoming"
            },
            "seatNumber": "B-14",
            "status": "booked"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.fixture.title(), "Mali vs Zambia");
        assert_eq!(ticket.user.username, "amina");
        assert_eq!(ticket.seat_number, "B-14");
        assert_eq!(ticket.status, "booked");
    }

    #[test]
    fn new_ticket_uses_backend_field_names() {
        let body = NewTicket {
            user: "u1".into(),
            fixture: "m1".into(),
            seat_number: "A-1".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["match"], "m1");
        assert_eq!(value["seatNumber"], "A-1");
    }
}
