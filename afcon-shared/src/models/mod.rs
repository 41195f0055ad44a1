//! Wire models for the ticketing REST API.

pub mod errors;
pub mod fixture;
pub mod history;
pub mod team;
pub mod ticket;
pub mod user;

pub use errors::ErrorResponse;
pub use fixture::{Fixture, FixtureStatus, NewFixture, Score, finished, upcoming};
pub use history::{PAST_WINNERS, PastWinner, TROPHY_IMAGE_URL};
pub use team::{NewTeam, Team};
pub use ticket::{NewTicket, Ticket};
pub use user::{LoginRequest, LoginResponse, UserProfile};
