/// A previous tournament winner shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastWinner {
    pub year: u16,
    pub winner: &'static str,
    pub badge_url: &'static str,
}

/// The last five champions, most recent first.
pub const PAST_WINNERS: [PastWinner; 5] = [
    PastWinner {
        year: 2023,
        winner: "Ivory Coast",
        badge_url: "https://r2.thesportsdb.com/images/media/team/badge/rwxuuu1455465643.png/tiny",
    },
    PastWinner {
        year: 2021,
        winner: "Senegal",
        badge_url: "https://r2.thesportsdb.com/images/media/team/badge/wh8dya1526727459.png/tiny",
    },
    PastWinner {
        year: 2019,
        winner: "Algeria",
        badge_url: "https://r2.thesportsdb.com/images/media/team/badge/rrwpry1455460218.png/tiny",
    },
    PastWinner {
        year: 2017,
        winner: "Cameroon",
        badge_url: "https://r2.thesportsdb.com/images/media/team/badge/txqspw1455463989.png/tiny",
    },
    PastWinner {
        year: 2015,
        winner: "Ivory Coast",
        badge_url: "https://r2.thesportsdb.com/images/media/team/badge/rwxuuu1455465643.png/tiny",
    },
];

/// Trophy artwork for the home page hero.
pub const TROPHY_IMAGE_URL: &str =
    "https://r2.thesportsdb.com/images/media/league/trophy/a02gac1701102618.png/medium";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winners_are_most_recent_first() {
        assert!(PAST_WINNERS.windows(2).all(|w| w[0].year > w[1].year));
    }
}
