use serde::{Deserialize, Serialize};

use super::{de_lenient_u32, Measurement};

/// A player or staff member as returned by the squads and player career feeds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub short_first_name: Option<String>,
    pub short_last_name: Option<String>,
    pub match_name: Option<String>,
    pub known_name: Option<String>,
    #[serde(rename = "type")]
    pub person_type: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub nationality_id: Option<String>,
    pub second_nationality: Option<String>,
    pub second_nationality_id: Option<String>,
    pub date_of_birth: Option<String>,
    pub place_of_birth: Option<String>,
    pub country_of_birth: Option<String>,
    pub country_of_birth_id: Option<String>,
    pub height: Option<Measurement>,
    pub weight: Option<Measurement>,
    pub status: Option<String>,
    pub position: Option<String>,
    pub last_updated: Option<String>,

    // player career
    pub oc_second_nationality_id: Option<String>,
    pub op_second_nationality_id: Option<String>,
    pub membership: Option<Vec<Membership>>,

    // squad listing
    pub foot: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub shirt_number: Option<u32>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub active: Option<String>,

    // filled from the player directory
    #[serde(rename = "photo_url", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A spell with one club, optionally with per-competition numbers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub contestant_id: String,
    pub contestant_type: Option<String>,
    pub contestant_name: Option<String>,
    pub contestant_short_name: Option<String>,
    pub active: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub role: Option<String>,
    #[serde(rename = "type")]
    pub membership_type: Option<String>,
    pub transfer_type: Option<String>,
    pub stat: Option<Vec<CompetitionStat>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionStat {
    pub competition_id: Option<String>,
    pub competition_name: Option<String>,
    pub tournament_calendar_id: Option<String>,
    pub tournament_calendar_name: Option<String>,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub penalty_goals: Option<u32>,
    pub appearances: Option<u32>,
    pub yellow_cards: Option<u32>,
    pub second_yellow_cards: Option<u32>,
    pub red_cards: Option<u32>,
    pub substitute_in: Option<u32>,
    pub substitute_out: Option<u32>,
    pub subs_on_bench: Option<u32>,
    pub minutes_played: Option<u32>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub shirt_number: Option<u32>,
    pub competition_format: Option<String>,
    pub is_friendly: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kit {
    #[serde(rename = "type")]
    pub kit_type: String,
    #[serde(default)]
    pub shirt_colour1: String,
    pub shirt_colour2: Option<String>,
    pub shirt_colour3: Option<String>,
    #[serde(default)]
    pub shorts_colour1: String,
    #[serde(default)]
    pub socks_colour1: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TeamKits {
    #[serde(default)]
    pub kit: Vec<Kit>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Squad {
    pub contestant_id: String,
    #[serde(default)]
    pub contestant_name: String,
    #[serde(default)]
    pub contestant_short_name: String,
    #[serde(default)]
    pub contestant_club_name: String,
    #[serde(default)]
    pub contestant_code: String,
    pub tournament_calendar_id: Option<String>,
    pub tournament_calendar_start_date: Option<String>,
    pub tournament_calendar_end_date: Option<String>,
    pub competition_name: Option<String>,
    pub competition_id: Option<String>,
    #[serde(rename = "type")]
    pub squad_type: Option<String>,
    pub team_type: Option<String>,
    pub venue_name: Option<String>,
    pub venue_id: Option<String>,
    #[serde(default)]
    pub person: Vec<Person>,
    pub team_kits: Option<TeamKits>,
}

/// Root of the `squads` feed. `Default` is the "team not found" value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoster {
    #[serde(default)]
    pub squad: Vec<Squad>,
    #[serde(default)]
    pub last_updated: String,
}

impl TeamRoster {
    pub fn is_empty(&self) -> bool {
        self.squad.is_empty()
    }
}

/// Root of the `playercareer` feed. `Default` is the "player not found" value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCareerStats {
    #[serde(default)]
    pub person: Vec<Person>,
    #[serde(default)]
    pub last_updated: String,
}

impl PlayerCareerStats {
    pub fn is_empty(&self) -> bool {
        self.person.is_empty()
    }
}
