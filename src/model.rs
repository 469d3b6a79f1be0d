// Passenger records as served by the passenger API
//
// Records are read-only once fetched. Every optional field may be missing or
// null in the JSON and renders as an empty cell. Sex and embarkation values
// outside the known sets are kept as `Other` rather than failing the whole
// response, so one odd row never blanks the table.

use crate::error::InvalidPassenger;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Passenger sex as reported by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sex {
    Male,
    Female,
    /// Any value other than exactly "male" or "female"
    Other(String),
}

impl From<String> for Sex {
    fn from(value: String) -> Self {
        match value.as_str() {
            "male" => Sex::Male,
            "female" => Sex::Female,
            _ => Sex::Other(value),
        }
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        match sex {
            Sex::Male => "male".to_string(),
            Sex::Female => "female".to_string(),
            Sex::Other(value) => value,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
            Sex::Other(value) => f.write_str(value),
        }
    }
}

/// Port of embarkation: Cherbourg, Queenstown, Southampton
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmbarkLocation {
    C,
    Q,
    S,
    Other(String),
}

impl From<String> for EmbarkLocation {
    fn from(value: String) -> Self {
        match value.as_str() {
            "C" => EmbarkLocation::C,
            "Q" => EmbarkLocation::Q,
            "S" => EmbarkLocation::S,
            _ => EmbarkLocation::Other(value),
        }
    }
}

impl From<EmbarkLocation> for String {
    fn from(location: EmbarkLocation) -> Self {
        location.to_string()
    }
}

impl fmt::Display for EmbarkLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmbarkLocation::C => f.write_str("C"),
            EmbarkLocation::Q => f.write_str("Q"),
            EmbarkLocation::S => f.write_str("S"),
            EmbarkLocation::Other(value) => f.write_str(value),
        }
    }
}

/// One ticket holder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub passenger_id: i64,
    #[serde(default)]
    pub p_class: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sex: Option<Sex>,
    /// Fractional for infants
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub nb_sibling_spouse: Option<u32>,
    #[serde(default)]
    pub nb_parent_children: Option<u32>,
    #[serde(default)]
    pub ticket: Option<String>,
    #[serde(default)]
    pub fare: Option<f64>,
    #[serde(default)]
    pub cabin: Option<String>,
    #[serde(default)]
    pub embark_location: Option<EmbarkLocation>,
}

/// Column headers, in display order
pub const COLUMNS: [&str; 11] = [
    "Passenger ID",
    "Class",
    "Name",
    "Sex",
    "Age",
    "Nb Sibling Spouse",
    "Nb Parent Children",
    "Ticket",
    "Fare",
    "Cabin",
    "Embark Location",
];

fn opt_cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl Passenger {
    /// Cell text for each column in `COLUMNS` order; missing values are empty
    pub fn cells(&self) -> [String; 11] {
        [
            self.passenger_id.to_string(),
            opt_cell(&self.p_class),
            self.name.clone(),
            opt_cell(&self.sex),
            opt_cell(&self.age),
            opt_cell(&self.nb_sibling_spouse),
            opt_cell(&self.nb_parent_children),
            opt_cell(&self.ticket),
            opt_cell(&self.fare),
            opt_cell(&self.cabin),
            opt_cell(&self.embark_location),
        ]
    }
}

/// Body of `POST /passengers/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPassenger {
    pub p_class: i64,
    pub name: String,
    pub sex: Sex,
    #[serde(default)]
    pub age: Option<f64>,
    pub nb_sibling_spouse: u32,
    pub nb_parent_children: u32,
    pub ticket: String,
    #[serde(default)]
    pub fare: Option<f64>,
    #[serde(default)]
    pub cabin: Option<String>,
    pub embark_location: EmbarkLocation,
}

impl NewPassenger {
    /// Reject values the API would refuse before sending anything
    pub fn validate(&self) -> Result<(), InvalidPassenger> {
        if !(1..=3).contains(&self.p_class) {
            return Err(InvalidPassenger::Class(self.p_class));
        }
        if let Sex::Other(value) = &self.sex {
            return Err(InvalidPassenger::Sex(value.clone()));
        }
        if let EmbarkLocation::Other(value) = &self.embark_location {
            return Err(InvalidPassenger::EmbarkLocation(value.clone()));
        }
        if self.name.trim().is_empty() {
            return Err(InvalidPassenger::EmptyName);
        }
        if self.age.is_some_and(|age| age < 0.0) || self.fare.is_some_and(|fare| fare < 0.0) {
            return Err(InvalidPassenger::Negative);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "passenger_id": 1,
            "p_class": 3,
            "name": "Braund, Mr. Owen Harris",
            "sex": "male",
            "age": 22.0,
            "nb_sibling_spouse": 1,
            "nb_parent_children": 0,
            "ticket": "A/5 21171",
            "fare": 7.25,
            "cabin": null,
            "embark_location": "S"
        }"#;

        let passenger: Passenger = serde_json::from_str(json).unwrap();
        assert_eq!(passenger.passenger_id, 1);
        assert_eq!(passenger.p_class, Some(3));
        assert_eq!(passenger.sex, Some(Sex::Male));
        assert_eq!(passenger.cabin, None);
        assert_eq!(passenger.embark_location, Some(EmbarkLocation::S));
    }

    #[test]
    fn test_unknown_sex_is_kept_not_rejected() {
        let json = r#"{"passenger_id": 7, "p_class": 1, "name": "X", "sex": "unknown"}"#;
        let passenger: Passenger = serde_json::from_str(json).unwrap();
        assert_eq!(passenger.sex, Some(Sex::Other("unknown".to_string())));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let passenger: Passenger = serde_json::from_str(r#"{"passenger_id": 42}"#).unwrap();
        let cells = passenger.cells();

        assert_eq!(cells[0], "42");
        assert!(cells[1..].iter().all(String::is_empty));
    }

    #[test]
    fn test_infant_age_keeps_fraction() {
        let json = r#"{"passenger_id": 79, "p_class": 2, "name": "Caldwell, Master. Alden Gates", "sex": "male", "age": 0.83}"#;
        let passenger: Passenger = serde_json::from_str(json).unwrap();
        assert_eq!(passenger.cells()[4], "0.83");
    }

    #[test]
    fn test_sex_serializes_back_to_plain_string() {
        let json = serde_json::to_string(&Sex::Female).unwrap();
        assert_eq!(json, r#""female""#);
    }

    #[test]
    fn test_new_passenger_validation() {
        let mut passenger = NewPassenger {
            p_class: 2,
            name: "Hocking, Mrs. Elizabeth".to_string(),
            sex: Sex::Female,
            age: Some(54.0),
            nb_sibling_spouse: 1,
            nb_parent_children: 3,
            ticket: "29105".to_string(),
            fare: Some(23.0),
            cabin: None,
            embark_location: EmbarkLocation::S,
        };
        assert!(passenger.validate().is_ok());

        passenger.p_class = 4;
        assert!(matches!(passenger.validate(), Err(InvalidPassenger::Class(4))));

        passenger.p_class = 1;
        passenger.embark_location = EmbarkLocation::Other("X".to_string());
        assert!(matches!(
            passenger.validate(),
            Err(InvalidPassenger::EmbarkLocation(_))
        ));
    }
}
