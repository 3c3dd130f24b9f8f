use serde::{Deserialize, Serialize};

/// User node as loaded from the user seed file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: i64,
}

/// City node as loaded from the city seed file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    pub name: String,
    pub population: i64,
}

/// Directed `follows` edge between two users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Follows {
    pub from_name: String,
    pub to_name: String,
    pub since: i64,
}

/// Directed `lives_in` edge from a user to a city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LivesIn {
    pub user_name: String,
    pub city_name: String,
}

/// A followed user together with the `since` value of the connecting edge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Friend {
    pub name: String,
    pub age: i64,
    pub since: i64,
}

/// A user living in a city.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resident {
    pub name: String,
    pub age: i64,
}

/// Outcome of a lookup that may legitimately match nothing.
///
/// Serialized with a `status` tag so callers can branch on `found` or
/// `not_found` without inspecting the payload type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup<T> {
    Found { value: T },
    NotFound { message: String },
}

impl<T> Lookup<Vec<T>> {
    /// Wraps a row set, treating an empty set as not found.
    pub fn from_rows(rows: Vec<T>, message: &str) -> Self {
        if rows.is_empty() {
            Self::NotFound {
                message: message.to_string(),
            }
        } else {
            Self::Found { value: rows }
        }
    }
}

impl<T> Lookup<T> {
    pub fn from_option(value: Option<T>, message: &str) -> Self {
        value.map_or_else(
            || Self::NotFound {
                message: message.to_string(),
            },
            |value| Self::Found { value },
        )
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub const fn found(&self) -> Option<&T> {
        match self {
            Self::Found { value } => Some(value),
            Self::NotFound { .. } => None,
        }
    }
}

/// Response document for `get_user_friends`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FriendsResult {
    pub user: String,
    pub friends: Lookup<Vec<Friend>>,
}

/// Response document for `get_user_city`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CityResult {
    pub user: String,
    pub city: Lookup<City>,
}

/// Response document for `get_city_residents`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResidentsResult {
    pub city: String,
    pub residents: Lookup<Vec<Resident>>,
}

/// Row counts written by a seed load.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub cities: usize,
    pub follows: usize,
    pub lives_in: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_rows_serialize_as_not_found() {
        let result = FriendsResult {
            user: "Zed".to_string(),
            friends: Lookup::from_rows(Vec::new(), "no friends found"),
        };

        let value = serde_json::to_value(&result).expect("serialize friends result");
        assert_eq!(
            value,
            json!({
                "user": "Zed",
                "friends": { "status": "not_found", "message": "no friends found" }
            })
        );
    }

    #[test]
    fn found_city_carries_value() {
        let result = CityResult {
            user: "U".to_string(),
            city: Lookup::from_option(
                Some(City {
                    name: "Metropolis".to_string(),
                    population: 1000,
                }),
                "not found",
            ),
        };

        assert!(result.city.is_found());
        let value = serde_json::to_value(&result).expect("serialize city result");
        assert_eq!(value["city"]["status"], "found");
        assert_eq!(value["city"]["value"]["name"], "Metropolis");
        assert_eq!(value["city"]["value"]["population"], 1000);
    }
}
