// Name-based player identity used to merge stat lines across seasons.

use std::fmt;

use crate::stats::season::SeasonStatLine;

/// Canonical key for a player: family name plus given name.
///
/// Equality, hashing and ordering are structural over both fields, compared
/// as exact strings. No trimming or case folding is applied, so "Smith" and
/// "smith" are different players, as are "John" and "John ".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerIdentity {
    pub family_name: String,
    pub given_name: String,
}

impl PlayerIdentity {
    pub fn new(family_name: impl Into<String>, given_name: impl Into<String>) -> Self {
        PlayerIdentity {
            family_name: family_name.into(),
            given_name: given_name.into(),
        }
    }

    /// Identity derived from a stat line's own name fields.
    pub fn of(line: &SeasonStatLine) -> Self {
        PlayerIdentity::new(line.name.clone(), line.first_name.clone())
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.family_name, self.given_name)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identical_names_are_equal() {
        assert_eq!(
            PlayerIdentity::new("Smith", "John"),
            PlayerIdentity::new("Smith", "John")
        );
    }

    #[test]
    fn case_difference_is_a_different_player() {
        assert_ne!(
            PlayerIdentity::new("Smith", "John"),
            PlayerIdentity::new("smith", "John")
        );
        assert_ne!(
            PlayerIdentity::new("Smith", "John"),
            PlayerIdentity::new("Smith", "JOHN")
        );
    }

    #[test]
    fn whitespace_difference_is_a_different_player() {
        assert_ne!(
            PlayerIdentity::new("Smith", "John"),
            PlayerIdentity::new("Smith ", "John")
        );
        assert_ne!(
            PlayerIdentity::new("Smith", "John"),
            PlayerIdentity::new("Smith", " John")
        );
    }

    #[test]
    fn field_boundary_matters() {
        // A concatenating hash would collide these two; the composite key must not.
        let a = PlayerIdentity::new("Ab", "c");
        let b = PlayerIdentity::new("A", "bc");
        assert_ne!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn ordering_is_family_then_given() {
        let mut ids = vec![
            PlayerIdentity::new("Smith", "John"),
            PlayerIdentity::new("Adams", "Zed"),
            PlayerIdentity::new("Smith", "Adam"),
        ];
        ids.sort();
        assert_eq!(ids[0], PlayerIdentity::new("Adams", "Zed"));
        assert_eq!(ids[1], PlayerIdentity::new("Smith", "Adam"));
        assert_eq!(ids[2], PlayerIdentity::new("Smith", "John"));
    }

    #[test]
    fn display_shows_family_then_given() {
        assert_eq!(PlayerIdentity::new("Crosby", "Sidney").to_string(), "Crosby, Sidney");
    }
}
