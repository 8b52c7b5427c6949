use chrono::NaiveDate;

/// Raw user-supplied form values, prior to validation and pruning.
///
/// Numeric fields default to `0` and string fields to empty, mirroring an
/// untouched form. Which fields are mandatory depends on the selected
/// [`ContentType`](crate::ContentType); see
/// [`ContentRequest::build`](crate::ContentRequest::build).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripForm {
    /// Free-format prompt text.
    pub prompt: String,
    /// Destination the content is about.
    pub destination_name: String,
    pub trip_start_date: Option<NaiveDate>,
    pub trip_end_date: Option<NaiveDate>,
    pub client_age: u32,
    pub number_of_trips: u32,
    pub days_to_birthday: u32,
    /// Years the client has been with the agency.
    pub client_since: u32,
    /// Comma-separated list of places the client has visited.
    pub places_visited: String,
}

impl TripForm {
    /// Parses the comma-separated `places_visited` input into an ordered
    /// list of trimmed, non-empty entries.
    pub fn parsed_places(&self) -> Vec<String> {
        parse_places(&self.places_visited)
    }
}

/// Splits a comma-separated list, trimming each piece and dropping empties.
pub fn parse_places(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_are_trimmed_and_empties_dropped() {
        assert_eq!(
            parse_places("Paris, Rome ,  Tokyo,"),
            vec!["Paris", "Rome", "Tokyo"]
        );
    }

    #[test]
    fn blank_places_input_parses_to_nothing() {
        assert!(parse_places("").is_empty());
        assert!(parse_places(" , ,").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(parse_places("b,a,c"), vec!["b", "a", "c"]);
    }
}
