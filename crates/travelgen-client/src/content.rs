use std::fmt;

/// The four generation modes offered by the gateway, each backed by its
/// own endpoint path.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ContentType {
    HotelDescription,
    MasterItinerary,
    ExtraDailyContents,
    FreeFormat,
}

/// Input fields a content type may require.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    Prompt,
    DestinationName,
    TripStartDate,
    TripEndDate,
}

impl ContentType {
    /// All content types, in menu order.
    pub const ALL: [ContentType; 4] = [
        ContentType::HotelDescription,
        ContentType::MasterItinerary,
        ContentType::ExtraDailyContents,
        ContentType::FreeFormat,
    ];

    /// Gateway endpoint path for this content type.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            ContentType::HotelDescription => "/generate-hotel-reservation",
            ContentType::MasterItinerary => "/generate-master-itinerary",
            ContentType::ExtraDailyContents => "/generate-extra-daily-contents",
            ContentType::FreeFormat => "/generate-free-format-content",
        }
    }

    /// Human-readable menu label.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::HotelDescription => "Generate Hotel Description",
            ContentType::MasterItinerary => "Generate Master Itinerary",
            ContentType::ExtraDailyContents => "Generate Extra Daily Contents",
            ContentType::FreeFormat => "Generate Free Format Content",
        }
    }

    /// Mandatory fields for this content type.
    ///
    /// Free Format needs only a prompt; every other type needs a
    /// destination and the trip date range. Validation and form rendering
    /// both consume this set so the conditionals live in one place.
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            ContentType::FreeFormat => &[Field::Prompt],
            _ => &[
                Field::DestinationName,
                Field::TripStartDate,
                Field::TripEndDate,
            ],
        }
    }

    /// True when `field` is mandatory for this content type.
    pub fn requires(&self, field: Field) -> bool {
        self.required_fields().contains(&field)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_content_type_maps_to_its_own_endpoint() {
        let paths: std::collections::HashSet<_> = ContentType::ALL
            .iter()
            .map(|ct| ct.endpoint_path())
            .collect();
        assert_eq!(paths.len(), 4);
        assert_eq!(
            ContentType::HotelDescription.endpoint_path(),
            "/generate-hotel-reservation"
        );
        assert_eq!(
            ContentType::FreeFormat.endpoint_path(),
            "/generate-free-format-content"
        );
    }

    #[test]
    fn free_format_requires_only_a_prompt() {
        assert_eq!(ContentType::FreeFormat.required_fields(), &[Field::Prompt]);
        assert!(!ContentType::FreeFormat.requires(Field::DestinationName));
    }

    #[test]
    fn other_types_require_destination_and_dates() {
        for ct in [
            ContentType::HotelDescription,
            ContentType::MasterItinerary,
            ContentType::ExtraDailyContents,
        ] {
            assert!(ct.requires(Field::DestinationName));
            assert!(ct.requires(Field::TripStartDate));
            assert!(ct.requires(Field::TripEndDate));
            assert!(!ct.requires(Field::Prompt));
        }
    }
}
