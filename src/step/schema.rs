//! Attribute layouts for the IFC types read by name.
//!
//! `IfcBuildingStorey` positions are identical in IFC2X3 and IFC4.

const BUILDING_STOREY: [&str; 10] = [
    "GlobalId",
    "OwnerHistory",
    "Name",
    "Description",
    "ObjectType",
    "ObjectPlacement",
    "Representation",
    "LongName",
    "CompositionType",
    "Elevation",
];

/// Ordered attribute names for a known entity type.
pub fn attribute_names(type_name: &str) -> Option<&'static [&'static str]> {
    if type_name.eq_ignore_ascii_case("IFCBUILDINGSTOREY") {
        Some(&BUILDING_STOREY)
    } else {
        None
    }
}

/// Position of `attribute` in the instance parameter list of `type_name`.
pub fn attribute_index(type_name: &str, attribute: &str) -> Option<usize> {
    attribute_names(type_name)?
        .iter()
        .position(|n| n.eq_ignore_ascii_case(attribute))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storey_elevation_index() {
        assert_eq!(attribute_index("IFCBUILDINGSTOREY", "Elevation"), Some(9));
        assert_eq!(attribute_index("IfcBuildingStorey", "elevation"), Some(9));
        assert_eq!(attribute_index("IFCBUILDINGSTOREY", "Name"), Some(2));
        assert_eq!(attribute_names("ifcbuildingstorey").map(<[_]>::len), Some(10));
    }

    #[test]
    fn test_unknown_type_or_attribute() {
        assert_eq!(attribute_index("IFCWALL", "Name"), None);
        assert_eq!(attribute_index("IFCSITE", "Name"), None);
        assert_eq!(attribute_index("IFCBUILDINGSTOREY", "Height"), None);
    }
}
