//! Closed choice sets stored as strings.
//!
//! Each enum serializes to its wire value (`"APARTMENT"`, `"1BED"`, ...),
//! rejects unknown values during deserialization, and converts back from the
//! stored column text.

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident default $default:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, utoipa::ToSchema,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            /// Every accepted value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire and column representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        /// Unknown column values fall back to the default choice.
        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|choice| choice.as_str() == s)
                    .unwrap_or_default()
            }
        }

        impl From<$name> for String {
            fn from(choice: $name) -> Self {
                choice.as_str().to_string()
            }
        }
    };
}

choice_enum! {
    /// Kind of account a profile represents
    UserType default Tenant {
        Tenant => "TENANT",
        Landlord => "LANDLORD",
        Agent => "AGENT",
        Admin => "ADMIN",
    }
}

choice_enum! {
    /// Listing category; selects which detail record a property may carry
    PropertyType default Land {
        Land => "LAND",
        Rental => "RENTAL",
        Apartment => "APARTMENT",
        /// Campus hostel
        Hostel => "HOSTEL",
    }
}

choice_enum! {
    PricePeriod default OneTime {
        OneTime => "ONETIME",
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
        Yearly => "YEARLY",
    }
}

choice_enum! {
    LandType default Other {
        Residential => "RESIDENTIAL",
        Commercial => "COMMERCIAL",
        Agricultural => "AGRICULTURAL",
        Industrial => "INDUSTRIAL",
        Other => "OTHER",
    }
}

choice_enum! {
    RentalType default Other {
        House => "HOUSE",
        Townhouse => "TOWNHOUSE",
        Villa => "VILLA",
        Cottage => "COTTAGE",
        Other => "OTHER",
    }
}

choice_enum! {
    ApartmentType default Studio {
        Studio => "STUDIO",
        OneBedroom => "1BED",
        TwoBedroom => "2BED",
        ThreeBedroom => "3BED",
        Penthouse => "PENTHOUSE",
        Duplex => "DUPLEX",
    }
}

choice_enum! {
    HostelType default Mixed {
        Male => "MALE",
        Female => "FEMALE",
        Mixed => "MIXED",
    }
}

choice_enum! {
    RoomType default Shared {
        Single => "SINGLE",
        Shared => "SHARED",
        /// Dormitory
        Dorm => "DORM",
    }
}

choice_enum! {
    /// Lifecycle of an inquiry
    InquiryStatus default Pending {
        Pending => "PENDING",
        Responded => "RESPONDED",
        Closed => "CLOSED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(PropertyType::Hostel.as_str(), "HOSTEL");
        assert_eq!(ApartmentType::OneBedroom.to_string(), "1BED");
        assert_eq!(PricePeriod::OneTime.as_str(), "ONETIME");
    }

    #[test]
    fn test_from_column_text() {
        assert_eq!(PropertyType::from("APARTMENT"), PropertyType::Apartment);
        assert_eq!(InquiryStatus::from("CLOSED"), InquiryStatus::Closed);
        // Unknown values default
        assert_eq!(UserType::from("SUPERUSER"), UserType::Tenant);
    }

    #[test]
    fn test_serde_uses_wire_values() {
        let json = serde_json::to_string(&ApartmentType::TwoBedroom).unwrap();
        assert_eq!(json, "\"2BED\"");

        let parsed: PricePeriod = serde_json::from_str("\"MONTHLY\"").unwrap();
        assert_eq!(parsed, PricePeriod::Monthly);

        assert!(serde_json::from_str::<PropertyType>("\"CASTLE\"").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(PricePeriod::default(), PricePeriod::OneTime);
        assert_eq!(InquiryStatus::default(), InquiryStatus::Pending);
        assert_eq!(UserType::default(), UserType::Tenant);
    }
}
