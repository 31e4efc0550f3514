//! Named templates for the members of the GTIN family.

/// A standard human-readable layout.
///
/// Serialized by its canonical name; deserialization accepts the same
/// aliases as [`FromStr`](std::str::FromStr).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// 12-digit UPC-A: number system, manufacturer, product, check digit.
    UpcA,
    /// 13-digit EAN-13.
    Ean13,
    /// 8-digit EAN-8.
    Ean8,
    /// 14-digit GTIN-14, zero padded without separators.
    Gtin14,
}

impl Layout {
    /// All layouts, in display order.
    pub const ALL: [Layout; 4] = [Layout::UpcA, Layout::Ean13, Layout::Ean8, Layout::Gtin14];

    /// Returns the formatting template for this layout.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        match self {
            Layout::UpcA => "0-00000-00000-0",
            Layout::Ean13 => "0-000000-000000",
            Layout::Ean8 => "0000-0000",
            Layout::Gtin14 => "00000000000000",
        }
    }

    /// Returns the canonical name of this layout.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Layout::UpcA => "upc-a",
            Layout::Ean13 => "ean-13",
            Layout::Ean8 => "ean-8",
            Layout::Gtin14 => "gtin-14",
        }
    }

    /// Number of digits this layout holds.
    #[must_use]
    pub fn digits(&self) -> usize {
        self.template().chars().filter(|c| *c == '0').count()
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upc-a" | "upca" => Ok(Layout::UpcA),
            "ean-13" | "ean13" => Ok(Layout::Ean13),
            "ean-8" | "ean8" => Ok(Layout::Ean8),
            "gtin-14" | "gtin14" => Ok(Layout::Gtin14),
            other => Err(format!(
                "unknown layout '{other}': expected one of upc-a, ean-13, ean-8, gtin-14"
            )),
        }
    }
}

impl serde::Serialize for Layout {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::Deserialize<'de> for Layout {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_counts() {
        assert_eq!(Layout::UpcA.digits(), 12);
        assert_eq!(Layout::Ean13.digits(), 13);
        assert_eq!(Layout::Ean8.digits(), 8);
        assert_eq!(Layout::Gtin14.digits(), 14);
    }

    #[test]
    fn test_name_roundtrip() {
        for layout in Layout::ALL {
            assert_eq!(layout.to_string().parse::<Layout>().unwrap(), layout);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("UPCA".parse::<Layout>().unwrap(), Layout::UpcA);
        assert_eq!("Ean13".parse::<Layout>().unwrap(), Layout::Ean13);
        assert!("isbn".parse::<Layout>().is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        for layout in Layout::ALL {
            let json = serde_json::to_string(&layout).unwrap();
            assert_eq!(json, format!("\"{layout}\""));
        }
    }

    #[test]
    fn test_serde_accepts_parse_aliases() {
        for alias in ["upca", "UPC-A", "Ean13", "EAN-8", "gtin14"] {
            let from_json: Layout = serde_json::from_str(&format!("\"{alias}\"")).unwrap();
            assert_eq!(from_json, alias.parse::<Layout>().unwrap());
        }

        let err = serde_json::from_str::<Layout>("\"isbn\"").unwrap_err();
        assert!(err.to_string().contains("unknown layout"));
    }
}
