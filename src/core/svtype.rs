#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvType {
    INSERTION,
    DELETION,
    INVERSION,
    DUPLICATION,
    CNV,
    BND,
    /// Any other symbolic type, carried through to `<TAG>` unchanged.
    Other(String),
}

impl SvType {
    pub fn from_u8(bytes: &[u8]) -> Self {
        match bytes {
            b"INS" => SvType::INSERTION,
            b"DEL" => SvType::DELETION,
            b"INV" => SvType::INVERSION,
            b"DUP" => SvType::DUPLICATION,
            b"CNV" => SvType::CNV,
            b"BND" => SvType::BND,
            _ => SvType::Other(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    pub fn is_breakend(&self) -> bool {
        matches!(self, SvType::BND)
    }

    pub fn symbolic_alt(&self) -> String {
        format!("<{self}>")
    }
}

impl std::str::FromStr for SvType {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_u8(s.as_bytes()))
    }
}

impl std::fmt::Display for SvType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SvType::INSERTION => write!(f, "INS"),
            SvType::DELETION => write!(f, "DEL"),
            SvType::INVERSION => write!(f, "INV"),
            SvType::DUPLICATION => write!(f, "DUP"),
            SvType::CNV => write!(f, "CNV"),
            SvType::BND => write!(f, "BND"),
            SvType::Other(tag) => write!(f, "{tag}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_display_as_parsed() {
        for tag in ["INS", "DEL", "INV", "DUP", "CNV", "BND"] {
            let svtype: SvType = tag.parse().unwrap();
            assert!(!matches!(svtype, SvType::Other(_)));
            assert_eq!(svtype.to_string(), tag);
        }
    }

    #[test]
    fn test_unknown_type_is_kept_verbatim() {
        let svtype: SvType = "MEI".parse().unwrap();
        assert_eq!(svtype, SvType::Other("MEI".to_string()));
        assert_eq!(svtype.symbolic_alt(), "<MEI>");
        assert!(!svtype.is_breakend());
    }

    #[test]
    fn test_only_bnd_is_breakend() {
        assert!(SvType::BND.is_breakend());
        assert!(!SvType::DELETION.is_breakend());
    }
}
