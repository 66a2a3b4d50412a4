//! Unit tests for the identifier types
//!
//! Covers construction from names and raw codes, parsing of invoice ids,
//! and serialization shape.

use core_kernel::{CompanyCode, IndustryCode, InvoiceId, IdentifierError};

mod company_code_tests {
    use super::*;

    #[test]
    fn test_from_name_slugifies() {
        assert_eq!(CompanyCode::from_name("Apple Computer").as_str(), "apple-computer");
    }

    #[test]
    fn test_new_keeps_raw_value() {
        let code = CompanyCode::new("Not-A-Slug");
        assert_eq!(code.as_str(), "Not-A-Slug");
    }

    #[test]
    fn test_display_matches_inner() {
        let code = CompanyCode::new("ibm");
        assert_eq!(code.to_string(), "ibm");
        assert_eq!(code.into_inner(), "ibm");
    }

    #[test]
    fn test_empty_name_gives_empty_code() {
        assert!(CompanyCode::from_name("???").is_empty());
    }

    #[test]
    fn test_deserializes_from_plain_string() {
        let code: CompanyCode = serde_json::from_str("\"google\"").unwrap();
        assert_eq!(code, CompanyCode::new("google"));
    }
}

mod industry_code_tests {
    use super::*;

    #[test]
    fn test_from_name_slugifies() {
        assert_eq!(IndustryCode::from_name("Search Engine").as_str(), "search-engine");
    }

    #[test]
    fn test_codes_order_lexically() {
        let mut codes = vec![IndustryCode::new("tech"), IndustryCode::new("retail")];
        codes.sort();
        assert_eq!(codes[0].as_str(), "retail");
    }
}

mod invoice_id_tests {
    use super::*;

    #[test]
    fn test_parses_integer() {
        let id: InvoiceId = "17".parse().unwrap();
        assert_eq!(id, InvoiceId::new(17));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let id: InvoiceId = " 3 ".parse().unwrap();
        assert_eq!(id.value(), 3);
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = "abc".parse::<InvoiceId>().unwrap_err();
        assert_eq!(err, IdentifierError::InvalidInvoiceId("abc".to_string()));
    }

    #[test]
    fn test_rejects_overflow() {
        assert!("99999999999".parse::<InvoiceId>().is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&InvoiceId::new(5)).unwrap(), "5");
    }

    #[test]
    fn test_i32_conversion() {
        let raw: i32 = InvoiceId::from(9).into();
        assert_eq!(raw, 9);
    }
}
