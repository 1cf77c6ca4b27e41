// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `godaddy/matcher.rs`

#[cfg(test)]
mod tests {
    use crate::godaddy::matcher::*;
    use crate::godaddy::types::{ProviderRecord, ProviderRecordType};
    use crate::models::{Record, RecordTarget, RecordType};

    const ZONE: &str = "example.com";

    fn cname(name: &str, target: &str, ttl: u32) -> Record {
        Record::new(
            name,
            ZONE,
            RecordType::Cname,
            ttl,
            RecordTarget::Value {
                value: target.to_string(),
            },
        )
    }

    #[test]
    fn test_zone_suffix_is_stripped() {
        let record = cname("www", "host.example.com.", 600);
        let provider = ProviderRecord::new("www", ProviderRecordType::Cname, "host", 600);
        assert!(is_match(&provider, &record, ZONE));
    }

    #[test]
    fn test_exact_value_matches() {
        let record = cname("old", "foo.example.com", 600);
        let provider =
            ProviderRecord::new("old", ProviderRecordType::Cname, "foo.example.com", 600);
        assert!(is_match(&provider, &record, ZONE));
    }

    #[test]
    fn test_suffix_without_trailing_dot_is_not_stripped() {
        let record = cname("www", "host.example.com", 600);
        let provider = ProviderRecord::new("www", ProviderRecordType::Cname, "host", 600);
        assert!(!is_match(&provider, &record, ZONE));
    }

    #[test]
    fn test_foreign_fqdn_is_kept_verbatim() {
        let record = cname("www", "host.example.net.", 600);
        let provider =
            ProviderRecord::new("www", ProviderRecordType::Cname, "host.example.net.", 600);
        assert!(is_match(&provider, &record, ZONE));
        assert_eq!(comparable_value(&record, ZONE), "host.example.net.");
    }

    #[test]
    fn test_name_mismatch_never_matches() {
        let record = cname("www", "host.example.com.", 600);
        let provider = ProviderRecord::new("ftp", ProviderRecordType::Cname, "host", 600);
        assert!(!is_match(&provider, &record, ZONE));
    }

    #[test]
    fn test_type_mismatch_never_matches() {
        let record = cname("www", "192.0.2.1", 600);
        let provider = ProviderRecord::new("www", ProviderRecordType::A, "192.0.2.1", 600);
        assert!(!is_match(&provider, &record, ZONE));

        let invalid = ProviderRecord::new("www", ProviderRecordType::Invalid, "192.0.2.1", 600);
        assert!(!is_match(&invalid, &record, ZONE));
    }

    #[test]
    fn test_ttl_mismatch_never_matches() {
        let record = cname("www", "host.example.com.", 3600);
        let provider = ProviderRecord::new("www", ProviderRecordType::Cname, "host", 600);
        assert!(!is_match(&provider, &record, ZONE));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let record = cname("www", "Host.example.com.", 600);
        let provider = ProviderRecord::new("www", ProviderRecordType::Cname, "host", 600);
        assert!(!is_match(&provider, &record, ZONE));

        let upper_name = ProviderRecord::new("WWW", ProviderRecordType::Cname, "Host", 600);
        assert!(!is_match(&upper_name, &record, ZONE));
    }

    #[test]
    fn test_txt_uses_joined_value() {
        let record = Record::new(
            "@",
            ZONE,
            RecordType::Txt,
            600,
            RecordTarget::Txt {
                parts: vec!["a".to_string(), "b".to_string()],
            },
        );
        let joined = ProviderRecord::new("@", ProviderRecordType::Txt, "ab", 600);
        let first_only = ProviderRecord::new("@", ProviderRecordType::Txt, "a", 600);
        assert!(is_match(&joined, &record, ZONE));
        assert!(!is_match(&first_only, &record, ZONE));
    }

    #[test]
    fn test_mx_compares_host_only() {
        let record = Record::new(
            "@",
            ZONE,
            RecordType::Mx,
            600,
            RecordTarget::Mx {
                priority: 10,
                target: "mail.example.com.".to_string(),
            },
        );
        let mut provider = ProviderRecord::new("@", ProviderRecordType::Mx, "mail", 600);
        provider.priority = Some(10);
        assert!(is_match(&provider, &record, ZONE));
    }
}
