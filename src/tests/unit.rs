#[cfg(test)]
mod unit_tests {

    use crate::{
        SlugConfig, Slugifier, cents_to_dollars, get_random_string, is_number, is_raw_utf8,
        is_typical_utf8, is_valid_email, slugify, to_float, to_int,
    };

    #[test]
    fn zombie_slug_with_defaults() {
        assert_eq!(
            slugify("🧟 Zombie 🧟 Zombie", &SlugConfig::default()).unwrap(),
            "zombie-zombie"
        );
    }

    #[test]
    fn limit_applies_in_characters() {
        let config = SlugConfig::builder().limit(11).build();
        assert_eq!(
            slugify("Really Long String haha wow", &config).unwrap(),
            "really-long"
        );
    }

    #[test]
    fn email_examples() {
        assert!(is_valid_email("_test_@example.com."));
        assert!(!is_valid_email("white space here@test.net"));
    }

    #[test]
    fn number_boundaries() {
        assert!(is_number("0"));
        assert!(!is_number("-1."));
        assert!(is_number("+1.5"));
        assert!(!is_number("1.07e58"));
        assert!(!is_number("5.72 "));
        assert!(!is_number(&["list"]));
        assert!(!is_number(None::<&str>));
        assert!(!is_number(false));
    }

    #[test]
    fn conversions_truncate_or_preserve() {
        assert_eq!(to_int("7.992").unwrap(), 7);
        assert_eq!(to_float("7.992").unwrap(), 7.992);
        let empty: &[u8] = &[];
        assert!(to_int(empty).is_err());
        assert!(to_float(empty).is_err());
    }

    #[test]
    fn random_string_lengths() {
        for n in [1, 512, 1025] {
            let s = get_random_string(n);
            assert_eq!(s.len(), n);
            assert!(!s.contains(crate::AMBIGUOUS_CHARACTERS));
        }
    }

    #[test]
    fn money_basics() {
        assert_eq!(cents_to_dollars(1537), "$15.37");
        assert_eq!(cents_to_dollars(-999), "$-9.99");
        assert_eq!(cents_to_dollars(0), "$0.00");
    }

    #[test]
    fn latin1_byte_is_not_utf8() {
        assert!(!is_raw_utf8(b"\xDF"));
        assert!(!is_typical_utf8(b"\xDF"));
        assert!(is_raw_utf8("ß".as_bytes()));
    }

    #[test]
    fn default_slugifier_reusable() {
        let slugifier = Slugifier::default();
        assert_eq!(slugifier.slugify("Hello, world!"), "hello-world");
        assert_eq!(slugifier.slugify("Grüße aus Köln"), "grusse-aus-koln");
    }
}
