use super::*;

#[test]
fn thresholds_match_wcag_2_1() {
    assert_eq!(WcagLevel::classify(21.0, false), WcagLevel::Aaa);
    assert_eq!(WcagLevel::classify(7.0, false), WcagLevel::Aaa);
    assert_eq!(WcagLevel::classify(6.99, false), WcagLevel::Aa);
    assert_eq!(WcagLevel::classify(4.5, false), WcagLevel::Aa);
    assert_eq!(WcagLevel::classify(4.49, false), WcagLevel::Fail);
    assert_eq!(WcagLevel::classify(3.0, true), WcagLevel::AaLarge);
    assert_eq!(WcagLevel::classify(2.9, true), WcagLevel::Fail);
    assert_eq!(WcagLevel::classify(3.0, false), WcagLevel::Fail);
}

#[test]
fn large_text_flag_never_demotes() {
    assert_eq!(WcagLevel::classify(7.0, true), WcagLevel::Aaa);
    assert_eq!(WcagLevel::classify(4.5, true), WcagLevel::Aa);
}

#[test]
fn display_matches_published_names() {
    assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
    assert_eq!(WcagLevel::Aa.to_string(), "AA");
    assert_eq!(WcagLevel::AaLarge.to_string(), "AA Large");
    assert_eq!(WcagLevel::Fail.to_string(), "Fail");
}

#[test]
fn serde_names_match_display() {
    for level in [
        WcagLevel::Aaa,
        WcagLevel::Aa,
        WcagLevel::AaLarge,
        WcagLevel::Fail,
    ] {
        let v = serde_json::to_value(level).unwrap();
        assert_eq!(v, serde_json::json!(level.to_string()));
        let back: WcagLevel = serde_json::from_value(v).unwrap();
        assert_eq!(back, level);
    }
}
