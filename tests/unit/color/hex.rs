use super::*;

#[test]
fn parses_six_digit_hex() {
    assert_eq!(Rgb::parse_hex("#FF3300").unwrap(), Rgb::new(255, 51, 0));
    assert_eq!(Rgb::parse_hex("ff3300").unwrap(), Rgb::new(255, 51, 0));
    assert_eq!(Rgb::parse_hex("  #ff3300  ").unwrap(), Rgb::new(255, 51, 0));
}

#[test]
fn shorthand_expands_by_digit_duplication() {
    assert_eq!(
        Rgb::parse_hex("#F30").unwrap(),
        Rgb::parse_hex("#FF3300").unwrap()
    );
    assert_eq!(Rgb::parse_hex("#abc").unwrap(), Rgb::new(0xaa, 0xbb, 0xcc));
    assert_eq!(Rgb::parse_hex("fff").unwrap(), Rgb::new(255, 255, 255));
}

#[test]
fn rejects_malformed_input() {
    assert!(Rgb::parse_hex("").is_err());
    assert!(Rgb::parse_hex("#").is_err());
    assert!(Rgb::parse_hex("#12").is_err());
    assert!(Rgb::parse_hex("#12345").is_err());
    assert!(Rgb::parse_hex("#1234567").is_err());
    assert!(Rgb::parse_hex("#GGGGGG").is_err());
    assert!(Rgb::parse_hex("#ff33zz").is_err());
}

#[test]
fn rejects_non_ascii_without_panicking() {
    // "é" is two bytes; slicing at fixed offsets would split it.
    assert!(Rgb::parse_hex("aébcd").is_err());
    assert!(Rgb::parse_hex("#ééé").is_err());
}

#[test]
fn rejects_embedded_sign_and_whitespace() {
    // from_str_radix would otherwise accept a leading '+'.
    assert!(Rgb::parse_hex("#+12345").is_err());
    assert!(Rgb::parse_hex("#ff 330").is_err());
}

#[test]
fn to_hex_is_lowercase_and_padded() {
    assert_eq!(Rgb::new(255, 51, 0).to_hex(), "#ff3300");
    assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
}

#[test]
fn parse_then_format_round_trips_lowercase() {
    for hex in ["#ff3300", "#0ea5e9", "#1e293b", "#ffffff", "#000000"] {
        assert_eq!(Rgb::parse_hex(hex).unwrap().to_hex(), hex);
    }
}
