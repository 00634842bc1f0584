//! Integration tests for digit normalization across scripts

use numero_core::{
    classify, is_digit_only, normalize, normalize_as_number, strip_non_digits, Classification,
    Normalizer, NormalizerConfig, Number, ParseError, SENTINEL, STANDARD_ZERO_POINTS,
};

#[test]
fn test_every_listed_run_maps_to_zero_through_nine() {
    for &zero in STANDARD_ZERO_POINTS.iter() {
        for offset in 0..10u32 {
            let ch = char::from_u32(zero as u32 + offset).unwrap();
            assert_eq!(
                classify(ch),
                Classification::Digit(offset as u8),
                "U+{:04X}",
                ch as u32
            );
        }
    }
}

#[test]
fn test_persian_digit_two() {
    assert_eq!(classify('۲').into_pair(), (true, 2));
    assert_eq!(classify('a').into_pair(), (false, SENTINEL));
}

#[test]
fn test_concrete_normalization_cases() {
    assert_eq!(normalize("۱۲۳"), "123");
    assert_eq!(normalize("abc۵def"), "abc5def");
    assert_eq!(normalize_as_number("۱۲.۵"), Ok(Number::Float(12.5)));
    assert_eq!(normalize_as_number("۱۲"), Ok(Number::Integer(12)));
    assert_eq!(strip_non_digits("a۱b۲!", Some("!")), "12!");
    assert_eq!(strip_non_digits("a۱b۲!", None), "12");
}

#[test]
fn test_empty_string_is_digit_only_by_default() {
    assert!(is_digit_only(""));
}

#[test]
fn test_mixed_script_number() {
    // Arabic-Indic, Bengali, Thai and fullwidth digits in one string
    let text = "٤৫๖７";
    assert!(is_digit_only(text));
    assert_eq!(normalize(text), "4567");
    assert_eq!(normalize_as_number(text), Ok(Number::Integer(4567)));
}

#[test]
fn test_mathematical_digits() {
    assert_eq!(normalize("𝟏𝟐 𝟛𝟜 𝟧𝟨 𝟳𝟴 𝟿𝟶"), "12 34 56 78 90");
}

#[test]
fn test_number_parse_failures_propagate() {
    let cases = ["", "۱,۲۳۴", "۱.۲.۳", "۱۲kg", "٫۵"];
    for text in cases {
        assert!(normalize_as_number(text).is_err(), "expected failure for {text:?}");
    }

    match normalize_as_number("۱.۲.۳") {
        Err(ParseError::Float { input, .. }) => assert_eq!(input, "1.2.3"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_configured_normalizer() {
    let config = NormalizerConfig::from_toml_str(
        r#"
        empty_is_digit_only = false
        extra_zero_points = ["\U00011DA0"]
        "#,
    )
    .unwrap();
    let normalizer = Normalizer::from_config(&config).unwrap();

    // Gunjala Gondi digits only resolve with the extra run
    let text = "\u{11DA4}\u{11DA2}";
    assert_eq!(normalizer.normalize(text), "42");
    assert_eq!(normalize(text), text);
    assert!(!normalizer.is_digit_only(""));
}

#[test]
fn test_concurrent_use() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("۱۲۳-{i}");
                normalize(&text)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("123-{i}"));
    }
}
