use sambat_calendar::{
    format_bs, is_valid_bs_date, parse_bs_date, BsDate, BsFormat, BS_MAX_YEAR, BS_MIN_YEAR,
};

#[test]
fn rejects_out_of_range_month() {
    assert_eq!(parse_bs_date("2082/13/01"), None);
}

#[test]
fn rejects_non_date_text() {
    assert_eq!(parse_bs_date("not-a-date"), None);
}

#[test]
fn short_form_parses_back() {
    for date in [
        BsDate::new(BS_MIN_YEAR, 1, 1).unwrap(),
        BsDate::new(2082, 2, 32).unwrap(),
        BsDate::new(BS_MAX_YEAR, 12, 30).unwrap(),
    ] {
        assert_eq!(parse_bs_date(&format_bs(date, BsFormat::Short)), Some(date));
    }
}

#[test]
fn validator_agrees_with_parser() {
    let cases = [
        ("2082/01/30", true),
        ("2082/01/31", false),
        ("2082/02/32", true),
        ("1999/12/30", false),
        ("2091/01/01", false),
    ];
    for (text, valid) in cases {
        let fields: Vec<&str> = text.split('/').collect();
        let date = BsDate::from_parts(
            fields[0].parse().unwrap(),
            fields[1].parse().unwrap(),
            fields[2].parse().unwrap(),
        );
        assert_eq!(is_valid_bs_date(&date), valid, "{text}");
        assert_eq!(parse_bs_date(text).is_some(), valid, "{text}");
    }
}
