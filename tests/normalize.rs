// tests/normalize.rs
//
// Row cleaning rules and the parallel normalization stage.
//
use gdp_etl::error::EtlError;
use gdp_etl::extract::RawRow;
use gdp_etl::normalize::normalize;
use gdp_etl::pipeline::normalize_rows;

fn raw(country: &str, gdp: &str, year: &str) -> RawRow {
    RawRow {
        country: country.to_string(),
        gdp: gdp.to_string(),
        year: year.to_string(),
    }
}

#[test]
fn world_aggregate_row_is_rejected() {
    let out = normalize(&raw("World", "105,000", "2024")).unwrap();
    assert!(out.is_none());
}

#[test]
fn missing_sentinels_are_rejected() {
    assert!(normalize(&raw("Atlantis", "—", "2024")).unwrap().is_none());
    assert!(normalize(&raw("Atlantis", "1,000", "—")).unwrap().is_none());
}

#[test]
fn footnote_and_separator_handling() {
    let rec = normalize(&raw("Testland", "2,500", "2024[d 1]"))
        .unwrap()
        .expect("valid row");
    assert_eq!(rec.country, "Testland");
    assert_eq!(rec.gdp_usd_billion, 2.50);
    assert_eq!(rec.year, 2024);
}

#[test]
fn gdp_is_scaled_to_billions_and_rounded() {
    let rec = normalize(&raw("Testland", "1,234", "2024")).unwrap().unwrap();
    assert_eq!(rec.gdp_usd_billion, 1.23);

    let rec = normalize(&raw("Bigland", "105,000", "2024")).unwrap().unwrap();
    assert_eq!(rec.gdp_usd_billion, 105.0);
}

#[test]
fn malformed_numerics_are_parse_errors_not_rejections() {
    let err = normalize(&raw("Testland", "not a number", "2024")).unwrap_err();
    assert!(matches!(err, EtlError::Parse(_)));

    let err = normalize(&raw("Testland", "1,000", "someday")).unwrap_err();
    assert!(matches!(err, EtlError::Parse(_)));
}

#[test]
fn normalize_is_pure() {
    let row = raw("Testland", "2,500", "2024[d 1]");
    assert_eq!(normalize(&row).unwrap(), normalize(&row).unwrap());
}

#[test]
fn parallel_stage_preserves_extraction_order_and_drops_rejections() {
    let mut rows = Vec::new();
    for i in 0..200 {
        rows.push(raw(&format!("Country{i}"), &format!("{}", (i + 1) * 1000), "2024"));
        if i % 10 == 0 {
            rows.push(raw("World", "1", "2024")); // rejected, not an error
        }
    }

    let clean = normalize_rows(rows).unwrap();
    assert_eq!(clean.len(), 200);
    for (i, rec) in clean.iter().enumerate() {
        assert_eq!(rec.country, format!("Country{i}"));
        assert_eq!(rec.gdp_usd_billion, (i as f64) + 1.0);
    }
}

#[test]
fn parallel_stage_propagates_the_first_parse_error() {
    let mut rows: Vec<RawRow> = (0..50)
        .map(|i| raw(&format!("C{i}"), "1,000", "2024"))
        .collect();
    rows.push(raw("Broken", "???", "2024"));

    let err = normalize_rows(rows).unwrap_err();
    assert!(matches!(err, EtlError::Parse(_)));
}

#[test]
fn empty_input_is_not_an_error() {
    assert!(normalize_rows(Vec::new()).unwrap().is_empty());
}

#[test]
fn gdp_sort_is_stable_for_ties() {
    use gdp_etl::enrich::EnrichedRecord;
    use gdp_etl::pipeline::sort_by_gdp;

    let mk = |country: &str, gdp: f64| EnrichedRecord {
        country: country.to_string(),
        gdp_usd_billion: gdp,
        region: None,
        year: 2024,
    };

    // "First" precedes "Second" in extraction order; the tie must not flip them.
    let mut records = vec![mk("Small", 1.0), mk("First", 7.5), mk("Second", 7.5), mk("Big", 9.0)];
    sort_by_gdp(&mut records);

    let order: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(order, ["Big", "First", "Second", "Small"]);
}
