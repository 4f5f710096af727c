// tests/enrich.rs
//
// Alias correction, the left join, and reference-payload decoding.
//
use gdp_etl::enrich::{join, RegionMap};
use gdp_etl::error::EtlError;
use gdp_etl::normalize::CleanRecord;

fn clean(country: &str, gdp: f64, year: i32) -> CleanRecord {
    CleanRecord { country: country.to_string(), gdp_usd_billion: gdp, year }
}

#[test]
fn alias_correction_is_applied_before_the_join() {
    let map = RegionMap::from_entries([("Czechia".to_string(), "Europe".to_string())]);

    // The dataset says "Czech Republic"; the reference said "Czechia".
    assert_eq!(map.region_of("Czech Republic"), Some("Europe"));
    assert_eq!(map.region_of("Czechia"), None);
}

#[test]
fn unaliased_names_pass_through_unchanged() {
    let map = RegionMap::from_entries([("France".to_string(), "Europe".to_string())]);
    assert_eq!(map.region_of("France"), Some("Europe"));
}

#[test]
fn join_is_left_every_record_survives() {
    let map = RegionMap::from_entries([("Czechia".to_string(), "Europe".to_string())]);
    let records = vec![clean("Czech Republic", 0.33, 2024), clean("Atlantis", 1.0, 2024)];

    let enriched = join(records, &map);
    assert_eq!(enriched.len(), 2);
    assert_eq!(enriched[0].region.as_deref(), Some("Europe"));
    assert_eq!(enriched[1].region, None);
    assert_eq!(enriched[1].country, "Atlantis");
}

#[test]
fn join_is_case_sensitive_exact_match() {
    let map = RegionMap::from_entries([("France".to_string(), "Europe".to_string())]);
    let enriched = join(vec![clean("france", 3.1, 2024)], &map);
    assert_eq!(enriched[0].region, None);
}

#[test]
fn reference_payload_decodes_and_ignores_extra_fields() {
    let body = r#"[
        {"name": {"common": "Czechia", "official": "Czech Republic"}, "region": "Europe"},
        {"name": {"common": "Japan"}, "region": "Asia"}
    ]"#;

    let map = RegionMap::from_json(body).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.region_of("Czech Republic"), Some("Europe"));
    assert_eq!(map.region_of("Japan"), Some("Asia"));
}

#[test]
fn malformed_payload_is_an_enrichment_error() {
    let err = RegionMap::from_json("{not json").unwrap_err();
    assert!(matches!(err, EtlError::Enrichment(_)));
}
