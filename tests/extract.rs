// tests/extract.rs
//
// Table extraction from an inline document sample.
//
use gdp_etl::error::EtlError;
use gdp_etl::extract::extract_rows;

const SAMPLE: &str = r#"
<html><body>
<p>Intro text</p>
<table class="wikitable sortable sticky-header-multi static-row-numbers">
<tbody>
<tr><th>Country/Territory</th><th>Forecast</th><th>Year</th></tr>
<tr>
  <td><span class="flagicon"><img src="x.png"></span> <a href="/wiki/A">United States</a></td>
  <td>30,507,217</td>
  <td>2025</td>
</tr>
<tr>
  <td><a href="/wiki/World">World</a></td>
  <td>113,795,678</td>
  <td>2025</td>
</tr>
<tr>
  <td><a href="/wiki/M">Monaco</a></td>
  <td>—</td>
  <td>—</td>
</tr>
<tr>
  <td><a href="/wiki/T">Testland</a></td>
  <td>2,500</td>
  <td>2024<sup>[d 1]</sup></td>
</tr>
</tbody>
</table>
<table class="wikitable"><tr><td>second</td><td>table</td><td>ignored</td></tr></table>
</body></html>
"#;

#[test]
fn extracts_first_three_cells_of_each_data_row() {
    let rows = extract_rows(SAMPLE).unwrap();
    assert_eq!(rows.len(), 4); // header row skipped, second table ignored

    assert_eq!(rows[0].country, "United States");
    assert_eq!(rows[0].gdp, "30,507,217");
    assert_eq!(rows[0].year, "2025");

    assert_eq!(rows[1].country, "World"); // rejection happens later
    assert_eq!(rows[3].country, "Testland");
    assert_eq!(rows[3].year, "2024[d 1]"); // tags stripped, footnote text kept
}

#[test]
fn missing_table_is_a_parse_error() {
    let err = extract_rows("<html><body>no tables here</body></html>").unwrap_err();
    assert!(matches!(err, EtlError::Parse(_)));
}
