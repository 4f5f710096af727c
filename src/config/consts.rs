// src/config/consts.rs

// Net config
pub const GDP_URL: &str = "https://en.wikipedia.org/wiki/List_of_countries_by_GDP_(nominal)";
pub const REGION_URL: &str = "https://restcountries.com/v3.1/all?fields=name,region";
pub const USER_AGENT: &str = "gdp_etl/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Store
pub const DEFAULT_DB_PATH: &str = "World_Economies.db";
pub const DEFAULT_TABLE: &str = "Countries_by_GDP";

// Logging
pub const DEFAULT_LOG_PATH: &str = "etl_project_log.txt";

// Row sentinels
pub const AGGREGATE_LABEL: &str = "World"; // whole-world total row, not a country
pub const MISSING: &str = "—";

// A record whose country has no match in the reference mapping is still
// persisted; the schema requires a region, so it gets this placeholder.
pub const UNRESOLVED_REGION: &str = "";

// Reference-source name → name used by the GDP dataset.
// Configuration data, not logic: extend here, the join never changes.
pub const REGION_ALIASES: &[(&str, &str)] = &[
    ("Czechia", "Czech Republic"),
    ("Republic of the Congo", "Congo"),
    ("Timor-Leste", "East Timor"),
];

// Reporting defaults
pub const DEFAULT_TOP_N: u32 = 5;
pub const DEFAULT_MIN_GDP: f64 = 100.0;
