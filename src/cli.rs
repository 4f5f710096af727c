// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::consts::{
    DEFAULT_DB_PATH, DEFAULT_LOG_PATH, DEFAULT_MIN_GDP, DEFAULT_TABLE, DEFAULT_TOP_N, GDP_URL,
    REGION_URL,
};
use crate::log::FileLog;
use crate::pipeline::Pipeline;
use crate::store::GdpStore;

pub struct Params {
    pub db: PathBuf,
    pub table: String,
    pub url: String,
    pub regions: String,
    pub log: PathBuf,
    pub json_out: Option<PathBuf>,
    pub top_n: u32,
    pub min_gdp: f64,
    pub query_only: bool,
}

impl Params {
    fn new() -> Self {
        Params {
            db: PathBuf::from(DEFAULT_DB_PATH),
            table: s!(DEFAULT_TABLE),
            url: s!(GDP_URL),
            regions: s!(REGION_URL),
            log: PathBuf::from(DEFAULT_LOG_PATH),
            json_out: None,
            top_n: DEFAULT_TOP_N,
            min_gdp: DEFAULT_MIN_GDP,
            query_only: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let store = GdpStore::open(&params.db, &params.table)?;

    if !params.query_only {
        let log = FileLog::new(&params.log);
        let pipeline = Pipeline {
            gdp_url: &params.url,
            region_url: &params.regions,
            store: &store,
            log: &log,
            json_out: params.json_out.as_deref(),
        };
        let summary = pipeline.run()?;
        println!(
            "Loaded {} of {} extracted rows (last id {})",
            summary.records_loaded, summary.rows_extracted, summary.last_id
        );
    }

    // Report
    let names = store.records_at_or_above(params.min_gdp)?;
    println!("Countries with GDP >= {}B USD ({}):", params.min_gdp, names.len());
    for name in names {
        println!("  {name}");
    }

    println!("Top-{} mean GDP by region:", params.top_n);
    for rm in store.top_n_mean_by_region(params.top_n)? {
        println!("  {}: {:.2}", rm.region, rm.mean_gdp);
    }

    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--db" => params.db = PathBuf::from(args.next().ok_or("Missing value for --db")?),
            "--table" => params.table = args.next().ok_or("Missing value for --table")?,
            "--url" => params.url = args.next().ok_or("Missing value for --url")?,
            "--regions" => params.regions = args.next().ok_or("Missing value for --regions")?,
            "--log" => params.log = PathBuf::from(args.next().ok_or("Missing value for --log")?),
            "--json" => {
                params.json_out =
                    Some(PathBuf::from(args.next().ok_or("Missing value for --json")?))
            }
            "--top" => params.top_n = args.next().ok_or("Missing value for --top")?.parse()?,
            "--min" => params.min_gdp = args.next().ok_or("Missing value for --min")?.parse()?,
            "--query-only" | "-q" => params.query_only = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
