// src/extract.rs
// Pull raw rows out of the countries-by-GDP page.
// Thin glue: finds the first wikitable and flattens the first three
// cells of each data row (country, IMF forecast, IMF year). All
// cleaning happens later in `normalize`.

use crate::core::html::{inner_after_open_tag, next_tag_block_ci, slice_between_ci, strip_tags};
use crate::core::net;
use crate::core::sanitize::normalize_entities;
use crate::error::{EtlError, Result};

/// One scraped row, untouched text. Consumed once by the normalizer.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub country: String,
    pub gdp: String,
    pub year: String,
}

/// Fetch the page and extract its rows.
pub fn fetch_rows(url: &str) -> Result<Vec<RawRow>> {
    let doc = net::get_text(url)?;
    extract_rows(&doc)
}

/// Extract rows from an already-fetched document.
pub fn extract_rows(doc: &str) -> Result<Vec<RawRow>> {
    let table = slice_between_ci(doc, "<table class=\"wikitable", "</table>")
        .ok_or_else(|| EtlError::Parse(s!("wikitable not found in document")))?;

    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        // <td> cells only; header rows carry <th> and fall through empty
        let mut cells = Vec::new();
        let mut td_pos = 0usize;
        while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", td_pos) {
            let block = &tr[td_s..td_e];
            let inner = inner_after_open_tag(block);
            cells.push(strip_tags(normalize_entities(&inner)));
            td_pos = td_e;
        }
        if cells.len() < 3 {
            continue;
        }

        let mut it = cells.into_iter();
        rows.push(RawRow {
            country: it.next().unwrap_or_default(),
            gdp: it.next().unwrap_or_default(),
            year: it.next().unwrap_or_default(),
        });
    }

    Ok(rows)
}
