use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;

use crate::error::Result;
use crate::models::GdpRecord;

/// Country names that appear under more than one spelling in GDP tables.
const COUNTRY_ALIASES: &[(&str, &str)] = &[("the United States", "United States")];

/// Map a known alias to its display name.
pub fn normalize_country(name: &str) -> String {
    let trimmed = name.trim();
    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == trimmed)
        .map(|(_, canonical)| (*canonical).to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Load a `country,year,gdp` CSV with header. Country names are normalized.
pub fn load_gdp_csv<P: AsRef<Path>>(path: P) -> Result<Vec<GdpRecord>> {
    let file = File::open(path.as_ref())?;
    let out = load_gdp_reader(file)?;
    debug!("loaded {} GDP rows from {}", out.len(), path.as_ref().display());
    Ok(out)
}

/// Same as [`load_gdp_csv`], reading from any source (e.g. an embedded table).
pub fn load_gdp_reader<R: Read>(reader: R) -> Result<Vec<GdpRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut out = Vec::new();
    for row in rdr.deserialize() {
        let mut rec: GdpRecord = row?;
        rec.country = normalize_country(&rec.country);
        out.push(rec);
    }
    Ok(out)
}

/// The `n` largest economies in `year`, smallest first (bottom-to-top bar order).
/// Rows with a non-finite GDP are ignored.
pub fn top_n_for_year(records: &[GdpRecord], year: i32, n: usize) -> Vec<GdpRecord> {
    let mut rows: Vec<GdpRecord> = records
        .iter()
        .filter(|r| r.year == year && r.gdp.is_finite())
        .cloned()
        .collect();
    rows.sort_by(|a, b| a.gdp.total_cmp(&b.gdp));
    let skip = rows.len().saturating_sub(n);
    rows.split_off(skip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn reads_csv_and_normalizes_names() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("gdp.csv");
        let mut f = std::fs::File::create(&p).unwrap();
        writeln!(f, "country,year,gdp").unwrap();
        writeln!(f, "the United States,2020,20940000000000").unwrap();
        writeln!(f, "Japan, 2020 ,5060000000000").unwrap();
        drop(f);

        let rows = load_gdp_csv(&p).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "United States");
        assert_eq!(rows[1].year, 2020);
    }

    #[test]
    fn bad_row_is_an_error() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("bad.csv");
        std::fs::write(&p, "country,year,gdp\nX,not-a-year,1\n").unwrap();
        assert!(load_gdp_csv(&p).is_err());
    }

    #[test]
    fn top_n_is_ascending_and_filtered_by_year() {
        let rows = vec![
            GdpRecord::new("A", 2020, 3.0),
            GdpRecord::new("B", 2020, 1.0),
            GdpRecord::new("C", 2019, 9.0),
            GdpRecord::new("D", 2020, 2.0),
            GdpRecord::new("E", 2020, f64::NAN),
        ];
        let top: Vec<_> = top_n_for_year(&rows, 2020, 2)
            .into_iter()
            .map(|r| r.country)
            .collect();
        assert_eq!(top, vec!["D", "A"]);
        assert_eq!(top_n_for_year(&rows, 2020, 10).len(), 3);
        assert!(top_n_for_year(&rows, 1999, 3).is_empty());
    }

    #[test]
    fn reader_input_matches_file_input() {
        let rows = load_gdp_reader("country,year,gdp\nthe United States,2020,1e12\n".as_bytes()).unwrap();
        assert_eq!(rows, vec![GdpRecord::new("United States", 2020, 1e12)]);
    }

    #[test]
    fn unknown_names_pass_through() {
        assert_eq!(normalize_country("  Germany "), "Germany");
        assert_eq!(normalize_country("the United States"), "United States");
    }
}
