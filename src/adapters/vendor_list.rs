use crate::core::{VendorEntry, VendorSource};
use crate::utils::error::Result;
use std::io::Read;
use std::path::PathBuf;

/// 廠商清單 CSV：第一列為標題，第一欄廠商名稱，第二欄網址
#[derive(Debug, Clone)]
pub struct CsvVendorList {
    path: PathBuf,
}

impl CsvVendorList {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl VendorSource for CsvVendorList {
    fn vendors(&self) -> Result<Vec<VendorEntry>> {
        tracing::debug!("Reading vendor list from {}", self.path.display());
        let file = std::fs::File::open(&self.path)?;
        parse_vendor_csv(file)
    }
}

pub fn parse_vendor_csv<R: Read>(input: R) -> Result<Vec<VendorEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut entries = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let vendor = record.get(0).unwrap_or_default();
        let url = record.get(1).unwrap_or_default();

        // 沒有連結的列直接略過
        if !url.starts_with("http") {
            continue;
        }
        if vendor.is_empty() {
            tracing::warn!("⚠️ Skipping row {}: empty vendor label for {}", row + 2, url);
            continue;
        }

        entries.push(VendorEntry::new(vendor, url));
    }

    Ok(entries)
}
