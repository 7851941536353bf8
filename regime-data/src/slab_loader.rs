use std::collections::BTreeMap;
use std::io::Read;

use regime_core::{
    FinancialYear, FinancialYearParseError, RegimeKind, RuleBook, SlabTableError, TaxSlab,
    TaxSlabTable,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading slab tables.
#[derive(Debug, Error)]
pub enum SlabLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid regime '{0}', expected 'old' or 'new'")]
    InvalidRegime(String),

    #[error(transparent)]
    InvalidFinancialYear(#[from] FinancialYearParseError),

    #[error("invalid slab table for the {regime} in {year}: {source}")]
    Slabs {
        year: FinancialYear,
        regime: RegimeKind,
        #[source]
        source: SlabTableError,
    },

    #[error("no financial year before {0} is registered to take deductions and caps from")]
    NoBaseYear(FinancialYear),
}

impl From<csv::Error> for SlabLoaderError {
    fn from(err: csv::Error) -> Self {
        SlabLoaderError::CsvParse(err.to_string())
    }
}

/// A single row of a slab CSV file.
///
/// - `financial_year`: e.g. `2026-27`
/// - `regime`: `old` or `new`
/// - `min_income`: lower bound of the band
/// - `max_income`: upper bound of the band (empty for the open top band)
/// - `rate`: marginal rate in percent, e.g. `5` for 5%
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlabRecord {
    pub financial_year: String,
    pub regime: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

pub(crate) fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Validated slab tables keyed by year and regime.
pub type SlabTables = BTreeMap<(FinancialYear, RegimeKind), TaxSlabTable>;

/// Loader for per-year slab tables from CSV files.
///
/// Each (financial year, regime) pair in the file becomes one
/// [`TaxSlabTable`]; [`SlabTableLoader::apply`] then writes those tables into
/// a [`RuleBook`].
pub struct SlabTableLoader;

impl SlabTableLoader {
    /// Parse slab records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<SlabRecord>, SlabLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: SlabRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group records by (financial year, regime) and validate each group.
    ///
    /// Rows within a group may appear in any order; they are sorted by
    /// `min_income` before validation.
    pub fn build(records: &[SlabRecord]) -> Result<SlabTables, SlabLoaderError> {
        let mut groups: BTreeMap<(FinancialYear, RegimeKind), Vec<TaxSlab>> = BTreeMap::new();

        for record in records {
            let year: FinancialYear = record.financial_year.parse()?;
            let regime = RegimeKind::parse(&record.regime)
                .ok_or_else(|| SlabLoaderError::InvalidRegime(record.regime.clone()))?;

            groups.entry((year, regime)).or_default().push(TaxSlab {
                min_income: record.min_income,
                max_income: record.max_income,
                rate: record.rate,
            });
        }

        groups
            .into_iter()
            .map(|((year, regime), mut slabs)| {
                slabs.sort_by(|a, b| a.min_income.cmp(&b.min_income));
                let table = TaxSlabTable::new(slabs).map_err(|source| SlabLoaderError::Slabs {
                    year,
                    regime,
                    source,
                })?;
                debug!(financial_year = %year, regime = regime.as_str(), bands = table.len(), "slab table built");
                Ok(((year, regime), table))
            })
            .collect()
    }

    /// Write the tables in `records` into `book`.
    ///
    /// For each year in the file:
    /// 1. Start from the rules already registered for that year, or
    /// 2. carry forward the latest earlier year's rules when the year is new.
    /// 3. Replace the slab table of every regime the file lists.
    ///
    /// A regime the file omits keeps the slabs of the year it was taken from.
    /// Returns the number of slab tables applied.
    ///
    /// # Errors
    /// * [`SlabLoaderError::NoBaseYear`] when a new year has no earlier year
    ///   in the book to inherit from.
    /// * Any error from [`SlabTableLoader::build`].
    pub fn apply(
        book: &mut RuleBook,
        records: &[SlabRecord],
    ) -> Result<usize, SlabLoaderError> {
        let tables = Self::build(records)?;

        let mut by_year: BTreeMap<FinancialYear, Vec<(RegimeKind, TaxSlabTable)>> =
            BTreeMap::new();
        for ((year, regime), table) in tables {
            by_year.entry(year).or_default().push((regime, table));
        }

        let mut applied = 0;
        for (year, tables) in by_year {
            let mut rules = match book.get(year) {
                Ok(existing) => existing.clone(),
                Err(_) => book
                    .latest_before(year)
                    .map(|base| base.carried_forward(year))
                    .ok_or(SlabLoaderError::NoBaseYear(year))?,
            };

            for (regime, table) in tables {
                rules.set_slabs(regime, table);
                applied += 1;
            }

            info!(financial_year = %year, "slab tables applied");
            book.register(rules);
        }

        Ok(applied)
    }
}
