use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One income band taxed at a single marginal rate.
///
/// `min_income` is inclusive, `max_income` exclusive; `None` marks the open
/// top band. `rate` is a percentage (`5` means 5 %).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxSlab {
    /// Width of the band, or `None` for the open top band.
    pub fn width(&self) -> Option<Decimal> {
        self.max_income.map(|max| max - self.min_income)
    }
}

/// Reasons a slab table is rejected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlabTableError {
    #[error("slab table has no bands")]
    Empty,

    #[error("first band must start at 0, found {0}")]
    NonZeroStart(Decimal),

    #[error("band {index} starts at {found}, expected {expected}")]
    Discontinuous {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    #[error("band {index} has an upper bound not above its lower bound")]
    EmptyBand { index: usize },

    #[error("band {index} is unbounded but is not the last band")]
    UnboundedBeforeEnd { index: usize },

    #[error("last band must be unbounded")]
    BoundedFinalBand,

    #[error("band {index} has rate {rate}%, expected 0..=100")]
    RateOutOfRange { index: usize, rate: Decimal },

    #[error("expected one more rate than breakpoints, got {breakpoints} breakpoints and {rates} rates")]
    RateCountMismatch { breakpoints: usize, rates: usize },
}

/// An ordered, contiguous set of bands covering every non-negative income.
///
/// The only way to obtain one is through validation, so engine code can walk
/// the bands without re-checking them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxSlab>", into = "Vec<TaxSlab>")]
pub struct TaxSlabTable {
    slabs: Vec<TaxSlab>,
}

impl TaxSlabTable {
    /// Validates and wraps `slabs`.
    ///
    /// # Errors
    ///
    /// Returns [`SlabTableError`] if the bands are empty, do not start at
    /// zero, leave a gap or overlap, contain an empty band, are not closed
    /// by exactly one unbounded band, or carry a rate outside `0..=100`.
    pub fn new(slabs: Vec<TaxSlab>) -> Result<Self, SlabTableError> {
        validate(&slabs)?;
        Ok(Self { slabs })
    }

    /// Builds a table from upper breakpoints and one rate per band.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use regime_core::TaxSlabTable;
    ///
    /// let table = TaxSlabTable::from_breakpoints(
    ///     &[dec!(300000), dec!(600000)],
    ///     &[dec!(0), dec!(5), dec!(10)],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.slabs()[2].max_income, None);
    /// ```
    pub fn from_breakpoints(
        breakpoints: &[Decimal],
        rates: &[Decimal],
    ) -> Result<Self, SlabTableError> {
        if rates.len() != breakpoints.len() + 1 {
            return Err(SlabTableError::RateCountMismatch {
                breakpoints: breakpoints.len(),
                rates: rates.len(),
            });
        }
        Self::new(slabs_from_breakpoints(breakpoints, rates))
    }

    /// Wraps bands known to be valid (compiled-in rule constants).
    pub(crate) fn from_trusted(slabs: Vec<TaxSlab>) -> Self {
        debug_assert_eq!(validate(&slabs), Ok(()));
        Self { slabs }
    }

    pub fn slabs(&self) -> &[TaxSlab] {
        &self.slabs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaxSlab> {
        self.slabs.iter()
    }

    pub fn len(&self) -> usize {
        self.slabs.len()
    }

    /// Always false for a constructed table; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.slabs.is_empty()
    }

    /// Lower bounds of every band after the first.
    pub fn breakpoints(&self) -> Vec<Decimal> {
        self.slabs.iter().skip(1).map(|s| s.min_income).collect()
    }
}

impl TryFrom<Vec<TaxSlab>> for TaxSlabTable {
    type Error = SlabTableError;

    fn try_from(slabs: Vec<TaxSlab>) -> Result<Self, Self::Error> {
        Self::new(slabs)
    }
}

impl From<TaxSlabTable> for Vec<TaxSlab> {
    fn from(table: TaxSlabTable) -> Self {
        table.slabs
    }
}

impl<'a> IntoIterator for &'a TaxSlabTable {
    type Item = &'a TaxSlab;
    type IntoIter = std::slice::Iter<'a, TaxSlab>;

    fn into_iter(self) -> Self::IntoIter {
        self.slabs.iter()
    }
}

pub(crate) fn slabs_from_breakpoints(
    breakpoints: &[Decimal],
    rates: &[Decimal],
) -> Vec<TaxSlab> {
    let mut min_income = Decimal::ZERO;
    rates
        .iter()
        .enumerate()
        .map(|(index, rate)| {
            let max_income = breakpoints.get(index).copied();
            let slab = TaxSlab {
                min_income,
                max_income,
                rate: *rate,
            };
            if let Some(max) = max_income {
                min_income = max;
            }
            slab
        })
        .collect()
}

fn validate(slabs: &[TaxSlab]) -> Result<(), SlabTableError> {
    let first = slabs.first().ok_or(SlabTableError::Empty)?;
    if !first.min_income.is_zero() {
        return Err(SlabTableError::NonZeroStart(first.min_income));
    }

    for (index, slab) in slabs.iter().enumerate() {
        if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE_HUNDRED {
            return Err(SlabTableError::RateOutOfRange {
                index,
                rate: slab.rate,
            });
        }

        match (slab.max_income, slabs.get(index + 1)) {
            (Some(max), _) if max <= slab.min_income => {
                return Err(SlabTableError::EmptyBand { index });
            }
            (Some(max), Some(next)) if next.min_income != max => {
                return Err(SlabTableError::Discontinuous {
                    index: index + 1,
                    expected: max,
                    found: next.min_income,
                });
            }
            (Some(_), None) => return Err(SlabTableError::BoundedFinalBand),
            (None, Some(_)) => return Err(SlabTableError::UnboundedBeforeEnd { index }),
            _ => {}
        }
    }

    Ok(())
}
