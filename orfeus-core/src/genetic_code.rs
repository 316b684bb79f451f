//! Genetic code (translation table) identifiers and their start/stop rules.
//!
//! A [`GeneticCode`] can only be built from one of the supported NCBI
//! translation tables, so once a scan is set up the per-codon classifier can
//! use it without any further checks.
//!
//! ```rust
//! use orfeus_core::genetic_code::GeneticCode;
//!
//! let code = GeneticCode::try_from(4u8)?;
//! assert_eq!(code.table(), 4);
//! assert!(GeneticCode::try_from(7u8).is_err());
//! # Ok::<(), orfeus_core::types::OrfeusError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_TRANSLATION_TABLE, SUPPORTED_TRANSLATION_TABLES};
use crate::types::OrfeusError;

/// A validated NCBI translation table number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneticCode(u8);

impl GeneticCode {
    /// Standard bacterial, archaeal and plant plastid code
    pub const BACTERIAL: Self = Self(DEFAULT_TRANSLATION_TABLE);

    /// Whether `table` names a supported translation table
    #[must_use]
    pub const fn is_supported(table: i64) -> bool {
        matches!(table, 1..=6 | 9..=16 | 21..=25)
    }

    /// Every supported genetic code, in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        SUPPORTED_TRANSLATION_TABLES.into_iter().map(Self)
    }

    /// The NCBI table number
    #[must_use]
    pub const fn table(self) -> u8 {
        self.0
    }

    /// Tables where ATG is the only start codon
    #[inline]
    #[must_use]
    pub const fn uses_only_atg(self) -> bool {
        matches!(self.0, 2 | 6 | 10 | 14 | 15 | 16)
    }

    /// Whether GTG is accepted as a start codon
    #[inline]
    #[must_use]
    pub const fn gtg_is_start(self) -> bool {
        !matches!(self.0, 1 | 2 | 3 | 12)
    }

    /// Whether TTG is accepted as a start codon
    #[inline]
    #[must_use]
    pub const fn ttg_is_start(self) -> bool {
        !(self.0 < 4 || self.0 == 9 || (self.0 >= 21 && self.0 < 25))
    }

    /// Whether TAG is read as a stop codon
    #[inline]
    #[must_use]
    pub const fn tag_is_stop(self) -> bool {
        !matches!(self.0, 6 | 15 | 16 | 22)
    }

    /// Whether TGA is read as a stop codon
    #[inline]
    #[must_use]
    pub const fn tga_is_stop(self) -> bool {
        !matches!(self.0, 2..=5 | 9 | 10 | 13 | 14 | 21 | 25)
    }

    /// Whether TAA is read as a stop codon
    #[inline]
    #[must_use]
    pub const fn taa_is_stop(self) -> bool {
        !matches!(self.0, 6 | 14)
    }
}

impl Default for GeneticCode {
    fn default() -> Self {
        Self::BACTERIAL
    }
}

impl fmt::Display for GeneticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for GeneticCode {
    type Error = OrfeusError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if Self::is_supported(value) {
            Ok(Self(value as u8))
        } else {
            Err(OrfeusError::UnsupportedGeneticCode(value))
        }
    }
}

impl TryFrom<i32> for GeneticCode {
    type Error = OrfeusError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<u8> for GeneticCode {
    type Error = OrfeusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl From<GeneticCode> for u8 {
    fn from(value: GeneticCode) -> Self {
        value.0
    }
}

impl FromStr for GeneticCode {
    type Err = OrfeusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let table = s
            .trim()
            .parse::<i64>()
            .map_err(|e| OrfeusError::ParseError(format!("genetic code {s:?}: {e}")))?;
        Self::try_from(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_tables() {
        let tables: Vec<u8> = GeneticCode::all().map(GeneticCode::table).collect();
        assert_eq!(tables, SUPPORTED_TRANSLATION_TABLES);
        for table in 0..=30i64 {
            let expected = SUPPORTED_TRANSLATION_TABLES
                .iter()
                .any(|&t| i64::from(t) == table);
            assert_eq!(GeneticCode::try_from(table).is_ok(), expected, "{table}");
        }
    }

    #[test]
    fn test_rejected_tables() {
        for table in [0i64, 7, 8, 17, 18, 19, 20, 26, -1, 255] {
            assert_eq!(
                GeneticCode::try_from(table),
                Err(OrfeusError::UnsupportedGeneticCode(table))
            );
        }
    }

    #[test]
    fn test_default_is_bacterial() {
        assert_eq!(GeneticCode::default().table(), 11);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4".parse::<GeneticCode>().unwrap().table(), 4);
        assert_eq!(" 25 ".parse::<GeneticCode>().unwrap().table(), 25);
        assert!("seven".parse::<GeneticCode>().is_err());
        assert!("7".parse::<GeneticCode>().is_err());
    }

    #[test]
    fn test_atg_only_tables() {
        let atg_only: Vec<u8> = GeneticCode::all()
            .filter(|code| code.uses_only_atg())
            .map(GeneticCode::table)
            .collect();
        assert_eq!(atg_only, vec![2, 6, 10, 14, 15, 16]);
    }

    #[test]
    fn test_alternative_start_rules() {
        let gtg: Vec<u8> = GeneticCode::all()
            .filter(|code| !code.gtg_is_start())
            .map(GeneticCode::table)
            .collect();
        assert_eq!(gtg, vec![1, 2, 3, 12]);

        let ttg: Vec<u8> = GeneticCode::all()
            .filter(|code| !code.ttg_is_start())
            .map(GeneticCode::table)
            .collect();
        assert_eq!(ttg, vec![1, 2, 3, 9, 21, 22, 23, 24]);
    }

    #[test]
    fn test_stop_rules() {
        let no_tag: Vec<u8> = GeneticCode::all()
            .filter(|code| !code.tag_is_stop())
            .map(GeneticCode::table)
            .collect();
        assert_eq!(no_tag, vec![6, 15, 16, 22]);

        let no_tga: Vec<u8> = GeneticCode::all()
            .filter(|code| !code.tga_is_stop())
            .map(GeneticCode::table)
            .collect();
        assert_eq!(no_tga, vec![2, 3, 4, 5, 9, 10, 13, 14, 21, 25]);

        let no_taa: Vec<u8> = GeneticCode::all()
            .filter(|code| !code.taa_is_stop())
            .map(GeneticCode::table)
            .collect();
        assert_eq!(no_taa, vec![6, 14]);
    }
}
