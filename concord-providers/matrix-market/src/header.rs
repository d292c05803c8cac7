//! `%%MatrixMarket` banner parsing.

use crate::errors::MatrixMarketError;

/// Value type declared in the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// Entries carry no value.
    Pattern,
    /// Entries carry one integer value.
    Integer,
    /// Entries carry one real value.
    Real,
}

/// Storage symmetry declared in the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    /// Every entry is stored.
    General,
    /// Only one triangle is stored; entries mirror across the diagonal.
    Symmetric,
    /// Only one triangle is stored; mirrored entries are negated.
    SkewSymmetric,
}

impl Symmetry {
    /// Returns whether stored entries imply their transpose.
    #[must_use]
    pub fn mirrors(self) -> bool {
        !matches!(self, Self::General)
    }
}

/// Parsed banner of a coordinate Matrix Market file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Declared value type.
    pub data_type: DataType,
    /// Declared storage symmetry.
    pub symmetry: Symmetry,
}

impl Header {
    /// Parses a banner such as `%%MatrixMarket matrix coordinate pattern general`.
    ///
    /// Keywords are matched case-insensitively.
    ///
    /// # Errors
    /// Returns [`MatrixMarketError::InvalidHeader`] for malformed banners and
    /// [`MatrixMarketError::Unsupported`] for dense, complex or hermitian
    /// matrices.
    ///
    /// # Examples
    /// ```
    /// use concord_providers_matrix_market::{DataType, Header, Symmetry};
    ///
    /// let header = Header::parse("%%MatrixMarket matrix coordinate real symmetric")?;
    /// assert_eq!(header.data_type, DataType::Real);
    /// assert_eq!(header.symmetry, Symmetry::Symmetric);
    /// # Ok::<(), concord_providers_matrix_market::MatrixMarketError>(())
    /// ```
    pub fn parse(line: &str) -> Result<Self, MatrixMarketError> {
        let invalid = || MatrixMarketError::InvalidHeader {
            line: line.trim_end().to_owned(),
        };
        let words: Vec<String> = line
            .split_whitespace()
            .map(str::to_ascii_lowercase)
            .collect();
        let [banner, object, format, data_type, symmetry] = words.as_slice() else {
            return Err(invalid());
        };
        if banner != "%%matrixmarket" || object != "matrix" {
            return Err(invalid());
        }

        match format.as_str() {
            "coordinate" => {}
            "array" => return Err(unsupported("format", format)),
            _ => return Err(invalid()),
        }

        let data_type = match data_type.as_str() {
            "pattern" => DataType::Pattern,
            "integer" => DataType::Integer,
            "real" | "double" => DataType::Real,
            "complex" => return Err(unsupported("data type", data_type)),
            _ => return Err(invalid()),
        };

        let symmetry = match symmetry.as_str() {
            "general" => Symmetry::General,
            "symmetric" => Symmetry::Symmetric,
            "skew-symmetric" => Symmetry::SkewSymmetric,
            "hermitian" => return Err(unsupported("symmetry", symmetry)),
            _ => return Err(invalid()),
        };

        Ok(Self {
            data_type,
            symmetry,
        })
    }
}

fn unsupported(field: &'static str, value: &str) -> MatrixMarketError {
    MatrixMarketError::Unsupported {
        field,
        value: value.to_owned(),
    }
}
