//! RNC/Cédula, NCF and e-CF security code format validation.
//!
//! These checks run before any request is built, so malformed input never
//! reaches the verification service.

use std::fmt;

use super::error::NcfError;

/// Length of a business RNC.
pub const RNC_LEN: usize = 9;
/// Length of a personal Cédula.
pub const CEDULA_LEN: usize = 11;
/// Length of a legacy NCF (e.g. "B0100000001").
pub const NCF_LEN: usize = 11;
/// Length of an electronic NCF (e.g. "E310000000001").
pub const ECF_LEN: usize = 13;
/// Length of an e-CF security code.
pub const SECURITY_CODE_LEN: usize = 6;

/// Validate a Dominican taxpayer id (no network call).
///
/// Accepts exactly 9 (RNC) or 11 (Cédula) ASCII digits, without separators.
pub fn validate_taxpayer_id(id: &str) -> Result<(), NcfError> {
    let numeric = !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit());
    if numeric && (id.len() == RNC_LEN || id.len() == CEDULA_LEN) {
        Ok(())
    } else {
        Err(NcfError::InvalidTaxpayerId { value: id.into() })
    }
}

/// Validate the shape of an NCF or e-NCF (no network call).
///
/// The value must be 11 or 13 characters long and start with `B` (legacy)
/// or `E` (electronic). The series letter and the length are not cross-checked.
pub fn validate_fiscal_number_format(ncf: &str) -> Result<(), NcfError> {
    let len = ncf.chars().count();
    let series_ok = matches!(ncf.as_bytes().first(), Some(b'B' | b'E'));
    if series_ok && (len == NCF_LEN || len == ECF_LEN) {
        Ok(())
    } else {
        Err(NcfError::InvalidFiscalNumberFormat { value: ncf.into() })
    }
}

/// Validate an e-CF security code and return it unchanged.
///
/// The code must be present, non-blank, and exactly 6 characters long.
pub fn validate_security_code(code: Option<&str>) -> Result<&str, NcfError> {
    match code {
        Some(c) if !c.trim().is_empty() && c.chars().count() == SECURITY_CODE_LEN => Ok(c),
        _ => Err(NcfError::InvalidSecurityCode),
    }
}

/// NCF series, given by the first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    /// `B`: pre-printed / sequence-issued NCF.
    Legacy,
    /// `E`: electronic fiscal receipt.
    Electronic,
}

/// A format-checked fiscal number split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiscalNumber<'a> {
    value: &'a str,
    series: Series,
    type_code: &'a str,
    sequence: &'a str,
}

impl<'a> FiscalNumber<'a> {
    /// Validate `ncf` and split it into series, type code and sequence.
    pub fn parse(ncf: &'a str) -> Result<Self, NcfError> {
        validate_fiscal_number_format(ncf)?;
        let series = if ncf.starts_with('E') {
            Series::Electronic
        } else {
            Series::Legacy
        };
        // The series letter is ASCII, so byte 1 is a char boundary.
        let rest = &ncf[1..];
        let split = rest
            .char_indices()
            .nth(2)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (type_code, sequence) = rest.split_at(split);
        Ok(Self {
            value: ncf,
            series,
            type_code,
            sequence,
        })
    }

    /// Legacy or electronic series.
    pub fn series(&self) -> Series {
        self.series
    }

    /// Two-character document type code (e.g. "01", "31").
    pub fn type_code(&self) -> &'a str {
        self.type_code
    }

    /// Sequential part after the type code.
    pub fn sequence(&self) -> &'a str {
        self.sequence
    }

    /// DGII name of the receipt kind, if the type code is a known one.
    pub fn kind_name(&self) -> Option<&'static str> {
        let table = match self.series {
            Series::Legacy => LEGACY_KINDS,
            Series::Electronic => ELECTRONIC_KINDS,
        };
        table
            .iter()
            .find(|(code, _)| *code == self.type_code)
            .map(|(_, name)| *name)
    }
}

impl fmt::Display for FiscalNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}

const LEGACY_KINDS: &[(&str, &str)] = &[
    ("01", "Factura de Crédito Fiscal"),
    ("02", "Factura de Consumo"),
    ("03", "Nota de Débito"),
    ("04", "Nota de Crédito"),
    ("11", "Comprobante de Compras"),
    ("12", "Registro Único de Ingresos"),
    ("13", "Comprobante para Gastos Menores"),
    ("14", "Comprobante para Regímenes Especiales"),
    ("15", "Comprobante Gubernamental"),
    ("16", "Comprobante para Exportaciones"),
    ("17", "Comprobante para Pagos al Exterior"),
];

const ELECTRONIC_KINDS: &[(&str, &str)] = &[
    ("31", "Factura de Crédito Fiscal Electrónica"),
    ("32", "Factura de Consumo Electrónica"),
    ("33", "Nota de Débito Electrónica"),
    ("34", "Nota de Crédito Electrónica"),
    ("41", "Compras Electrónico"),
    ("43", "Gastos Menores Electrónico"),
    ("44", "Regímenes Especiales Electrónica"),
    ("45", "Gubernamental Electrónico"),
    ("46", "Comprobante de Exportaciones Electrónico"),
    ("47", "Comprobante para Pagos al Exterior Electrónico"),
];
