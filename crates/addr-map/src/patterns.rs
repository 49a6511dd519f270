//! Alias tables and pattern families for address-bearing columns.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// The standard fields a source column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Line1,
    Line2,
    City,
    State,
    Zip,
}

impl AddressField {
    /// Human-readable field name, as shown in logs and summaries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Line1 => "Address line 1",
            Self::Line2 => "Address line 2",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "ZIP Code",
        }
    }

    /// True for the fields that carry free-text address lines, the
    /// normalization targets.
    #[must_use]
    pub fn is_address_line(self) -> bool {
        matches!(self, Self::Line1 | Self::Line2)
    }
}

/// Known exact spellings for address line 1 across export formats.
const LINE1_ALIASES: &[&str] = &[
    "Gf_CnAdrPrf_Addrline1",
    "Addrline",
    "AddrLines",
    "AddrLine1",
    "Address1",
    "CnAdrAdrProc_Addrline1",
    "Address Line 1",
    "CnAdrPrf_Addrline1",
    "PRIMARY_ADDRESS",
];

/// Known exact spellings for address line 2.
const LINE2_ALIASES: &[&str] = &[
    "Gf_CnAdrPrf_Addrline2",
    "Addrline2",
    "AddrLine2",
    "Address2",
    "CnAdrAdrProc_Addrline2",
    "Address Line 2",
    "CnAdrPrf_Addrline2",
];

/// Templated column-name families ("all addresses" and "related individual"
/// blocks are stamped out with a numeric slot in the middle).
static FIELD_PATTERNS: LazyLock<Vec<(AddressField, Regex)>> = LazyLock::new(|| {
    let specs = [
        (AddressField::Line1, r"^CnAdrAll_1_\d+_Addrline1$"),
        (AddressField::Line1, r"^CnRelInd_1_\d+_Adr_Addrline1$"),
        (AddressField::Line2, r"^CnAdrAll_1_\d+_Addrline2$"),
        (AddressField::Line2, r"^CnRelInd_1_\d+_Adr_Addrline2$"),
        (AddressField::City, r"^CnAdrAll_1_\d+_City$"),
        (AddressField::City, r"^CnRelInd_1_\d+_Adr_City$"),
        (AddressField::State, r"^CnAdrAll_1_\d+_State$"),
        (AddressField::State, r"^CnRelInd_1_\d+_Adr_State$"),
        (AddressField::Zip, r"^CnAdrAll_1_\d+_ZIP$"),
        (AddressField::Zip, r"^CnRelInd_1_\d+_Adr_ZIP$"),
    ];
    specs
        .into_iter()
        .map(|(field, pattern)| (field, Regex::new(pattern).expect("hard-coded regex")))
        .collect()
});

/// A source column recognized as one of the standard fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMatch {
    pub column: String,
    pub field: AddressField,
}

fn classify_header(header: &str) -> Option<AddressField> {
    if LINE1_ALIASES.contains(&header) {
        return Some(AddressField::Line1);
    }
    if LINE2_ALIASES.contains(&header) {
        return Some(AddressField::Line2);
    }
    FIELD_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(header))
        .map(|(field, _)| *field)
}

/// Classifies every recognized header, in header order. Exact aliases take
/// precedence over pattern families; unrecognized headers are skipped.
#[must_use]
pub fn classify_columns(headers: &[String]) -> Vec<ColumnMatch> {
    let matches: Vec<ColumnMatch> = headers
        .iter()
        .filter_map(|header| {
            classify_header(header).map(|field| ColumnMatch {
                column: header.clone(),
                field,
            })
        })
        .collect();
    debug!(
        headers = headers.len(),
        recognized = matches.len(),
        "classified columns"
    );
    matches
}

/// The headers that carry address lines, in header order.
#[must_use]
pub fn address_line_columns(headers: &[String]) -> Vec<String> {
    classify_columns(headers)
        .into_iter()
        .filter(|m| m.field.is_address_line())
        .map(|m| m.column)
        .collect()
}
