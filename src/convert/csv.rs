//! CSV converter
//!
//! Reads a spreadsheet export whose header names the item number, description
//! and barcode columns, and produces `barcode -> {id, description}`.

use super::{Conversion, ConvertError, ConvertResult, JsonEscaping, ensure_input_exists};
use crate::models::{ProductInfo, ProductTable};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Header of the item number column
pub const ID_COLUMN: &str = "Varenr.";
/// Header of the description column
pub const DESCRIPTION_COLUMN: &str = "Beskrivelse";
/// Header of the barcode column
pub const BARCODE_COLUMN: &str = "GTIN";

/// Placeholder the spreadsheet uses for "no barcode"
const NO_BARCODE: &str = "0";

/// Header names of the three columns the converter reads
///
/// Names are matched exactly (case-sensitive, no trimming).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvColumns {
    pub id: String,
    pub description: String,
    pub barcode: String,
}

impl Default for CsvColumns {
    fn default() -> Self {
        Self {
            id: ID_COLUMN.to_string(),
            description: DESCRIPTION_COLUMN.to_string(),
            barcode: BARCODE_COLUMN.to_string(),
        }
    }
}

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndices {
    id: usize,
    description: usize,
    barcode: usize,
}

impl ColumnIndices {
    /// Shortest row that contains every required column
    fn min_row_len(&self) -> usize {
        self.id.max(self.description).max(self.barcode) + 1
    }
}

impl CsvColumns {
    /// Find each column in `header`; the first matching header cell wins
    fn locate(&self, header: &StringRecord) -> ConvertResult<ColumnIndices> {
        let find = |name: &str| header.iter().position(|cell| cell == name);

        match (
            find(self.id.as_str()),
            find(self.description.as_str()),
            find(self.barcode.as_str()),
        ) {
            (Some(id), Some(description), Some(barcode)) => Ok(ColumnIndices {
                id,
                description,
                barcode,
            }),
            (id, description, barcode) => {
                let missing = [
                    (id, &self.id),
                    (description, &self.description),
                    (barcode, &self.barcode),
                ]
                .into_iter()
                .filter(|(index, _)| index.is_none())
                .map(|(_, name)| format!("'{}'", name))
                .collect();
                Err(ConvertError::MissingColumns(missing))
            }
        }
    }
}

/// True when `barcode` can be used as a table key
fn is_usable_barcode(barcode: &str) -> bool {
    !barcode.is_empty() && barcode != NO_BARCODE
}

/// CSV converter producing `ProductTable`s
#[derive(Debug, Clone, Default)]
pub struct CsvConverter {
    columns: CsvColumns,
}

impl CsvConverter {
    /// Create a converter for the default `Varenr.`/`Beskrivelse`/`GTIN` columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter reading differently named columns
    pub fn with_columns(columns: CsvColumns) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &CsvColumns {
        &self.columns
    }

    /// Parse CSV content into a product table
    ///
    /// The first record is the header. Rows too short to hold every required
    /// column, rows without an item number and rows whose barcode is empty or
    /// `"0"` are skipped. A later row with the same barcode replaces an
    /// earlier one. Empty input yields an empty table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use barcode_json::convert::CsvConverter;
    ///
    /// let csv = "Varenr.,Beskrivelse,GTIN\n100-01, Hammer ,7090001\n100-02,Sag,0\n";
    /// let table = CsvConverter::new().parse(csv.as_bytes()).unwrap();
    /// assert_eq!(table.len(), 1);
    /// assert_eq!(table.get("7090001").unwrap().description, "Hammer");
    /// ```
    pub fn parse<R: Read>(&self, reader: R) -> ConvertResult<ProductTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = reader.records();

        let header = match records.next() {
            Some(header) => header?,
            None => {
                debug!("CSV input is empty, producing an empty table");
                return Ok(ProductTable::new());
            }
        };
        let indices = self.columns.locate(&header)?;
        let min_len = indices.min_row_len();

        let mut table = ProductTable::new();
        for (line, record) in records.enumerate() {
            let record = record?;
            if record.len() < min_len {
                debug!(
                    "Skipping row {}: {} fields, need {}",
                    line + 2,
                    record.len(),
                    min_len
                );
                continue;
            }

            let id = record[indices.id].trim();
            let description = record[indices.description].trim();
            let barcode = record[indices.barcode].trim();

            if id.is_empty() || !is_usable_barcode(barcode) {
                debug!("Skipping row {}: missing item number or barcode", line + 2);
                continue;
            }

            table.insert(barcode, ProductInfo::new(id, description));
        }

        Ok(table)
    }

    /// Convert the CSV file at `input` and write the table to `output`
    ///
    /// Nothing is written when the input is missing or lacks a required
    /// column. An existing `output` file is replaced.
    pub fn convert(&self, input: &Path, output: &Path) -> ConvertResult<Conversion<ProductInfo>> {
        ensure_input_exists(input)?;

        let file = File::open(input).map_err(|e| ConvertError::io(input, e))?;
        let table = self.parse(file)?;
        info!(
            "Parsed {} barcodes from {}",
            table.len(),
            input.display()
        );

        super::write_json_file(output, &table, JsonEscaping::PreserveUnicode)?;

        Ok(Conversion {
            table,
            output: output.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> ConvertResult<ProductTable> {
        CsvConverter::new().parse(content.as_bytes())
    }

    #[test]
    fn test_columns_located_by_name() {
        let table = parse("GTIN,Lager,Beskrivelse,Varenr.\n7090001,3,Hammer,100-01\n").unwrap();
        assert_eq!(
            table.get("7090001"),
            Some(&ProductInfo::new("100-01", "Hammer"))
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        let table = parse("Varenr.,Beskrivelse,GTIN\n  100-01 ,  Hammer  , 7090001 \n").unwrap();
        assert_eq!(
            table.get("7090001"),
            Some(&ProductInfo::new("100-01", "Hammer"))
        );
    }

    #[test]
    fn test_rejected_rows() {
        let csv = "Varenr.,Beskrivelse,GTIN\n\
                   100-01,Zero barcode,0\n\
                   100-02,Empty barcode,\n\
                   ,No item number,7090003\n\
                   100-04,Whitespace barcode,   \n\
                   100-05,Kept,7090005\n";
        let table = parse(csv).unwrap();
        assert_eq!(table.barcodes().collect::<Vec<_>>(), vec!["7090005"]);
    }

    #[test]
    fn test_short_rows_skipped() {
        let table = parse("Varenr.,Beskrivelse,GTIN\n100-01,Hammer\n100-02,Sag,7090002\n").unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.contains("7090002"));
    }

    #[test]
    fn test_empty_description_allowed() {
        let table = parse("Varenr.,Beskrivelse,GTIN\n100-01,,7090001\n").unwrap();
        assert_eq!(table.get("7090001"), Some(&ProductInfo::new("100-01", "")));
    }

    #[test]
    fn test_duplicate_barcode_last_row_wins() {
        let table = parse("Varenr.,Beskrivelse,GTIN\nA,First,111\nB,Other,222\nC,Second,111\n").unwrap();
        assert_eq!(table.get("111"), Some(&ProductInfo::new("C", "Second")));
        assert_eq!(table.barcodes().collect::<Vec<_>>(), vec!["111", "222"]);
    }

    #[test]
    fn test_quoted_fields() {
        let table = parse("Varenr.,Beskrivelse,GTIN\n100-01,\"Skrue, 4x40\",7090001\n").unwrap();
        assert_eq!(table.get("7090001").unwrap().description, "Skrue, 4x40");
    }

    #[test]
    fn test_missing_columns_reported() {
        let err = parse("Varenr.,Description,gtin\n1,2,3\n").unwrap_err();
        match err {
            ConvertError::MissingColumns(missing) => {
                assert_eq!(missing, vec!["'Beskrivelse'", "'GTIN'"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_header_names_are_exact() {
        let err = parse("Varenr. ,Beskrivelse,GTIN\n").unwrap_err();
        assert!(matches!(err, ConvertError::MissingColumns(ref m) if m == &["'Varenr.'"]));
    }

    #[test]
    fn test_empty_and_header_only_inputs() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("Varenr.,Beskrivelse,GTIN\n").unwrap().is_empty());
    }

    #[test]
    fn test_custom_columns() {
        let converter = CsvConverter::with_columns(CsvColumns {
            id: "Item".to_string(),
            description: "Text".to_string(),
            barcode: "EAN".to_string(),
        });
        let table = converter.parse("EAN,Item,Text\n555,I-1,Widget\n".as_bytes()).unwrap();
        assert_eq!(table.get("555"), Some(&ProductInfo::new("I-1", "Widget")));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"Varenr.,Beskrivelse,GTIN\n1,\xff\xfe,123\n";
        let err = CsvConverter::new().parse(bytes).unwrap_err();
        assert!(matches!(err, ConvertError::Csv(_)));
    }
}
