use crate::domain::model::ProductRow;
use crate::utils::error::{PipelineError, Result};
use csv::{ReaderBuilder, Trim};

/// Parses the raw bytes of one uploaded object into product rows.
///
/// The first line is a header and is discarded. Data lines with fewer
/// than two fields are skipped with a warning; lines whose first two
/// fields are both empty after trimming are skipped silently. An object
/// with zero lines is a file-level error and sends the object to
/// quarantine.
pub fn parse_rows(bytes: &[u8], object: &str) -> Result<Vec<ProductRow>> {
    let content = std::str::from_utf8(bytes).map_err(|_| PipelineError::InvalidEncoding {
        object: object.to_string(),
    })?;

    if content.lines().next().is_none() {
        return Err(PipelineError::EmptyInput {
            object: object.to_string(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;

        if record.len() < 2 {
            // 1-based data-record index; quoted records can span lines,
            // so a line number would be a guess.
            tracing::warn!(
                object,
                record = index + 1,
                "Skipping row with fewer than 2 fields"
            );
            continue;
        }

        // Fields arrive trimmed via Trim::All.
        let name = &record[0];
        let keywords = &record[1];
        if name.is_empty() && keywords.is_empty() {
            continue;
        }

        rows.push(ProductRow {
            name: name.to_string(),
            keywords: keywords.to_string(),
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_rows() {
        let csv = "product_name,keywords\nWidget,\"blue, small\"\nGadget,shiny\n";
        let rows = parse_rows(csv.as_bytes(), "input.csv").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Widget");
        assert_eq!(rows[0].keywords, "blue, small");
        assert_eq!(rows[1].name, "Gadget");
        assert_eq!(rows[1].keywords, "shiny");
    }

    #[test]
    fn test_parse_trims_fields() {
        let csv = "name,keywords\n  Widget  ,  fast durable  \n";
        let rows = parse_rows(csv.as_bytes(), "input.csv").unwrap();

        assert_eq!(rows[0].name, "Widget");
        assert_eq!(rows[0].keywords, "fast durable");
    }

    #[test]
    fn test_parse_quoted_multiline_field() {
        let csv = "name,keywords\nWidget,\"blue,\nsmall\"\nGadget,shiny\n";
        let rows = parse_rows(csv.as_bytes(), "input.csv").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].keywords, "blue,\nsmall");
        assert_eq!(rows[1].name, "Gadget");
    }

    #[test]
    fn test_parse_skips_short_rows() {
        let csv = "name,keywords\nonlyone\nWidget,blue\n";
        let rows = parse_rows(csv.as_bytes(), "input.csv").unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Widget");
    }

    #[test]
    fn test_parse_skips_empty_pair_rows() {
        let csv = "name,keywords\n , \nWidget,blue\n";
        let rows = parse_rows(csv.as_bytes(), "input.csv").unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Widget");
    }

    #[test]
    fn test_parse_ignores_extra_columns() {
        let csv = "name,keywords,price\nWidget,blue,9.99\n";
        let rows = parse_rows(csv.as_bytes(), "input.csv").unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].keywords, "blue");
    }

    #[test]
    fn test_parse_empty_object_is_fatal() {
        let err = parse_rows(b"", "input.csv").unwrap_err();
        assert!(matches!(err, PipelineError::EmptyInput { .. }));
    }

    #[test]
    fn test_parse_header_only_yields_no_rows() {
        let rows = parse_rows(b"name,keywords\n", "input.csv").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_invalid_utf8_is_fatal() {
        let err = parse_rows(&[0xff, 0xfe, 0x00], "input.csv").unwrap_err();
        assert!(matches!(err, PipelineError::InvalidEncoding { .. }));
    }
}
