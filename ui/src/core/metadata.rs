//! Sample metadata parsing: one record per generated sample, keyed by id.

use std::collections::HashMap;

/// Prompt and category captured when the sample set was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub category: String,
    pub description: String,
}

pub type MetadataMap = HashMap<String, MetadataRecord>;

const ID_COLUMN: &str = "modelId";
const DESCRIPTION_COLUMN: &str = "description";
const CATEGORY_COLUMN: &str = "category";

/// Parse a header-addressed CSV table into a metadata map.
///
/// Rows missing `modelId` or `description` are dropped; a missing `category`
/// is kept as an empty string so the join still resolves the record.
pub fn parse_metadata(text: &str) -> MetadataMap {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return MetadataMap::new();
    };
    let header = split_row(header_line);
    let id_col = header.iter().position(|name| name == ID_COLUMN);
    let description_col = header.iter().position(|name| name == DESCRIPTION_COLUMN);
    let category_col = header.iter().position(|name| name == CATEGORY_COLUMN);

    let mut map = MetadataMap::new();
    let (Some(id_col), Some(description_col)) = (id_col, description_col) else {
        return map;
    };

    for line in lines {
        let fields = split_row(line);
        let id = fields.get(id_col).map(String::as_str).unwrap_or_default();
        let description = fields
            .get(description_col)
            .map(String::as_str)
            .unwrap_or_default();
        if id.is_empty() || description.is_empty() {
            continue;
        }

        let category = category_col
            .and_then(|col| fields.get(col))
            .cloned()
            .unwrap_or_default();

        map.insert(
            id.to_string(),
            MetadataRecord {
                category,
                description: description.to_string(),
            },
        );
    }

    map
}

/// Split one CSV row into fields, honoring double-quoted fields with embedded
/// commas and doubled quotes.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(ch),
        }
    }
    fields.push(field);

    fields
        .into_iter()
        .map(|value| value.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_rows() {
        let csv = "modelId,description,category\n\
                   gen1,a wooden chair,chair\n\
                   gen2,a round table,table\n";
        let map = parse_metadata(csv);
        assert_eq!(map.len(), 2);
        assert_eq!(map["gen1"].category, "chair");
        assert_eq!(map["gen2"].description, "a round table");
    }

    #[test]
    fn column_order_is_taken_from_the_header() {
        let csv = "category,modelId,description\nlamp,gen9,a brass lamp\n";
        let map = parse_metadata(csv);
        assert_eq!(map["gen9"].category, "lamp");
        assert_eq!(map["gen9"].description, "a brass lamp");
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        let csv = "modelId,description,category\n\
                   gen1,\"a chair, tall and \"\"slim\"\"\",chair\n";
        let map = parse_metadata(csv);
        assert_eq!(map["gen1"].description, "a chair, tall and \"slim\"");
    }

    #[test]
    fn rows_missing_required_fields_are_dropped() {
        let csv = "modelId,description,category\n\
                   ,a headless row,chair\n\
                   gen2,,table\n\
                   gen3,a kept row,\n";
        let map = parse_metadata(csv);
        assert_eq!(map.len(), 1);
        assert_eq!(map["gen3"].description, "a kept row");
        assert_eq!(map["gen3"].category, "");
    }

    #[test]
    fn empty_lines_and_empty_input_are_tolerated() {
        assert!(parse_metadata("").is_empty());
        let csv = "modelId,description,category\n\n\ngen1,a chair,chair\n\n";
        assert_eq!(parse_metadata(csv).len(), 1);
    }

    #[test]
    fn table_without_required_columns_yields_nothing() {
        let csv = "id,prompt\ngen1,a chair\n";
        assert!(parse_metadata(csv).is_empty());
    }
}
