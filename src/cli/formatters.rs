// Formatters for displaying query results and entity details.
use anyhow::Result;
use colored::*;
use serde_json::json;

use warren_client::{literal, vector, EntityDetails, Literal, QueryResponseMessage, Vector};

/// Number of vector components shown before the rendering is truncated.
const VECTOR_PREVIEW: usize = 4;

/// Prints query result batches, either human-readable or as a JSON array of
/// rows keyed by column name.
pub fn print_query_results(batches: &[QueryResponseMessage], json_output: bool) -> Result<()> {
    let total: usize = batches.iter().map(|batch| batch.tuples.len()).sum();
    if total == 0 {
        if json_output {
            println!("[]"); // Output empty JSON array
        } else {
            println!("No rows returned.");
        }
        return Ok(());
    }

    if json_output {
        // Pair each value with the column name announced in its batch
        let mut rows = Vec::with_capacity(total);
        for batch in batches {
            for tuple in &batch.tuples {
                let mut row = serde_json::Map::new();
                for (idx, value) in tuple.values.iter().enumerate() {
                    let column = batch
                        .columns
                        .get(idx)
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| format!("column_{}", idx));
                    row.insert(column, literal_to_json(value));
                }
                rows.push(serde_json::Value::Object(row));
            }
        }
        let json_string = serde_json::to_string_pretty(&rows)?;
        println!("{}", json_string);
    } else {
        // Header from the first batch that announces its columns
        if let Some(batch) = batches.iter().find(|batch| !batch.columns.is_empty()) {
            let header = batch
                .columns
                .iter()
                .map(|column| column.name.as_str())
                .collect::<Vec<_>>()
                .join(" | ");
            println!("{}", header.bold());
            println!("{}", "-".repeat(header.len()));
        }
        for batch in batches {
            for tuple in &batch.tuples {
                let rendered = tuple
                    .values
                    .iter()
                    .map(render_literal)
                    .collect::<Vec<_>>()
                    .join(" | ");
                println!("{}", rendered);
            }
        }
    }
    Ok(())
}

/// Prints the qualified name, row count and column layout of an entity.
pub fn print_entity_details(details: &EntityDetails) {
    let qualified = match &details.entity {
        Some(name) => match &name.schema {
            Some(schema) => format!("{}.{}", schema.name, name.name),
            None => name.name.clone(),
        },
        None => "<unknown>".to_string(),
    };
    println!("{} ({} rows)", qualified.cyan().bold(), details.rows);

    for column in &details.columns {
        let mut rendered = format!("  {} {}", column.name, column.r#type().as_str_name());
        if column.length > 0 {
            rendered.push_str(&format!("({})", column.length));
        }
        if !column.nullable {
            rendered.push_str(" NOT NULL");
        }
        println!("{}", rendered);
    }
}

fn render_literal(value: &Literal) -> String {
    match &value.data {
        Some(literal::Data::BooleanData(b)) => b.to_string(),
        Some(literal::Data::IntData(i)) => i.to_string(),
        Some(literal::Data::LongData(l)) => l.to_string(),
        Some(literal::Data::FloatData(f)) => format!("{:.4}", f),
        Some(literal::Data::DoubleData(d)) => format!("{:.4}", d),
        Some(literal::Data::StringData(s)) => s.clone(),
        Some(literal::Data::VectorData(v)) => render_vector(v),
        Some(literal::Data::NullData(_)) | None => "NULL".to_string(),
    }
}

fn render_vector(value: &Vector) -> String {
    match &value.vector_data {
        Some(vector::VectorData::FloatVector(v)) => render_components(&v.vector),
        Some(vector::VectorData::DoubleVector(v)) => render_components(&v.vector),
        Some(vector::VectorData::IntVector(v)) => render_components(&v.vector),
        Some(vector::VectorData::LongVector(v)) => render_components(&v.vector),
        Some(vector::VectorData::BoolVector(v)) => render_components(&v.vector),
        None => "[]".to_string(),
    }
}

fn render_components<T: std::fmt::Display>(components: &[T]) -> String {
    if components.len() <= VECTOR_PREVIEW {
        let rendered: Vec<String> = components.iter().map(T::to_string).collect();
        format!("[{}]", rendered.join(", "))
    } else {
        let rendered: Vec<String> = components[..VECTOR_PREVIEW].iter().map(T::to_string).collect();
        format!(
            "[{}, ... {} more]",
            rendered.join(", "),
            components.len() - VECTOR_PREVIEW
        )
    }
}

fn literal_to_json(value: &Literal) -> serde_json::Value {
    match &value.data {
        Some(literal::Data::BooleanData(b)) => json!(b),
        Some(literal::Data::IntData(i)) => json!(i),
        Some(literal::Data::LongData(l)) => json!(l),
        Some(literal::Data::FloatData(f)) => json!(f),
        Some(literal::Data::DoubleData(d)) => json!(d),
        Some(literal::Data::StringData(s)) => json!(s),
        Some(literal::Data::VectorData(v)) => vector_to_json(v),
        Some(literal::Data::NullData(_)) | None => serde_json::Value::Null,
    }
}

fn vector_to_json(value: &Vector) -> serde_json::Value {
    match &value.vector_data {
        Some(vector::VectorData::FloatVector(v)) => json!(v.vector),
        Some(vector::VectorData::DoubleVector(v)) => json!(v.vector),
        Some(vector::VectorData::IntVector(v)) => json!(v.vector),
        Some(vector::VectorData::LongVector(v)) => json!(v.vector),
        Some(vector::VectorData::BoolVector(v)) => json!(v.vector),
        None => json!([]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_client::language::basics::{float_vector, string_value, vector_value};

    #[test]
    fn test_render_string_literal() {
        assert_eq!(render_literal(&string_value("abc")), "abc");
    }

    #[test]
    fn test_render_short_vector() {
        let value = vector_value(float_vector(vec![1.0, 2.0]));
        assert_eq!(render_literal(&value), "[1, 2]");
    }

    #[test]
    fn test_render_vector_truncates() {
        let value = vector_value(float_vector(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]));
        assert_eq!(render_literal(&value), "[1, 2, 3, 4, ... 2 more]");
    }

    #[test]
    fn test_render_missing_data_as_null() {
        assert_eq!(render_literal(&Literal { data: None }), "NULL");
    }

    #[test]
    fn test_literal_to_json_vector() {
        let value = vector_value(float_vector(vec![0.5, 1.5]));
        assert_eq!(literal_to_json(&value), json!([0.5, 1.5]));
    }

    #[test]
    fn test_literal_to_json_null() {
        assert_eq!(literal_to_json(&Literal { data: None }), serde_json::Value::Null);
    }
}
