//! Constructors for names, literals and vectors.

use warren_proto::warren::{
    literal, vector, BoolVector, DoubleVector, EntityName, FloatVector, IntVector, Literal,
    LongVector, Null, SchemaName, Vector,
};

use crate::error::{ClientError, Result};

/// Create a schema name
pub fn schema(name: impl Into<String>) -> SchemaName {
    SchemaName { name: name.into() }
}

/// Create a fully qualified entity name
pub fn entity(schema_name: impl Into<String>, name: impl Into<String>) -> EntityName {
    EntityName {
        schema: Some(schema(schema_name)),
        name: name.into(),
    }
}

/// Parse an entity name of the form `schema.entity`
pub fn parse_entity(qualified: &str) -> Result<EntityName> {
    match qualified.split_once('.') {
        Some((schema_name, name)) if !schema_name.is_empty() && !name.is_empty() => {
            Ok(entity(schema_name, name))
        }
        _ => Err(ClientError::InvalidArgument(format!(
            "expected an entity name of the form 'schema.entity', got '{}'",
            qualified
        ))),
    }
}

/// Create a BOOLEAN literal
pub fn bool_value(value: bool) -> Literal {
    Literal { data: Some(literal::Data::BooleanData(value)) }
}

/// Create an INTEGER literal
pub fn int_value(value: i32) -> Literal {
    Literal { data: Some(literal::Data::IntData(value)) }
}

/// Create a LONG literal
pub fn long_value(value: i64) -> Literal {
    Literal { data: Some(literal::Data::LongData(value)) }
}

/// Create a FLOAT literal
pub fn float_value(value: f32) -> Literal {
    Literal { data: Some(literal::Data::FloatData(value)) }
}

/// Create a DOUBLE literal
pub fn double_value(value: f64) -> Literal {
    Literal { data: Some(literal::Data::DoubleData(value)) }
}

/// Create a STRING literal
pub fn string_value(value: impl Into<String>) -> Literal {
    Literal { data: Some(literal::Data::StringData(value.into())) }
}

/// Create a NULL literal
pub fn null_value() -> Literal {
    Literal { data: Some(literal::Data::NullData(Null {})) }
}

/// Wrap a vector in a literal, for use as a column value
pub fn vector_value(value: Vector) -> Literal {
    Literal { data: Some(literal::Data::VectorData(value)) }
}

/// Create a FLOAT_VECTOR value
pub fn float_vector(values: Vec<f32>) -> Vector {
    Vector { vector_data: Some(vector::VectorData::FloatVector(FloatVector { vector: values })) }
}

/// Create a DOUBLE_VECTOR value
pub fn double_vector(values: Vec<f64>) -> Vector {
    Vector { vector_data: Some(vector::VectorData::DoubleVector(DoubleVector { vector: values })) }
}

/// Create an INT_VECTOR value
pub fn int_vector(values: Vec<i32>) -> Vector {
    Vector { vector_data: Some(vector::VectorData::IntVector(IntVector { vector: values })) }
}

/// Create a LONG_VECTOR value
pub fn long_vector(values: Vec<i64>) -> Vector {
    Vector { vector_data: Some(vector::VectorData::LongVector(LongVector { vector: values })) }
}

/// Create a BOOL_VECTOR value
pub fn bool_vector(values: Vec<bool>) -> Vector {
    Vector { vector_data: Some(vector::VectorData::BoolVector(BoolVector { vector: values })) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_carries_schema() {
        let name = entity("warren_example", "cedd");
        assert_eq!(name.schema.unwrap().name, "warren_example");
        assert_eq!(name.name, "cedd");
    }

    #[test]
    fn test_parse_entity() {
        let name = parse_entity("warren_example.cedd").unwrap();
        assert_eq!(name.schema.unwrap().name, "warren_example");
        assert_eq!(name.name, "cedd");
    }

    #[test]
    fn test_parse_entity_rejects_unqualified_names() {
        assert!(parse_entity("cedd").is_err());
        assert!(parse_entity(".cedd").is_err());
        assert!(parse_entity("warren_example.").is_err());
    }

    #[test]
    fn test_string_value() {
        let literal = string_value("hello");
        assert_eq!(literal.data, Some(literal::Data::StringData("hello".to_string())));
    }

    #[test]
    fn test_float_vector() {
        let value = float_vector(vec![1.0, 2.0, 3.0]);
        match value.vector_data {
            Some(vector::VectorData::FloatVector(v)) => assert_eq!(v.vector, vec![1.0, 2.0, 3.0]),
            other => panic!("unexpected vector data: {:?}", other),
        }
    }
}
