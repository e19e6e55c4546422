//! Builders for data manipulation messages.

use warren_proto::warren::{EntityName, InsertElement, InsertMessage, Literal, Metadata};

/// Builder for a single-row insert
#[derive(Debug, Clone)]
pub struct Insert {
    entity: EntityName,
    tid: i64,
    elements: Vec<InsertElement>,
}

impl Insert {
    /// Start an insert into the given entity
    pub fn new(entity: impl Into<EntityName>) -> Self {
        Self {
            entity: entity.into(),
            tid: 0,
            elements: Vec::new(),
        }
    }

    /// Run the insert in the given transaction
    pub fn tid(mut self, tid: i64) -> Self {
        self.tid = tid;
        self
    }

    /// Set the value of a column
    pub fn value(mut self, column: impl Into<String>, value: Literal) -> Self {
        self.elements.push(InsertElement {
            column: column.into(),
            value: Some(value),
        });
        self
    }
}

impl From<Insert> for InsertMessage {
    fn from(builder: Insert) -> Self {
        Self {
            metadata: Some(Metadata {
                tid: builder.tid,
                query_id: String::new(),
            }),
            entity: Some(builder.entity),
            elements: builder.elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::basics::{entity, float_vector, string_value, vector_value};

    #[test]
    fn test_insert_builder() {
        let message: InsertMessage = Insert::new(entity("warren_example", "cedd"))
            .tid(42)
            .value("id", string_value("abc"))
            .value("feature", vector_value(float_vector(vec![0.5, 0.25])))
            .into();

        assert_eq!(message.metadata.unwrap().tid, 42);
        assert_eq!(message.entity.unwrap().name, "cedd");
        assert_eq!(message.elements.len(), 2);
        assert_eq!(message.elements[0].column, "id");
        assert_eq!(message.elements[1].column, "feature");
    }

    #[test]
    fn test_insert_defaults_to_auto_commit() {
        let message: InsertMessage = Insert::new(entity("warren_example", "cedd"))
            .value("id", string_value("abc"))
            .into();

        assert_eq!(message.metadata.unwrap().tid, 0);
    }
}
