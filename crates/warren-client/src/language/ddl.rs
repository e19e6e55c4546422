//! Builders for data definition messages.

use warren_proto::warren::{ColumnDefinition, EntityDefinition, EntityName, Type};

/// Builder for an entity definition
#[derive(Debug, Clone)]
pub struct CreateEntity {
    entity: EntityName,
    columns: Vec<ColumnDefinition>,
}

impl CreateEntity {
    /// Start a definition for the given entity
    pub fn new(entity: impl Into<EntityName>) -> Self {
        Self {
            entity: entity.into(),
            columns: Vec::new(),
        }
    }

    /// Add a column
    ///
    /// `length` is the number of elements and only relevant for vector types.
    pub fn column(
        mut self,
        name: impl Into<String>,
        column_type: Type,
        length: u32,
        nullable: bool,
    ) -> Self {
        self.columns.push(ColumnDefinition {
            name: name.into(),
            r#type: column_type as i32,
            length,
            nullable,
        });
        self
    }
}

impl From<CreateEntity> for EntityDefinition {
    fn from(builder: CreateEntity) -> Self {
        Self {
            entity: Some(builder.entity),
            columns: builder.columns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::basics::entity;

    #[test]
    fn test_create_entity_builder() {
        let definition: EntityDefinition = CreateEntity::new(entity("warren_example", "cedd"))
            .column("id", Type::String, 0, false)
            .column("feature", Type::FloatVector, 144, false)
            .into();

        assert_eq!(definition.entity.unwrap().name, "cedd");
        assert_eq!(definition.columns.len(), 2);
        assert_eq!(definition.columns[0].name, "id");
        assert_eq!(definition.columns[0].r#type(), Type::String);
        assert_eq!(definition.columns[1].name, "feature");
        assert_eq!(definition.columns[1].r#type(), Type::FloatVector);
        assert_eq!(definition.columns[1].length, 144);
        assert!(!definition.columns[1].nullable);
    }
}
