//! Builders for query messages.

use warren_proto::warren as proto;
use warren_proto::warren::{
    ComparisonOperator, Distance, EntityName, Knn, Literal, Metadata, Predicate, Projection,
    Vector,
};

/// Builder for a query
#[derive(Debug, Clone)]
pub struct Query {
    from: EntityName,
    projection: Vec<String>,
    predicate: Option<Predicate>,
    knn: Option<Knn>,
    limit: u64,
    skip: u64,
    tid: i64,
}

impl Query {
    /// Start a query over the given entity, selecting all columns
    pub fn new(entity: impl Into<EntityName>) -> Self {
        Self {
            from: entity.into(),
            projection: vec!["*".to_string()],
            predicate: None,
            knn: None,
            limit: 0,
            skip: 0,
            tid: 0,
        }
    }

    /// Project on the given columns
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.projection = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Keep only rows matching the given predicate
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Rank rows by the distance between `column` and `query`, keeping the `k` nearest
    pub fn knn(
        mut self,
        column: impl Into<String>,
        k: u32,
        query: Vector,
        distance: Distance,
    ) -> Self {
        self.knn = Some(Knn {
            column: column.into(),
            k,
            query: Some(query),
            distance: distance as i32,
        });
        self
    }

    /// Return at most `limit` rows
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = limit;
        self
    }

    /// Skip the first `skip` rows
    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = skip;
        self
    }

    /// Run the query in the given transaction
    pub fn tid(mut self, tid: i64) -> Self {
        self.tid = tid;
        self
    }
}

impl From<Query> for proto::QueryMessage {
    fn from(builder: Query) -> Self {
        Self {
            metadata: Some(Metadata {
                tid: builder.tid,
                query_id: String::new(),
            }),
            query: Some(proto::Query {
                from: Some(builder.from),
                projection: Some(Projection {
                    columns: builder.projection,
                }),
                predicate: builder.predicate,
                knn: builder.knn,
                limit: builder.limit,
                skip: builder.skip,
            }),
        }
    }
}

/// Predicate matching rows whose `column` equals `value`
pub fn equals(column: impl Into<String>, value: Literal) -> Predicate {
    Predicate {
        column: column.into(),
        op: ComparisonOperator::Equal as i32,
        values: vec![value],
    }
}

/// Predicate matching rows whose `column` is one of `values`
pub fn is_in(column: impl Into<String>, values: impl IntoIterator<Item = Literal>) -> Predicate {
    Predicate {
        column: column.into(),
        op: ComparisonOperator::In as i32,
        values: values.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::basics::{entity, float_vector, string_value};

    #[test]
    fn test_query_defaults() {
        let message: proto::QueryMessage = Query::new(entity("warren_example", "cedd")).into();

        let query = message.query.unwrap();
        assert_eq!(query.from.unwrap().name, "cedd");
        assert_eq!(query.projection.unwrap().columns, vec!["*".to_string()]);
        assert!(query.predicate.is_none());
        assert!(query.knn.is_none());
        assert_eq!(query.limit, 0);
        assert_eq!(message.metadata.unwrap().tid, 0);
    }

    #[test]
    fn test_query_with_filter_and_limit() {
        let ids = ["a", "b", "c"].map(string_value);
        let message: proto::QueryMessage = Query::new(entity("warren_example", "cedd"))
            .filter(is_in("id", ids))
            .limit(3)
            .into();

        let query = message.query.unwrap();
        let predicate = query.predicate.unwrap();
        assert_eq!(predicate.column, "id");
        assert_eq!(predicate.op(), ComparisonOperator::In);
        assert_eq!(predicate.values.len(), 3);
        assert_eq!(query.limit, 3);
    }

    #[test]
    fn test_query_with_knn() {
        let message: proto::QueryMessage = Query::new(entity("warren_example", "cedd"))
            .select(&["id"])
            .knn("feature", 10, float_vector(vec![0.0; 144]), Distance::Euclidean)
            .into();

        let query = message.query.unwrap();
        assert_eq!(query.projection.unwrap().columns, vec!["id".to_string()]);
        let knn = query.knn.unwrap();
        assert_eq!(knn.column, "feature");
        assert_eq!(knn.k, 10);
        assert_eq!(knn.distance(), Distance::Euclidean);
        assert!(knn.query.is_some());
    }

    #[test]
    fn test_equals_predicate() {
        let predicate = equals("id", string_value("abc"));
        assert_eq!(predicate.op(), ComparisonOperator::Equal);
        assert_eq!(predicate.values.len(), 1);
    }
}
