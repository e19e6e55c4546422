use std::error::Error;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_stream::{Stream, StreamExt};
use tonic::transport::Server;
use tonic::{Request, Response, Status, Streaming};

use warren_client::language::basics::{entity, float_vector, schema, string_value, vector_value};
use warren_client::language::ddl::CreateEntity;
use warren_client::language::dml::Insert;
use warren_client::language::dql::{is_in, Query};
use warren_client::{ClientConfig, ClientError, WarrenClient};
use warren_proto::warren::ddl_server::{Ddl, DdlServer};
use warren_proto::warren::dml_server::{Dml, DmlServer};
use warren_proto::warren::dql_server::{Dql, DqlServer};
use warren_proto::warren::txn_server::{Txn, TxnServer};
use warren_proto::warren::{
    literal, ColumnInfo, ComparisonOperator, Distance, Empty, EntityDefinition, EntityDetails,
    EntityList, EntityName, InsertMessage, InsertStatus, QueryMessage, QueryResponseMessage,
    SchemaList, SchemaName, SuccessStatus, TransactionId, Tuple, Type,
};

/// In-process WarrenDB double that records every request it receives.
#[derive(Default)]
struct MockWarren {
    created_schemas: Arc<Mutex<Vec<SchemaName>>>,
    created_entities: Arc<Mutex<Vec<EntityDefinition>>>,
    inserts: Arc<Mutex<Vec<InsertMessage>>>,
    queries: Arc<Mutex<Vec<QueryMessage>>>,
    committed: Arc<Mutex<Vec<i64>>>,
    rolled_back: Arc<Mutex<Vec<i64>>>,
    schema_exists: Arc<Mutex<bool>>,
}

#[tonic::async_trait]
impl Ddl for MockWarren {
    async fn create_schema(
        &self,
        request: Request<SchemaName>,
    ) -> Result<Response<SuccessStatus>, Status> {
        let name = request.into_inner();
        if *self.schema_exists.lock().unwrap() {
            return Err(Status::already_exists(format!(
                "Schema {} already exists",
                name.name
            )));
        }
        self.created_schemas.lock().unwrap().push(name);
        Ok(Response::new(SuccessStatus { timestamp: 1 }))
    }

    async fn drop_schema(
        &self,
        _request: Request<SchemaName>,
    ) -> Result<Response<SuccessStatus>, Status> {
        Ok(Response::new(SuccessStatus { timestamp: 1 }))
    }

    async fn list_schemas(&self, _request: Request<Empty>) -> Result<Response<SchemaList>, Status> {
        Ok(Response::new(SchemaList {
            schemas: vec![SchemaName {
                name: "warren_example".to_string(),
            }],
        }))
    }

    async fn create_entity(
        &self,
        request: Request<EntityDefinition>,
    ) -> Result<Response<SuccessStatus>, Status> {
        self.created_entities.lock().unwrap().push(request.into_inner());
        Ok(Response::new(SuccessStatus { timestamp: 1 }))
    }

    async fn drop_entity(
        &self,
        _request: Request<EntityName>,
    ) -> Result<Response<SuccessStatus>, Status> {
        Ok(Response::new(SuccessStatus { timestamp: 1 }))
    }

    async fn list_entities(
        &self,
        _request: Request<SchemaName>,
    ) -> Result<Response<EntityList>, Status> {
        Ok(Response::new(EntityList { entities: vec![] }))
    }

    async fn about_entity(
        &self,
        request: Request<EntityName>,
    ) -> Result<Response<EntityDetails>, Status> {
        Ok(Response::new(EntityDetails {
            entity: Some(request.into_inner()),
            columns: vec![],
            rows: 3,
        }))
    }
}

#[tonic::async_trait]
impl Dml for MockWarren {
    async fn insert(
        &self,
        request: Request<InsertMessage>,
    ) -> Result<Response<InsertStatus>, Status> {
        self.inserts.lock().unwrap().push(request.into_inner());
        Ok(Response::new(InsertStatus {
            success: true,
            timestamp: 1,
        }))
    }

    type InsertStreamStream = Pin<Box<dyn Stream<Item = Result<InsertStatus, Status>> + Send>>;

    async fn insert_stream(
        &self,
        request: Request<Streaming<InsertMessage>>,
    ) -> Result<Response<Self::InsertStreamStream>, Status> {
        let inserts = Arc::clone(&self.inserts);
        let statuses = request.into_inner().map(move |message| {
            message.map(|message| {
                inserts.lock().unwrap().push(message);
                InsertStatus {
                    success: true,
                    timestamp: 1,
                }
            })
        });
        Ok(Response::new(Box::pin(statuses)))
    }
}

#[tonic::async_trait]
impl Dql for MockWarren {
    type QueryStream = Pin<Box<dyn Stream<Item = Result<QueryResponseMessage, Status>> + Send>>;

    async fn query(
        &self,
        request: Request<QueryMessage>,
    ) -> Result<Response<Self::QueryStream>, Status> {
        let message = request.into_inner();
        self.queries.lock().unwrap().push(message.clone());

        let limit = message.query.as_ref().map(|q| q.limit).unwrap_or(0);
        let count = if limit > 0 && limit < 3 { limit as usize } else { 3 };
        let tuples = (0..count)
            .map(|i| Tuple {
                values: vec![string_value(format!("id-{}", i))],
            })
            .collect();

        let response = QueryResponseMessage {
            metadata: message.metadata,
            columns: vec![ColumnInfo {
                name: "id".to_string(),
                r#type: Type::String as i32,
            }],
            tuples,
        };
        Ok(Response::new(Box::pin(tokio_stream::iter(vec![Ok(response)]))))
    }

    async fn ping(&self, _request: Request<Empty>) -> Result<Response<Empty>, Status> {
        Ok(Response::new(Empty {}))
    }
}

#[tonic::async_trait]
impl Txn for MockWarren {
    async fn begin(&self, _request: Request<Empty>) -> Result<Response<TransactionId>, Status> {
        Ok(Response::new(TransactionId { tid: 42 }))
    }

    async fn commit(&self, request: Request<TransactionId>) -> Result<Response<Empty>, Status> {
        self.committed.lock().unwrap().push(request.into_inner().tid);
        Ok(Response::new(Empty {}))
    }

    async fn rollback(&self, request: Request<TransactionId>) -> Result<Response<Empty>, Status> {
        self.rolled_back.lock().unwrap().push(request.into_inner().tid);
        Ok(Response::new(Empty {}))
    }
}

/// Serve all four WarrenDB services from the mock on an ephemeral port.
async fn spawn_server(mock: Arc<MockWarren>) -> Result<SocketAddr, Box<dyn Error>> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        Server::builder()
            .add_service(DdlServer::from_arc(Arc::clone(&mock)))
            .add_service(DmlServer::from_arc(Arc::clone(&mock)))
            .add_service(DqlServer::from_arc(Arc::clone(&mock)))
            .add_service(TxnServer::from_arc(mock))
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
    });
    Ok(addr)
}

#[tokio::test]
async fn test_schema_and_entity_management() -> Result<(), Box<dyn Error>> {
    let mock = Arc::new(MockWarren::default());
    let addr = spawn_server(Arc::clone(&mock)).await?;
    let mut client = WarrenClient::connect(format!("http://{}", addr)).await?;

    client.ping().await?;

    let status = client.create_schema(schema("warren_example")).await?;
    assert_eq!(status.timestamp, 1);

    let definition = CreateEntity::new(entity("warren_example", "cedd"))
        .column("id", Type::String, 0, false)
        .column("feature", Type::FloatVector, 144, false);
    client.create_entity(definition).await?;

    let schemas = client.list_schemas().await?;
    assert_eq!(schemas.schemas.len(), 1);
    assert_eq!(schemas.schemas[0].name, "warren_example");

    let details = client.about_entity(entity("warren_example", "cedd")).await?;
    assert_eq!(details.rows, 3);

    let created_schemas = mock.created_schemas.lock().unwrap();
    assert_eq!(created_schemas.len(), 1);
    let created_entities = mock.created_entities.lock().unwrap();
    assert_eq!(created_entities.len(), 1);
    let columns = &created_entities[0].columns;
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[1].name, "feature");
    assert_eq!(columns[1].r#type(), Type::FloatVector);
    assert_eq!(columns[1].length, 144);

    Ok(())
}

#[tokio::test]
async fn test_transactional_insert() -> Result<(), Box<dyn Error>> {
    let mock = Arc::new(MockWarren::default());
    let addr = spawn_server(Arc::clone(&mock)).await?;
    let mut client = WarrenClient::connect(format!("http://{}", addr)).await?;

    let txn = client.begin().await?;
    assert_eq!(txn.tid, 42);

    let status = client
        .insert(
            Insert::new(entity("warren_example", "cedd"))
                .tid(txn.tid)
                .value("id", string_value("abc"))
                .value("feature", vector_value(float_vector(vec![0.5; 4]))),
        )
        .await?;
    assert!(status.success);

    client.commit(txn).await?;

    let inserts = mock.inserts.lock().unwrap();
    assert_eq!(inserts.len(), 1);
    assert_eq!(inserts[0].metadata.as_ref().unwrap().tid, 42);
    assert_eq!(inserts[0].elements.len(), 2);
    assert_eq!(mock.committed.lock().unwrap().as_slice(), &[42]);

    Ok(())
}

#[tokio::test]
async fn test_rollback() -> Result<(), Box<dyn Error>> {
    let mock = Arc::new(MockWarren::default());
    let addr = spawn_server(Arc::clone(&mock)).await?;
    let mut client = WarrenClient::connect(format!("http://{}", addr)).await?;

    let txn = client.begin().await?;
    client.rollback(txn).await?;

    assert_eq!(mock.rolled_back.lock().unwrap().as_slice(), &[42]);
    assert!(mock.committed.lock().unwrap().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_streaming_insert() -> Result<(), Box<dyn Error>> {
    let mock = Arc::new(MockWarren::default());
    let addr = spawn_server(Arc::clone(&mock)).await?;
    let mut client = WarrenClient::connect(format!("http://{}", addr)).await?;

    let rows: Vec<InsertMessage> = (0..3)
        .map(|i| {
            Insert::new(entity("warren_example", "cedd"))
                .value("id", string_value(format!("row-{}", i)))
                .into()
        })
        .collect();

    let mut statuses = client.insert_stream(tokio_stream::iter(rows)).await?;
    let mut accepted = 0;
    while let Some(status) = statuses.message().await? {
        assert!(status.success);
        accepted += 1;
    }
    assert_eq!(accepted, 3);
    assert_eq!(mock.inserts.lock().unwrap().len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_query_with_predicate() -> Result<(), Box<dyn Error>> {
    let mock = Arc::new(MockWarren::default());
    let addr = spawn_server(Arc::clone(&mock)).await?;
    let mut client = WarrenClient::connect(format!("http://{}", addr)).await?;

    let ids = ["a", "b", "c"].map(string_value);
    let mut stream = client
        .query(
            Query::new(entity("warren_example", "cedd"))
                .filter(is_in("id", ids))
                .limit(3),
        )
        .await?;

    let mut returned = Vec::new();
    while let Some(response) = stream.message().await? {
        assert_eq!(response.columns[0].name, "id");
        for tuple in response.tuples {
            match tuple.values[0].data.as_ref() {
                Some(literal::Data::StringData(id)) => returned.push(id.clone()),
                other => panic!("unexpected value: {:?}", other),
            }
        }
    }
    assert_eq!(returned.len(), 3);

    let queries = mock.queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    let query = queries[0].query.as_ref().unwrap();
    let predicate = query.predicate.as_ref().unwrap();
    assert_eq!(predicate.column, "id");
    assert_eq!(predicate.op(), ComparisonOperator::In);
    assert_eq!(predicate.values.len(), 3);
    assert_eq!(query.limit, 3);

    Ok(())
}

#[tokio::test]
async fn test_knn_query() -> Result<(), Box<dyn Error>> {
    let mock = Arc::new(MockWarren::default());
    let addr = spawn_server(Arc::clone(&mock)).await?;
    let mut client = WarrenClient::connect(format!("http://{}", addr)).await?;

    let mut stream = client
        .query(
            Query::new(entity("warren_example", "cedd"))
                .select(&["id"])
                .knn("feature", 10, float_vector(vec![0.0; 144]), Distance::Euclidean),
        )
        .await?;
    while stream.message().await?.is_some() {}

    let queries = mock.queries.lock().unwrap();
    let query = queries[0].query.as_ref().unwrap();
    assert_eq!(query.projection.as_ref().unwrap().columns, vec!["id".to_string()]);
    let knn = query.knn.as_ref().unwrap();
    assert_eq!(knn.column, "feature");
    assert_eq!(knn.k, 10);
    assert_eq!(knn.distance(), Distance::Euclidean);
    assert!(knn.query.is_some());

    Ok(())
}

#[tokio::test]
async fn test_create_schema_already_exists() -> Result<(), Box<dyn Error>> {
    let mock = Arc::new(MockWarren::default());
    *mock.schema_exists.lock().unwrap() = true;
    let addr = spawn_server(Arc::clone(&mock)).await?;
    let mut client = WarrenClient::connect(format!("http://{}", addr)).await?;

    let err = client.create_schema(schema("warren_example")).await.unwrap_err();
    assert!(matches!(err, ClientError::AlreadyExists(_)));
    assert!(mock.created_schemas.lock().unwrap().is_empty());

    Ok(())
}

/// This test verifies client configuration works correctly.
#[test]
fn test_client_config() {
    let config = ClientConfig::default();
    assert_eq!(config.server_address, "http://localhost:50051");
    assert_eq!(config.use_tls, false);
    assert_eq!(config.api_key, None);
    assert_eq!(config.ca_cert_path, None);

    let config = ClientConfig::new("http://example.com:1865")
        .with_tls(true)
        .with_api_key("my-api-key");

    assert_eq!(config.server_address, "http://example.com:1865");
    assert_eq!(config.use_tls, true);
    assert_eq!(config.api_key, Some("my-api-key".to_string()));
}

/// This test is disabled by default as it requires a running server.
/// Use `cargo test --features server -- --ignored` to run it.
#[cfg(feature = "server")]
#[tokio::test]
#[ignore]
async fn test_connect_to_server() -> Result<(), Box<dyn Error>> {
    let config = ClientConfig::new("http://localhost:50051");
    let mut client = WarrenClient::new(config).await?;

    client.ping().await?;

    let schemas = client.list_schemas().await?;
    println!("Server exposes {} schema(s)", schemas.schemas.len());

    Ok(())
}
