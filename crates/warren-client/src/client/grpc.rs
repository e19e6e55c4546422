//! gRPC client implementation for the WarrenDB services.

use tonic::transport::{Channel, ClientTlsConfig};
use tonic::metadata::MetadataValue;
use std::convert::TryFrom;
use std::time::Duration;
use tonic::{Request, Streaming};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use warren_proto::warren::ddl_client::DdlClient;
use warren_proto::warren::dml_client::DmlClient;
use warren_proto::warren::dql_client::DqlClient;
use warren_proto::warren::txn_client::TxnClient;
use warren_proto::warren::{
    Empty, EntityDefinition, EntityDetails, EntityList, EntityName, InsertMessage,
    InsertStatus, QueryMessage, QueryResponseMessage, SchemaList, SchemaName,
    SuccessStatus, TransactionId,
};

/// WarrenDB gRPC client
///
/// Bundles stubs for all four WarrenDB services (DDL, DML, DQL and TXN) over a
/// single shared channel.
pub struct WarrenClient {
    ddl: DdlClient<Channel>,
    dml: DmlClient<Channel>,
    dql: DqlClient<Channel>,
    txn: TxnClient<Channel>,
    config: ClientConfig,
}

impl WarrenClient {
    /// Create a new WarrenDB client with the given configuration
    pub async fn new(config: ClientConfig) -> Result<Self> {
        let channel = Self::create_channel(&config).await?;
        Ok(Self {
            ddl: DdlClient::new(channel.clone()),
            dml: DmlClient::new(channel.clone()),
            dql: DqlClient::new(channel.clone()),
            txn: TxnClient::new(channel),
            config,
        })
    }

    /// Create a new client with default configuration
    pub async fn default() -> Result<Self> {
        Self::new(ClientConfig::default()).await
    }

    /// Create a new client connected to the given address
    pub async fn connect<S: Into<String>>(address: S) -> Result<Self> {
        let config = ClientConfig::new(address);
        Self::new(config).await
    }

    async fn create_channel(config: &ClientConfig) -> Result<Channel> {
        let mut endpoint = Channel::from_shared(config.server_address.clone())
            .map_err(|e| ClientError::Configuration(format!("Invalid server address: {}", e)))?;

        if let Some(secs) = config.connect_timeout_secs {
            endpoint = endpoint.connect_timeout(Duration::from_secs(secs));
        }

        if config.use_tls {
            let tls_config = if let Some(ca_cert_path) = &config.ca_cert_path {
                let ca_cert = tokio::fs::read(ca_cert_path).await
                    .map_err(|e| ClientError::Configuration(format!("Failed to read CA certificate: {}", e)))?;

                ClientTlsConfig::new()
                    .ca_certificate(tonic::transport::Certificate::from_pem(ca_cert))
                    .domain_name(Self::extract_domain(&config.server_address)?)
            } else {
                ClientTlsConfig::new()
                    .domain_name(Self::extract_domain(&config.server_address)?)
            };

            endpoint = endpoint
                .tls_config(tls_config)
                .map_err(|e| ClientError::Configuration(format!("TLS configuration error: {}", e)))?;
        }

        Ok(endpoint.connect().await?)
    }

    fn extract_domain(address: &str) -> Result<String> {
        let parts: Vec<&str> = address.split("://").collect();
        let host_part = if parts.len() > 1 {
            parts[1]
        } else {
            parts[0]
        };

        let host = host_part.split(':').next().unwrap_or(host_part);
        Ok(host.to_string())
    }

    // Helper method to add authentication to requests if needed
    fn prepare_request<T>(&self, request: Request<T>) -> Request<T> {
        if let Some(api_key) = &self.config.api_key {
            // Try to add API key to metadata
            if let Ok(value) = MetadataValue::try_from(api_key.as_str()) {
                let mut req = request;
                req.metadata_mut().insert("x-api-key", value);
                return req;
            }
        }
        request
    }

    /// Check connectivity to the server
    pub async fn ping(&mut self) -> Result<()> {
        let request = self.prepare_request(Request::new(Empty {}));
        self.dql.ping(request).await?;
        Ok(())
    }

    /// Create a new schema
    pub async fn create_schema(&mut self, schema: impl Into<SchemaName>) -> Result<SuccessStatus> {
        let request = self.prepare_request(Request::new(schema.into()));
        let response = self.ddl.create_schema(request).await?;
        Ok(response.into_inner())
    }

    /// Drop a schema and all entities it contains
    pub async fn drop_schema(&mut self, schema: impl Into<SchemaName>) -> Result<SuccessStatus> {
        let request = self.prepare_request(Request::new(schema.into()));
        let response = self.ddl.drop_schema(request).await?;
        Ok(response.into_inner())
    }

    /// List all schemas
    pub async fn list_schemas(&mut self) -> Result<SchemaList> {
        let request = self.prepare_request(Request::new(Empty {}));
        let response = self.ddl.list_schemas(request).await?;
        Ok(response.into_inner())
    }

    /// Create a new entity
    pub async fn create_entity(&mut self, definition: impl Into<EntityDefinition>) -> Result<SuccessStatus> {
        let request = self.prepare_request(Request::new(definition.into()));
        let response = self.ddl.create_entity(request).await?;
        Ok(response.into_inner())
    }

    /// Drop an entity and all data it contains
    pub async fn drop_entity(&mut self, entity: impl Into<EntityName>) -> Result<SuccessStatus> {
        let request = self.prepare_request(Request::new(entity.into()));
        let response = self.ddl.drop_entity(request).await?;
        Ok(response.into_inner())
    }

    /// List all entities in a schema
    pub async fn list_entities(&mut self, schema: impl Into<SchemaName>) -> Result<EntityList> {
        let request = self.prepare_request(Request::new(schema.into()));
        let response = self.ddl.list_entities(request).await?;
        Ok(response.into_inner())
    }

    /// Get details about an entity, including its row count
    pub async fn about_entity(&mut self, entity: impl Into<EntityName>) -> Result<EntityDetails> {
        let request = self.prepare_request(Request::new(entity.into()));
        let response = self.ddl.about_entity(request).await?;
        Ok(response.into_inner())
    }

    /// Insert a single row
    ///
    /// The insert runs in the transaction carried by the message metadata, or
    /// auto-commits if no transaction is set.
    pub async fn insert(&mut self, insert: impl Into<InsertMessage>) -> Result<InsertStatus> {
        let request = self.prepare_request(Request::new(insert.into()));
        let response = self.dml.insert(request).await?;
        Ok(response.into_inner())
    }

    /// Insert a stream of rows
    ///
    /// The server reports one status per accepted row on the returned stream.
    pub async fn insert_stream(
        &mut self,
        inserts: impl tonic::IntoStreamingRequest<Message = InsertMessage>,
    ) -> Result<Streaming<InsertStatus>> {
        let request = self.prepare_request(inserts.into_streaming_request());
        let response = self.dml.insert_stream(request).await?;
        Ok(response.into_inner())
    }

    /// Execute a query
    ///
    /// Results are streamed in batches of tuples.
    pub async fn query(&mut self, query: impl Into<QueryMessage>) -> Result<Streaming<QueryResponseMessage>> {
        let request = self.prepare_request(Request::new(query.into()));
        let response = self.dql.query(request).await?;
        Ok(response.into_inner())
    }

    /// Begin a new transaction
    pub async fn begin(&mut self) -> Result<TransactionId> {
        let request = self.prepare_request(Request::new(Empty {}));
        let response = self.txn.begin(request).await?;
        Ok(response.into_inner())
    }

    /// Commit a transaction
    pub async fn commit(&mut self, txn: TransactionId) -> Result<()> {
        let request = self.prepare_request(Request::new(txn));
        self.txn.commit(request).await?;
        Ok(())
    }

    /// Roll a transaction back
    pub async fn rollback(&mut self, txn: TransactionId) -> Result<()> {
        let request = self.prepare_request(Request::new(txn));
        self.txn.rollback(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::metadata::MetadataMap;
    use tonic::transport::Endpoint;

    fn lazy_client(config: ClientConfig) -> WarrenClient {
        let channel = Endpoint::from_static("http://[::1]:50051").connect_lazy();
        WarrenClient {
            ddl: DdlClient::new(channel.clone()),
            dml: DmlClient::new(channel.clone()),
            dql: DqlClient::new(channel.clone()),
            txn: TxnClient::new(channel),
            config,
        }
    }

    #[test]
    fn test_extract_domain_http() {
        let result = WarrenClient::extract_domain("http://localhost:50051").unwrap();
        assert_eq!(result, "localhost");
    }

    #[test]
    fn test_extract_domain_https() {
        let result = WarrenClient::extract_domain("https://example.com:1865").unwrap();
        assert_eq!(result, "example.com");
    }

    #[test]
    fn test_extract_domain_no_protocol() {
        let result = WarrenClient::extract_domain("127.0.0.1:50051").unwrap();
        assert_eq!(result, "127.0.0.1");
    }

    #[test]
    fn test_extract_domain_no_port() {
        let result = WarrenClient::extract_domain("https://api.example.com").unwrap();
        assert_eq!(result, "api.example.com");
    }

    #[tokio::test]
    async fn test_prepare_request_with_api_key() {
        let client = lazy_client(ClientConfig {
            server_address: "http://localhost:50051".to_string(),
            use_tls: false,
            api_key: Some("test-api-key".to_string()),
            ca_cert_path: None,
            connect_timeout_secs: None,
        });

        let request = Request::new(Empty {});
        let prepared = client.prepare_request(request);

        // Get the metadata and verify the API key is set
        let metadata: &MetadataMap = prepared.metadata();
        assert!(metadata.contains_key("x-api-key"));
        assert_eq!(
            metadata.get("x-api-key").unwrap().to_str().unwrap(),
            "test-api-key"
        );
    }

    #[tokio::test]
    async fn test_prepare_request_without_api_key() {
        let client = lazy_client(ClientConfig {
            server_address: "http://localhost:50051".to_string(),
            use_tls: false,
            api_key: None,
            ca_cert_path: None,
            connect_timeout_secs: None,
        });

        let request = Request::new(Empty {});
        let prepared = client.prepare_request(request);

        // No API key should be set
        let metadata: &MetadataMap = prepared.metadata();
        assert!(!metadata.contains_key("x-api-key"));
    }
}
