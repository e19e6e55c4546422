//! Talks to WarrenDB with the raw generated stubs, without the WarrenClient wrapper.

use std::error::Error;

use tonic::transport::Channel;
use tonic::Request;

use warren_proto::warren::dql_client::DqlClient;
use warren_proto::warren::{Empty, EntityName, Metadata, Projection, Query, QueryMessage, SchemaName};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Connect a channel and build the stub by hand
    let channel = Channel::from_static("http://localhost:50051").connect().await?;
    let mut dql = DqlClient::new(channel);

    dql.ping(Request::new(Empty {})).await?;
    println!("Server is reachable.");

    // Run a small query with hand-built messages
    let message = QueryMessage {
        metadata: Some(Metadata {
            tid: 0,
            query_id: String::new(),
        }),
        query: Some(Query {
            from: Some(EntityName {
                schema: Some(SchemaName {
                    name: "warren_example".to_string(),
                }),
                name: "cedd".to_string(),
            }),
            projection: Some(Projection {
                columns: vec!["*".to_string()],
            }),
            predicate: None,
            knn: None,
            limit: 3,
            skip: 0,
        }),
    };

    let mut stream = dql.query(Request::new(message)).await?.into_inner();
    while let Some(response) = stream.message().await? {
        for tuple in response.tuples {
            println!("{:?}", tuple.values);
        }
    }

    Ok(())
}
