use warren_client::WarrenClient;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Create a client with default configuration (localhost:50051)
    let mut client = WarrenClient::default().await?;

    // Check connectivity
    client.ping().await?;
    println!("Server is reachable.");

    // List schemas and their entities
    let schemas = client.list_schemas().await?;
    println!("\nAvailable schemas:");
    if schemas.schemas.is_empty() {
        println!("  No schemas found");
    } else {
        for schema in schemas.schemas {
            println!("  - {}", schema.name);
            let entities = client.list_entities(schema).await?;
            for entity in entities.entities {
                let details = client.about_entity(entity).await?;
                if let Some(name) = details.entity {
                    println!("      {} ({} rows)", name.name, details.rows);
                }
            }
        }
    }

    Ok(())
}
