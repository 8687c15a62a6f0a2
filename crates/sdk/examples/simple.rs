//! Simple SDK Example
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package atelier-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package atelier-sdk --example simple
//!    ```

use atelier_sdk::AtelierClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Atelier SDK - Simple Example");
    println!("============================\n");

    // 1. Connect to daemon
    println!("1. Connecting to daemon...");
    let client = AtelierClient::connect("http://127.0.0.1:3000").await?;
    let health = client.health().await?;
    println!("   ✓ Connected (daemon v{})\n", health.version);

    // 2. Create a couple of notions
    println!("2. Creating notions...");
    let docker = client.create_notion("Docker").await?;
    let cicd = client.create_notion("CI/CD").await?;
    println!("   ✓ {} = {}", docker.name, docker.id);
    println!("   ✓ {} = {}\n", cicd.name, cicd.id);

    // 3. Create a workshop, including one reference that resolves to nothing
    println!("3. Creating workshop...");
    let workshop = client
        .create_workshop(
            "DevOps 101",
            vec![
                docker.id.clone(),
                cicd.id.clone(),
                "deadbeefdeadbeefdeadbeef".to_string(),
            ],
        )
        .await?;
    println!("   ✓ Workshop {} ({})", workshop.name, workshop.id);
    for notion in &workshop.notions {
        println!("     - {}", notion.name);
    }
    println!();

    // 4. Read it back
    println!("4. Fetching workshop...");
    match client.get_workshop(&workshop.id).await? {
        Some(found) => println!("   ✓ Found with {} notions", found.notions.len()),
        None => println!("   ⚠ Workshop vanished"),
    }

    let listed = client.list_workshops(Some(10)).await?;
    println!("   ✓ {} workshops listed", listed.len());

    println!("\n✓ Example completed successfully!");

    Ok(())
}
