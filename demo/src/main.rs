//! Demo binary - walks the user store through a full CRUD transcript.
//!
//! The printed output is illustrative only. Run with `RUST_LOG=debug` to
//! see the store's structured events interleaved with the transcript.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use domain::{NewUser, User, UserUpdate};
use user_store::{MemoryUserStore, UserRepository};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting user CRUD demo");

    let mut store = MemoryUserStore::new();

    println!("=== USER CRUD DEMO ===\n");

    println!("1. CREATE USERS");
    println!("{}", "-".repeat(40));

    let users = vec![
        store.create(NewUser::new("Ana Garcia", "ana@email.com", 28))?,
        store.create(NewUser::new("Luis Rodriguez", "luis@email.com", 35))?,
        store.create(NewUser::new("Maria Lopez", "maria@email.com", 22))?,
    ];

    for user in &users {
        println!("+ Created: {} ({}) - age {}", user.name, user.email, user.age);
    }
    println!("\nTotal users: {}", store.count());

    println!("\n2. READ USERS");
    println!("{}", "-".repeat(40));
    let first = store
        .read(users[0].id)
        .ok_or("freshly created user must be readable")?;
    println!("+ Read: {} - id {}", first.name, first.id);
    println!("- Unknown id: {:?}", store.read(Uuid::new_v4()));

    println!("\n3. UPDATE USERS");
    println!("{}", "-".repeat(40));
    let updated = store
        .update(
            users[1].id,
            UserUpdate::new().name("Luis Fernando Rodriguez").age(36),
        )?
        .ok_or("known id must update")?;
    println!("+ Updated: '{}' -> '{}'", users[1].name, updated.name);
    println!("  Age: {} -> {}", users[1].age, updated.age);

    println!("\n4. LIST ALL USERS");
    println!("{}", "-".repeat(40));
    for (i, user) in store.list_all().iter().enumerate() {
        let status = if user.active { "active" } else { "inactive" };
        println!(
            "{}. {} ({}) - {} years - {}",
            i + 1,
            user.name,
            user.email,
            user.age,
            status
        );
    }

    println!("\n5. DELETE USERS");
    println!("{}", "-".repeat(40));
    let victim = &users[2];
    let deleted = store.delete(victim.id);
    println!("+ Deleted: {} - success: {}", victim.name, deleted);
    println!("  Deleting again: {}", store.delete(victim.id));
    println!("  Remaining users: {}", store.count());

    println!("\n6. FIELD VALIDATION");
    println!("{}", "-".repeat(40));
    let invalid_cases = [
        ("", "test@email.com", 25, "empty name"),
        ("Juan", "email-without-at", 25, "invalid email"),
        ("Pedro", "pedro@email.com", -5, "negative age"),
        ("Ana", "ana@email.com", 200, "age too high"),
    ];
    for (name, email, age, label) in invalid_cases {
        match User::new(Uuid::new_v4(), name, email, age, true) {
            Ok(_) => println!("- {}: should have failed", label),
            Err(e) => println!("+ {}: {}", label, e),
        }
    }

    info!("Demo finished");
    Ok(())
}
