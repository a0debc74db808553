//! Demo data seeder for Bookholder development and testing.
//!
//! Seeds a small chart of accounts, a month of transactions and a demo user.
//! Re-running skips anything already present.
//!
//! Usage: cargo run --bin seeder

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bookholder_core::ledger::{Account, TransactionInput};
use bookholder_db::{Ledger, StoreError, bootstrap};
use bookholder_shared::{AppConfig, LogConfig};
use bookholder_shared::types::{AccountId, Amount};

/// Demo chart of accounts: (id, name, kind).
const ACCOUNTS: [(i64, &str, &str); 5] = [
    (1000, "Cash", "1000"),
    (1200, "Bank", "1200"),
    (3000, "Owner equity", "3000"),
    (4000, "Sales", "4000"),
    (6000, "Rent", "6000"),
];

/// Demo movements: (account, offset account, cents, debit, day, description).
const TRANSACTIONS: [(i64, i64, i64, bool, u32, &str); 4] = [
    (1200, 3000, 1_000_000, true, 2, "Owner contribution"),
    (1000, 4000, 45_050, true, 9, "Cash sale"),
    (6000, 1200, 120_000, true, 15, "January rent"),
    (1200, 6000, 120_000, false, 15, "January rent"),
];

const DEMO_USER: (&str, &str) = ("demo", "demo");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.log);

    let ledger = bootstrap(&config.database).await?;

    info!("Seeding chart of accounts...");
    let seeded_accounts = seed_accounts(&ledger).await?;

    if seeded_accounts {
        info!("Seeding transactions...");
        seed_transactions(&ledger).await?;
    } else {
        info!("Chart of accounts already present, skipping transactions");
    }

    info!("Seeding demo user...");
    seed_user(&ledger).await?;

    info!("Seeding complete!");
    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(log.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!log.json).then(tracing_subscriber::fmt::layer))
        .init();
}

/// Returns true if at least one account was created.
async fn seed_accounts(ledger: &Ledger) -> Result<bool, StoreError> {
    let mut created = false;
    for (id, name, kind) in ACCOUNTS {
        match ledger
            .accounts()
            .create(&Account::new(AccountId(id), name, kind))
            .await
        {
            Ok(_) => created = true,
            Err(StoreError::AlreadyExists(_)) => info!(account = id, "already exists, skipping"),
            Err(e) => return Err(e),
        }
    }
    Ok(created)
}

async fn seed_transactions(ledger: &Ledger) -> anyhow::Result<()> {
    for (account, offset, cents, debit, day, description) in TRANSACTIONS {
        let date = Utc
            .with_ymd_and_hms(2024, 1, day, 9, 0, 0)
            .single()
            .ok_or_else(|| anyhow::anyhow!("invalid demo date 2024-01-{day:02}"))?;

        ledger
            .transactions()
            .create(&TransactionInput {
                amount: Amount::new(Decimal::new(cents, 2)),
                debit,
                offset_account: AccountId(offset),
                account: AccountId(account),
                date: Some(date),
                description: description.to_string(),
            })
            .await?;
    }

    let balance = ledger.transactions().balance(AccountId(1200), 2024, Some(1)).await?;
    info!(account = 1200, %balance, "bank movement for 2024-01");
    Ok(())
}

async fn seed_user(ledger: &Ledger) -> Result<(), StoreError> {
    let (name, password) = DEMO_USER;
    match ledger.users().create(name, password).await {
        Ok(user) => info!(user_id = %user.id, "created demo user"),
        Err(StoreError::AlreadyExists(_)) => info!("demo user already exists, skipping"),
        Err(e) => return Err(e),
    }
    Ok(())
}
