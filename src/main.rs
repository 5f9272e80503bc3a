use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rsvp_entities::config::{AppConfig, StoreBackend};
use rsvp_entities::entity_store::{
    BigInt, Bytes, InMemoryStore, InstrumentedStore, RedisStore, Store,
};
use rsvp_entities::metrics::StoreMetrics;
use rsvp_entities::schema::{Account, Confirmation, Event, Rsvp};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,rsvp_entities=debug")),
        )
        .init();

    let config = AppConfig::parse();
    config.validate()?;

    tracing::info!(backend = ?config.backend, "🚀 Starting RSVP entity store demo");

    // === 1. Metrics registry ===
    let metrics = Arc::new(StoreMetrics::new()?);

    // === 2. Backing store ===
    let backend: Box<dyn Store> = match config.backend {
        StoreBackend::Memory => Box::new(InMemoryStore::new()),
        StoreBackend::Redis => Box::new(
            RedisStore::connect(&config.redis_url, config.key_prefix.clone())
                .with_context(|| format!("Failed to connect to Redis at {}", config.redis_url))?,
        ),
    };
    let mut store = InstrumentedStore::new(backend, metrics.clone());

    // === 3. Event lifecycle ===
    run_lifecycle(&mut store)?;

    if config.print_metrics {
        println!("{}", metrics.encode_text()?);
    }

    tracing::info!("🎉 Demo complete!");
    Ok(())
}

const EVENT_ID: &str = "0x1-0";

fn run_lifecycle(store: &mut impl Store) -> anyhow::Result<()> {
    // Create the event
    let mut event = Event::new(EVENT_ID);
    event.set_event_id(Bytes::from([0x11u8; 32]));
    event.set_event_owner(Bytes::from_hex_str("0x71c7656ec7ab88b098defb751b7401b5f6d8976f")?);
    event.set_event_timestamp(BigInt::from(1_767_225_600u64));
    event.set_max_capacity(BigInt::from(100));
    event.set_deposit(BigInt::from(10u64.pow(16)));
    event.set_name(Some("Rust meetup".to_string()));
    event.set_link(Some("https://example.org/rust-meetup".to_string()));
    event.save(store)?;
    tracing::info!(event_id = EVENT_ID, "✅ Event created");

    // Two accounts RSVP
    for attendee in ["0xalice", "0xbob"] {
        record_rsvp(store, EVENT_ID, attendee)?;
    }

    // One of them shows up
    record_confirmation(store, EVENT_ID, "0xalice")?;

    // Settle the deposit pool
    let mut event = Event::load(store, EVENT_ID)?.context("Event disappeared from store")?;
    event.set_paid_out(true);
    event.save(store)?;

    let event = Event::load(store, EVENT_ID)?.context("Event disappeared from store")?;
    tracing::info!(
        event_id = %event.id(),
        name = ?event.name(),
        total_rsvps = %event.total_rsvps(),
        total_confirmed = %event.total_confirmed_attendees(),
        paid_out = event.paid_out(),
        rsvps = ?event.rsvps(),
        "📊 Final event state"
    );

    for attendee in ["0xalice", "0xbob"] {
        let account = Account::load(store, attendee)?
            .with_context(|| format!("Account {} disappeared from store", attendee))?;
        tracing::info!(
            account = %account.id(),
            total_rsvps = %account.total_rsvps(),
            attended = %account.total_attended_events(),
            "📊 Final account state"
        );
    }

    Ok(())
}

fn record_rsvp(store: &mut impl Store, event_id: &str, attendee: &str) -> anyhow::Result<()> {
    let rsvp_id = format!("{}-{}", event_id, attendee);

    let mut rsvp = Rsvp::new(rsvp_id.as_str());
    rsvp.set_attendee(attendee.to_string());
    rsvp.set_event(event_id.to_string());
    rsvp.save(store)?;

    let mut account = Account::load(store, attendee)?.unwrap_or_else(|| Account::new(attendee));
    account.set_total_rsvps(account.total_rsvps() + 1u32);
    account.set_rsvps(Some(appended(account.rsvps(), &rsvp_id)));
    account.save(store)?;

    let mut event = Event::load(store, event_id)?
        .with_context(|| format!("RSVP for unknown event {}", event_id))?;
    event.set_total_rsvps(event.total_rsvps() + 1u32);
    event.set_rsvps(Some(appended(event.rsvps(), &rsvp_id)));
    event.save(store)?;

    tracing::info!(rsvp_id = %rsvp_id, attendee = attendee, "✅ RSVP recorded");
    Ok(())
}

fn record_confirmation(
    store: &mut impl Store,
    event_id: &str,
    attendee: &str,
) -> anyhow::Result<()> {
    let confirmation_id = format!("{}-{}", event_id, attendee);

    let mut confirmation = Confirmation::new(confirmation_id.as_str());
    confirmation.set_attendee(attendee.to_string());
    confirmation.set_event(event_id.to_string());
    confirmation.save(store)?;

    let mut account = Account::load(store, attendee)?
        .with_context(|| format!("Confirmation for unknown account {}", attendee))?;
    account.set_total_attended_events(account.total_attended_events() + 1u32);
    account.set_attended_events(Some(appended(account.attended_events(), event_id)));
    account.save(store)?;

    let mut event = Event::load(store, event_id)?
        .with_context(|| format!("Confirmation for unknown event {}", event_id))?;
    event.set_total_confirmed_attendees(event.total_confirmed_attendees() + 1u32);
    event.set_confirmed_attendees(Some(appended(event.confirmed_attendees(), attendee)));
    event.save(store)?;

    tracing::info!(
        confirmation_id = %confirmation_id,
        attendee = attendee,
        "✅ Attendance confirmed"
    );
    Ok(())
}

fn appended(list: Option<Vec<String>>, id: &str) -> Vec<String> {
    let mut list = list.unwrap_or_default();
    list.push(id.to_string());
    list
}
