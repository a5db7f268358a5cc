//! Seed data for demos and tests.

use chrono::{DateTime, TimeZone, Utc};
use roster_model::{Client, ClientId, ClientKind, ClientStatus};

type Day = (i32, u32, u32);

struct Seed {
    id: &'static str,
    name: &'static str,
    email: &'static str,
    kind: ClientKind,
    status: ClientStatus,
    created: Day,
    updated: Day,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "20",
        name: "John Doe",
        email: "johndoe@email.com",
        kind: ClientKind::Individual,
        status: ClientStatus::Active,
        created: (2023, 1, 15),
        updated: (2023, 6, 20),
    },
    Seed {
        id: "21",
        name: "Test Test",
        email: "test@test.com",
        kind: ClientKind::Individual,
        status: ClientStatus::Pending,
        created: (2023, 2, 10),
        updated: (2023, 5, 15),
    },
    Seed {
        id: "22",
        name: "Acme Corp",
        email: "info@acme.com",
        kind: ClientKind::Company,
        status: ClientStatus::Active,
        created: (2023, 3, 5),
        updated: (2023, 7, 1),
    },
    Seed {
        id: "23",
        name: "Jane Smith",
        email: "jane@example.com",
        kind: ClientKind::Individual,
        status: ClientStatus::Inactive,
        created: (2023, 1, 20),
        updated: (2023, 4, 10),
    },
    Seed {
        id: "24",
        name: "Global Industries",
        email: "contact@global.com",
        kind: ClientKind::Company,
        status: ClientStatus::Active,
        created: (2023, 2, 25),
        updated: (2023, 6, 15),
    },
];

fn day((year, month, day): Day) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

fn build(seed: &Seed) -> Option<Client> {
    Some(Client {
        id: ClientId::new(seed.id).ok()?,
        name: seed.name.to_string(),
        email: seed.email.to_string(),
        kind: seed.kind,
        status: seed.status,
        created_at: day(seed.created)?,
        updated_at: day(seed.updated)?,
    })
}

/// The five demo clients, in store order
pub fn mock_clients() -> Vec<Client> {
    SEEDS.iter().filter_map(build).collect()
}
