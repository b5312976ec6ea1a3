//! Catalog of past events.

use chrono::NaiveDate;

use super::model::{Event, EventId};

/// Read-only collection of past events.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// The catalog of events funded so far.
    pub fn seeded() -> Self {
        Self::new(seed_events())
    }

    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn find(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EventId) -> bool {
        self.find(id).is_some()
    }

    /// The `limit` most recent events, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().collect();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        events.truncate(limit);
        events
    }

    /// Sum of expenses across all events.
    pub fn total_expenses(&self) -> f64 {
        self.events.iter().map(|e| e.total_expenses).sum()
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: 1,
            name: "Zuzalu Montenegro Pop-up City".to_string(),
            date: date(2024, 3, 25),
            place: "Lustica Bay, Montenegro".to_string(),
            attendees: 200,
            description: "Two months of co-living focused on longevity, public goods and \
                          network states."
                .to_string(),
            organizer: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F".to_string(),
            total_expenses: 4_200.0,
            photos: vec!["montenegro-opening.jpg".to_string(), "montenegro-hike.jpg".to_string()],
            receipts: vec!["venue-deposit.pdf".to_string()],
            links: vec!["https://zuzalu.city/montenegro".to_string()],
        },
        Event {
            id: 2,
            name: "ZK Study Group".to_string(),
            date: date(2024, 5, 12),
            place: "Lisbon, Portugal".to_string(),
            attendees: 35,
            description: "Weekly study sessions working through zero-knowledge proof systems."
                .to_string(),
            organizer: "0x2546BcD3c84621e976D8185a91A922aE77ECEc30".to_string(),
            total_expenses: 850.0,
            photos: vec!["zk-whiteboard.jpg".to_string()],
            receipts: vec!["coffee-and-snacks.jpg".to_string()],
            links: vec![],
        },
        Event {
            id: 3,
            name: "Public Goods Funding Workshop".to_string(),
            date: date(2024, 8, 3),
            place: "Berlin, Germany".to_string(),
            attendees: 60,
            description: "Hands-on workshop on quadratic funding and retroactive grants."
                .to_string(),
            organizer: "0xbDA5747bFD65F08deb54cb465eB87D40e51B197E".to_string(),
            total_expenses: 1_900.0,
            photos: vec!["workshop-panel.jpg".to_string()],
            receipts: vec!["room-rental.pdf".to_string(), "printing.pdf".to_string()],
            links: vec!["https://example.org/pgf-slides".to_string()],
        },
        Event {
            id: 4,
            name: "Longevity Meetup".to_string(),
            date: date(2024, 10, 19),
            place: "Chiang Mai, Thailand".to_string(),
            attendees: 45,
            description: "Evening meetup on longevity research and community health data."
                .to_string(),
            organizer: "0xdD2FD4581271e230360230F9337D5c0430Bf44C0".to_string(),
            total_expenses: 1_200.0,
            photos: vec![],
            receipts: vec!["dinner.jpg".to_string()],
            links: vec![],
        },
    ]
}
