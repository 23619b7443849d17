use std::sync::Arc;

use jungmarker_contact::memory::{MemoryMailer, MemorySms, MemoryStore};
use jungmarker_contact::{ContactSubmission, Relay};

pub struct Fixture {
    pub relay: Relay,
    pub store: MemoryStore,
    pub mailer: MemoryMailer,
    pub sms: MemorySms,
}

pub fn fixture(store: MemoryStore, mailer: MemoryMailer, sms: MemorySms) -> Fixture {
    let relay = Relay::new(
        Arc::new(store.clone()),
        Arc::new(mailer.clone()),
        Some(Arc::new(sms.clone())),
    );

    Fixture {
        relay,
        store,
        mailer,
        sms,
    }
}

pub fn default_fixture() -> Fixture {
    fixture(MemoryStore::new(), MemoryMailer::new(), MemorySms::new())
}

pub fn submission(name: &str, phone: &str, intent: &str) -> ContactSubmission {
    ContactSubmission {
        name: name.to_owned(),
        email: "jane@x.com".to_owned(),
        phone: phone.to_owned(),
        intent: intent.to_owned(),
        message: "test".to_owned(),
    }
}
