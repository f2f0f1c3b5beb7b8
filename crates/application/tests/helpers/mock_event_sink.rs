#![allow(dead_code)]

use loopy_dns_application::ports::ServerEventSink;
use loopy_dns_domain::ServerEvent;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockEventSink {
    events: Arc<Mutex<Vec<ServerEvent>>>,
}

impl MockEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ServerEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl ServerEventSink for MockEventSink {
    fn emit(&self, event: ServerEvent) {
        self.events.lock().unwrap().push(event);
    }
}
