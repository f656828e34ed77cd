use serde::Serialize;

/// One row of the read-only activity feed shown under the user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEntry {
    pub timestamp: &'static str,
    pub actor: &'static str,
    pub action: &'static str,
    pub detail: &'static str,
}

static ACTIVITY_FEED: [ActivityEntry; 3] = [
    ActivityEntry {
        timestamp: "2025-05-05 10:45",
        actor: "Administrator",
        action: "Shipment created",
        detail: "Tracking number: CGO123456",
    },
    ActivityEntry {
        timestamp: "2025-05-05 09:30",
        actor: "Wati Susanti",
        action: "Status updated",
        detail: "Waybill CGO345678: Pickup -> Transit",
    },
    ActivityEntry {
        timestamp: "2025-05-05 09:15",
        actor: "Hadi Gunawan",
        action: "Login",
        detail: "Login successful",
    },
];

/// The feed is fixed content; nothing in the directory core appends to it.
pub fn activity_feed() -> &'static [ActivityEntry] {
    &ACTIVITY_FEED
}
