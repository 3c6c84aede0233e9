use crate::model::Viewer;
use lostfound_types::{ItemReport, ItemStatus, ItemType, ReportId, UserId};
use time::macros::{date, datetime};

pub fn report(
    id: &str,
    item_type: ItemType,
    owner: &str,
    title: &str,
    category: &str,
) -> ItemReport {
    let (date, contact) = match item_type {
        ItemType::Lost => (date!(2025 - 03 - 10), "owner@example.com"),
        ItemType::Found => (date!(2025 - 03 - 12), "finder@example.com"),
    };
    ItemReport {
        id: ReportId::new(id),
        item_type,
        title: title.to_string(),
        category: category.to_string(),
        location: "Library".to_string(),
        date,
        description: String::new(),
        contact_info: contact.to_string(),
        image_ref: None,
        owner_id: UserId::new(owner),
        status: ItemStatus::Active,
        created_at: datetime!(2025-03-12 12:00 UTC),
        updated_at: None,
    }
}

pub fn lost(id: &str, owner: &str, title: &str, category: &str) -> ItemReport {
    report(id, ItemType::Lost, owner, title, category)
}

pub fn found(id: &str, owner: &str, title: &str, category: &str) -> ItemReport {
    report(id, ItemType::Found, owner, title, category)
}

pub fn viewer_with(user: &str, reports: Vec<ItemReport>) -> Viewer {
    Viewer::signed_in(UserId::new(user), reports)
}
