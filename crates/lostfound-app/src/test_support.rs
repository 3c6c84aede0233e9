use lostfound_types::{ItemType, NewItemReport};
use time::OffsetDateTime;
use time::macros::datetime;

pub const T0: OffsetDateTime = datetime!(2025-03-12 12:00 UTC);

pub fn lost_input() -> NewItemReport {
    NewItemReport {
        item_type: Some(ItemType::Lost),
        title: "Blue Backpack".to_string(),
        category: "Bags".to_string(),
        location: "Lost at Library".to_string(),
        date: "2025-03-10".to_string(),
        description: "Laptop inside".to_string(),
        contact_info: "owner@example.com".to_string(),
        image_ref: None,
    }
}

pub fn found_input() -> NewItemReport {
    NewItemReport {
        item_type: Some(ItemType::Found),
        title: "Blue Backpack".to_string(),
        category: "Bags".to_string(),
        location: "Found at Library".to_string(),
        date: "2025-03-12".to_string(),
        description: "Left on a study desk".to_string(),
        contact_info: "finder@example.com".to_string(),
        image_ref: None,
    }
}
