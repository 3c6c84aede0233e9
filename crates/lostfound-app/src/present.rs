//! Presentation: map domain views onto the render model and produce Markdown.

use lostfound_domain::status::status_label;
use lostfound_domain::view::{ClaimControl, ContactView, ImageView, ListingRow, Notice, ReportView};
use lostfound_render::{
    RenderableDetail, RenderableImage, RenderableListing, RenderableMatchNotice, RenderableRow,
};
use lostfound_types::{ItemReport, ItemType};

use crate::MatchNotice;

fn kind(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Lost => "Lost",
        ItemType::Found => "Found",
    }
}

fn image(view: &ImageView) -> RenderableImage {
    match view {
        ImageView::None => RenderableImage::None,
        ImageView::Original { image_ref, alt } => RenderableImage::Shown {
            src: image_ref.to_string(),
            alt: alt.clone(),
        },
        ImageView::Obscured => RenderableImage::Obscured,
    }
}

pub fn notice_text(notice: Notice) -> &'static str {
    match notice {
        Notice::SecurityRedacted => {
            "Details are hidden for security. Report a matching lost item to see them."
        }
        Notice::Match => "This item matches one of your lost reports. You can claim it.",
    }
}

fn row(view: &ListingRow) -> RenderableRow {
    RenderableRow {
        id: view.id.to_string(),
        kind: kind(view.item_type).to_string(),
        title: view.title.clone(),
        category: view.category.clone(),
        location: view.location.clone(),
        status: None,
        image: image(&view.image),
        redacted: view.redacted,
    }
}

fn owned_row(report: &ItemReport) -> RenderableRow {
    RenderableRow {
        id: report.id.to_string(),
        kind: kind(report.item_type).to_string(),
        title: report.title.clone(),
        category: report.category.clone(),
        location: report.location.clone(),
        status: Some(status_label(report).to_string()),
        image: match &report.image_ref {
            None => RenderableImage::None,
            Some(src) => RenderableImage::Shown {
                src: src.to_string(),
                alt: report.title.clone(),
            },
        },
        redacted: false,
    }
}

pub fn heading_for(tab: Option<ItemType>) -> &'static str {
    match tab {
        None => "All items",
        Some(ItemType::Lost) => "Lost items",
        Some(ItemType::Found) => "Found items",
    }
}

pub fn listing_markdown(heading: &str, rows: &[ListingRow]) -> String {
    lostfound_render::render_listing_markdown(&RenderableListing {
        heading: heading.to_string(),
        rows: rows.iter().map(row).collect(),
        empty_message: "No items to show.".to_string(),
    })
}

pub fn my_reports_markdown(reports: &[ItemReport]) -> String {
    lostfound_render::render_listing_markdown(&RenderableListing {
        heading: "My reports".to_string(),
        rows: reports.iter().map(owned_row).collect(),
        empty_message: "You have not reported any items yet.".to_string(),
    })
}

pub fn detail_markdown(view: &ReportView) -> String {
    lostfound_render::render_detail_markdown(&RenderableDetail {
        id: view.id.to_string(),
        kind: kind(view.item_type).to_string(),
        status: view.status.to_string(),
        title: view.title.clone(),
        category: view.category.clone(),
        location: view.location.clone(),
        date: view.date.clone(),
        description: view.description.clone(),
        contact: match &view.contact {
            ContactView::Visible(contact) => Some(contact.clone()),
            ContactView::Hidden => None,
        },
        image: image(&view.image),
        can_claim: view.claim == ClaimControl::Enabled,
        notices: view
            .notices
            .iter()
            .map(|n| notice_text(*n).to_string())
            .collect(),
    })
}

pub fn match_notices_markdown(notices: &[MatchNotice]) -> String {
    let renderable: Vec<RenderableMatchNotice> = notices
        .iter()
        .map(|n| RenderableMatchNotice {
            lost_id: n.candidate.lost_id.to_string(),
            lost_title: n.lost_title.clone(),
            found_id: n.candidate.found_id.to_string(),
            found_title: n.found_title.clone(),
        })
        .collect();
    lostfound_render::render_match_notices_markdown(&renderable)
}
