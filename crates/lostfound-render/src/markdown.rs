use crate::{
    RenderableDetail, RenderableImage, RenderableListing, RenderableMatchNotice, RenderableRow,
};

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn image(img: &RenderableImage) -> String {
    match img {
        RenderableImage::None => "-".to_string(),
        RenderableImage::Shown { src, alt } => format!("![{}]({})", cell(alt), src),
        RenderableImage::Obscured => "(obscured)".to_string(),
    }
}

pub fn render_listing_markdown(listing: &RenderableListing) -> String {
    let mut out = format!("# {}\n\n", listing.heading);

    if listing.rows.is_empty() {
        out.push_str(&listing.empty_message);
        out.push('\n');
        return out;
    }

    let with_status = listing.rows.iter().any(|r| r.status.is_some());
    if with_status {
        out.push_str("| ID | Type | Status | Title | Category | Location | Image |\n");
        out.push_str("| --- | --- | --- | --- | --- | --- | --- |\n");
    } else {
        out.push_str("| ID | Type | Title | Category | Location | Image |\n");
        out.push_str("| --- | --- | --- | --- | --- | --- |\n");
    }

    for row in &listing.rows {
        out.push_str(&row_line(row, with_status));
    }

    let hidden = listing.rows.iter().filter(|r| r.redacted).count();
    if hidden > 0 {
        out.push_str(&format!(
            "\n{} found item(s) hidden. Report a matching lost item to see details.\n",
            hidden
        ));
    }

    out
}

fn row_line(row: &RenderableRow, with_status: bool) -> String {
    let status = if with_status {
        format!(" {} |", cell(row.status.as_deref().unwrap_or("-")))
    } else {
        String::new()
    };
    format!(
        "| `{}` | {} |{} {} | {} | {} | {} |\n",
        row.id,
        row.kind,
        status,
        cell(&row.title),
        cell(&row.category),
        cell(&row.location),
        image(&row.image)
    )
}

pub fn render_detail_markdown(detail: &RenderableDetail) -> String {
    let mut out = format!("# {}\n\n", detail.title);

    out.push_str(&format!("- ID: `{}`\n", detail.id));
    out.push_str(&format!("- Type: {}\n", detail.kind));
    out.push_str(&format!("- Status: {}\n", detail.status));
    out.push_str(&format!("- Category: {}\n", detail.category));
    out.push_str(&format!("- Location: {}\n", detail.location));
    out.push_str(&format!("- Date: {}\n", detail.date));
    match &detail.contact {
        Some(contact) => out.push_str(&format!("- Contact: {}\n", contact)),
        None => out.push_str("- Contact: hidden\n"),
    }
    if detail.image != RenderableImage::None {
        out.push_str(&format!("- Image: {}\n", image(&detail.image)));
    }

    out.push('\n');
    out.push_str(&detail.description);
    out.push('\n');

    for notice in &detail.notices {
        out.push_str(&format!("\n> {}\n", notice));
    }

    if detail.can_claim {
        out.push_str(&format!(
            "\nClaim this item with `lostfound claim {}`.\n",
            detail.id
        ));
    }

    out
}

pub fn render_match_notices_markdown(notices: &[RenderableMatchNotice]) -> String {
    let mut out = String::from("# Possible matches\n\n");

    if notices.is_empty() {
        out.push_str("No found items match your lost reports yet.\n");
        return out;
    }

    for n in notices {
        out.push_str(&format!(
            "- Found item `{}` (**{}**) may be your lost item `{}` (**{}**).\n",
            n.found_id, n.found_title, n.lost_id, n.lost_title
        ));
    }

    out
}
