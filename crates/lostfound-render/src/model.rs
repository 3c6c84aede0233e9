#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderableImage {
    None,
    Shown { src: String, alt: String },
    Obscured,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRow {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub category: String,
    pub location: String,
    /// Only set on pages that show status, e.g. the owner's own reports.
    pub status: Option<String>,
    pub image: RenderableImage,
    pub redacted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableListing {
    pub heading: String,
    pub rows: Vec<RenderableRow>,
    pub empty_message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableDetail {
    pub id: String,
    pub kind: String,
    pub status: String,
    pub title: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub description: String,
    pub contact: Option<String>,
    pub image: RenderableImage,
    pub can_claim: bool,
    pub notices: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableMatchNotice {
    pub lost_id: String,
    pub lost_title: String,
    pub found_id: String,
    pub found_title: String,
}
