use serde::Deserialize;

/// Fields left out of the body are left untouched on the draft.
#[derive(Deserialize, Default)]
pub struct UpdateDraftRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub region: Option<String>,
    pub party_size: Option<u32>,
    pub has_children: Option<bool>,
    pub smoking: Option<bool>,
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}
