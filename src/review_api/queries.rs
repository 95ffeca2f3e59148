use serde::Serialize;

#[derive(Serialize)]
pub(super) struct StatusQuery {
    pub from_date: i64,
}
