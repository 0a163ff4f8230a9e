use serde::{Deserialize, Serialize};

/// Every domain entity is identified by an integer id; rows are never
/// mutated in place, only replaced on refetch.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Envelope for paginated/listable resources: `{ data: [...], count: n }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub count: i64,
}

/// Some list endpoints answer the paginated envelope, others a bare array
/// (unpaginated sub-resources). Callers that must accept either decode
/// through this.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paginated(Paginated<T>),
    Plain(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Paginated(p) => p.data,
            ListEnvelope::Plain(v) => v,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Query parameters understood by listable resource endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub search: Option<String>,
    pub filter_field: Option<String>,
    /// Ids serialised as a JSON array inside the query parameter.
    pub filter_ids: Vec<i64>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            limit: 25,
            sort_field: None,
            sort_order: None,
            search: None,
            filter_field: None,
            filter_ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_accepts_both_wire_shapes() {
        #[derive(Debug, Clone, PartialEq, Deserialize)]
        struct Row {
            id: i64,
        }

        let wrapped: ListEnvelope<Row> =
            serde_json::from_str(r#"{"data":[{"id":1},{"id":2}],"count":2}"#).unwrap();
        assert_eq!(wrapped.into_vec().len(), 2);

        let bare: ListEnvelope<Row> = serde_json::from_str(r#"[{"id":1}]"#).unwrap();
        assert_eq!(bare.into_vec(), vec![Row { id: 1 }]);
    }

    #[test]
    fn paginated_count_defaults_to_zero() {
        let p: Paginated<i64> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(p.count, 0);
    }

    #[test]
    fn sort_order_wire_form() {
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), r#""ASC""#);
        assert_eq!(SortOrder::Desc.as_str(), "DESC");
        assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
    }
}
