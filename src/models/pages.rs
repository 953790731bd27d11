//! Page envelopes carrying data plus navigation metadata.

use serde::Serialize;

use crate::pagination::Row;

/// Offset-based page with hypermedia links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HyperPage<'a> {
    /// Rows actually returned, not the requested size
    pub page_size: usize,
    /// Requested page number
    pub page: usize,
    pub data: &'a [Row],
    /// Next page number, absent when this page reaches the end
    pub next_page: Option<usize>,
    /// Previous page number, absent on the first page
    pub prev_page: Option<usize>,
    /// Pages needed for the whole dataset at the requested size
    pub total_pages: usize,
}

/// Index-based page that stays valid across deletions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HyperIndexPage<'a> {
    /// Requested start position
    pub index: usize,
    /// Position to request next, absent when the scan reached the end
    pub next_index: Option<usize>,
    /// Rows actually returned
    pub page_size: usize,
    pub data: Vec<&'a Row>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyper_page_serialize() {
        let rows = vec![vec!["2016".to_string(), "FEMALE".to_string()]];
        let page = HyperPage {
            page_size: 1,
            page: 3,
            data: &rows,
            next_page: None,
            prev_page: Some(2),
            total_pages: 3,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["page_size"], 1);
        assert_eq!(json["data"][0][1], "FEMALE");
        assert!(json["next_page"].is_null());
        assert_eq!(json["prev_page"], 2);
        assert_eq!(json["total_pages"], 3);
    }

    #[test]
    fn test_hyper_index_page_serialize() {
        let row = vec!["a".to_string()];
        let page = HyperIndexPage {
            index: 4,
            next_index: Some(6),
            page_size: 1,
            data: vec![&row],
        };
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(
            json,
            r#"{"index":4,"next_index":6,"page_size":1,"data":[["a"]]}"#
        );
    }
}
