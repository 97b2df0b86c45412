//! Ranked, display-ready restaurant rows.

use serde::Serialize;

use crate::record::FieldValue;

/// Name of the single worksheet in an exported workbook.
pub const SHEET_NAME: &str = "맛집 정보";

/// Source key in the search response → display label, in column order.
pub const SOURCE_FIELDS: [(&str, &str); 8] = [
    ("nm", "맛집 이름"),
    ("road_addr", "도로명 주소"),
    ("phone", "전화번호"),
    ("category", "카테고리"),
    ("score", "점수"),
    ("user_score", "사용자 평점"),
    ("favorites_cnt", "즐겨찾기 수"),
    ("review_cnt", "리뷰 수"),
];

/// Header row: the rank column followed by the eight projected fields.
pub const COLUMN_LABELS: [&str; 9] = [
    "번호",
    "맛집 이름",
    "도로명 주소",
    "전화번호",
    "카테고리",
    "점수",
    "사용자 평점",
    "즐겨찾기 수",
    "리뷰 수",
];

/// One restaurant projected onto the fixed output columns.
///
/// Serializes with the Korean display labels as keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRecord {
    #[serde(rename = "번호")]
    pub rank: u32,
    #[serde(rename = "맛집 이름")]
    pub name: FieldValue,
    #[serde(rename = "도로명 주소")]
    pub road_address: FieldValue,
    #[serde(rename = "전화번호")]
    pub phone: FieldValue,
    #[serde(rename = "카테고리")]
    pub category: FieldValue,
    #[serde(rename = "점수")]
    pub score: FieldValue,
    #[serde(rename = "사용자 평점")]
    pub user_score: FieldValue,
    #[serde(rename = "즐겨찾기 수")]
    pub favorites_count: FieldValue,
    #[serde(rename = "리뷰 수")]
    pub review_count: FieldValue,
}

impl DisplayRecord {
    /// All nine cells in [`COLUMN_LABELS`] order; the rank is numeric.
    #[must_use]
    pub fn cells(&self) -> [FieldValue; 9] {
        [
            FieldValue::Number(f64::from(self.rank)),
            self.name.clone(),
            self.road_address.clone(),
            self.phone.clone(),
            self.category.clone(),
            self.score.clone(),
            self.user_score.clone(),
            self.favorites_count.clone(),
            self.review_count.clone(),
        ]
    }
}

/// The ranked records of one region search.
///
/// Built once per search and replaced by the next one; nothing here is
/// shared between searches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSet {
    region: String,
    records: Vec<DisplayRecord>,
}

impl ResultSet {
    #[must_use]
    pub fn new(region: impl Into<String>, records: Vec<DisplayRecord>) -> Self {
        Self {
            region: region.into(),
            records,
        }
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn records(&self) -> &[DisplayRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display strings per row, header excluded.
    #[must_use]
    pub fn rows(&self) -> Vec<[String; 9]> {
        self.records
            .iter()
            .map(|record| record.cells().map(|cell| cell.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(rank: u32) -> DisplayRecord {
        DisplayRecord {
            rank,
            name: FieldValue::Text("홍대 돈부리".into()),
            road_address: FieldValue::Text("서울 마포구 와우산로 1".into()),
            phone: FieldValue::Empty,
            category: FieldValue::Text("일식".into()),
            score: FieldValue::Number(88.0),
            user_score: FieldValue::Number(4.2),
            favorites_count: FieldValue::Number(310.0),
            review_count: FieldValue::Number(57.0),
        }
    }

    #[test]
    fn labels_follow_source_field_order() {
        assert_eq!(COLUMN_LABELS[0], "번호");
        for (i, (_, label)) in SOURCE_FIELDS.iter().enumerate() {
            assert_eq!(COLUMN_LABELS[i + 1], *label);
        }
    }

    #[test]
    fn rows_render_cells_as_strings() {
        let set = ResultSet::new("홍대", vec![sample(1)]);
        let rows = set.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[0][3], "");
        assert_eq!(rows[0][6], "4.2");
    }

    #[test]
    fn serializes_with_display_labels() {
        let json = serde_json::to_value(sample(3)).unwrap();
        assert_eq!(json["번호"], 3);
        assert_eq!(json["맛집 이름"], "홍대 돈부리");
        assert_eq!(json["전화번호"], "");
        assert_eq!(json["리뷰 수"], 57);
    }
}
