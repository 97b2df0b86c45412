//! Projection of raw search items onto display rows, and ranking.

use std::cmp::Ordering;

use taste_core::{DisplayRecord, FieldValue, RawRecord, SOURCE_FIELDS};

/// Projects `record` onto the eight output fields. The rank is left at 0.
#[must_use]
pub fn project(record: &RawRecord) -> DisplayRecord {
    let [name, road_address, phone, category, score, user_score, favorites_count, review_count] =
        SOURCE_FIELDS.map(|(key, _)| record.field(key));

    DisplayRecord {
        rank: 0,
        name,
        road_address,
        phone,
        category,
        score,
        user_score,
        favorites_count,
        review_count,
    }
}

/// Projects, sorts, and ranks `records`.
///
/// Rows are ordered by score (descending), then review count (descending).
/// A value with no numeric reading sorts after every numeric one. The sort is
/// stable, so ties keep their input order. Ranks run `1..=N` in final order.
#[must_use]
pub fn rank_records(records: &[RawRecord]) -> Vec<DisplayRecord> {
    let mut rows: Vec<DisplayRecord> = records.iter().map(project).collect();

    rows.sort_by(|a, b| {
        descending(&a.score, &b.score).then_with(|| descending(&a.review_count, &b.review_count))
    });

    for (rank, row) in (1u32..).zip(rows.iter_mut()) {
        row.rank = rank;
    }

    rows
}

fn descending(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a.sort_key(), b.sort_key()) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn raw(value: Value) -> RawRecord {
        RawRecord::from_value(value).expect("fixture must be an object")
    }

    fn names(rows: &[DisplayRecord]) -> Vec<String> {
        rows.iter().map(|r| r.name.to_string()).collect()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(rank_records(&[]).is_empty());
    }

    #[test]
    fn orders_by_score_then_review_count() {
        let records = vec![
            raw(json!({"nm": "a", "score": 80, "review_cnt": 10})),
            raw(json!({"nm": "b", "score": 95, "review_cnt": 3})),
            raw(json!({"nm": "c", "score": 80, "review_cnt": 42})),
            raw(json!({"nm": "d", "score": 60, "review_cnt": 500})),
        ];
        let rows = rank_records(&records);
        assert_eq!(names(&rows), ["b", "c", "a", "d"]);

        for pair in rows.windows(2) {
            let (s0, s1) = (pair[0].score.sort_key(), pair[1].score.sort_key());
            assert!(s0 >= s1);
            if s0 == s1 {
                assert!(pair[0].review_count.sort_key() >= pair[1].review_count.sort_key());
            }
        }
    }

    #[test]
    fn ranks_are_one_based_and_contiguous() {
        let records: Vec<RawRecord> = (0..7)
            .map(|i| raw(json!({"nm": format!("r{i}"), "score": i})))
            .collect();
        let rows = rank_records(&records);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.rank as usize, i + 1);
        }
        assert_eq!(rows[0].name.to_string(), "r6");
    }

    #[test]
    fn hongdae_two_records_rank_higher_score_first() {
        let records = vec![
            raw(json!({"nm": "low", "score": 4.5})),
            raw(json!({"nm": "high", "score": 4.8})),
        ];
        let rows = rank_records(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].name.to_string(), "high");
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].name.to_string(), "low");
    }

    #[test]
    fn missing_fields_become_empty_values() {
        let rows = rank_records(&[raw(json!({"nm": "only a name"}))]);
        let row = &rows[0];
        assert_eq!(row.name, FieldValue::Text("only a name".into()));
        assert_eq!(row.road_address, FieldValue::Empty);
        assert_eq!(row.phone, FieldValue::Empty);
        assert_eq!(row.category, FieldValue::Empty);
        assert_eq!(row.score, FieldValue::Empty);
        assert_eq!(row.user_score, FieldValue::Empty);
        assert_eq!(row.favorites_count, FieldValue::Empty);
        assert_eq!(row.review_count, FieldValue::Empty);
    }

    #[test]
    fn missing_score_sorts_after_numeric_scores() {
        let records = vec![
            raw(json!({"nm": "unscored"})),
            raw(json!({"nm": "zero", "score": 0})),
            raw(json!({"nm": "text", "score": "n/a"})),
            raw(json!({"nm": "scored", "score": "71"})),
        ];
        let rows = rank_records(&records);
        assert_eq!(names(&rows), ["scored", "zero", "unscored", "text"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            raw(json!({"nm": "first", "score": 90, "review_cnt": 5})),
            raw(json!({"nm": "second", "score": 90, "review_cnt": 5})),
            raw(json!({"nm": "third", "score": 90, "review_cnt": 5})),
        ];
        assert_eq!(names(&rank_records(&records)), ["first", "second", "third"]);
    }

    #[test]
    fn ranking_is_repeatable() {
        let records = vec![
            raw(json!({"nm": "x", "score": 88, "review_cnt": 1})),
            raw(json!({"nm": "y", "score": 88})),
            raw(json!({"nm": "z", "score": 91.5, "review_cnt": "12"})),
        ];
        let first = rank_records(&records);
        let second = rank_records(&records);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
