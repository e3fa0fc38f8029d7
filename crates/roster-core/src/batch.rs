//! Parallel decoding of many rows.
//!
//! Rows are independent of each other. Non-mutating decodes only share
//! read-only state, so they fan out over the rayon pool without coordination.
//! Consuming decodes hand each worker exclusive access to its own row.

use rayon::prelude::*;
use roster_model::{DecodeOptions, DecodedRecord, FlatRecord};
use tracing::debug;

use crate::assemble::RecordDecoder;

/// Decodes every row without modifying any of them.
///
/// Each row's identifier is read from `options.id_field`. Output order
/// matches input order.
pub fn decode_batch(records: &[FlatRecord], options: &DecodeOptions) -> Vec<DecodedRecord> {
    let decoder = RecordDecoder::new(options);
    let decoded: Vec<DecodedRecord> = records
        .par_iter()
        .map(|record| decoder.decode_row(record).record)
        .collect();
    debug!(records = decoded.len(), "decoded batch");
    decoded
}

/// Decodes every row, removing consumed fields when `options.mode` says so.
pub fn assemble_batch(records: &mut [FlatRecord], options: &DecodeOptions) -> Vec<DecodedRecord> {
    let decoder = RecordDecoder::new(options);
    let decoded: Vec<DecodedRecord> = records
        .par_iter_mut()
        .map(|record| decoder.assemble_row(record))
        .collect();
    debug!(records = decoded.len(), mode = ?options.mode, "assembled batch");
    decoded
}

#[cfg(test)]
mod tests {
    use roster_model::{ConsumptionMode, FieldValue};

    use super::*;

    fn rows(count: i64) -> Vec<FlatRecord> {
        (1..=count)
            .map(|id| {
                [
                    ("ID", FieldValue::Int(id)),
                    ("grade", FieldValue::from(format!("O{id}"))),
                    ("note", FieldValue::from("keep")),
                ]
                .into_iter()
                .collect()
            })
            .collect()
    }

    #[test]
    fn batch_preserves_order_and_ids() {
        let records = rows(50);
        let decoded = decode_batch(&records, &DecodeOptions::default());
        assert_eq!(decoded.len(), 50);
        for (idx, record) in decoded.iter().enumerate() {
            let id = i64::try_from(idx).expect("small index") + 1;
            assert_eq!(record.record_id, FieldValue::Int(id));
            assert!(!record.unmapped.contains_key("ID"));
            assert!(record.unmapped.contains_key("note"));
        }
    }

    #[test]
    fn consuming_batch_strips_rows() {
        let mut records = rows(3);
        let options = DecodeOptions::default().with_mode(ConsumptionMode::Consume);
        let decoded = assemble_batch(&mut records, &options);
        assert_eq!(decoded.len(), 3);
        for record in &records {
            assert_eq!(record.keys().collect::<Vec<_>>(), vec!["note"]);
        }
    }
}
