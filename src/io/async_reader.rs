//! Asynchronous CSV reader with batch interface
//!
//! Reads raw rows from an async source in batches for the parallel strategy.
//!
//! # Architecture
//!
//! ```text
//! tokio File → compat → csv-async reader → batches of (row_index, RawRow)
//! ```
//!
//! Rows are numbered from 0 across the whole file, so the normalizer sees the
//! same indices as with the synchronous reader regardless of batch size.

use crate::types::{AnalyticsError, RawRow};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;

/// A batch of raw rows tagged with their position in the source
pub type RowBatch = Vec<(usize, RawRow)>;

/// Asynchronous CSV reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
    row_index: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// Configured like the synchronous reader: no header handling, flexible
    /// field counts, fields kept exactly as tokenized.
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .create_reader(reader);

        Self {
            csv_reader,
            row_index: 0,
        }
    }

    /// Read up to `batch_size` rows
    ///
    /// Returns an empty batch at end of input. A record that cannot be read
    /// as CSV aborts with an error.
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<RowBatch, AnalyticsError> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut record = csv_async::StringRecord::new();

        while batch.len() < batch_size {
            if !self.csv_reader.read_record(&mut record).await? {
                break;
            }
            let row: RawRow = record.iter().collect();
            batch.push((self.row_index, row));
            self.row_index += 1;
        }

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::io::Cursor;

    const CONTENT: &str = "InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country\n\
        A1,S1,Widget,3,1/5/2021 10:00,2.50,C1,US\n\
        A2,S2,Widget,2,1/6/2021 11:30,2.50,C2,US\n";

    #[tokio::test]
    async fn test_async_reader_read_batch_keeps_global_indices() {
        let mut reader = AsyncReader::new(Cursor::new(CONTENT.as_bytes()));

        let batch = reader.read_batch(2).await.unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].0, 0);
        assert_eq!(&batch[0].1[0], "InvoiceNo");
        assert_eq!(batch[1].0, 1);

        let batch = reader.read_batch(2).await.unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].0, 2);
        assert_eq!(&batch[0].1[0], "A2");

        let batch = reader.read_batch(2).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_empty_input() {
        let mut reader = AsyncReader::new(Cursor::new("".as_bytes()));
        let batch = reader.read_batch(10).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn test_async_reader_flexible_rows() {
        let content = "h1,h2\nA1,S1,Widget\n";
        let mut reader = AsyncReader::new(Cursor::new(content.as_bytes()));

        let batch = reader.read_batch(10).await.unwrap();
        assert_eq!(batch[0].1.len(), 2);
        assert_eq!(batch[1].1.len(), 3);
    }

    #[tokio::test]
    async fn test_async_reader_keeps_surrounding_whitespace() {
        let content = "A1,S1,Widget ,3, 1/5/2021 10:00,2.50, ,US\n";
        let mut reader = AsyncReader::new(Cursor::new(content.as_bytes()));

        let batch = reader.read_batch(10).await.unwrap();
        assert_eq!(&batch[0].1[2], "Widget ");
        assert_eq!(&batch[0].1[4], " 1/5/2021 10:00");
        assert_eq!(&batch[0].1[6], " ");
    }
}
