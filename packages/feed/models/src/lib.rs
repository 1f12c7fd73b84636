#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Wire format types for the roster record feed.
//!
//! The remote endpoint returns a JSON envelope wrapping an array of
//! person-like records. Each [`Record`] flattens into a fixed-width
//! [`Row`] of six strings; field contents are passed through verbatim
//! with no validation or type coercion.

use serde::Deserialize;

/// Number of string fields in a flattened [`Row`].
pub const ROW_WIDTH: usize = 6;

/// A flattened record: exactly six strings in the order
/// [first, last, email, address, created, balance].
pub type Row = [String; ROW_WIDTH];

/// Top-level JSON envelope returned by the feed endpoint.
///
/// Only the `results` key is read; any other top-level fields are
/// ignored. An absent `results` key decodes to an empty list, which
/// the fetcher rejects as an empty batch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    /// The batch of records in this response.
    #[serde(default)]
    pub results: Vec<Record>,
}

/// One record from the feed.
///
/// All six fields are strings on the wire. `created` and `balance` are
/// deliberately not parsed into dates or numbers; missing fields decode
/// to empty strings rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// First name.
    #[serde(default)]
    pub first: String,
    /// Last name.
    #[serde(default)]
    pub last: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Creation timestamp, kept in string form.
    #[serde(default)]
    pub created: String,
    /// Account balance, kept in string form.
    #[serde(default)]
    pub balance: String,
}

impl Record {
    /// Flattens the record into a [`Row`] in the fixed field order.
    #[must_use]
    pub fn into_row(self) -> Row {
        [
            self.first,
            self.last,
            self.email,
            self.address,
            self.created,
            self.balance,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let json = r#"{"results":[{"first":"A","last":"B","email":"a@b.com","address":"1 Rd","created":"2020-01-01","balance":"10.5"}]}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.results.len(), 1);
        assert_eq!(
            envelope.results[0].clone().into_row(),
            [
                "A".to_owned(),
                "B".to_owned(),
                "a@b.com".to_owned(),
                "1 Rd".to_owned(),
                "2020-01-01".to_owned(),
                "10.5".to_owned(),
            ]
        );
    }

    #[test]
    fn missing_fields_decode_to_empty_strings() {
        let json = r#"{"results":[{"first":"A"}]}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let row = envelope.results[0].clone().into_row();
        assert_eq!(row[0], "A");
        assert!(row[1..].iter().all(String::is_empty));
    }

    #[test]
    fn missing_results_key_decodes_to_empty_list() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.results.is_empty());
    }

    #[test]
    fn extra_top_level_fields_are_ignored() {
        let json = r#"{"results":[],"page":3,"next":"abc"}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        assert!(envelope.results.is_empty());
    }

    #[test]
    fn field_values_pass_through_verbatim() {
        let json = r#"{"results":[{"first":"  A ","balance":"not-a-number"}]}"#;
        let envelope: Envelope = serde_json::from_str(json).unwrap();
        let row = envelope.results[0].clone().into_row();
        assert_eq!(row[0], "  A ");
        assert_eq!(row[5], "not-a-number");
    }
}
