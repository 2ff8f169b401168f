//! Presence verification: the store-backed cardinality oracle behind the
//! `unique` and `exists` rules.
//!
//! The engine only specifies the contract; implementations live with the
//! host application (database lookups, in-memory fixtures in tests). Calls
//! are blocking; retries, if desired, belong to the implementation.

/// Answers cardinality queries for uniqueness/existence checks.
pub trait PresenceVerifier {
    /// Count records in `collection` whose `column` equals `value`,
    /// optionally excluding one record by id, with arbitrary extra
    /// equality conditions.
    fn count(
        &self,
        collection: &str,
        column: &str,
        value: &str,
        exclude_id: Option<&str>,
        id_column: Option<&str>,
        extra: &[(String, String)],
    ) -> u64;

    /// Count records whose `column` is any of `values`.
    fn count_many(
        &self,
        collection: &str,
        column: &str,
        values: &[String],
        extra: &[(String, String)],
    ) -> u64;
}

/// Parsed `unique:collection,column,exclude_id,id_column,extra...` params.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct UniqueParams<'a> {
    pub collection: &'a str,
    pub column: Option<&'a str>,
    pub exclude_id: Option<&'a str>,
    pub id_column: Option<&'a str>,
    pub extra: Vec<(String, String)>,
}

pub(crate) fn parse_unique_params(params: &[String]) -> UniqueParams<'_> {
    // A literal NULL placeholder means "no exclusion" so that trailing
    // extra conditions can still be specified positionally.
    let exclude_id = params
        .get(2)
        .map(String::as_str)
        .filter(|id| !id.is_empty() && !id.eq_ignore_ascii_case("null"));
    UniqueParams {
        collection: params.first().map(String::as_str).unwrap_or_default(),
        column: params.get(1).map(String::as_str).filter(|c| !c.is_empty()),
        exclude_id,
        id_column: params.get(3).map(String::as_str).filter(|c| !c.is_empty()),
        extra: parse_extra_conditions(&params[params.len().min(4)..]),
    }
}

/// Parsed `exists:collection,column,extra...` params.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ExistsParams<'a> {
    pub collection: &'a str,
    pub column: Option<&'a str>,
    pub extra: Vec<(String, String)>,
}

pub(crate) fn parse_exists_params(params: &[String]) -> ExistsParams<'_> {
    ExistsParams {
        collection: params.first().map(String::as_str).unwrap_or_default(),
        column: params.get(1).map(String::as_str).filter(|c| !c.is_empty()),
        extra: parse_extra_conditions(&params[params.len().min(2)..]),
    }
}

/// Pair up trailing parameters as (column, value) equality conditions.
/// A dangling odd column gets an empty value.
fn parse_extra_conditions(params: &[String]) -> Vec<(String, String)> {
    params
        .chunks(2)
        .map(|pair| {
            (
                pair[0].clone(),
                pair.get(1).cloned().unwrap_or_default(),
            )
        })
        .collect()
}
