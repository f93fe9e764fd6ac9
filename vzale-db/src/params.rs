//! Positional query parameters
//!
//! Values are bound in order to `$1`, `$2`, ... and encoded eagerly, so an
//! unencodable value fails at bind time rather than inside the query.

use std::fmt;

use sqlx::postgres::PgArguments;
use sqlx::{Arguments, Encode, Postgres, Type};

use crate::error::DbResult;

#[derive(Default)]
pub struct Params {
    args: PgArguments,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next positional parameter.
    pub fn bind<'q, T>(mut self, value: T) -> DbResult<Self>
    where
        T: Encode<'q, Postgres> + Type<Postgres> + 'q,
    {
        <PgArguments as Arguments<'q>>::add(&mut self.args, value).map_err(sqlx::Error::Encode)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        Arguments::len(&self.args)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn into_arguments(self) -> PgArguments {
        self.args
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params").field("len", &self.len()).finish()
    }
}

/// Build [`Params`] from a list of values.
///
/// Evaluates to `DbResult<Params>`:
///
/// ```ignore
/// let rows = vzale_db::global::fetch(
///     "SELECT * FROM teams WHERE tournament_id = $1 AND status = $2",
///     params![tournament_id, "approved"]?,
/// )
/// .await?;
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::core::result::Result::<$crate::Params, $crate::DbError>::Ok($crate::Params::new())
    };
    ($($value:expr),+ $(,)?) => {{
        let params: $crate::DbResult<$crate::Params> =
            ::core::result::Result::Ok($crate::Params::new());
        $(let params = params.and_then(|p| p.bind($value));)+
        params
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn bind_counts_values_in_order() {
        let params = Params::new()
            .bind(42_i64)
            .unwrap()
            .bind("approved")
            .unwrap()
            .bind(Option::<String>::None)
            .unwrap();
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn macro_builds_params() {
        let team = String::from("Ballers");
        let params = crate::params![7_i32, &team, true].unwrap();
        assert_eq!(params.len(), 3);

        let empty = crate::params![].unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn debug_shows_only_count() {
        let params = crate::params![1_i32, "secret"].unwrap();
        let debug = format!("{params:?}");
        assert_eq!(debug, "Params { len: 2 }");
    }
}
