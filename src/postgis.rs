//! [`sqlx`] bindings for PostGIS `geometry` columns.
//!
//! ```ignore
//! let row: (PostgisGeometry,) = sqlx::query_as("SELECT geom FROM places WHERE id = $1")
//!     .bind(id)
//!     .fetch_one(&pool)
//!     .await?;
//!
//! sqlx::query("INSERT INTO places (geom) VALUES ($1)")
//!     .bind(geo_ewkb::value(Some(&geometry), 4326))
//!     .execute(&pool)
//!     .await?;
//! ```

use geo::Geometry;
use log::error;
use sqlx::encode::IsNull;
use sqlx::postgres::PgTypeInfo;
use sqlx::{Decode, Encode, Postgres, Type};

use crate::error::{EwkbError, Result};
use crate::scanner::{GeometryScanner, GeometryValue, SqlValue};

/// A geometry read from a PostGIS column, with its SRID (0 if it had none).
#[derive(Clone, Debug, PartialEq)]
pub struct PostgisGeometry {
    pub geometry: Geometry,
    pub srid: i32,
}

impl PostgisGeometry {
    /// Decode the raw column bytes. Hex escaped and SRID prefixed data are
    /// accepted as by [`GeometryScanner`]; empty data is truncated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut scanner = GeometryScanner::new();
        scanner.scan(SqlValue::Bytes(bytes))?;
        let geometry = scanner.geometry.ok_or(EwkbError::Truncated)?;
        Ok(Self {
            geometry,
            srid: scanner.srid,
        })
    }
}

impl<'r> Decode<'r, Postgres> for PostgisGeometry {
    fn decode(
        value: <Postgres as sqlx::database::HasValueRef<'r>>::ValueRef,
    ) -> std::result::Result<Self, sqlx::error::BoxDynError> {
        Ok(Self::from_bytes(value.as_bytes()?)?)
    }
}

impl Type<Postgres> for PostgisGeometry {
    fn type_info() -> <Postgres as sqlx::Database>::TypeInfo {
        PgTypeInfo::with_name("geometry")
    }
}

impl<'q> Encode<'q, Postgres> for GeometryValue<'_> {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as sqlx::database::HasArguments<'q>>::ArgumentBuffer,
    ) -> IsNull {
        match self.to_value() {
            Ok(Some(bytes)) => {
                buf.extend_from_slice(&bytes);
                IsNull::No
            }
            Ok(None) => IsNull::Yes,
            Err(err) => {
                // sqlx 0.7 has no way to fail an encode
                error!("could not encode geometry as ewkb, binding NULL: {err}");
                IsNull::Yes
            }
        }
    }
}

impl Type<Postgres> for GeometryValue<'_> {
    fn type_info() -> <Postgres as sqlx::Database>::TypeInfo {
        PgTypeInfo::with_name("geometry")
    }
}
