//! Movie models, DTOs and the BSON storage shape.
//!
//! JSON and BSON share field names (`boxOffice` in both); only the
//! identifier differs (`id` on the wire, `_id` in the store).

use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use movies_core::types::MovieId;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// Box-office figures in an unspecified currency unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxOffice {
    #[serde(default, deserialize_with = "null_as_default")]
    pub budget: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gross: u64,
}

/// A stored movie as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub name: String,
    pub year: String,
    pub directors: Vec<String>,
    pub writers: Vec<String>,
    pub box_office: BoxOffice,
}

impl Movie {
    /// Build the record a store holds after inserting `input` under `id`.
    pub fn from_create(id: MovieId, input: CreateMovie) -> Self {
        Self {
            id,
            name: input.name,
            year: input.year,
            directors: input.directors,
            writers: input.writers,
            box_office: input.box_office,
        }
    }

    /// Apply `$set` semantics: overwrite exactly the fields present in `update`.
    pub fn apply_update(&mut self, update: &UpdateMovie) {
        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(year) = &update.year {
            self.year.clone_from(year);
        }
        if let Some(directors) = &update.directors {
            self.directors.clone_from(directors);
        }
        if let Some(writers) = &update.writers {
            self.writers.clone_from(writers);
        }
        if let Some(box_office) = &update.box_office {
            if let Some(budget) = box_office.budget {
                self.box_office.budget = budget;
            }
            if let Some(gross) = box_office.gross {
                self.box_office.gross = gross;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Payload for creating a movie. Any `id` sent by the client is ignored.
///
/// An explicit `null` list or `boxOffice` is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub name: String,
    pub year: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub directors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub writers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub box_office: BoxOffice,
}

/// Partial box-office update; omitted figures keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBoxOffice {
    pub budget: Option<u64>,
    pub gross: Option<u64>,
}

/// Payload for a partial update. Absent (or `null`) fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateMovie {
    pub name: Option<String>,
    pub year: Option<String>,
    pub directors: Option<Vec<String>>,
    pub writers: Option<Vec<String>>,
    pub box_office: Option<UpdateBoxOffice>,
}

impl UpdateMovie {
    /// True when the payload names no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.year.is_none()
            && self.directors.is_none()
            && self.writers.is_none()
            && self
                .box_office
                .as_ref()
                .map_or(true, |b| b.budget.is_none() && b.gross.is_none())
    }

    /// Build the body of a `$set` operator with one entry per provided field.
    ///
    /// Box-office figures use dotted paths so a missing sibling is preserved.
    pub fn to_set_document(&self) -> Result<Document, StoreError> {
        let mut set = Document::new();
        if let Some(name) = &self.name {
            set.insert("name", name.as_str());
        }
        if let Some(year) = &self.year {
            set.insert("year", year.as_str());
        }
        if let Some(directors) = &self.directors {
            set.insert("directors", directors.clone());
        }
        if let Some(writers) = &self.writers {
            set.insert("writers", writers.clone());
        }
        if let Some(box_office) = &self.box_office {
            if let Some(budget) = box_office.budget {
                set.insert("boxOffice.budget", Bson::Int64(to_stored("budget", budget)?));
            }
            if let Some(gross) = box_office.gross {
                set.insert("boxOffice.gross", Bson::Int64(to_stored("gross", gross)?));
            }
        }
        Ok(set)
    }
}

/// Response body of a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertResult {
    #[serde(rename = "InsertedID")]
    pub inserted_id: MovieId,
}

// ---------------------------------------------------------------------------
// Storage shape
// ---------------------------------------------------------------------------

/// A document in the movies collection.
///
/// Older writers store empty lists as `null`; a `null` field decodes to its
/// default just like a missing one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovieDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub directors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub writers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub box_office: BoxOfficeDocument,
}

/// Stored box-office figures. BSON has no unsigned 64-bit type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxOfficeDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub budget: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub gross: i64,
}

impl BoxOfficeDocument {
    pub fn from_box_office(box_office: &BoxOffice) -> Result<Self, StoreError> {
        Ok(Self {
            budget: to_stored("budget", box_office.budget)?,
            gross: to_stored("gross", box_office.gross)?,
        })
    }
}

impl MovieDocument {
    /// Storage shape for a new record. `_id` is left for the store to assign.
    pub fn from_create(input: &CreateMovie) -> Result<Self, StoreError> {
        Ok(Self {
            id: None,
            name: input.name.clone(),
            year: input.year.clone(),
            directors: input.directors.clone(),
            writers: input.writers.clone(),
            box_office: BoxOfficeDocument::from_box_office(&input.box_office)?,
        })
    }
}

impl TryFrom<MovieDocument> for Movie {
    type Error = StoreError;

    fn try_from(document: MovieDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| StoreError::CorruptRecord("document has no _id".into()))?;
        let box_office = BoxOffice {
            budget: from_stored(id, "budget", document.box_office.budget)?,
            gross: from_stored(id, "gross", document.box_office.gross)?,
        };
        Ok(Self {
            id: MovieId::from(id),
            name: document.name,
            year: document.year,
            directors: document.directors,
            writers: document.writers,
            box_office,
        })
    }
}

/// Filter document matching exactly one record by identifier.
pub fn id_filter(id: MovieId) -> Document {
    doc! { "_id": id.object_id() }
}

/// Deserialize `null` as `T::default()`. Missing fields are covered by
/// `#[serde(default)]` on the field or container.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn to_stored(field: &'static str, value: u64) -> Result<i64, StoreError> {
    i64::try_from(value).map_err(|_| StoreError::OutOfRange { field, value })
}

fn from_stored(id: ObjectId, field: &str, value: i64) -> Result<u64, StoreError> {
    u64::try_from(value).map_err(|_| {
        StoreError::CorruptRecord(format!("movie {id} has negative boxOffice.{field}: {value}"))
    })
}
