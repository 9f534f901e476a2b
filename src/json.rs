//! Converting nodes from and to their ESTree JSON encoding.
//!
//! Concrete nodes implement `FromJSON`, which fails unless the input carries
//! exactly their `type`. Unions implement `FromJSONUnion`, whose `trial`
//! tells apart "this JSON is not one of mine" from "this JSON is one of mine,
//! but broken", so that a union built from other unions stops at the first
//! member that recognizes its input instead of masking its error.

use crate::error::FromJSONError;
use crate::location::SourceLocation;

use serde_json::{Map, Number, Value as JSON};

/// A JSON object, keys kept in insertion order.
pub type Object = Map<String, JSON>;

/// A data structure that may be imported from JSON.
pub trait FromJSON: Sized {
    fn import(value: &JSON) -> Result<Self, FromJSONError>;
}

/// A data structure that may be exported to JSON.
pub trait ToJSON {
    fn export(&self) -> JSON;
}

/// The outcome of trying to decode JSON as a member of a union.
#[derive(Debug)]
pub enum Trial<T> {
    /// The input was recognized and decoded.
    Match(T),

    /// The input was recognized, but could not be decoded.
    Broken(FromJSONError),

    /// The input does not belong to this union.
    Mismatch(FromJSONError),
}
impl<T> Trial<T> {
    /// Wrap the result of decoding input that was already recognized.
    pub fn recognized(result: Result<T, FromJSONError>) -> Self {
        match result {
            Ok(value) => Trial::Match(value),
            Err(err) => Trial::Broken(err),
        }
    }

    /// `true` unless the input was not recognized at all.
    pub fn is_matched(&self) -> bool {
        match *self {
            Trial::Mismatch(_) => false,
            _ => true,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Trial<U> {
        match self {
            Trial::Match(value) => Trial::Match(f(value)),
            Trial::Broken(err) => Trial::Broken(err),
            Trial::Mismatch(err) => Trial::Mismatch(err),
        }
    }

    pub fn into_result(self) -> Result<T, FromJSONError> {
        match self {
            Trial::Match(value) => Ok(value),
            Trial::Broken(err) | Trial::Mismatch(err) => Err(err),
        }
    }

    /// The (value, matched, error) triple.
    pub fn into_parts(self) -> (Option<T>, bool, Option<FromJSONError>) {
        match self {
            Trial::Match(value) => (Some(value), true, None),
            Trial::Broken(err) => (None, true, Some(err)),
            Trial::Mismatch(err) => (None, false, Some(err)),
        }
    }
}

/// A union of node types, decoded by trial.
pub trait FromJSONUnion: Sized {
    /// The name of the union, used in error messages.
    const NAME: &'static str;

    fn trial(value: &JSON) -> Trial<Self>;
}

/// Implement `FromJSON` for unions, by way of their `trial`.
macro_rules! import_by_trial {
    ($($name:ident),* $(,)*) => {
        $(
            impl $crate::json::FromJSON for $name {
                fn import(value: &serde_json::Value) -> Result<Self, $crate::error::FromJSONError> {
                    <Self as $crate::json::FromJSONUnion>::trial(value).into_result()
                }
            }
        )*
    }
}

/// The discriminator of a JSON node, without decoding anything else.
pub fn peek_type(value: &JSON) -> Option<&str> {
    value.as_object()?.get("type")?.as_str()
}

/// Check that `value` is a node whose discriminator is `expected`.
pub fn expect_type<'a>(value: &'a JSON, expected: &str) -> Result<&'a Object, FromJSONError> {
    match value.as_object() {
        Some(object) if object.get("type").and_then(JSON::as_str) == Some(expected) => {
            debug!(target: "estree_decode", "Decoding {}", expected);
            Ok(object)
        }
        _ => Err(FromJSONError::wrong_type(expected, value)),
    }
}

/// Start the JSON object of a node: its `type`, then its `loc` unless unknown.
pub fn node_object(type_name: &str, loc: &SourceLocation) -> Object {
    let mut object = Object::new();
    object.insert("type".to_string(), JSON::from(type_name));
    if !loc.is_zero() {
        object.insert("loc".to_string(), loc.export());
    }
    object
}

/// Insert `value` under `key`, or nothing at all if it's absent.
pub fn insert_optional<T: ToJSON>(object: &mut Object, key: &str, value: &Option<T>) {
    if let Some(ref value) = *value {
        object.insert(key.to_string(), value.export());
    }
}

/// Remove every `loc` key from a JSON tree.
pub fn strip_locations(value: &mut JSON) {
    match *value {
        JSON::Object(ref mut object) => {
            object.remove("loc");
            for (_, child) in object.iter_mut() {
                strip_locations(child);
            }
        }
        JSON::Array(ref mut array) => {
            for child in array.iter_mut() {
                strip_locations(child);
            }
        }
        _ => {}
    }
}

/// Largest magnitude below which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Encode a number as a JSON integer whenever that is lossless.
///
/// JSON cannot represent NaN or the infinities, which become `null`.
pub fn number_to_json(value: f64) -> JSON {
    let is_negative_zero = value == 0.0 && value.is_sign_negative();
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER && !is_negative_zero {
        return JSON::from(value as i64);
    }
    match Number::from_f64(value) {
        Some(number) => JSON::Number(number),
        None => {
            warn!(target: "estree_encode", "Cannot represent {} in JSON, writing null", value);
            JSON::Null
        }
    }
}

impl FromJSON for bool {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        value
            .as_bool()
            .ok_or_else(|| FromJSONError::wrong_type("Boolean", value))
    }
}
impl FromJSON for f64 {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        value
            .as_f64()
            .ok_or_else(|| FromJSONError::wrong_type("Number", value))
    }
}
impl FromJSON for String {
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| FromJSONError::wrong_type("String", value))
    }
}

/// Arrays. An absent list reads as an empty one.
impl<T> FromJSON for Vec<T>
where
    T: FromJSON,
{
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        match *value {
            JSON::Array(ref array) => {
                let mut result = Vec::with_capacity(array.len());
                for item in array {
                    result.push(T::import(item)?);
                }
                Ok(result)
            }
            JSON::Null => Ok(Vec::new()),
            _ => Err(FromJSONError::wrong_type("Array", value)),
        }
    }
}
impl<T> FromJSON for Option<T>
where
    T: FromJSON,
{
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        if value.is_null() {
            return Ok(None);
        }
        T::import(value).map(Some)
    }
}
impl<T> FromJSON for Box<T>
where
    T: FromJSON,
{
    fn import(value: &JSON) -> Result<Self, FromJSONError> {
        T::import(value).map(Box::new)
    }
}

impl ToJSON for str {
    fn export(&self) -> JSON {
        JSON::from(self)
    }
}
impl ToJSON for String {
    fn export(&self) -> JSON {
        JSON::from(self.as_str())
    }
}
impl ToJSON for bool {
    fn export(&self) -> JSON {
        JSON::Bool(*self)
    }
}
impl ToJSON for f64 {
    fn export(&self) -> JSON {
        number_to_json(*self)
    }
}
impl<T> ToJSON for Vec<T>
where
    T: ToJSON,
{
    fn export(&self) -> JSON {
        JSON::Array(self.iter().map(T::export).collect())
    }
}
impl<T> ToJSON for Option<T>
where
    T: ToJSON,
{
    fn export(&self) -> JSON {
        match *self {
            None => JSON::Null,
            Some(ref value) => value.export(),
        }
    }
}
impl<T> ToJSON for Box<T>
where
    T: ToJSON + ?Sized,
{
    fn export(&self) -> JSON {
        (**self).export()
    }
}
