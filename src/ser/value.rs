use indexmap::IndexMap;
use serde::ser::{self, Serialize};

use super::key::KeySerializer;
use crate::error::{Error, Result};
use crate::value::{Map, Value};

/// Converts any `Serialize` type into a [`Value`].
///
/// - `None` becomes [`Value::Absent`], so it is left out of the querystring
/// - `()` and unit structs become [`Value::Null`]
/// - structs and maps become mappings, keeping their field order
/// - sequences and tuples become sequences
/// - unit variants become their name; other variants become a mapping
///   from the variant name to their contents
///
/// Byte buffers and map keys that are not strings, numbers, booleans or
/// unit variants fail with [`Error::Unsupported`].
///
/// ```
/// # use serde::Serialize;
/// use qs_stringify::Value;
///
/// #[derive(Serialize)]
/// struct Page {
///     size: u32,
///     cursor: Option<String>,
/// }
///
/// let value = qs_stringify::to_value(&Page { size: 20, cursor: None }).unwrap();
/// assert_eq!(
///     value,
///     Value::from_iter([("size", Value::from(20u32)), ("cursor", Value::Absent)])
/// );
/// ```
pub fn to_value<T: Serialize + ?Sized>(input: &T) -> Result<Value> {
    input.serialize(ValueSerializer)
}

macro_rules! serialize_number {
    (
        $($ty:ty => $meth:ident,)*) => {
        $(
            fn $meth(self, v: $ty) -> Result<Self::Ok> {
                Ok(Value::from(v))
            }
        )*
    };
}

/// A serializer producing a [`Value`] tree.
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;
    type SerializeSeq = SeqSerializer;
    type SerializeTuple = SeqSerializer;
    type SerializeTupleStruct = SeqSerializer;
    type SerializeTupleVariant = TupleVariantSerializer;
    type SerializeMap = MapSerializer;
    type SerializeStruct = MapSerializer;
    type SerializeStructVariant = StructVariantSerializer;

    serialize_number! {
        u8  => serialize_u8,
        u16 => serialize_u16,
        u32 => serialize_u32,
        u64 => serialize_u64,
        i8  => serialize_i8,
        i16 => serialize_i16,
        i32 => serialize_i32,
        i64 => serialize_i64,
        f32 => serialize_f32,
        f64 => serialize_f64,
    }

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(Value::Bool(v))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(Value::String(v.to_owned()))
    }

    fn serialize_bytes(self, _value: &[u8]) -> Result<Self::Ok> {
        Err(Error::Unsupported("byte buffer"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(Value::Absent)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        Ok(Value::String(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok> {
        Ok(tagged(variant, value.serialize(self)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqSerializer::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        Ok(SeqSerializer::new(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(SeqSerializer::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(TupleVariantSerializer {
            variant,
            seq: SeqSerializer::new(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapSerializer::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        Ok(MapSerializer::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(StructVariantSerializer {
            variant,
            map: MapSerializer::new(len),
        })
    }
}

/// Wraps `inner` in a single-entry mapping keyed by the variant name.
fn tagged(variant: &'static str, inner: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(variant.to_owned(), inner);
    Value::Mapping(map)
}

#[doc(hidden)]
pub struct SeqSerializer {
    seq: Vec<Value>,
}

impl SeqSerializer {
    fn new(len: usize) -> Self {
        Self {
            seq: Vec::with_capacity(len),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.seq.push(value.serialize(ValueSerializer)?);
        Ok(())
    }
}

impl ser::SerializeSeq for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::Sequence(self.seq))
    }
}

impl ser::SerializeTuple for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::Sequence(self.seq))
    }
}

impl ser::SerializeTupleStruct for SeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::Sequence(self.seq))
    }
}

#[doc(hidden)]
pub struct TupleVariantSerializer {
    variant: &'static str,
    seq: SeqSerializer,
}

impl ser::SerializeTupleVariant for TupleVariantSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.seq.push(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(tagged(self.variant, Value::Sequence(self.seq.seq)))
    }
}

#[doc(hidden)]
pub struct MapSerializer {
    map: Map,
    next_key: Option<String>,
}

impl MapSerializer {
    fn new(len: usize) -> Self {
        Self {
            map: IndexMap::with_capacity(len),
            next_key: None,
        }
    }

    fn insert<T: ?Sized + Serialize>(&mut self, key: String, value: &T) -> Result<()> {
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }
}

impl ser::SerializeMap for MapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        self.next_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let Some(key) = self.next_key.take() else {
            return Err(Error::Custom(
                "internal error: value serialized before its key".to_string(),
            ));
        };
        self.insert(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::Mapping(self.map))
    }
}

impl ser::SerializeStruct for MapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.insert(key.to_owned(), value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::Mapping(self.map))
    }
}

#[doc(hidden)]
pub struct StructVariantSerializer {
    variant: &'static str,
    map: MapSerializer,
}

impl ser::SerializeStructVariant for StructVariantSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.map.insert(key.to_owned(), value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(tagged(self.variant, Value::Mapping(self.map.map)))
    }
}
