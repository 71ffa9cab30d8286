//! Rendering through serde.
//!
//! Any [`Serialize`] type renders without a `Render` impl. Values are written
//! straight to the sink while they are serialized, and every part of the serde
//! data model maps onto the same category its static counterpart has:
//!
//! | serde | Category | Output |
//! |-------|----------|--------|
//! | bool, integer, float, char, string, unit variant | Streamable | `Display` text, strings unquoted |
//! | tuple, tuple struct, newtype struct, unit | Tuple | `(a, b)`, `()` |
//! | seq, bytes | Sequence | `[a, b]` |
//! | `None` / `Some(x)` | Sequence | `[]` / `[x]` |
//! | map, struct | Sequence of Pairings | `[(key, value), ...]` |
//! | newtype, tuple and struct variants | Pairing | `(Variant, value)` |
//!
//! So `(1, "one")` renders as `(1, one)` whether it goes through
//! [`render!`](crate::render!) or [`serialize_to_text`].
//!
//! A `Serialize` impl that fails part way leaves what was already written in
//! the sink, the same as the template formatter does.

use std::fmt;

use serde::ser::{self, Serialize};

use crate::error::{Result, StringifyError};
use crate::render::SEPARATOR;

/// Serializes `value` into `sink` using the rendering rules.
pub fn serialize_to<W, T>(sink: &mut W, value: &T) -> Result<()>
where
    W: fmt::Write + ?Sized,
    T: Serialize + ?Sized,
{
    value.serialize(&mut TextSerializer { sink })
}

/// Serializes `value` into a fresh `String`.
///
/// ```
/// use serde::Serialize;
/// use standout_stringify::serialize_to_text;
///
/// #[derive(Serialize)]
/// struct Job {
///     id: u32,
///     steps: Vec<&'static str>,
///     parent: Option<u32>,
/// }
///
/// let job = Job { id: 7, steps: vec!["build", "test"], parent: None };
/// assert_eq!(
///     serialize_to_text(&job).unwrap(),
///     "[(id, 7), (steps, [build, test]), (parent, [])]"
/// );
/// ```
pub fn serialize_to_text<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut out = String::new();
    serialize_to(&mut out, value)?;
    Ok(out)
}

struct TextSerializer<'s, W: ?Sized> {
    sink: &'s mut W,
}

impl<W: fmt::Write + ?Sized> TextSerializer<'_, W> {
    fn display<T: fmt::Display>(&mut self, value: T) -> Result<()> {
        write!(self.sink, "{}", value)?;
        Ok(())
    }

    fn text(&mut self, value: &str) -> Result<()> {
        self.sink.write_str(value)?;
        Ok(())
    }

    /// Writes `(label, ` ahead of a labeled value.
    fn labeled(&mut self, label: &str) -> Result<()> {
        write!(self.sink, "({}{}", label, SEPARATOR)?;
        Ok(())
    }
}

/// Delimited elements or entries of one compound value.
struct Entries<'a, 's, W: ?Sized> {
    ser: &'a mut TextSerializer<'s, W>,
    close: &'static str,
    empty: bool,
}

impl<'a, 's, W: fmt::Write + ?Sized> Entries<'a, 's, W> {
    fn open(ser: &'a mut TextSerializer<'s, W>, open: &str, close: &'static str) -> Result<Self> {
        ser.text(open)?;
        Ok(Entries {
            ser,
            close,
            empty: true,
        })
    }

    fn separate(&mut self) -> Result<()> {
        if !self.empty {
            self.ser.text(SEPARATOR)?;
        }
        self.empty = false;
        Ok(())
    }

    fn element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.separate()?;
        value.serialize(&mut *self.ser)
    }

    /// A named field, rendered as a `(key, value)` pairing.
    fn field<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        self.separate()?;
        self.ser.labeled(key)?;
        value.serialize(&mut *self.ser)?;
        self.ser.text(")")
    }

    fn finish(self) -> Result<()> {
        self.ser.text(self.close)
    }
}

impl<'a, 's, W: fmt::Write + ?Sized> ser::Serializer for &'a mut TextSerializer<'s, W> {
    type Ok = ();
    type Error = StringifyError;

    type SerializeSeq = Entries<'a, 's, W>;
    type SerializeTuple = Entries<'a, 's, W>;
    type SerializeTupleStruct = Entries<'a, 's, W>;
    type SerializeTupleVariant = Entries<'a, 's, W>;
    type SerializeMap = Entries<'a, 's, W>;
    type SerializeStruct = Entries<'a, 's, W>;
    type SerializeStructVariant = Entries<'a, 's, W>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.display(v)
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.display(v)
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.display(v)
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.display(v)
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.display(v)
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.display(v)
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.display(v)
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.display(v)
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.display(v)
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.display(v)
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.display(v)
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.display(v)
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.display(v)
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.display(v)
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.text(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        let mut seq = Entries::open(self, "[", "]")?;
        for byte in v {
            seq.element(byte)?;
        }
        seq.finish()
    }

    fn serialize_none(self) -> Result<()> {
        self.text("[]")
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<()> {
        let mut seq = Entries::open(self, "[", "]")?;
        seq.element(value)?;
        seq.finish()
    }

    fn serialize_unit(self) -> Result<()> {
        self.text("()")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.text("()")
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.text(variant)
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        let mut tuple = Entries::open(self, "(", ")")?;
        tuple.element(value)?;
        tuple.finish()
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()> {
        let mut pair = Entries::open(self, "(", ")")?;
        pair.element(variant)?;
        pair.element(value)?;
        pair.finish()
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Entries::open(self, "[", "]")
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Entries::open(self, "(", ")")
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Entries::open(self, "(", ")")
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.labeled(variant)?;
        Entries::open(self, "(", "))")
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Entries::open(self, "[", "]")
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Entries::open(self, "[", "]")
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.labeled(variant)?;
        Entries::open(self, "[", "])")
    }
}

impl<W: fmt::Write + ?Sized> ser::SerializeSeq for Entries<'_, '_, W> {
    type Ok = ();
    type Error = StringifyError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<W: fmt::Write + ?Sized> ser::SerializeTuple for Entries<'_, '_, W> {
    type Ok = ();
    type Error = StringifyError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<W: fmt::Write + ?Sized> ser::SerializeTupleStruct for Entries<'_, '_, W> {
    type Ok = ();
    type Error = StringifyError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<W: fmt::Write + ?Sized> ser::SerializeTupleVariant for Entries<'_, '_, W> {
    type Ok = ();
    type Error = StringifyError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.element(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

// Map entries are pairings: the key opens one, the value closes it.
impl<W: fmt::Write + ?Sized> ser::SerializeMap for Entries<'_, '_, W> {
    type Ok = ();
    type Error = StringifyError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
        self.separate()?;
        self.ser.text("(")?;
        key.serialize(&mut *self.ser)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.ser.text(SEPARATOR)?;
        value.serialize(&mut *self.ser)?;
        self.ser.text(")")
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<W: fmt::Write + ?Sized> ser::SerializeStruct for Entries<'_, '_, W> {
    type Ok = ();
    type Error = StringifyError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<W: fmt::Write + ?Sized> ser::SerializeStructVariant for Entries<'_, '_, W> {
    type Ok = ();
    type Error = StringifyError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
        self.field(key, value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}
