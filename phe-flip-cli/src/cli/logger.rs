use serde::ser::Impossible;
use std::io::Write;

macro_rules! impl_disp_methods {
    ($(($method:ident, $ty:ty)),+ $(,)?) => {$(
        fn $method(self, v: $ty) -> Result<Self::Ok, Self::Error> {
            write!(self.writer, "{v}").map_err(Error::Io)
        }
    )+};
}

macro_rules! impl_unsupported {
    ($(fn $method:ident($($arg:ident: $ty:ty),*) -> $ret:ty;)+) => {$(
        fn $method(self, $(_: $ty),*) -> Result<$ret, Self::Error> {
            Err(Error::Unsupported(stringify!($method)))
        }
    )+};
}

#[derive(Debug)]
pub(crate) enum Error {
    Io(std::io::Error),
    // Only flat records of scalars are supported
    Unsupported(&'static str),
    Custom(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => e.fmt(f),
            Self::Unsupported(method) => write!(f, "unsupported record value: {method}"),
            Self::Custom(msg) => f.write_str(msg),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Io(e) => e,
            e => Self::other(e.to_string()),
        }
    }
}

// A TOML-like record writer, floats keep their full precision
pub(crate) struct Logger<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> Logger<'a, W> {
    pub(crate) fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    pub(crate) fn top_title(&mut self, title: &str) -> Result<(), std::io::Error> {
        writeln!(self.writer, "[{title}]")
    }

    pub(crate) fn title(&mut self, title: &'static str) -> Result<(), std::io::Error> {
        writeln!(self.writer, "\n[{title}]")
    }

    /// Write a single `key=value` line.
    pub(crate) fn field<S: serde::Serialize>(
        &mut self,
        key: &str,
        value: S,
    ) -> Result<(), std::io::Error> {
        write!(self.writer, "{key}=")?;
        value.serialize(&mut *self)?;
        writeln!(self.writer)
    }

    /// Write the fields of a struct, one per line.
    pub(crate) fn log<S: serde::Serialize>(&mut self, s: S) -> Result<(), std::io::Error> {
        Ok(s.serialize(self)?)
    }

    pub(crate) fn flush(&mut self) -> Result<(), std::io::Error> {
        self.writer.flush()
    }
}

impl<W: Write> serde::Serializer for &mut Logger<'_, W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Impossible<(), Error>;
    type SerializeTupleStruct = Impossible<(), Error>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Self;
    type SerializeStructVariant = Impossible<(), Error>;

    impl_disp_methods!(
        (serialize_bool, bool),
        (serialize_i8, i8),
        (serialize_i16, i16),
        (serialize_i32, i32),
        (serialize_i64, i64),
        (serialize_u8, u8),
        (serialize_u16, u16),
        (serialize_u32, u32),
        (serialize_u64, u64),
        (serialize_f32, f32),
        (serialize_f64, f64),
        (serialize_char, char),
        (serialize_str, &str),
    );

    impl_unsupported!(
        fn serialize_bytes(v: &[u8]) -> ();
        fn serialize_seq(len: Option<usize>) -> Self::SerializeSeq;
        fn serialize_tuple(len: usize) -> Self::SerializeTuple;
        fn serialize_map(len: Option<usize>) -> Self::SerializeMap;
    );

    fn serialize_none(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok, Self::Error> {
        write!(self.writer, "{name}").map_err(Error::Io)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok, Self::Error> {
        write!(self.writer, "{variant}").map_err(Error::Io)
    }

    fn serialize_newtype_struct<T>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        Err(Error::Unsupported("serialize_newtype_variant"))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Err(Error::Unsupported("serialize_tuple_struct"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Err(Error::Unsupported("serialize_tuple_variant"))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Err(Error::Unsupported("serialize_struct_variant"))
    }
}

impl<W: Write> serde::ser::SerializeStruct for &mut Logger<'_, W> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: ?Sized + serde::Serialize,
    {
        write!(self.writer, "{key}=").map_err(Error::Io)?;
        value.serialize(&mut **self)?;
        writeln!(self.writer).map_err(Error::Io)
    }

    fn end(self) -> Result<Self::Ok, Self::Error> {
        Ok(())
    }
}
