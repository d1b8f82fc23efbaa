//! An editable tree of encoded values.
//!
//! This module contains the [`Node`] type which represents a single value
//! together with all the values nested inside it. A tree of nodes is created
//! by parsing a buffer with [`Node::parse_buffer`], can be changed freely,
//! and is turned back into octets with [`Node::to_der`].

use std::fmt;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use log::debug;
use num_bigint::BigInt;
use crate::decode::{Error, Pos, Source};
use crate::int::Integer;
use crate::length::Length;
use crate::oid::Oid;
use crate::string::{ascii_to_string, utf8_to_string, BitString};
use crate::tag::Tag;
use crate::time::Time;


//------------ Constants -----------------------------------------------------

/// The maximum number of nested values.
///
/// The outermost value is at depth zero. Data nested deeper than this
/// fails to decode. Inside an OCTET STRING, it merely makes the string
/// opaque.
pub const MAX_DEPTH: usize = 64;


//------------ Node ----------------------------------------------------------

/// A single encoded value and everything nested inside it.
///
/// Every node has a [`Tag`] and content. The content is either an opaque
/// sequence of octets or, if the node is _structured,_ a sequence of child
/// nodes. A node is structured if its tag is constructed or if it is a
/// primitive OCTET STRING whose content happens to be a complete sequence
/// of encoded values. The latter is common in certificates where the value
/// of an extension is wrapped into an OCTET STRING.
///
/// The children of a structured node can be changed via
/// [`subs_mut`][Self::subs_mut]. When encoding, the content of a structured
/// node is always derived from its current children. The octets it was
/// originally parsed from are still available via [`value`][Self::value]
/// but they are never written out again.
///
/// Encoding an unchanged tree results in exactly the octets it was parsed
/// from. This works because only the minimal forms of tags and lengths are
/// accepted when decoding and they are the only forms ever produced when
/// encoding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    /// The tag of the value.
    tag: Tag,

    /// The content octets as originally decoded or last set.
    value: Bytes,

    /// The children of a structured node.
    subs: Vec<Node>,

    /// Whether the content is derived from `subs`.
    structured: bool,
}

/// # Creation
///
impl Node {
    /// Creates a new node with opaque content.
    pub fn primitive(tag: Tag, value: impl Into<Bytes>) -> Self {
        Node { tag, value: value.into(), subs: Vec::new(), structured: false }
    }

    /// Creates a new structured node from its children.
    pub fn constructed(tag: Tag, subs: Vec<Node>) -> Self {
        Node { tag, value: Bytes::new(), subs, structured: true }
    }
}

/// # Decoding
///
impl Node {
    /// Parses a complete buffer into a tree.
    ///
    /// The buffer must contain exactly one value. If there is anything left
    /// after it, decoding fails.
    pub fn parse_buffer(data: impl Into<Bytes>) -> Result<Self, Error> {
        let mut source = Source::new(data);
        let res = Self::take_from(&mut source, 0)?;
        if !source.is_exhausted() {
            xerr!(return Err(source.content_err("trailing data")))
        }
        Ok(res)
    }

    /// Takes a single value from the beginning of a source.
    fn take_from(source: &mut Source, depth: usize) -> Result<Self, Error> {
        if depth > MAX_DEPTH {
            xerr!(return Err(source.content_err("excessive nesting")))
        }
        let tag = Tag::take_from(source)?;
        let len = Length::take_from(source)?;
        let pos = source.pos();
        let value = source.take_bytes(len.to_usize())?;

        if tag.is_constructed() {
            let subs = Self::take_all(
                Source::with_base(value.clone(), pos), depth + 1
            )?;
            return Ok(Node { tag, value, subs, structured: true })
        }
        if tag == Tag::OCTET_STRING && !value.is_empty() {
            if let Some(subs) = Self::probe(&value, pos, depth + 1) {
                return Ok(Node { tag, value, subs, structured: true })
            }
        }
        Ok(Node { tag, value, subs: Vec::new(), structured: false })
    }

    /// Takes values from a source until it is exhausted.
    fn take_all(
        mut source: Source, depth: usize
    ) -> Result<Vec<Self>, Error> {
        let mut res = Vec::new();
        while !source.is_exhausted() {
            res.push(Self::take_from(&mut source, depth)?);
        }
        Ok(res)
    }

    /// Tries to parse the content of an OCTET STRING as nested values.
    ///
    /// Returns the children only if the content is exactly a sequence of
    /// correctly encoded values. A failed attempt is not an error, the
    /// string simply stays opaque.
    fn probe(value: &Bytes, pos: Pos, depth: usize) -> Option<Vec<Self>> {
        match Self::take_all(Source::with_base(value.clone(), pos), depth) {
            Ok(subs) => Some(subs),
            Err(err) => {
                debug!("OCTET STRING at {} is opaque: {}", pos, err);
                None
            }
        }
    }
}

/// # Access and Mutation
///
impl Node {
    /// Returns the tag of the node.
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Replaces the tag of the node.
    ///
    /// This does not change whether the content is opaque or derived from
    /// the children.
    pub fn set_tag(&mut self, tag: Tag) {
        self.tag = tag
    }

    /// Returns the content octets as they were decoded or last set.
    ///
    /// For a structured node whose children have been changed, this does
    /// not reflect the current content. Use [`content`][Self::content]
    /// for that.
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// Replaces the content with opaque octets.
    ///
    /// Any children are dropped and the node stops being structured.
    pub fn set_value(&mut self, value: impl Into<Bytes>) {
        self.value = value.into();
        self.subs.clear();
        self.structured = false;
    }

    /// Returns whether the content is derived from children.
    pub fn is_structured(&self) -> bool {
        self.structured
    }

    /// Returns the children of the node.
    pub fn subs(&self) -> &[Node] {
        &self.subs
    }

    /// Returns the children of the node for changing them.
    ///
    /// From now on, the node is structured. If it was opaque before, it
    /// starts out with no children and its previous content is ignored
    /// when encoding.
    pub fn subs_mut(&mut self) -> &mut Vec<Node> {
        self.structured = true;
        &mut self.subs
    }

    /// Returns the first child with a tag of the given type.
    ///
    /// Only class and number are compared, not the encoding form.
    pub fn find(&self, tag: &Tag) -> Option<&Node> {
        self.subs.iter().find(|sub| sub.tag.is_type(tag))
    }

    /// Returns the current content octets.
    ///
    /// For an opaque node this is [`value`][Self::value], for a structured
    /// node the concatenated encoding of all children.
    pub fn content(&self) -> Bytes {
        if self.structured {
            let mut res = Vec::with_capacity(self.content_len());
            self.append_content(&mut res);
            res.into()
        }
        else {
            self.value.clone()
        }
    }
}

/// # Encoding
///
impl Node {
    /// Returns the length of the current content.
    pub fn content_len(&self) -> usize {
        if self.structured {
            self.subs.iter().map(Node::encoded_len).sum()
        }
        else {
            self.value.len()
        }
    }

    /// Returns the length of the complete encoded value.
    pub fn encoded_len(&self) -> usize {
        let len = self.content_len();
        self.tag.encoded_len() + Length::new(len).encoded_len() + len
    }

    /// Appends the encoded value to the end of `target`.
    pub fn append_encoded(&self, target: &mut Vec<u8>) {
        self.tag.append_encoded(target);
        Length::new(self.content_len()).append_encoded(target);
        self.append_content(target);
    }

    /// Appends the current content to the end of `target`.
    fn append_content(&self, target: &mut Vec<u8>) {
        if self.structured {
            for sub in &self.subs {
                sub.append_encoded(target)
            }
        }
        else {
            target.extend_from_slice(&self.value)
        }
    }

    /// Returns the encoded value.
    ///
    /// All lengths are recalculated from the current content and encoded
    /// in their minimal form.
    pub fn to_der(&self) -> Bytes {
        let mut res = Vec::with_capacity(self.encoded_len());
        self.append_encoded(&mut res);
        res.into()
    }
}

/// # Typed Content
///
/// These methods interpret the current content of the node as a value of
/// a certain type. They fail with a type mismatch if the tag of the node
/// isn’t of that type. Only class and number of the tag are checked.
impl Node {
    /// Checks that the node is of the type given by `tag`.
    fn check_type(
        &self, tag: &Tag, expected: &'static str
    ) -> Result<(), Error> {
        if self.tag.is_type(tag) {
            Ok(())
        }
        else {
            xerr!(Err(Error::type_mismatch(expected, &self.tag)))
        }
    }

    /// Interprets the node as a BOOLEAN.
    ///
    /// The content must be exactly one octet. Any value other than zero is
    /// true.
    pub fn to_boolean(&self) -> Result<bool, Error> {
        self.check_type(&Tag::BOOLEAN, "BOOLEAN")?;
        match self.content().as_ref() {
            [value] => Ok(*value != 0),
            _ => xerr!(Err(Error::format("invalid boolean")))
        }
    }

    /// Interprets the node as an INTEGER.
    pub fn to_integer(&self) -> Result<BigInt, Error> {
        self.check_type(&Tag::INTEGER, "INTEGER")?;
        Integer::from_content(self.content()).map(BigInt::from)
    }

    /// Interprets the node as an OBJECT IDENTIFIER.
    ///
    /// The returned value displays in the usual dotted decimal notation.
    pub fn to_oid(&self) -> Result<Oid, Error> {
        self.check_type(&Tag::OID, "OBJECT IDENTIFIER")?;
        Oid::from_content(self.content())
    }

    /// Interprets the node as either a UTCTime or a GeneralizedTime.
    pub fn to_date(&self) -> Result<DateTime<Utc>, Error> {
        let time = if self.tag.is_type(&Tag::UTC_TIME) {
            Time::from_utc_time(&self.content())?
        }
        else if self.tag.is_type(&Tag::GENERALIZED_TIME) {
            Time::from_generalized_time(&self.content())?
        }
        else {
            xerr!(return Err(Error::type_mismatch(
                "UTCTime or GeneralizedTime", &self.tag
            )))
        };
        Ok(time.to_datetime())
    }

    /// Interprets the node as a BIT STRING.
    pub fn to_bit_string(&self) -> Result<BitString, Error> {
        self.check_type(&Tag::BIT_STRING, "BIT STRING")?;
        BitString::from_content(self.content())
    }

    /// Returns the content as a string of ASCII characters.
    ///
    /// The tag isn’t checked. This is mostly used for the implicitly
    /// tagged strings of a general name.
    pub fn to_ascii_string(&self) -> String {
        ascii_to_string(&self.content())
    }

    /// Returns the content as a UTF-8 string.
    ///
    /// The tag isn’t checked and invalid sequences are replaced.
    pub fn to_utf8_string(&self) -> String {
        utf8_to_string(&self.content())
    }
}


//--- Display

impl fmt::Display for Node {
    /// Writes an indented dump of the tree, one line per node.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl Node {
    fn fmt_indented(
        &self, f: &mut fmt::Formatter, indent: usize
    ) -> fmt::Result {
        write!(
            f, "{:width$}{} ({})", "", self.tag, self.content_len(),
            width = indent * 2
        )?;
        if self.structured {
            writeln!(f)?;
            for sub in &self.subs {
                sub.fmt_indented(f, indent + 1)?;
            }
            Ok(())
        }
        else {
            if !self.value.is_empty() {
                write!(f, " {}", HexDump(&self.value))?;
            }
            writeln!(f)
        }
    }
}


//------------ HexDump -------------------------------------------------------

/// Displays octets as lowercase hex digits.
struct HexDump<'a>(&'a [u8]);

impl<'a> fmt::Display for HexDump<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for ch in self.0 {
            write!(f, "{:02x}", ch)?;
        }
        Ok(())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn parse(hex: &str) -> Node {
        Node::parse_buffer(hex::decode(hex).unwrap()).unwrap()
    }

    fn parse_err(hex: &str) -> Error {
        Node::parse_buffer(hex::decode(hex).unwrap()).unwrap_err()
    }

    fn der(node: &Node) -> String {
        hex::encode(node.to_der())
    }

    #[test]
    fn primitive() {
        let node = parse("02021010");
        assert_eq!(node.tag(), &Tag::INTEGER);
        assert_eq!(node.value().as_ref(), b"\x10\x10");
        assert!(node.subs().is_empty());
        assert!(!node.is_structured());
        assert_eq!(der(&node), "02021010");
    }

    #[test]
    fn constructed() {
        let node = parse("30080202101002021111");
        assert_eq!(node.tag(), &Tag::SEQUENCE);
        assert_eq!(node.subs().len(), 2);
        assert_eq!(node.subs()[0].value().as_ref(), b"\x10\x10");
        assert_eq!(node.subs()[1].value().as_ref(), b"\x11\x11");
        assert_eq!(der(&node), "30080202101002021111");
    }

    #[test]
    fn remove_child() {
        let mut node = parse("30080202101002021111");
        node.subs_mut().remove(0);
        assert_eq!(der(&node), "300402021111");

        // The original content is kept but not used.
        assert_eq!(node.value().len(), 8);
        assert_eq!(node.content().as_ref(), b"\x02\x02\x11\x11");
    }

    #[test]
    fn remove_all_children() {
        let mut node = parse("30080202101002021111");
        node.subs_mut().clear();
        assert_eq!(der(&node), "3000");
    }

    #[test]
    fn add_children() {
        let mut node = parse("3000");
        node.subs_mut().push(Node::primitive(Tag::BOOLEAN, &b"\xff"[..]));
        node.subs_mut().push(parse("02021010"));
        assert_eq!(der(&node), "30070101ff02021010");

        // Growing past 127 octets switches to the long form.
        let mut node = parse("3000");
        node.subs_mut().push(Node::primitive(Tag::OCTET_STRING, vec![0u8; 128]));
        let res = node.to_der();
        assert_eq!(&res[..6], b"\x30\x81\x83\x04\x81\x80");
        assert_eq!(res.len(), 6 + 128);
    }

    #[test]
    fn change_nested() {
        let mut node = parse("300b3006020110020111020112");
        node.subs_mut()[0].subs_mut()[1].set_value(&b"\x01\x00"[..]);
        assert_eq!(der(&node), "300c300702011002020100020112");
    }

    #[test]
    fn set_value() {
        let mut node = parse("30080202101002021111");
        node.set_value(&b"\x05\x00"[..]);
        assert!(node.subs().is_empty());
        assert!(!node.is_structured());
        assert_eq!(der(&node), "30020500");
    }

    #[test]
    fn build_tree() {
        let node = Node::constructed(Tag::SEQUENCE, vec![
            Node::primitive(Tag::INTEGER, &b"\x01"[..]),
            Node::constructed(Tag::ctx(0).into_constructed(), vec![
                Node::primitive(Tag::NULL, Bytes::new()),
            ]),
        ]);
        assert_eq!(der(&node), "3007020101a0020500");
        assert_eq!(node.encoded_len(), 9);
    }

    #[test]
    fn nested_octet_string() {
        let node = parse("04080202101002021111");
        assert!(node.is_structured());
        assert_eq!(node.subs().len(), 2);
        assert_eq!(node.subs()[1].to_integer().unwrap(), BigInt::from(0x1111));
        assert_eq!(der(&node), "04080202101002021111");
    }

    #[test]
    fn opaque_octet_string() {
        // Inner length is too long.
        let node = parse("04020408");
        assert!(node.subs().is_empty());
        assert_eq!(node.value().as_ref(), b"\x04\x08");
        assert_eq!(der(&node), "04020408");

        // Inner length is too short, leaving trailing data.
        let node = parse("0406040213013131");
        assert!(node.subs().is_empty());
        assert_eq!(hex::encode(node.value()), "040213013131");
        assert_eq!(der(&node), "0406040213013131");

        // Empty.
        let node = parse("0400");
        assert!(node.subs().is_empty());
        assert!(!node.is_structured());

        // Indefinite length inside.
        let node = parse("0404308002ff");
        assert!(node.subs().is_empty());
    }

    #[test]
    fn only_octet_strings_are_probed() {
        let node = parse("0c080202101002021111");
        assert!(node.subs().is_empty());
        let node = parse("84080202101002021111");
        assert!(node.subs().is_empty());
        let node = parse("03080202101002021111");
        assert!(node.subs().is_empty());
    }

    #[test]
    fn doubly_wrapped() {
        let node = parse("0406040402020101");
        assert_eq!(node.subs().len(), 1);
        assert_eq!(node.subs()[0].subs().len(), 1);
        assert_eq!(
            node.subs()[0].subs()[0].to_integer().unwrap(),
            BigInt::from(0x0101)
        );
    }

    #[test]
    fn round_trip() {
        for hex in [
            "3000",
            "0500",
            "3012060A2B06010401D679020402040404020000",
            "300F0603551D130101FF040530030101FF",
            "30260603551D11041F301DA01B060A2B0601040183BF300107\
             A00D0C0B666F6F406261722E636F6D",
            "1f8100021010",
            "bf1f03020100",
        ] {
            let data = hex::decode(hex).unwrap();
            let node = Node::parse_buffer(data.clone()).unwrap();
            assert_eq!(node.to_der().as_ref(), data.as_slice(), "{hex}");
            assert_eq!(node.encoded_len(), data.len());
        }

        let mut data = vec![0x04, 0x82, 0x01, 0x00];
        data.resize(4 + 256, 0x55);
        let node = Node::parse_buffer(data.clone()).unwrap();
        assert_eq!(node.to_der().as_ref(), data.as_slice());
    }

    #[test]
    fn structural_errors() {
        assert!(parse_err("").is_decode());
        assert!(parse_err("30").is_decode());
        assert!(parse_err("1f").is_decode());
        assert!(parse_err("1f81").is_decode());
        assert_eq!(
            parse_err("020210"),
            Error::decode("length exceeds available data", 1usize)
        );
        assert_eq!(
            parse_err("0201100000"),
            Error::decode("trailing data", 3usize)
        );
        assert_eq!(
            parse_err("30800000"),
            Error::decode("indefinite length not supported", 1usize)
        );
        assert_eq!(
            parse_err("30050201100202ff"),
            Error::decode("length exceeds available data", 6usize)
        );
        assert_eq!(
            parse_err("30030201"),
            Error::decode("length exceeds available data", 1usize)
        );
    }

    #[test]
    fn depth_limit() {
        fn nest(levels: usize, tag: u8) -> Vec<u8> {
            let mut res = vec![0x05, 0x00];
            for _ in 0..levels {
                let mut outer = vec![tag];
                Length::new(res.len()).append_encoded(&mut outer);
                outer.extend_from_slice(&res);
                res = outer;
            }
            res
        }

        assert!(Node::parse_buffer(nest(MAX_DEPTH, 0x30)).is_ok());
        assert!(
            Node::parse_buffer(nest(MAX_DEPTH + 1, 0x30)).unwrap_err()
                .is_decode()
        );

        // Too deep inside an OCTET STRING just makes it opaque.
        let node = Node::parse_buffer(nest(MAX_DEPTH + 1, 0x04)).unwrap();
        let mut depth = 0;
        let mut cur = &node;
        while let Some(sub) = cur.subs().first() {
            cur = sub;
            depth += 1;
        }
        assert!(depth < MAX_DEPTH + 1);
        assert_eq!(cur.tag(), &Tag::OCTET_STRING);
    }

    #[test]
    fn to_boolean() {
        assert!(!parse("010100").to_boolean().unwrap());
        assert!(parse("010101").to_boolean().unwrap());
        assert!(parse("0101ff").to_boolean().unwrap());
        assert_eq!(
            parse("810102").to_boolean(),
            Err(Error::type_mismatch("BOOLEAN", &Tag::ctx(1)))
        );
        assert_eq!(
            parse("0100").to_boolean(), Err(Error::format("invalid boolean"))
        );
        assert_eq!(
            parse("01020000").to_boolean(),
            Err(Error::format("invalid boolean"))
        );
    }

    #[test]
    fn to_integer() {
        for (hex, value) in [
            ("020100", 0), ("02017f", 127), ("02020080", 128),
            ("02020100", 256), ("0201ff", -1), ("020180", -128),
            ("0202ff7f", -129), ("0202ff00", -256),
        ] {
            assert_eq!(parse(hex).to_integer(), Ok(BigInt::from(value)));
        }
        assert!(parse("820100").to_integer().unwrap_err().is_type_mismatch());
        assert_eq!(
            parse("0200").to_integer(), Err(Error::format("invalid integer"))
        );
    }

    #[test]
    fn to_oid() {
        assert_eq!(
            parse("06082A8648CE3D040303").to_oid().unwrap().to_string(),
            "1.2.840.10045.4.3.3"
        );
        assert_eq!(
            parse("06055381ab2501").to_oid().unwrap().to_string(),
            "2.3.21925.1"
        );
        assert_eq!(parse("060182").to_oid().unwrap().to_string(), "2.50");
        assert_eq!(
            parse("06028201").to_oid().unwrap().to_string(), "2.50.1"
        );
        assert_eq!(parse("0601a0").to_oid().unwrap().to_string(), "2.80");
        assert_eq!(
            parse("06022a86").to_oid(),
            Err(Error::format("invalid object identifier"))
        );
        assert_eq!(
            parse("0600").to_oid(),
            Err(Error::format("invalid object identifier"))
        );
        assert!(parse("0400").to_oid().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn to_date() {
        let expected = Utc.with_ymd_and_hms(2022, 11, 22, 11, 11, 11).unwrap();
        assert_eq!(
            parse("170D3232313132323131313131315A").to_date(), Ok(expected)
        );
        assert_eq!(
            parse("180F32303232313132323131313131315A").to_date(),
            Ok(expected)
        );
        assert_eq!(
            parse("1806464f4f424152").to_date(),
            Err(Error::format("invalid time"))
        );
        assert_eq!(
            parse("0400").to_date(),
            Err(Error::type_mismatch(
                "UTCTime or GeneralizedTime", &Tag::OCTET_STRING
            ))
        );
    }

    #[test]
    fn to_bit_string() {
        let bits = parse("030200F0").to_bit_string().unwrap().to_bits();
        assert_eq!(
            bits, [true, true, true, true, false, false, false, false]
        );
        assert!(parse("0400").to_bit_string().unwrap_err().is_type_mismatch());
        assert_eq!(
            parse("0300").to_bit_string(),
            Err(Error::format("invalid bit string"))
        );
    }

    #[test]
    fn strings() {
        let node = parse("810B666F6F406261722E636F6D");
        assert_eq!(node.to_ascii_string(), "foo@bar.com");
        assert_eq!(node.to_utf8_string(), "foo@bar.com");

        let node = parse("1603666F6F");
        assert_eq!(node.tag(), &Tag::IA5_STRING);
        assert_eq!(node.to_ascii_string(), "foo");
        let node = parse("1302414C");
        assert_eq!(node.tag(), &Tag::PRINTABLE_STRING);
        assert_eq!(node.to_ascii_string(), "AL");
    }

    #[test]
    fn find() {
        let node = parse("30060101ff020101");
        assert_eq!(node.find(&Tag::INTEGER).unwrap().value().as_ref(), b"\x01");
        assert!(node.find(&Tag::OID).is_none());
    }

    #[test]
    fn display() {
        let node = parse("300b0101ff0406040402020101");
        assert_eq!(
            node.to_string(),
            "SEQUENCE (11)\n\
             \x20 BOOLEAN (1) ff\n\
             \x20 OCTET STRING (6)\n\
             \x20   OCTET STRING (4)\n\
             \x20     INTEGER (2) 0101\n"
        );
    }
}
