//! The fields we know how to edit.
//!
//! | frame | label  | rule                            |
//! |-------|--------|---------------------------------|
//! | TIT2  | Title  | any text                        |
//! | TPE1  | Artist | any text                        |
//! | TALB  | Album  | any text                        |
//! | TDRC  | Year   | YYYY, YYYY-MM or YYYY-MM-DD     |
//!
//! ID3v2.3 has no TDRC; the year lives in TYER (day and month in TDAT), so
//! TYER is read as the Year field too. Everything else in the tag is left alone.

use id3::Timestamp;

use super::error::ValidationError;

/// A recognized field. Closed set: adding a field means adding a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    Title,
    Artist,
    Album,
    ReleaseDate,
}

impl FieldKind {
    /// All recognized fields, in schema order.
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Title,
        FieldKind::Artist,
        FieldKind::Album,
        FieldKind::ReleaseDate,
    ];

    /// Frame id new values are written to (ID3v2.4 naming).
    pub fn frame_id(self) -> &'static str {
        self.frame_ids()[0]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FieldKind::Title => "Title",
            FieldKind::Artist => "Artist",
            FieldKind::Album => "Album",
            FieldKind::ReleaseDate => "Year",
        }
    }

    /// Every frame id that holds this field. The first is the canonical one.
    pub fn frame_ids(self) -> &'static [&'static str] {
        match self {
            FieldKind::Title => &["TIT2"],
            FieldKind::Artist => &["TPE1"],
            FieldKind::Album => &["TALB"],
            FieldKind::ReleaseDate => &["TDRC", "TYER"],
        }
    }

    /// Resolve an ID3 frame id. `None` = not a field we edit.
    pub fn from_frame_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.frame_ids().contains(&id))
    }

    /// Check `raw` against this field's rule and turn it into a typed value.
    pub fn validate(self, raw: &str) -> Result<FieldValue, ValidationError> {
        match self {
            FieldKind::Title | FieldKind::Artist | FieldKind::Album => {
                Ok(FieldValue::Text(raw.to_string()))
            }
            FieldKind::ReleaseDate => {
                parse_release_date(raw)
                    .map(FieldValue::Date)
                    .ok_or_else(|| ValidationError {
                        field: self,
                        value: raw.to_string(),
                        message: format!(
                            "{} ({}): {:?} is not a valid date; expected YYYY, YYYY-MM or YYYY-MM-DD",
                            self.display_name(),
                            self.frame_id(),
                            raw
                        ),
                    })
            }
        }
    }
}

/// A validated value, ready to be written into a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(Timestamp),
}

/// (frame id, label) for every recognized field, in schema order.
pub fn recognized_fields() -> impl Iterator<Item = (&'static str, &'static str)> {
    FieldKind::ALL
        .into_iter()
        .map(|k| (k.frame_id(), k.display_name()))
}

/// Validate `raw` for `frame_id`.
///
/// Returns `None` if the frame id isn't one we edit.
pub fn validate(frame_id: &str, raw: &str) -> Option<Result<FieldValue, ValidationError>> {
    FieldKind::from_frame_id(frame_id).map(|k| k.validate(raw))
}

/// Parse "YYYY", "YYYY-MM" or "YYYY-MM-DD". Shape only; ranges are not checked.
fn parse_release_date(s: &str) -> Option<Timestamp> {
    let mut parts = s.split('-');

    let year = parts.next().filter(|p| is_digits(p, 4))?;
    let month = parts.next();
    let day = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let month = match month {
        None => None,
        Some(m) if is_digits(m, 2) => Some(m.parse::<u8>().ok()?),
        Some(_) => return None,
    };
    let day = match day {
        None => None,
        Some(d) if is_digits(d, 2) => Some(d.parse::<u8>().ok()?),
        Some(_) => return None,
    };

    Some(Timestamp {
        year: year.parse::<i32>().ok()?,
        month,
        day,
        hour: None,
        minute: None,
        second: None,
    })
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_three_date_shapes() {
        for s in ["2023", "2023-05", "2023-05-17", "0001", "1999-12-31"] {
            match FieldKind::ReleaseDate.validate(s).expect(s) {
                FieldValue::Date(ts) => assert_eq!(ts.to_string(), s),
                other => panic!("{s}: expected a date, got {other:?}"),
            }
        }
    }

    #[test]
    fn shape_only_no_range_check() {
        assert!(FieldKind::ReleaseDate.validate("2023-13").is_ok());
        assert!(FieldKind::ReleaseDate.validate("2023-02-31").is_ok());
    }

    #[test]
    fn rejects_other_date_strings() {
        for s in [
            "",
            "May 2023",
            "2023/05",
            "23",
            "20234",
            "2023-5",
            "2023-05-1",
            "2023-",
            "2023-05-17-01",
            " 2023",
            "2023-05-17T10:00",
            "２０２３",
        ] {
            let err = FieldKind::ReleaseDate.validate(s).unwrap_err();
            assert_eq!(err.field, FieldKind::ReleaseDate);
            assert_eq!(err.value, s);
            assert!(err.message.contains("Year"), "{}", err.message);
            assert!(err.message.contains("YYYY, YYYY-MM or YYYY-MM-DD"));
        }
    }

    #[test]
    fn text_fields_accept_anything() {
        for kind in [FieldKind::Title, FieldKind::Artist, FieldKind::Album] {
            assert_eq!(
                kind.validate("").unwrap(),
                FieldValue::Text(String::new())
            );
            assert_eq!(
                kind.validate("May 2023 / live").unwrap(),
                FieldValue::Text("May 2023 / live".into())
            );
        }
    }

    #[test]
    fn frame_id_lookup() {
        assert_eq!(FieldKind::from_frame_id("TIT2"), Some(FieldKind::Title));
        assert_eq!(FieldKind::from_frame_id("TDRC"), Some(FieldKind::ReleaseDate));
        assert_eq!(FieldKind::from_frame_id("TYER"), Some(FieldKind::ReleaseDate));
        assert_eq!(FieldKind::ReleaseDate.frame_id(), "TDRC");
        assert_eq!(FieldKind::from_frame_id("TDAT"), None);
        assert_eq!(FieldKind::from_frame_id("APIC"), None);
        assert_eq!(FieldKind::from_frame_id("tit2"), None);
        assert!(validate("TCON", "Rock").is_none());
    }

    #[test]
    fn recognized_fields_in_schema_order() {
        let fields: Vec<_> = recognized_fields().collect();
        assert_eq!(
            fields,
            vec![
                ("TIT2", "Title"),
                ("TPE1", "Artist"),
                ("TALB", "Album"),
                ("TDRC", "Year"),
            ]
        );
    }
}
