use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of one installed package variant: the four-field tuple
/// (id, version, chip, language).
///
/// Field values keep the case they were parsed with, but equality, hashing,
/// and ordering fold case per field, because directory names and catalog
/// entries may spell the same package differently. An absent qualifier is a
/// distinct value from any present one, and two absent qualifiers are equal.
///
/// The value is immutable once constructed; there is no mutating API.
#[derive(Debug, Clone, Serialize)]
pub struct PackageIdentity {
    id: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    chip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
}

impl PackageIdentity {
    /// Construct an identity from already-structured fields (the catalog
    /// record path). Records are trusted input; nothing is validated here.
    pub fn new(
        id: impl Into<String>,
        version: impl Into<String>,
        chip: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            chip,
            language,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn chip(&self) -> Option<&str> {
        self.chip.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Canonical rendering: `{id},version={version}[,chip={chip}][,language={language}]`,
/// lower-cased to match the directory-naming convention it was parsed from.
/// Round-trips through [`parse_directory_name`] for any identity whose fields
/// contain no comma.
impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},version={}",
            self.id.to_lowercase(),
            self.version.to_lowercase()
        )?;
        if let Some(chip) = &self.chip {
            write!(f, ",chip={}", chip.to_lowercase())?;
        }
        if let Some(language) = &self.language {
            write!(f, ",language={}", language.to_lowercase())?;
        }
        Ok(())
    }
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn cmp_folded(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

// Absent sorts before any present value.
fn cmp_folded_opt(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => cmp_folded(a, b),
    }
}

impl PartialEq for PackageIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PackageIdentity {}

impl Hash for PackageIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fn write_folded<H: Hasher>(s: &str, state: &mut H) {
            for c in folded(s) {
                state.write_u32(u32::from(c));
            }
            // terminator so adjacent fields cannot alias each other
            state.write_u32(u32::MAX);
        }

        write_folded(&self.id, state);
        write_folded(&self.version, state);
        for qualifier in [&self.chip, &self.language] {
            match qualifier {
                Some(value) => {
                    state.write_u8(1);
                    write_folded(value, state);
                }
                None => state.write_u8(0),
            }
        }
    }
}

/// Total order by the composite key id, version, chip, language. Consistent
/// with `Eq`: no two distinct identities tie, since the key is the identity.
impl Ord for PackageIdentity {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_folded(&self.id, &other.id)
            .then_with(|| cmp_folded(&self.version, &other.version))
            .then_with(|| cmp_folded_opt(self.chip.as_deref(), other.chip.as_deref()))
            .then_with(|| cmp_folded_opt(self.language.as_deref(), other.language.as_deref()))
    }
}

impl PartialOrd for PackageIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parse a package identity out of a layout directory name.
///
/// Grammar, anchored at both ends:
/// `<id>,version=<version>[,chip=<chip>][,language=<language>]`
/// where every field is a non-empty run of non-comma characters and the
/// keyword tokens match case-insensitively. A `language` segment is only
/// accepted after a `chip` segment. Anything that does not match the full
/// grammar yields `None`; callers skip such names silently.
pub fn parse_directory_name(name: &str) -> Option<PackageIdentity> {
    let mut segments = name.split(',');

    let id = segments.next().filter(|s| !s.is_empty())?;
    let version = keyword_value(segments.next()?, "version=")?;

    let mut chip = None;
    let mut language = None;
    if let Some(segment) = segments.next() {
        chip = Some(keyword_value(segment, "chip=")?);
        if let Some(segment) = segments.next() {
            language = Some(keyword_value(segment, "language=")?);
        }
    }
    if segments.next().is_some() {
        return None;
    }

    Some(PackageIdentity::new(
        id,
        version,
        chip.map(str::to_owned),
        language.map(str::to_owned),
    ))
}

// Strip an ASCII keyword prefix case-insensitively; the remainder must be
// non-empty.
fn keyword_value<'a>(segment: &'a str, keyword: &str) -> Option<&'a str> {
    let head = segment.get(..keyword.len())?;
    if !head.eq_ignore_ascii_case(keyword) {
        return None;
    }
    let value = &segment[keyword.len()..];
    (!value.is_empty()).then_some(value)
}
