//! Hierarchical paths addressing inspection-plan entities.
//!
//! A [`PathInformation`] is an immutable sequence of [`PathElement`]s, the
//! first element being the top-most part and the last element being the
//! addressed entity itself. Paths derived by slicing (parents, sub-paths)
//! share the backing buffer of the path they were taken from; only
//! [`PathInformation::combine`] allocates, because its result spans two
//! independent sources.
//!
//! A well-formed path never has a part below a characteristic. This rule is
//! a contract on callers and is not checked at construction; use
//! [`PathInformation::is_well_formed`] to test it explicitly.
//!
//! # Example
//!
//! ```
//! use piweb_path::{InspectionPlanEntity, PathElement, PathInformation};
//!
//! let path = PathInformation::new([
//!     PathElement::part("Engine"),
//!     PathElement::part("Block"),
//!     PathElement::characteristic("Bore"),
//! ]);
//!
//! assert_eq!(path.name(), "Bore");
//! assert_eq!(path.entity(), InspectionPlanEntity::Characteristic);
//! assert_eq!(path.parent_part_path().to_string(), "/Engine/Block");
//! assert_eq!(path.root_part_path().to_string(), "/Engine");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::ops::Index;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use crate::element::{EMPTY_PART, PathElement};
use crate::entity::InspectionPlanEntity;
use crate::error::{Error, Result};
use crate::roundtrip::DELIMITER;

/// Marks a hash cell that has not been filled yet.
const HASH_UNSET: u64 = 0;

/// Stored instead of a computed hash of zero, so zero keeps meaning "unset".
const HASH_ZERO_SUBSTITUTE: u64 = 0x9e37_79b9_7f4a_7c15;

static ROOT: LazyLock<PathInformation> =
    LazyLock::new(|| PathInformation::shared(Arc::from(Vec::<PathElement>::new()), 0, 0));

// ============================================================================
// PathInformation
// ============================================================================

/// Unique address of an inspection-plan entity.
///
/// Equality compares element by element, ignoring the case of the values but
/// not the entity kinds. The hash code is computed on first use and cached
/// for the lifetime of the instance.
pub struct PathInformation {
    elements: Arc<[PathElement]>,
    offset: usize,
    len: usize,
    /// Write-once hash cache; [`HASH_UNSET`] until first computed.
    hash: AtomicU64,
}

impl PathInformation {
    /// Creates a path from the given elements, copying them into a new
    /// buffer.
    ///
    /// The part/characteristic ordering rule is not validated.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = PathElement>,
    {
        elements.into_iter().collect::<Vec<_>>().into()
    }

    /// Returns the root path, the shared empty path at the top of the tree.
    pub fn root() -> Self {
        ROOT.clone()
    }

    fn shared(elements: Arc<[PathElement]>, offset: usize, len: usize) -> Self {
        Self {
            elements,
            offset,
            len,
            hash: AtomicU64::new(HASH_UNSET),
        }
    }

    /// View of `count` elements starting at `start`, on the same buffer.
    fn slice(&self, start: usize, count: usize) -> Self {
        Self::shared(Arc::clone(&self.elements), self.offset + start, count)
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Returns the elements of this path, top-most first.
    pub fn as_slice(&self) -> &[PathElement] {
        &self.elements[self.offset..self.offset + self.len]
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the root path. Same as [`Self::is_root`].
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if this is the root path.
    pub fn is_root(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `path` is absent or the root path.
    pub fn is_none_or_root(path: Option<&PathInformation>) -> bool {
        path.is_none_or(PathInformation::is_root)
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&PathElement> {
        self.as_slice().get(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= self.len()`.
    pub fn element(&self, index: usize) -> Result<&PathElement> {
        self.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Returns the value of the last element, or `""` for the root path.
    pub fn name(&self) -> &str {
        self.as_slice().last().map_or("", PathElement::value)
    }

    /// Returns the last element, or the empty part element for the root path.
    pub fn typed_name(&self) -> &PathElement {
        self.as_slice().last().unwrap_or(&EMPTY_PART)
    }

    /// Returns the kind of the last element. The root path counts as a part.
    pub fn entity(&self) -> InspectionPlanEntity {
        self.as_slice()
            .last()
            .map_or(InspectionPlanEntity::Part, PathElement::entity)
    }

    /// Iterates the elements from the top-most ancestor to the entity itself.
    pub fn iter(&self) -> std::slice::Iter<'_, PathElement> {
        self.as_slice().iter()
    }

    /// Returns `true` if both paths are views on the same backing buffer.
    pub fn shares_storage_with(&self, other: &PathInformation) -> bool {
        Arc::ptr_eq(&self.elements, &other.elements)
    }

    // ------------------------------------------------------------------------
    // Structural queries
    // ------------------------------------------------------------------------

    /// Returns `true` if `ancestor` is a prefix of this path, or equal to it.
    ///
    /// Entity kinds are compared as well as the values.
    pub fn is_below(&self, ancestor: &PathInformation) -> bool {
        ancestor.len <= self.len && self.as_slice().starts_with(ancestor.as_slice())
    }

    /// Returns `true` if no part element follows a characteristic element.
    pub fn is_well_formed(&self) -> bool {
        self.as_slice()
            .windows(2)
            .all(|pair| !(pair[0].entity().is_characteristic() && pair[1].entity().is_part()))
    }

    // ------------------------------------------------------------------------
    // Derivation
    // ------------------------------------------------------------------------

    /// Returns the path `upcount` levels above this one.
    ///
    /// Zero returns this path; stepping past the top yields the root path.
    /// Any other result is a view on this path's buffer.
    pub fn parent(&self, upcount: usize) -> PathInformation {
        if upcount == 0 {
            return self.clone();
        }
        if upcount >= self.len {
            return Self::root();
        }
        self.slice(0, self.len - upcount)
    }

    /// Returns the direct parent path.
    pub fn parent_path(&self) -> PathInformation {
        self.parent(1)
    }

    /// Returns the path of the part owning this entity.
    ///
    /// Trailing characteristic levels are skipped, then one more level is
    /// removed.
    pub fn parent_part_path(&self) -> PathInformation {
        let elements = self.as_slice();
        let mut upcount = 1;
        while upcount < self.len && elements[self.len - 1 - upcount].entity().is_characteristic() {
            upcount += 1;
        }
        self.parent(upcount)
    }

    /// Returns the top-level part of this path, or root for the root path.
    pub fn root_part_path(&self) -> PathInformation {
        if self.is_root() {
            return Self::root();
        }
        self.parent(self.len - 1)
    }

    /// Returns the `count` elements starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `start > self.len()` or
    /// `count > self.len() - start`.
    pub fn sub_path(&self, start: usize, count: usize) -> Result<PathInformation> {
        if start > self.len {
            return Err(Error::invalid_argument(
                "start",
                format!("must be at most the path length {}, got {start}", self.len),
            ));
        }
        if count > self.len - start {
            return Err(Error::invalid_argument(
                "count",
                format!(
                    "only {} elements remain after index {start}, got {count}",
                    self.len - start
                ),
            ));
        }

        if count == 0 {
            return Ok(Self::root());
        }
        if start == 0 && count == self.len {
            return Ok(self.clone());
        }
        Ok(self.slice(start, count))
    }

    /// Returns the elements from `start` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `start > self.len()`.
    pub fn sub_path_from(&self, start: usize) -> Result<PathInformation> {
        self.sub_path(start, self.len.saturating_sub(start))
    }

    /// Returns the first `count` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `count > self.len()`.
    pub fn start_path(&self, count: usize) -> Result<PathInformation> {
        self.sub_path(0, count)
    }

    /// Appends `other` below this path.
    ///
    /// The root path is the identity on both sides. Otherwise the result
    /// owns a fresh buffer.
    pub fn combine(&self, other: &PathInformation) -> PathInformation {
        if self.is_root() {
            return other.clone();
        }
        if other.is_root() {
            return self.clone();
        }

        let mut elements = Vec::with_capacity(self.len + other.len);
        elements.extend_from_slice(self.as_slice());
        elements.extend_from_slice(other.as_slice());
        elements.into()
    }

    /// Appends a single element below this path.
    ///
    /// The empty element leaves the path unchanged.
    pub fn combine_element(&self, element: PathElement) -> PathInformation {
        if element.is_empty() {
            return self.clone();
        }

        let mut elements = Vec::with_capacity(self.len + 1);
        elements.extend_from_slice(self.as_slice());
        elements.push(element);
        elements.into()
    }

    /// Combines two optional paths; an absent operand yields the other one.
    pub fn combine_optional(
        first: Option<&PathInformation>,
        second: Option<&PathInformation>,
    ) -> Option<PathInformation> {
        match (first, second) {
            (Some(first), Some(second)) => Some(first.combine(second)),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }

    // ------------------------------------------------------------------------
    // Hashing
    // ------------------------------------------------------------------------

    /// Returns the cached structural hash code, computing it on first use.
    ///
    /// Concurrent first calls may each compute the value; they all store the
    /// same result.
    pub fn hash_code(&self) -> u64 {
        let cached = self.hash.load(Ordering::Relaxed);
        if cached != HASH_UNSET {
            return cached;
        }
        let computed = self.compute_hash();
        self.hash.store(computed, Ordering::Relaxed);
        computed
    }

    fn compute_hash(&self) -> u64 {
        let folded = self.iter().fold(1u64, |acc, element| {
            let mut hasher = DefaultHasher::new();
            element.hash(&mut hasher);
            acc.rotate_left(5) ^ hasher.finish()
        });
        if folded == HASH_UNSET {
            HASH_ZERO_SUBSTITUTE
        } else {
            folded
        }
    }

    // ------------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------------

    /// Returns the path without a leading delimiter; `""` for the root path.
    ///
    /// Display strings cannot be parsed back; see [`crate::roundtrip`].
    pub fn to_string_without_root(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_path(&mut out, false);
        out
    }

    /// Returns a [`fmt::Display`] adapter rendering this path in `format`.
    pub fn display(&self, format: PathFormat) -> FormattedPath<'_> {
        FormattedPath { path: self, format }
    }

    /// Renders this path in `format`.
    pub fn format(&self, format: PathFormat) -> String {
        self.display(format).to_string()
    }

    fn write_path<W: fmt::Write>(&self, out: &mut W, with_root: bool) -> fmt::Result {
        if self.is_root() {
            return if with_root {
                out.write_char(DELIMITER)
            } else {
                Ok(())
            };
        }

        let mut add_delimiter = with_root;
        for element in self {
            if add_delimiter {
                out.write_char(DELIMITER)?;
            }
            out.write_str(element.value())?;
            add_delimiter = true;
        }
        Ok(())
    }
}

impl Clone for PathInformation {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            offset: self.offset,
            len: self.len,
            hash: AtomicU64::new(self.hash.load(Ordering::Relaxed)),
        }
    }
}

impl Default for PathInformation {
    fn default() -> Self {
        Self::root()
    }
}

impl PartialEq for PathInformation {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len || self.hash_code() != other.hash_code() {
            return false;
        }
        self.iter().rev().eq(other.iter().rev())
    }
}

impl Eq for PathInformation {}

impl Hash for PathInformation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Debug for PathInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Writes the full path with a leading delimiter, e.g. `/Engine/Block/Bore`.
/// The root path renders as `/`.
impl fmt::Display for PathInformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_path(f, true)
    }
}

impl Index<usize> for PathInformation {
    type Output = PathElement;

    fn index(&self, index: usize) -> &PathElement {
        &self.as_slice()[index]
    }
}

impl AsRef<[PathElement]> for PathInformation {
    fn as_ref(&self) -> &[PathElement] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a PathInformation {
    type Item = &'a PathElement;
    type IntoIter = std::slice::Iter<'a, PathElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<PathElement> for PathInformation {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<PathElement>> for PathInformation {
    fn from(elements: Vec<PathElement>) -> Self {
        if elements.is_empty() {
            return Self::root();
        }
        let len = elements.len();
        Self::shared(Arc::from(elements), 0, len)
    }
}

impl From<&[PathElement]> for PathInformation {
    fn from(elements: &[PathElement]) -> Self {
        elements.to_vec().into()
    }
}

impl From<PathElement> for PathInformation {
    fn from(element: PathElement) -> Self {
        vec![element].into()
    }
}

// ============================================================================
// PathFormat
// ============================================================================

/// Rendering modes for display strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathFormat {
    /// The last segment only.
    Name,
    /// The last segment followed by the full path in parentheses.
    Full,
    /// The full path with a leading delimiter.
    #[default]
    Path,
}

impl PathFormat {
    /// Maps a format specifier to a mode: `"S"` and `"Name"` select
    /// [`PathFormat::Name`], `"Full"` selects [`PathFormat::Full`], anything
    /// else falls back to [`PathFormat::Path`].
    pub fn from_specifier(specifier: &str) -> Self {
        match specifier {
            "S" | "Name" => Self::Name,
            "Full" => Self::Full,
            _ => Self::Path,
        }
    }
}

impl FromStr for PathFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "name" => Ok(Self::Name),
            "full" => Ok(Self::Full),
            "path" => Ok(Self::Path),
            _ => Err(Error::invalid_argument(
                "format",
                format!("expected one of name, full, path; got {s:?}"),
            )),
        }
    }
}

impl fmt::Display for PathFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::Full => f.write_str("full"),
            Self::Path => f.write_str("path"),
        }
    }
}

/// Borrowing display adapter returned by [`PathInformation::display`].
#[derive(Clone, Copy, Debug)]
pub struct FormattedPath<'a> {
    path: &'a PathInformation,
    format: PathFormat,
}

impl fmt::Display for FormattedPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            PathFormat::Name => f.write_str(self.path.name()),
            PathFormat::Full => write!(f, "{} ({})", self.path.name(), self.path),
            PathFormat::Path => write!(f, "{}", self.path),
        }
    }
}
