//! The version model and its PEP 440 ordering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::prerelease::{PreRelease, PreReleaseKind};

/// A PEP 440 version identifier.
///
/// Equality, hashing and ordering are semantic: `1.0`, `1.0.0` and `0!1.0`
/// are the same version.
#[derive(Debug, Clone)]
pub struct Version {
    epoch: u64,
    release: Vec<u64>,
    pre: Option<PreRelease>,
    post: Option<u64>,
    dev: Option<u64>,
    local: Option<String>,
}

impl Version {
    /// Creates a final release from its release components.
    ///
    /// An empty release is treated as `0`.
    #[must_use]
    pub fn new(release: impl Into<Vec<u64>>) -> Self {
        let mut release = release.into();
        if release.is_empty() {
            release.push(0);
        }
        Self {
            epoch: 0,
            release,
            pre: None,
            post: None,
            dev: None,
            local: None,
        }
    }

    #[must_use]
    pub const fn with_epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    #[must_use]
    pub const fn with_pre(mut self, pre: Option<PreRelease>) -> Self {
        self.pre = pre;
        self
    }

    #[must_use]
    pub const fn with_post(mut self, post: Option<u64>) -> Self {
        self.post = post;
        self
    }

    #[must_use]
    pub const fn with_dev(mut self, dev: Option<u64>) -> Self {
        self.dev = dev;
        self
    }

    /// Attaches a local label, normalized to lowercase `.`-separated segments.
    #[must_use]
    pub fn with_local(mut self, local: &str) -> Self {
        self.local = Some(normalize_local(local));
        self
    }

    /// Returns a copy with the local label removed.
    #[must_use]
    pub fn without_local(&self) -> Self {
        Self {
            local: None,
            ..self.clone()
        }
    }

    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// First release component.
    pub fn major(&self) -> u64 {
        self.release_component(0)
    }

    /// Second release component, 0 if absent.
    pub fn minor(&self) -> u64 {
        self.release_component(1)
    }

    /// Third release component, 0 if absent.
    pub fn micro(&self) -> u64 {
        self.release_component(2)
    }

    /// Release component at `index`, 0 past the end.
    pub fn release_component(&self, index: usize) -> u64 {
        self.release.get(index).copied().unwrap_or(0)
    }

    pub const fn pre(&self) -> Option<PreRelease> {
        self.pre
    }

    pub const fn post(&self) -> Option<u64> {
        self.post
    }

    pub const fn dev(&self) -> Option<u64> {
        self.dev
    }

    pub fn local(&self) -> Option<&str> {
        self.local.as_deref()
    }

    /// `true` for pre-releases and dev releases.
    pub const fn is_prerelease(&self) -> bool {
        self.pre.is_some() || self.dev.is_some()
    }

    pub const fn is_postrelease(&self) -> bool {
        self.post.is_some()
    }

    pub const fn is_devrelease(&self) -> bool {
        self.dev.is_some()
    }

    pub const fn is_local(&self) -> bool {
        self.local.is_some()
    }

    /// Release components with trailing zeros removed.
    fn significant_release(&self) -> &[u64] {
        let len = self
            .release
            .iter()
            .rposition(|&n| n != 0)
            .map_or(0, |last| last + 1);
        &self.release[..len]
    }

    /// Orders the suffix of versions with equal epoch and release.
    ///
    /// Rank is dev-only 0, a 1, b 2, rc 3, final 4, post 5. Within a rank the
    /// pre number comes first, then post (absent lowest), then dev (absent
    /// highest).
    fn suffix_key(&self) -> (u8, u64, Option<u64>, (bool, u64)) {
        // Absent dev sorts above every dev number, `u64::MAX` included.
        let dev = (self.dev.is_none(), self.dev.unwrap_or(0));
        match (self.pre, self.post) {
            (None, None) if self.dev.is_some() => (0, 0, None, dev),
            (Some(pre), post) => (pre_rank(pre.kind), pre.number, post, dev),
            (None, None) => (4, 0, None, dev),
            (None, Some(post)) => (5, 0, Some(post), dev),
        }
    }
}

const fn pre_rank(kind: PreReleaseKind) -> u8 {
    match kind {
        PreReleaseKind::Alpha => 1,
        PreReleaseKind::Beta => 2,
        PreReleaseKind::ReleaseCandidate => 3,
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::new([0])
    }
}

/// Compares release segments, padding the shorter one with zeros.
pub(crate) fn compare_release(this: &[u64], other: &[u64]) -> Ordering {
    let len = this.len().max(other.len());
    (0..len)
        .map(|i| {
            let a = this.get(i).copied().unwrap_or(0);
            let b = other.get(i).copied().unwrap_or(0);
            a.cmp(&b)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Compares local labels segment by segment.
///
/// Numeric segments compare numerically and sort above alphanumeric ones;
/// a label that is a prefix of another sorts first.
fn compare_local(this: Option<&str>, other: Option<&str>) -> Ordering {
    match (this, other) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => {
            let mut left = a.split('.');
            let mut right = b.split('.');
            loop {
                match (left.next(), right.next()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (Some(x), Some(y)) => {
                        let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                            (Ok(x), Ok(y)) => x.cmp(&y),
                            (Ok(_), Err(_)) => Ordering::Greater,
                            (Err(_), Ok(_)) => Ordering::Less,
                            (Err(_), Err(_)) => x.cmp(y),
                        };
                        if ord.is_ne() {
                            return ord;
                        }
                    }
                }
            }
        }
    }
}

/// Lowercases a local label, joins its segments with `.` and strips leading
/// zeros from numeric segments.
pub(crate) fn normalize_local(local: &str) -> String {
    local
        .split(['.', '-', '_'])
        .map(|segment| {
            if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
                let trimmed = segment.trim_start_matches('0');
                if trimmed.is_empty() {
                    "0".to_owned()
                } else {
                    trimmed.to_owned()
                }
            } else {
                segment.to_ascii_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epoch.hash(state);
        self.significant_release().hash(state);
        self.pre.hash(state);
        self.post.hash(state);
        self.dev.hash(state);
        self.local.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// 1.0.dev4 < 1.0a1 < 1.0a2.dev4 < 1.0a2 < 1.0b1.post3.dev2 < 1.0b1.post3
    /// < 1.0rc1 < 1.0 < 1.0.post4.dev3 < 1.0.post4 < 1.0.post4+local
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| compare_release(&self.release, &other.release))
            .then_with(|| self.suffix_key().cmp(&other.suffix_key()))
            .then_with(|| compare_local(self.local(), other.local()))
    }
}

impl fmt::Display for Version {
    /// Renders the canonical form, e.g. `1!2.0rc1.post2.dev3+ubuntu.1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}!", self.epoch)?;
        }
        for (i, component) in self.release.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{component}")?;
        }
        if let Some(pre) = self.pre {
            write!(f, "{pre}")?;
        }
        if let Some(post) = self.post {
            write!(f, ".post{post}")?;
        }
        if let Some(dev) = self.dev {
            write!(f, ".dev{dev}")?;
        }
        if let Some(local) = &self.local {
            write!(f, "+{local}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
