//! Conversion between a [`Version`] and the raw field values of a word.

use bitstream::BitWriter;
use pep440::{PreRelease, PreReleaseKind, Version};

use crate::error::{CodecError, CodecResult};
use crate::layout::{
    self, DEV_NONE, LETTER_ALPHA, LETTER_BETA, LETTER_RC, MAX_DEV, MAX_DEV_QUALIFIED, MAX_EPOCH,
    MAX_EXTRA, MAX_MAJOR, MAX_MINOR, MAX_PATCH, MAX_POST, MAX_PRE_NUMBER, POST_FLAG,
    PRE_DEV_ONLY, PRE_NONE, PRE_NUMBER_BITS, RELEASE_COMPONENTS,
};

/// Unpacked field values, one per [`layout::FIELDS`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawFields {
    pub epoch: u64,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub extra: u64,
    pub pre: u64,
    pub post: u64,
    pub dev: u64,
}

impl RawFields {
    /// Validates `version` and computes its field values.
    ///
    /// Every limit is checked before any field is produced, in word order
    /// after the local label: epoch, release, post, pre, dev.
    pub fn pack(version: &Version) -> CodecResult<Self> {
        if let Some(local) = version.local() {
            return Err(CodecError::LocalSegmentUnsupported {
                local: local.to_owned(),
            });
        }

        let epoch = bounded(version.epoch(), MAX_EPOCH, |value, max| {
            CodecError::EpochOverflow { value, max }
        })?;

        if let Some((index, &value)) = version
            .release()
            .iter()
            .enumerate()
            .skip(RELEASE_COMPONENTS)
            .find(|(_, &value)| value != 0)
        {
            return Err(CodecError::ReleaseSegmentTooLong { index, value });
        }

        let major = bounded(version.release_component(0), MAX_MAJOR, |value, max| {
            CodecError::MajorOverflow { value, max }
        })?;
        let minor = bounded(version.release_component(1), MAX_MINOR, |value, max| {
            CodecError::MinorOverflow { value, max }
        })?;
        let patch = bounded(version.release_component(2), MAX_PATCH, |value, max| {
            CodecError::PatchOverflow { value, max }
        })?;
        let extra = bounded(version.release_component(3), MAX_EXTRA, |value, max| {
            CodecError::ExtraReleaseOverflow { value, max }
        })?;

        let post = version
            .post()
            .map(|n| bounded(n, MAX_POST, |value, max| CodecError::PostOverflow { value, max }))
            .transpose()?;

        let pre = version.pre().map(pack_pre).transpose()?;

        let dev_max = if pre.is_some() || post.is_some() {
            MAX_DEV_QUALIFIED
        } else {
            MAX_DEV
        };
        let dev = version
            .dev()
            .map(|n| bounded(n, dev_max, |value, max| CodecError::DevOverflow { value, max }))
            .transpose()?;

        let (pre, post, dev) = match (pre, post, dev) {
            // Dev-only sorts below every pre-release of the same release.
            (None, None, Some(dev)) => (PRE_DEV_ONLY, 0, dev),
            (Some(pre), post, dev) => (pre, pack_post(post), dev.unwrap_or(DEV_NONE)),
            (None, post, dev) => (PRE_NONE, pack_post(post), dev.unwrap_or(DEV_NONE)),
        };

        Ok(Self {
            epoch,
            major,
            minor,
            patch,
            extra,
            pre,
            post,
            dev,
        })
    }

    /// Packs the fields into a word, first field in the highest bits.
    pub fn write(self) -> CodecResult<u64> {
        let mut writer = BitWriter::new();
        for (field, value) in layout::FIELDS.iter().zip(self.values()) {
            writer.write_bits(value, field.width)?;
        }
        Ok(writer.finish())
    }

    /// Splits a word into its fields. Every word has a reading.
    pub fn read(word: u64) -> Self {
        Self {
            epoch: layout::EPOCH.extract(word),
            major: layout::MAJOR.extract(word),
            minor: layout::MINOR.extract(word),
            patch: layout::PATCH.extract(word),
            extra: layout::EXTRA.extract(word),
            pre: layout::PRE.extract(word),
            post: layout::POST.extract(word),
            dev: layout::DEV.extract(word),
        }
    }

    /// True for a post-release with a dev segment written by the first
    /// layout revision, which used the dev-only pre byte.
    pub const fn is_legacy_post_dev(&self) -> bool {
        self.pre_letter() == 0 && self.post & POST_FLAG != 0
    }

    /// Rebuilds the version these fields describe.
    pub fn unpack(self) -> Version {
        let version = Version::new([self.major, self.minor, self.patch, self.extra])
            .with_epoch(self.epoch);
        let post = self.unpack_post();
        let qualified_dev = (self.dev != DEV_NONE).then_some(self.dev);

        match self.pre_kind() {
            Some(kind) => {
                let number = self.pre & bitstream::low_mask(PRE_NUMBER_BITS);
                version
                    .with_pre(Some(PreRelease::new(kind, number)))
                    .with_post(post)
                    .with_dev(qualified_dev)
            }
            None if self.pre == PRE_NONE => version
                .with_post(post)
                .with_dev(post.and(qualified_dev)),
            // Letter code 00: dev-only, or a legacy post+dev.
            None => version.with_post(post).with_dev(Some(self.dev)),
        }
    }

    const fn values(self) -> [u64; 8] {
        [
            self.epoch, self.major, self.minor, self.patch, self.extra, self.pre, self.post,
            self.dev,
        ]
    }

    const fn pre_letter(&self) -> u64 {
        self.pre >> PRE_NUMBER_BITS
    }

    fn pre_kind(&self) -> Option<PreReleaseKind> {
        if self.pre == PRE_NONE {
            return None;
        }
        match self.pre_letter() {
            LETTER_ALPHA => Some(PreReleaseKind::Alpha),
            LETTER_BETA => Some(PreReleaseKind::Beta),
            LETTER_RC => Some(PreReleaseKind::ReleaseCandidate),
            _ => None,
        }
    }

    fn unpack_post(&self) -> Option<u64> {
        (self.post & POST_FLAG != 0).then_some(self.post & MAX_POST)
    }
}

fn bounded(value: u64, max: u64, overflow: fn(u64, u64) -> CodecError) -> CodecResult<u64> {
    if value > max {
        return Err(overflow(value, max));
    }
    Ok(value)
}

fn pack_pre(pre: PreRelease) -> CodecResult<u64> {
    let number = bounded(pre.number, MAX_PRE_NUMBER, |value, max| {
        CodecError::PreOverflow { value, max }
    })?;
    let letter = match pre.kind {
        PreReleaseKind::Alpha => LETTER_ALPHA,
        PreReleaseKind::Beta => LETTER_BETA,
        PreReleaseKind::ReleaseCandidate => LETTER_RC,
    };
    Ok((letter << PRE_NUMBER_BITS) | number)
}

const fn pack_post(post: Option<u64>) -> u64 {
    match post {
        Some(n) => POST_FLAG | n,
        None => 0,
    }
}
