//! Content-addressed image references.

use crate::ObjectId;
use plural_error::{DecodeError, DecodeErrorKind};
use serde::{Serialize, Serializer};

/// Production CDN base URL.
pub const DEFAULT_CDN_BASE: &str = "https://cdn.plural.gg";

/// File format of a stored image, tagged by its leading byte.
///
/// The API stores avatars as a single tag byte followed by the raw content
/// hash; the tag values are wire-stable.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum ImageExtension {
    /// PNG, tag byte 0
    #[display("png")]
    Png,
    /// JPEG, tag byte 1
    #[display("jpg")]
    Jpg,
    /// GIF, tag byte 2
    #[display("gif")]
    Gif,
    /// WebP, tag byte 3
    #[display("webp")]
    Webp,
}

impl ImageExtension {
    /// The tag byte stored ahead of the content hash.
    pub const fn tag(self) -> u8 {
        match self {
            ImageExtension::Png => 0,
            ImageExtension::Jpg => 1,
            ImageExtension::Gif => 2,
            ImageExtension::Webp => 3,
        }
    }

    /// Map a tag byte back to its extension.
    pub fn from_tag(tag: u8) -> Result<Self, DecodeError> {
        match tag {
            0 => Ok(ImageExtension::Png),
            1 => Ok(ImageExtension::Jpg),
            2 => Ok(ImageExtension::Gif),
            3 => Ok(ImageExtension::Webp),
            _ => Err(DecodeError::new(DecodeErrorKind::UnknownExtensionTag(tag))),
        }
    }

    /// Lowercase file extension, e.g. `png`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ImageExtension::Png => "png",
            ImageExtension::Jpg => "jpg",
            ImageExtension::Gif => "gif",
            ImageExtension::Webp => "webp",
        }
    }

    /// MIME type for upload headers, e.g. `image/png`.
    pub const fn mime_type(self) -> &'static str {
        match self {
            ImageExtension::Png => "image/png",
            ImageExtension::Jpg => "image/jpeg",
            ImageExtension::Gif => "image/gif",
            ImageExtension::Webp => "image/webp",
        }
    }
}

impl std::str::FromStr for ImageExtension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(ImageExtension::Png),
            "jpg" | "jpeg" => Ok(ImageExtension::Jpg),
            "gif" => Ok(ImageExtension::Gif),
            "webp" => Ok(ImageExtension::Webp),
            _ => Err(format!("Unknown image extension: {}", s)),
        }
    }
}

/// Content-addressed reference to an uploaded image.
///
/// Wire form: one extension tag byte, then the raw content hash. The id of
/// the owning resource rides along so the CDN URL can be formed without a
/// second lookup, but it does not take part in equality; two references to
/// the same bytes are the same image wherever they hang.
///
/// # Examples
///
/// ```
/// use plural_core::{ImageRef, ObjectId, DEFAULT_CDN_BASE};
///
/// let parent: ObjectId = "5eb7cf5a86d9755df3a6c593".parse().unwrap();
/// let avatar = ImageRef::decode(&[0, 0xab, 0xcd], parent).unwrap();
/// assert_eq!(
///     avatar.url(DEFAULT_CDN_BASE),
///     "https://cdn.plural.gg/images/5eb7cf5a86d9755df3a6c593/abcd.png",
/// );
/// assert_eq!(avatar.encode(), vec![0, 0xab, 0xcd]);
/// ```
#[derive(Debug, Clone)]
pub struct ImageRef {
    extension: ImageExtension,
    hash: Vec<u8>,
    parent_id: ObjectId,
}

impl ImageRef {
    /// Decode the wire form: tag byte, then raw hash bytes.
    pub fn decode(data: &[u8], parent_id: ObjectId) -> Result<Self, DecodeError> {
        let (&tag, hash) = data
            .split_first()
            .ok_or_else(|| DecodeError::new(DecodeErrorKind::Truncated))?;
        Ok(Self {
            extension: ImageExtension::from_tag(tag)?,
            hash: hash.to_vec(),
            parent_id,
        })
    }

    /// Re-encode to the wire form. Exact inverse of [`ImageRef::decode`].
    pub fn encode(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(1 + self.hash.len());
        data.push(self.extension.tag());
        data.extend_from_slice(&self.hash);
        data
    }

    /// Parse the text form: lowercase hex of the encoded bytes.
    pub fn from_hex(text: &str, parent_id: ObjectId) -> Result<Self, DecodeError> {
        let data = hex::decode(text)
            .map_err(|e| DecodeError::new(DecodeErrorKind::InvalidHex(e.to_string())))?;
        Self::decode(&data, parent_id)
    }

    /// The image format.
    pub fn extension(&self) -> ImageExtension {
        self.extension
    }

    /// Lowercase hex of the content hash.
    pub fn hash(&self) -> String {
        hex::encode(&self.hash)
    }

    /// Id of the resource the image hangs off.
    pub fn parent_id(&self) -> ObjectId {
        self.parent_id
    }

    /// CDN location of the image under the given base URL.
    ///
    /// Shape: `<base>/images/<parent_id>/<hash>.<ext>`.
    pub fn url(&self, cdn_base: &str) -> String {
        format!(
            "{}/images/{}/{}.{}",
            cdn_base.trim_end_matches('/'),
            self.parent_id,
            self.hash(),
            self.extension.as_str(),
        )
    }
}

// parent_id is delivery context, not identity.
impl PartialEq for ImageRef {
    fn eq(&self, other: &Self) -> bool {
        self.extension == other.extension && self.hash == other.hash
    }
}

impl Eq for ImageRef {}

impl std::hash::Hash for ImageRef {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.extension.hash(state);
        self.hash.hash(state);
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.encode()))
    }
}

impl Serialize for ImageRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plural_error::DecodeErrorKind;
    use strum::IntoEnumIterator;

    fn parent() -> ObjectId {
        "5eb7cf5a86d9755df3a6c593".parse().unwrap()
    }

    #[test]
    fn decode_then_encode_is_identity() {
        let data = [2u8, 0xde, 0xad, 0xbe, 0xef];
        let image = ImageRef::decode(&data, parent()).unwrap();
        assert_eq!(image.extension(), ImageExtension::Gif);
        assert_eq!(image.hash(), "deadbeef");
        assert_eq!(image.encode(), data);
    }

    #[test]
    fn empty_data_is_truncated() {
        let err = ImageRef::decode(&[], parent()).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::Truncated);
    }

    #[test]
    fn out_of_range_tag_is_rejected() {
        let err = ImageRef::decode(&[9, 0xab], parent()).unwrap_err();
        assert_eq!(err.kind, DecodeErrorKind::UnknownExtensionTag(9));
    }

    #[test]
    fn hex_text_form_round_trips() {
        let image = ImageRef::decode(&[1, 0xab, 0xcd], parent()).unwrap();
        let text = image.to_string();
        assert_eq!(text, "01abcd");
        let back = ImageRef::from_hex(&text, parent()).unwrap();
        assert_eq!(back, image);
        assert!(matches!(
            ImageRef::from_hex("zz", parent()).unwrap_err().kind,
            DecodeErrorKind::InvalidHex(_),
        ));
    }

    #[test]
    fn url_places_hash_under_parent() {
        let image = ImageRef::decode(&[3, 0x01, 0x02], parent()).unwrap();
        assert_eq!(
            image.url(DEFAULT_CDN_BASE),
            "https://cdn.plural.gg/images/5eb7cf5a86d9755df3a6c593/0102.webp",
        );
        // trailing slash on the base does not double up
        assert_eq!(
            image.url("https://cdn.example.com/"),
            "https://cdn.example.com/images/5eb7cf5a86d9755df3a6c593/0102.webp",
        );
    }

    #[test]
    fn equality_ignores_the_parent() {
        let other_parent: ObjectId = "ffffffffffffffffffffffff".parse().unwrap();
        let a = ImageRef::decode(&[0, 0xaa], parent()).unwrap();
        let b = ImageRef::decode(&[0, 0xaa], other_parent).unwrap();
        let c = ImageRef::decode(&[1, 0xaa], other_parent).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn tags_and_extensions_round_trip() {
        for ext in ImageExtension::iter() {
            assert_eq!(ImageExtension::from_tag(ext.tag()).unwrap(), ext);
            assert!(ext.mime_type().starts_with("image/"));
        }
        assert!(ImageExtension::from_tag(4).is_err());
    }

    #[test]
    fn jpeg_is_an_alias_for_jpg() {
        let jpg: ImageExtension = "jpg".parse().unwrap();
        let jpeg: ImageExtension = "jpeg".parse().unwrap();
        assert_eq!(jpg, jpeg);
        assert_eq!(jpeg.as_str(), "jpg");
    }
}
