use std::fs;
use std::path::Path;

use super::{parse_profile_toml, Profile};
use crate::dict::DictError;

pub const MAGIC: &[u8; 4] = b"TLPF";
pub const VERSION: u8 = 1;
const HEADER_SIZE: usize = 5;

impl Profile {
    /// Serialize to bytes (TLPF format: magic, version, bincode body).
    pub fn to_bytes(&self) -> Result<Vec<u8>, DictError> {
        let body = bincode::serialize(self).map_err(DictError::Serialize)?;
        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(MAGIC);
        buf.push(VERSION);
        buf.extend_from_slice(&body);
        Ok(buf)
    }

    /// Deserialize from bytes (TLPF format). The profile is validated.
    pub fn from_bytes(data: &[u8]) -> Result<Self, DictError> {
        if data.len() < HEADER_SIZE {
            return Err(DictError::InvalidHeader);
        }
        if &data[..4] != MAGIC {
            return Err(DictError::InvalidMagic);
        }
        if data[4] != VERSION {
            return Err(DictError::UnsupportedVersion(data[4]));
        }
        let profile: Profile =
            bincode::deserialize(&data[HEADER_SIZE..]).map_err(DictError::Deserialize)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Atomic write: write to .tmp then rename.
    pub fn save(&self, path: &Path) -> Result<(), DictError> {
        let bytes = self.to_bytes()?;
        let tmp = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Open a profile file, detecting compiled (TLPF) vs TOML by the magic bytes.
pub fn open(path: &Path) -> Result<Profile, DictError> {
    let data = fs::read(path)?;
    if data.starts_with(MAGIC) {
        return Profile::from_bytes(&data);
    }
    let text = String::from_utf8(data)
        .map_err(|e| DictError::Parse(format!("{}: {e}", path.display())))?;
    parse_profile_toml(&text)
}
