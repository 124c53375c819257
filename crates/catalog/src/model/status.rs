use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordStatus {
    #[default]
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "ACTIVE",
            RecordStatus::Inactive => "INACTIVE",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(RecordStatus::Active),
            "INACTIVE" => Ok(RecordStatus::Inactive),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

/// Where an image's bytes live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageProvider {
    Local,
    Cloudinary,
    External,
}

impl ImageProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageProvider::Local => "local",
            ImageProvider::Cloudinary => "cloudinary",
            ImageProvider::External => "external",
        }
    }

    /// Provider implied by a URL pasted in a form.
    pub fn for_url(url: &str) -> Self {
        if url.starts_with("/uploads/") {
            ImageProvider::Local
        } else {
            ImageProvider::External
        }
    }
}

impl fmt::Display for ImageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(ImageProvider::Local),
            "cloudinary" => Ok(ImageProvider::Cloudinary),
            "external" => Ok(ImageProvider::External),
            other => Err(format!("unknown image provider '{other}'")),
        }
    }
}
